//! Policy set data models

use serde::Deserialize;

use crate::hcp::traits::TfeResource;

/// Policy set data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct PolicySet {
    pub id: String,
    #[serde(default)]
    pub attributes: PolicySetAttributes,
}

/// Policy set attributes from TFE API
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PolicySetAttributes {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub global: Option<bool>,
    pub policies_path: Option<String>,
    pub vcs_repo: Option<VcsRepo>,
    pub workspace_count: Option<u32>,
}

/// VCS repository a policy set reads its policies from
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct VcsRepo {
    pub branch: Option<String>,
    pub display_identifier: Option<String>,
    pub identifier: Option<String>,
    pub ingress_submodules: Option<bool>,
    pub oauth_token_id: Option<String>,
    pub repository_http_url: Option<String>,
    pub service_provider: Option<String>,
}

impl TfeResource for PolicySet {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

/// Values written by `policy-set save`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySetSettings {
    pub name: String,
    pub global: bool,
    pub policies_path: String,
    pub repo_identifier: String,
    pub repo_branch: String,
    pub oauth_token_id: String,
}

impl PolicySetSettings {
    /// JSON:API document for creating or updating the policy set
    ///
    /// Submodules of the policy repository are never ingressed.
    pub fn body(&self) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "type": "policy-sets",
                "attributes": {
                    "name": self.name,
                    "global": self.global,
                    "policies-path": self.policies_path,
                    "vcs-repo": {
                        "branch": self.repo_branch,
                        "identifier": self.repo_identifier,
                        "ingress-submodules": false,
                        "oauth-token-id": self.oauth_token_id
                    }
                }
            }
        })
    }
}

/// JSON:API relationship document naming a single workspace
pub fn workspaces_relationship(workspace_id: &str) -> serde_json::Value {
    serde_json::json!({
        "data": [
            { "type": "workspaces", "id": workspace_id }
        ]
    })
}
