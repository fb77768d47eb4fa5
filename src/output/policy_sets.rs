//! Reduced policy set view

use serde::Serialize;

use crate::hcp::policy_sets::{PolicySet, VcsRepo};

/// Policy set fields printed without `--expand`
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PolicySetView {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub global: bool,
    pub policies_path: String,
    #[serde(rename = "VCSRepo")]
    pub vcs_repo: Option<VcsRepoView>,
    pub workspace_count: u32,
}

/// VCS repository descriptor of a policy set
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct VcsRepoView {
    pub branch: String,
    pub display_identifier: String,
    pub identifier: String,
    pub ingress_submodules: bool,
    #[serde(rename = "OAuthTokenID")]
    pub oauth_token_id: String,
    #[serde(rename = "RepositoryHTTPURL")]
    pub repository_http_url: String,
    pub service_provider: String,
}

impl From<&VcsRepo> for VcsRepoView {
    fn from(repo: &VcsRepo) -> Self {
        Self {
            branch: repo.branch.clone().unwrap_or_default(),
            display_identifier: repo.display_identifier.clone().unwrap_or_default(),
            identifier: repo.identifier.clone().unwrap_or_default(),
            ingress_submodules: repo.ingress_submodules.unwrap_or_default(),
            oauth_token_id: repo.oauth_token_id.clone().unwrap_or_default(),
            repository_http_url: repo.repository_http_url.clone().unwrap_or_default(),
            service_provider: repo.service_provider.clone().unwrap_or_default(),
        }
    }
}

impl From<&PolicySet> for PolicySetView {
    fn from(ps: &PolicySet) -> Self {
        let attrs = &ps.attributes;
        Self {
            id: ps.id.clone(),
            name: attrs.name.clone(),
            description: attrs.description.clone().unwrap_or_default(),
            global: attrs.global.unwrap_or_default(),
            policies_path: attrs.policies_path.clone().unwrap_or_default(),
            vcs_repo: attrs.vcs_repo.as_ref().map(VcsRepoView::from),
            workspace_count: attrs.workspace_count.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_keeps_vcs_repo() {
        let ps: PolicySet = serde_json::from_value(serde_json::json!({
            "id": "polset-1",
            "attributes": {
                "name": "sentinel",
                "global": true,
                "policies-path": "/",
                "vcs-repo": {
                    "branch": "master",
                    "identifier": "acme/policies",
                    "display-identifier": "acme/policies",
                    "ingress-submodules": false,
                    "oauth-token-id": "ot-1",
                    "repository-http-url": "https://github.com/acme/policies",
                    "service-provider": "github"
                },
                "workspace-count": 2,
                "policy-count": 7
            }
        }))
        .unwrap();

        let json = serde_json::to_value(PolicySetView::from(&ps)).unwrap();
        let repo = &json["VCSRepo"];
        assert_eq!(repo["Identifier"], "acme/policies");
        assert_eq!(repo["DisplayIdentifier"], "acme/policies");
        assert_eq!(repo["OAuthTokenID"], "ot-1");
        assert_eq!(repo["RepositoryHTTPURL"], "https://github.com/acme/policies");
        assert_eq!(repo["ServiceProvider"], "github");
        assert_eq!(repo.as_object().unwrap().len(), 7);
        assert_eq!(json["WorkspaceCount"], 2);
        assert_eq!(json["Description"], "");
        assert!(json.get("PolicyCount").is_none());
    }

    #[test]
    fn test_view_without_vcs_repo() {
        let ps: PolicySet = serde_json::from_value(serde_json::json!({
            "id": "polset-2",
            "attributes": { "name": "inline" }
        }))
        .unwrap();

        let json = serde_json::to_value(PolicySetView::from(&ps)).unwrap();
        assert!(json["VCSRepo"].is_null());
        assert_eq!(json["Global"], false);
        assert_eq!(json["WorkspaceCount"], 0);
    }
}
