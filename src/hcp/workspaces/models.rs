//! Workspace data models

use serde::Deserialize;

use crate::hcp::traits::TfeResource;

/// Workspace data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    #[serde(default)]
    pub attributes: WorkspaceAttributes,
}

/// Workspace attributes from TFE API
#[derive(Deserialize, Debug, Clone, Default)]
pub struct WorkspaceAttributes {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "execution-mode")]
    pub execution_mode: Option<String>,
    #[serde(rename = "terraform-version")]
    pub terraform_version: Option<String>,
    #[serde(rename = "tag-names")]
    pub tag_names: Option<Vec<String>>,
}

impl TfeResource for Workspace {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

/// Settings written by `ws save`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSettings {
    pub name: String,
    pub description: String,
}

impl WorkspaceSettings {
    /// Settings for a workspace named `name`, with the generated description
    pub fn for_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: format!("Description for workspace {}", name),
        }
    }

    /// JSON:API document for creating the workspace; it is tagged with its own name
    pub fn create_body(&self) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "type": "workspaces",
                "attributes": {
                    "name": self.name,
                    "description": self.description,
                    "tag-names": [self.name]
                }
            }
        })
    }

    /// JSON:API document for updating the workspace
    pub fn update_body(&self) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "type": "workspaces",
                "attributes": {
                    "name": self.name,
                    "description": self.description
                }
            }
        })
    }
}
