//! Reduced workspace view

use serde::Serialize;

use crate::hcp::workspaces::Workspace;

/// Workspace fields printed without `--expand`
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct WorkspaceView {
    #[serde(rename = "ID")]
    pub id: String,
    pub description: String,
    pub execution_mode: String,
    pub name: String,
    pub terraform_version: String,
    pub tag_names: Option<Vec<String>>,
}

impl From<&Workspace> for WorkspaceView {
    fn from(ws: &Workspace) -> Self {
        let attrs = &ws.attributes;
        Self {
            id: ws.id.clone(),
            description: attrs.description.clone().unwrap_or_default(),
            execution_mode: attrs.execution_mode.clone().unwrap_or_default(),
            name: attrs.name.clone(),
            terraform_version: attrs.terraform_version.clone().unwrap_or_default(),
            tag_names: attrs.tag_names.clone(),
        }
    }
}
