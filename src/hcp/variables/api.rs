//! Workspace variable API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::client::require_id;
use crate::hcp::traits::ApiObject;
use crate::hcp::TfeClient;

use super::models::{Variable, VariableSettings};

fn vars_path(workspace_id: &str) -> String {
    format!("/{}/{}/{}", api::WORKSPACES, workspace_id, api::VARS)
}

impl TfeClient {
    /// List the variables of a workspace
    pub async fn get_variables(&self, workspace_id: &str) -> Result<Vec<ApiObject<Variable>>> {
        require_id(workspace_id, "workspace")?;
        self.fetch_list(
            &vars_path(workspace_id),
            &format!("variables for workspace {}", workspace_id),
        )
        .await
    }

    /// Get a single variable by ID
    pub async fn get_variable(
        &self,
        workspace_id: &str,
        var_id: &str,
    ) -> Result<ApiObject<Variable>> {
        require_id(workspace_id, "workspace")?;
        require_id(var_id, "variable")?;

        let path = format!("{}/{}", vars_path(workspace_id), var_id);
        self.fetch_resource_by_path(&path, &format!("variable {}", var_id))
            .await?
            .ok_or_else(|| TfeError::Api {
                status: 404,
                message: format!("Variable {} not found", var_id),
            })
    }

    /// Create a variable in a workspace
    pub async fn create_variable(
        &self,
        workspace_id: &str,
        settings: &VariableSettings,
    ) -> Result<ApiObject<Variable>> {
        require_id(workspace_id, "workspace")?;

        let url = format!("{}{}", self.base_url(), vars_path(workspace_id));
        debug!("Creating variable '{}' at: {}", settings.key, url);

        let request = self.post(&url).json(&settings.create_body());
        self.send_for_resource(
            request,
            &format!("Failed to create variable '{}'", settings.key),
        )
        .await
    }

    /// Update an existing variable
    pub async fn update_variable(
        &self,
        workspace_id: &str,
        var_id: &str,
        settings: &VariableSettings,
    ) -> Result<ApiObject<Variable>> {
        require_id(workspace_id, "workspace")?;
        require_id(var_id, "variable")?;

        let url = format!("{}{}/{}", self.base_url(), vars_path(workspace_id), var_id);
        debug!("Updating variable '{}' at: {}", settings.key, url);

        let request = self.patch(&url).json(&settings.update_body(var_id));
        self.send_for_resource(
            request,
            &format!("Failed to update variable '{}'", settings.key),
        )
        .await
    }

    /// Delete a variable
    pub async fn delete_variable(&self, workspace_id: &str, var_id: &str) -> Result<()> {
        require_id(workspace_id, "workspace")?;
        require_id(var_id, "variable")?;

        let url = format!("{}{}/{}", self.base_url(), vars_path(workspace_id), var_id);
        debug!("Deleting variable at: {}", url);

        self.send_without_content(
            self.delete(&url),
            &format!("Failed to delete variable {}", var_id),
        )
        .await
    }
}
