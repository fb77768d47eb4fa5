//! Policy set API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::client::require_id;
use crate::hcp::traits::ApiObject;
use crate::hcp::TfeClient;

use super::models::{workspaces_relationship, PolicySet, PolicySetSettings};

fn org_policy_sets_path(org: &str) -> String {
    format!(
        "/{}/{}/{}",
        api::ORGANIZATIONS,
        urlencoding::encode(org),
        api::POLICY_SETS
    )
}

impl TfeClient {
    /// List the policy sets of an organization
    pub async fn get_policy_sets(&self, org: &str) -> Result<Vec<ApiObject<PolicySet>>> {
        self.fetch_list(
            &org_policy_sets_path(org),
            &format!("policy sets for organization '{}'", org),
        )
        .await
    }

    /// Get a single policy set by ID
    pub async fn get_policy_set(&self, policy_set_id: &str) -> Result<ApiObject<PolicySet>> {
        require_id(policy_set_id, "policy set")?;

        let path = format!("/{}/{}", api::POLICY_SETS, policy_set_id);
        self.fetch_resource_by_path(&path, &format!("policy set {}", policy_set_id))
            .await?
            .ok_or_else(|| TfeError::Api {
                status: 404,
                message: format!("Policy set {} not found", policy_set_id),
            })
    }

    /// Create a policy set in an organization
    pub async fn create_policy_set(
        &self,
        org: &str,
        settings: &PolicySetSettings,
    ) -> Result<ApiObject<PolicySet>> {
        let url = format!("{}{}", self.base_url(), org_policy_sets_path(org));
        debug!("Creating policy set '{}' at: {}", settings.name, url);

        let request = self.post(&url).json(&settings.body());
        self.send_for_resource(
            request,
            &format!("Failed to create policy set '{}'", settings.name),
        )
        .await
    }

    /// Update an existing policy set
    pub async fn update_policy_set(
        &self,
        policy_set_id: &str,
        settings: &PolicySetSettings,
    ) -> Result<ApiObject<PolicySet>> {
        require_id(policy_set_id, "policy set")?;

        let url = format!("{}/{}/{}", self.base_url(), api::POLICY_SETS, policy_set_id);
        debug!("Updating policy set '{}' at: {}", settings.name, url);

        let request = self.patch(&url).json(&settings.body());
        self.send_for_resource(
            request,
            &format!("Failed to update policy set '{}'", settings.name),
        )
        .await
    }

    /// Delete a policy set
    pub async fn delete_policy_set(&self, policy_set_id: &str) -> Result<()> {
        require_id(policy_set_id, "policy set")?;

        let url = format!("{}/{}/{}", self.base_url(), api::POLICY_SETS, policy_set_id);
        debug!("Deleting policy set at: {}", url);

        self.send_without_content(
            self.delete(&url),
            &format!("Failed to delete policy set {}", policy_set_id),
        )
        .await
    }

    /// Attach a workspace to a policy set
    pub async fn attach_workspace_to_policy_set(
        &self,
        policy_set_id: &str,
        workspace_id: &str,
    ) -> Result<()> {
        require_id(policy_set_id, "policy set")?;
        require_id(workspace_id, "workspace")?;

        let url = self.policy_set_workspaces_url(policy_set_id);
        debug!("Attaching workspace {} at: {}", workspace_id, url);

        let request = self
            .post(&url)
            .json(&workspaces_relationship(workspace_id));
        self.send_without_content(
            request,
            &format!("Failed to attach workspace to policy set {}", policy_set_id),
        )
        .await
    }

    /// Detach a workspace from a policy set
    pub async fn detach_workspace_from_policy_set(
        &self,
        policy_set_id: &str,
        workspace_id: &str,
    ) -> Result<()> {
        require_id(policy_set_id, "policy set")?;
        require_id(workspace_id, "workspace")?;

        let url = self.policy_set_workspaces_url(policy_set_id);
        debug!("Detaching workspace {} at: {}", workspace_id, url);

        let request = self
            .delete(&url)
            .json(&workspaces_relationship(workspace_id));
        self.send_without_content(
            request,
            &format!(
                "Failed to detach workspace from policy set {}",
                policy_set_id
            ),
        )
        .await
    }

    fn policy_set_workspaces_url(&self, policy_set_id: &str) -> String {
        format!(
            "{}/{}/{}/relationships/workspaces",
            self.base_url(),
            api::POLICY_SETS,
            policy_set_id
        )
    }
}
