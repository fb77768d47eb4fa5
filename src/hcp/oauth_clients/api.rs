//! OAuth Client API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::client::require_id;
use crate::hcp::traits::ApiObject;
use crate::hcp::TfeClient;

use super::models::{OAuthClient, ProviderPreset};

fn org_oauth_clients_path(org: &str) -> String {
    format!(
        "/{}/{}/{}",
        api::ORGANIZATIONS,
        urlencoding::encode(org),
        api::OAUTH_CLIENTS
    )
}

impl TfeClient {
    /// List the OAuth clients of an organization
    pub async fn get_oauth_clients(&self, org: &str) -> Result<Vec<ApiObject<OAuthClient>>> {
        self.fetch_list(
            &org_oauth_clients_path(org),
            &format!("OAuth clients for organization '{}'", org),
        )
        .await
    }

    /// Get a single OAuth client by ID
    pub async fn get_oauth_client(&self, client_id: &str) -> Result<ApiObject<OAuthClient>> {
        require_id(client_id, "OAuth client")?;

        let path = format!("/{}/{}", api::OAUTH_CLIENTS, client_id);
        self.fetch_resource_by_path(&path, &format!("OAuth client {}", client_id))
            .await?
            .ok_or_else(|| TfeError::Api {
                status: 404,
                message: format!("OAuth client {} not found", client_id),
            })
    }

    /// Create an OAuth client for a VCS provider
    pub async fn create_oauth_client(
        &self,
        org: &str,
        preset: &ProviderPreset,
        oauth_token: &str,
    ) -> Result<ApiObject<OAuthClient>> {
        let url = format!("{}{}", self.base_url(), org_oauth_clients_path(org));
        debug!(
            "Creating {} OAuth client at: {}",
            preset.service_provider, url
        );

        let request = self.post(&url).json(&preset.create_body(oauth_token));
        self.send_for_resource(
            request,
            &format!(
                "Failed to create OAuth client for '{}'",
                preset.service_provider
            ),
        )
        .await
    }

    /// Delete an OAuth client
    pub async fn delete_oauth_client(&self, client_id: &str) -> Result<()> {
        require_id(client_id, "OAuth client")?;

        let url = format!("{}/{}/{}", self.base_url(), api::OAUTH_CLIENTS, client_id);
        debug!("Deleting OAuth client at: {}", url);

        self.send_without_content(
            self.delete(&url),
            &format!("Failed to delete OAuth client {}", client_id),
        )
        .await
    }
}
