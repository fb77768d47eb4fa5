//! Workspace API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::ApiObject;
use crate::hcp::TfeClient;

use super::models::{Workspace, WorkspaceSettings};

/// Build the API path for a named workspace
///
/// An empty name would address the workspace collection, so it is rejected.
fn workspace_path(org: &str, name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(TfeError::Config("Workspace name must not be empty".to_string()));
    }
    Ok(format!(
        "/{}/{}/{}/{}",
        api::ORGANIZATIONS,
        urlencoding::encode(org),
        api::WORKSPACES,
        urlencoding::encode(name)
    ))
}

impl TfeClient {
    /// List the workspaces of an organization
    pub async fn get_workspaces(&self, org: &str) -> Result<Vec<ApiObject<Workspace>>> {
        let path = format!(
            "/{}/{}/{}",
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES
        );
        self.fetch_list(&path, &format!("workspaces for organization '{}'", org))
            .await
    }

    /// Get a single workspace by name (None if it does not exist)
    pub async fn get_workspace_by_name(
        &self,
        org: &str,
        name: &str,
    ) -> Result<Option<ApiObject<Workspace>>> {
        let path = workspace_path(org, name)?;
        self.fetch_resource_by_path(&path, &format!("workspace '{}'", name)).await
    }

    /// Get a workspace that must exist
    pub async fn get_workspace(&self, org: &str, name: &str) -> Result<ApiObject<Workspace>> {
        self.get_workspace_by_name(org, name)
            .await?
            .ok_or_else(|| TfeError::Api {
                status: 404,
                message: format!("Workspace '{}' not found in organization '{}'", name, org),
            })
    }

    /// Create a workspace in an organization
    pub async fn create_workspace(
        &self,
        org: &str,
        settings: &WorkspaceSettings,
    ) -> Result<ApiObject<Workspace>> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES
        );
        debug!("Creating workspace '{}' in '{}'", settings.name, org);

        let request = self.post(&url).json(&settings.create_body());
        self.send_for_resource(
            request,
            &format!("Failed to create workspace '{}'", settings.name),
        )
        .await
    }

    /// Update an existing workspace, addressed by its current name
    pub async fn update_workspace(
        &self,
        org: &str,
        name: &str,
        settings: &WorkspaceSettings,
    ) -> Result<ApiObject<Workspace>> {
        let url = format!("{}{}", self.base_url(), workspace_path(org, name)?);
        debug!("Updating workspace '{}' in '{}'", name, org);

        let request = self.patch(&url).json(&settings.update_body());
        self.send_for_resource(request, &format!("Failed to update workspace '{}'", name))
            .await
    }

    /// Delete a workspace by name
    pub async fn delete_workspace(&self, org: &str, name: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url(), workspace_path(org, name)?);
        debug!("Deleting workspace '{}' in '{}'", name, org);

        self.send_without_content(
            self.delete(&url),
            &format!("Failed to delete workspace '{}'", name),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hcp::traits::TfeResource;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn workspace_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "workspaces",
            "attributes": {
                "name": name,
                "description": format!("Description for workspace {}", name),
                "execution-mode": "remote",
                "terraform-version": "1.5.0",
                "tag-names": [name]
            }
        })
    }

    #[test]
    fn test_workspace_path_encodes_name() {
        assert_eq!(
            workspace_path("my-org", "a b").unwrap(),
            "/organizations/my-org/workspaces/a%20b"
        );
    }

    #[tokio::test]
    async fn test_get_workspaces() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/workspaces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [workspace_json("ws-1", "alpha"), workspace_json("ws-2", "beta")]
            })))
            .mount(&mock_server)
            .await;

        let workspaces = client.get_workspaces("my-org").await.unwrap();
        assert_eq!(workspaces.len(), 2);
        assert_eq!(workspaces[0].name(), "alpha");
        assert_eq!(workspaces[1].id(), "ws-2");
    }

    #[tokio::test]
    async fn test_get_workspace_by_name_not_found() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/workspaces/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = client.get_workspace_by_name("my-org", "missing").await;
        assert!(result.unwrap().is_none());

        let err = client.get_workspace("my-org", "missing").await.unwrap_err();
        assert!(matches!(err, TfeError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_create_workspace() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        let settings = WorkspaceSettings::for_name("infra");

        Mock::given(method("POST"))
            .and(path("/organizations/my-org/workspaces"))
            .and(body_json(settings.create_body()))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({ "data": workspace_json("ws-new", "infra") })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let ws = client.create_workspace("my-org", &settings).await.unwrap();
        assert_eq!(ws.id(), "ws-new");
    }

    #[tokio::test]
    async fn test_update_workspace_validation_error() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("PATCH"))
            .and(path("/organizations/my-org/workspaces/infra"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "errors": [{"status": "422", "detail": "Name has already been taken"}]
            })))
            .mount(&mock_server)
            .await;

        let settings = WorkspaceSettings::for_name("infra");
        let err = client
            .update_workspace("my-org", "infra", &settings)
            .await
            .unwrap_err();
        match err {
            TfeError::Api { status, message } => {
                assert_eq!(status, 422);
                assert!(message.contains("Name has already been taken"));
            }
            e => panic!("Expected TfeError::Api, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_delete_workspace() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/organizations/my-org/workspaces/infra"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert!(client.delete_workspace("my-org", "infra").await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_workspace_name_sends_nothing() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = client.delete_workspace("my-org", "").await.unwrap_err();
        assert!(matches!(err, TfeError::Config(_)));
        assert!(client.get_workspace_by_name("my-org", "").await.is_err());
        assert!(client
            .update_workspace("my-org", "", &WorkspaceSettings::for_name("infra"))
            .await
            .is_err());
    }
}
