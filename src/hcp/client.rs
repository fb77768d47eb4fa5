//! TFE HTTP client for API interactions

use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::{ApiListResponse, ApiObject, ApiResponse};

/// TFE API client
pub struct TfeClient {
    client: Client,
    token: String,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl TfeClient {
    /// Create a new TFE client
    pub fn new(token: String, host: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: None,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, host: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: Some(base_url),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "https://{}/{}",
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    /// Get the configured host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/vnd.api+json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a PATCH request builder with standard headers
    pub(crate) fn patch(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.patch(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Fetch one page of a collection endpoint
    ///
    /// Only the first page is read; items keep the order the API returned them in.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/organizations/my-org/policy-sets")
    /// * `label` - Human-readable label for error messages (e.g., "policy sets for organization 'my-org'")
    pub async fn fetch_list<T>(&self, path: &str, label: &str) -> Result<Vec<ApiObject<T>>>
    where
        T: DeserializeOwned,
    {
        let separator = if path.contains('?') { "&" } else { "?" };
        let url = format!(
            "{}{}{}page[size]={}",
            self.base_url(),
            path,
            separator,
            api::LIST_PAGE_SIZE
        );
        debug!("Fetching {} from: {}", label, url);

        let response = self.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response, &format!("Failed to fetch {}", label)).await);
        }

        let list: ApiListResponse<serde_json::Value> = response.json().await?;
        debug!("Fetched {} {}", list.data.len(), label);

        list.data.into_iter().map(ApiObject::from_raw).collect()
    }

    /// Fetch a single resource by API path
    ///
    /// Returns `None` for 404 and an error for other non-success status codes.
    pub async fn fetch_resource_by_path<T>(
        &self,
        path: &str,
        label: &str,
    ) -> Result<Option<ApiObject<T>>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", label, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            200 => {
                let body: ApiResponse<serde_json::Value> = response.json().await?;
                let item = ApiObject::from_raw(body.data).map_err(|e| TfeError::Api {
                    status: 200,
                    message: format!("Failed to parse {}: {}", label, e),
                })?;
                Ok(Some(item))
            }
            404 => Ok(None),
            _ => Err(api_error(response, &format!("Failed to fetch {}", label)).await),
        }
    }

    /// Send a request whose response carries a single resource document (create/update)
    pub(crate) async fn send_for_resource<T>(
        &self,
        request: RequestBuilder,
        label: &str,
    ) -> Result<ApiObject<T>>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;

        match response.status().as_u16() {
            200 | 201 => {
                let body: ApiResponse<serde_json::Value> = response.json().await?;
                ApiObject::from_raw(body.data)
            }
            _ => Err(api_error(response, label).await),
        }
    }

    /// Send a request that returns no content on success (delete/attach/detach)
    pub(crate) async fn send_without_content(
        &self,
        request: RequestBuilder,
        label: &str,
    ) -> Result<()> {
        let response = request.send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(api_error(response, label).await)
        }
    }
}

/// Build an API error, appending the first JSON:API error detail if the body has one
async fn api_error(response: Response, context: &str) -> TfeError {
    let status = response.status().as_u16();
    let body: serde_json::Value = response.json().await.unwrap_or(serde_json::json!({}));

    let detail = body["errors"][0]["detail"]
        .as_str()
        .or_else(|| body["errors"][0]["title"].as_str());

    let message = match detail {
        Some(detail) => format!("{}: {}", context, detail),
        None => context.to_string(),
    };

    TfeError::Api { status, message }
}

/// Reject IDs that cannot name a resource in a URL path
///
/// An unresolved name surfaces as an empty ID; it must never reach the API
/// as a collection path.
pub(crate) fn require_id(id: &str, what: &str) -> Result<()> {
    let url_safe = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'));

    if id.is_empty() || !url_safe {
        return Err(TfeError::InvalidId(what.to_string()));
    }
    Ok(())
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            "test-token".to_string(),
            "mock.terraform.io".to_string(),
            base_url.to_string(),
        )
    }
}
