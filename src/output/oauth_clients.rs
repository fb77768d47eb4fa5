//! Reduced OAuth client view

use serde::Serialize;

use crate::hcp::oauth_clients::OAuthClient;

/// OAuth client fields printed without `--expand`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OAuthClientView {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "APIURL")]
    pub api_url: String,
    #[serde(rename = "HTTPURL")]
    pub http_url: String,
    #[serde(rename = "ServiceProvider")]
    pub service_provider: String,
    #[serde(rename = "ServiceProviderName")]
    pub service_provider_name: String,
    #[serde(rename = "OAuthTokens")]
    pub oauth_tokens: Option<Vec<OAuthTokenRef>>,
}

/// Reference to an OAuth token of a client
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OAuthTokenRef {
    #[serde(rename = "ID")]
    pub id: String,
}

impl From<&OAuthClient> for OAuthClientView {
    fn from(oc: &OAuthClient) -> Self {
        let attrs = &oc.attributes;
        Self {
            id: oc.id.clone(),
            api_url: attrs.api_url.clone().unwrap_or_default(),
            http_url: attrs.http_url.clone().unwrap_or_default(),
            service_provider: attrs.service_provider.clone().unwrap_or_default(),
            service_provider_name: attrs.service_provider_display_name.clone(),
            oauth_tokens: oc.oauth_token_ids().map(|ids| {
                ids.into_iter()
                    .map(|id| OAuthTokenRef { id: id.to_string() })
                    .collect()
            }),
        }
    }
}
