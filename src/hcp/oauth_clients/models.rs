//! OAuth Client data models

use serde::Deserialize;

use crate::hcp::traits::TfeResource;

/// OAuth Client data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthClient {
    pub id: String,
    #[serde(default)]
    pub attributes: OAuthClientAttributes,
    pub relationships: Option<OAuthClientRelationships>,
}

/// OAuth Client attributes from TFE API
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct OAuthClientAttributes {
    pub service_provider: Option<String>,
    #[serde(default)]
    pub service_provider_display_name: String,
    pub api_url: Option<String>,
    pub http_url: Option<String>,
}

/// OAuth Client relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthClientRelationships {
    #[serde(rename = "oauth-tokens")]
    pub oauth_tokens: Option<OAuthTokensRelationship>,
}

/// OAuth Tokens relationship (contains array of tokens)
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthTokensRelationship {
    pub data: Option<Vec<RelationshipId>>,
}

/// Relationship ID reference
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipId {
    pub id: String,
}

impl TfeResource for OAuthClient {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.service_provider_display_name
    }
}

impl OAuthClient {
    /// Get OAuth token IDs, or None when the relationship is absent
    pub fn oauth_token_ids(&self) -> Option<Vec<&str>> {
        let tokens = self.relationships.as_ref()?.oauth_tokens.as_ref()?;
        let data = tokens.data.as_ref()?;
        Some(data.iter().map(|r| r.id.as_str()).collect())
    }
}

/// Connection settings of a supported VCS provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderPreset {
    pub api_url: &'static str,
    pub http_url: &'static str,
    pub service_provider: &'static str,
}

impl ProviderPreset {
    pub const GITHUB: ProviderPreset = ProviderPreset {
        api_url: "https://api.github.com",
        http_url: "https://github.com",
        service_provider: "github",
    };

    pub const GITLAB: ProviderPreset = ProviderPreset {
        api_url: "https://gitlab.com/api/v4",
        http_url: "https://gitlab.com",
        service_provider: "gitlab_hosted",
    };

    /// JSON:API document creating a client for this provider with the given VCS token
    pub fn create_body(&self, oauth_token: &str) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "type": "oauth-clients",
                "attributes": {
                    "service-provider": self.service_provider,
                    "api-url": self.api_url,
                    "http-url": self.http_url,
                    "oauth-token-string": oauth_token
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_client_deserialization() {
        let oc: OAuthClient = serde_json::from_value(serde_json::json!({
            "id": "oc-1",
            "type": "oauth-clients",
            "attributes": {
                "service-provider": "github",
                "service-provider-display-name": "GitHub",
                "api-url": "https://api.github.com",
                "http-url": "https://github.com",
                "callback-url": "https://app.terraform.io/auth/x/callback"
            },
            "relationships": {
                "oauth-tokens": {
                    "data": [{"id": "ot-1", "type": "oauth-tokens"}, {"id": "ot-2", "type": "oauth-tokens"}]
                }
            }
        }))
        .unwrap();

        assert_eq!(oc.name(), "GitHub");
        assert_eq!(oc.oauth_token_ids(), Some(vec!["ot-1", "ot-2"]));
    }

    #[test]
    fn test_oauth_client_without_relationships() {
        let oc: OAuthClient = serde_json::from_value(serde_json::json!({
            "id": "oc-2",
            "attributes": { "service-provider": "gitlab_hosted" }
        }))
        .unwrap();

        assert_eq!(oc.name(), "");
        assert!(oc.oauth_token_ids().is_none());
    }

    #[test]
    fn test_preset_create_body() {
        let body = ProviderPreset::GITLAB.create_body("glpat-1");
        let attrs = &body["data"]["attributes"];
        assert_eq!(attrs["service-provider"], "gitlab_hosted");
        assert_eq!(attrs["api-url"], "https://gitlab.com/api/v4");
        assert_eq!(attrs["http-url"], "https://gitlab.com");
        assert_eq!(attrs["oauth-token-string"], "glpat-1");
    }
}
