//! TFE token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, TfeError};

/// Credentials file structure
#[derive(Deserialize, Debug)]
struct TfeCredentials {
    credentials: HashMap<String, TfeCredential>,
}

/// Single credential entry
#[derive(Deserialize, Debug)]
struct TfeCredential {
    token: String,
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (TF_TOKEN, TFE_TOKEN, TFC_TOKEN - in order)
    /// 3. Credentials file (~/.terraform.d/credentials.tfrc.json)
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            match std::env::var(env_var) {
                Ok(token) if !token.is_empty() => {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(token);
                }
                _ => {}
            }
        }

        debug!(
            "No token found in environment variables {:?}, trying credentials file",
            credentials::TOKEN_ENV_VARS
        );
        let path = Self::get_credentials_path()
            .ok_or_else(|| TfeError::TokenNotFound(self.token_not_found_message(None)))?;
        self.read_from_credentials_file(&path)
    }

    /// Read the token for this host from a Terraform credentials file
    fn read_from_credentials_file(&self, credentials_path: &Path) -> Result<String> {
        debug!(
            "Looking for credentials file at: {}",
            credentials_path.display()
        );

        let content = fs::read_to_string(credentials_path).map_err(|_| {
            TfeError::TokenNotFound(self.token_not_found_message(Some(credentials_path)))
        })?;

        let creds: TfeCredentials = serde_json::from_str(&content).map_err(|e| {
            TfeError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                credentials_path.display(),
                e
            ))
        })?;

        creds
            .credentials
            .get(&self.host)
            .map(|cred| {
                debug!(
                    "Using token from credentials file {} for host: {}",
                    credentials_path.display(),
                    self.host
                );
                cred.token.clone()
            })
            .ok_or_else(|| {
                TfeError::TokenNotFound(self.token_not_found_message(Some(credentials_path)))
            })
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self, credentials_path: Option<&Path>) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let creds_info = credentials_path
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found for host '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      tfctl --token <TOKEN>\n\
             2. Environment var:   export TF_TOKEN=<TOKEN>  (also: TFE_TOKEN, TFC_TOKEN)\n\
             3. Terraform login:   terraform login {}\n\
             \n\
             Checked: env vars [{}]{}",
            self.host, self.host, env_vars, creds_info
        )
    }

    /// Get the path to Terraform credentials file (platform-specific)
    /// - Windows: %APPDATA%\terraform.d\credentials.tfrc.json
    /// - Linux/macOS: ~/.terraform.d/credentials.tfrc.json
    fn get_credentials_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join(credentials::FILE_NAME))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(credentials::FILE_PATH_UNIX))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn credentials_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_resolver_cli_token_takes_precedence() {
        let resolver = TokenResolver::new("test.example.com");
        let result = resolver.resolve(Some("cli-token-123"));
        assert_eq!(result.unwrap(), "cli-token-123");
    }

    #[test]
    fn test_token_not_found_message_format() {
        let resolver = TokenResolver::new("app.terraform.io");
        let msg = resolver.token_not_found_message(None);
        assert!(msg.contains("app.terraform.io"));
        assert!(msg.contains("tfctl --token"));
        assert!(msg.contains("TF_TOKEN"));
        assert!(msg.contains("terraform login"));
    }

    #[test]
    fn test_read_token_for_host() {
        let file = credentials_file(
            r#"{
                "credentials": {
                    "app.terraform.io": { "token": "test-token-123" },
                    "custom.host.com": { "token": "custom-token-456" }
                }
            }"#,
        );

        let resolver = TokenResolver::new("custom.host.com");
        let token = resolver.read_from_credentials_file(file.path()).unwrap();
        assert_eq!(token, "custom-token-456");
    }

    #[test]
    fn test_read_token_host_missing() {
        let file = credentials_file(r#"{"credentials": {}}"#);

        let resolver = TokenResolver::new("app.terraform.io");
        let err = resolver.read_from_credentials_file(file.path()).unwrap_err();
        match err {
            TfeError::TokenNotFound(msg) => {
                assert!(msg.contains(&file.path().display().to_string()))
            }
            e => panic!("Expected TfeError::TokenNotFound, got {:?}", e),
        }
    }

    #[test]
    fn test_read_token_malformed_file() {
        let file = credentials_file("{ not json");

        let resolver = TokenResolver::new("app.terraform.io");
        let err = resolver.read_from_credentials_file(file.path()).unwrap_err();
        assert!(matches!(err, TfeError::Credentials(_)));
    }

    #[test]
    fn test_read_token_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.tfrc.json");

        let resolver = TokenResolver::new("app.terraform.io");
        let err = resolver.read_from_credentials_file(&path).unwrap_err();
        assert!(matches!(err, TfeError::TokenNotFound(_)));
    }
}
