//! Common traits for TFE resources

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Result;

/// Common trait for the named TFE resources (workspaces, variables, policy sets, OAuth clients)
///
/// Gives the resolver a uniform view of the opaque ID and the
/// human-readable field a user refers to the resource by.
pub trait TfeResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name (variable key, policy set name, ...)
    fn name(&self) -> &str;
}

/// Generic API list response wrapper
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
}

/// Generic API single-resource response wrapper
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// A resource decoded into its model, kept together with the raw JSON:API `data` object
///
/// The model drives lookups and orchestration; the raw object is what
/// `--expand` prints and what the reduced projection is built from.
#[derive(Debug, Clone)]
pub struct ApiObject<T> {
    pub model: T,
    pub raw: serde_json::Value,
}

impl<T: DeserializeOwned> ApiObject<T> {
    /// Decode a raw `data` object into its model
    pub fn from_raw(raw: serde_json::Value) -> Result<Self> {
        let model = serde_json::from_value(raw.clone())?;
        Ok(Self { model, raw })
    }
}

impl<T: TfeResource> TfeResource for ApiObject<T> {
    fn id(&self) -> &str {
        self.model.id()
    }

    fn name(&self) -> &str {
        self.model.name()
    }
}
