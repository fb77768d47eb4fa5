//! Workspace variable data models

use serde::Deserialize;

use crate::hcp::traits::TfeResource;

/// Variable data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Variable {
    pub id: String,
    #[serde(default)]
    pub attributes: VariableAttributes,
}

/// Variable attributes from TFE API
///
/// `value` is null for sensitive variables.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct VariableAttributes {
    #[serde(default)]
    pub key: String,
    pub value: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub hcl: Option<bool>,
    pub sensitive: Option<bool>,
}

impl TfeResource for Variable {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.key
    }
}

/// Values written by `variable save`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSettings {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub category: String,
    pub hcl: bool,
    pub sensitive: bool,
}

impl VariableSettings {
    /// JSON:API document for creating the variable
    pub fn create_body(&self) -> serde_json::Value {
        let mut attributes = serde_json::json!({
            "key": self.key,
            "value": self.value,
            "category": self.category,
            "hcl": self.hcl,
            "sensitive": self.sensitive
        });
        if let Some(description) = &self.description {
            attributes["description"] = serde_json::json!(description);
        }

        serde_json::json!({
            "data": {
                "type": "vars",
                "attributes": attributes
            }
        })
    }

    /// JSON:API document for updating variable `var_id`
    ///
    /// The category of an existing variable is left as it is.
    pub fn update_body(&self, var_id: &str) -> serde_json::Value {
        let mut attributes = serde_json::json!({
            "key": self.key,
            "value": self.value,
            "hcl": self.hcl,
            "sensitive": self.sensitive
        });
        if let Some(description) = &self.description {
            attributes["description"] = serde_json::json!(description);
        }

        serde_json::json!({
            "data": {
                "id": var_id,
                "type": "vars",
                "attributes": attributes
            }
        })
    }
}
