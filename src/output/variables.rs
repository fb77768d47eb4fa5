//! Reduced variable view

use serde::Serialize;

use crate::hcp::variables::Variable;

/// Variable fields printed without `--expand`
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct VariableView {
    #[serde(rename = "ID")]
    pub id: String,
    pub key: String,
    pub value: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "HCL")]
    pub hcl: bool,
    pub sensitive: bool,
}

impl From<&Variable> for VariableView {
    fn from(var: &Variable) -> Self {
        let attrs = &var.attributes;
        Self {
            id: var.id.clone(),
            key: attrs.key.clone(),
            value: attrs.value.clone().unwrap_or_default(),
            description: attrs.description.clone().unwrap_or_default(),
            category: attrs.category.clone().unwrap_or_default(),
            hcl: attrs.hcl.unwrap_or_default(),
            sensitive: attrs.sensitive.unwrap_or_default(),
        }
    }
}
