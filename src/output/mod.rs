//! Output rendering
//!
//! Every resource is printed as pretty JSON indented by one space: either the
//! raw API object (`--expand`) or a reduced view with a fixed set of fields per
//! kind. Reduced views use PascalCase keys (`ID`, `TagNames`, `VCSRepo`) and
//! print absent scalars as their zero value.

mod oauth_clients;
mod policy_sets;
mod variables;
mod workspaces;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TfeError};
use crate::hcp::oauth_clients::OAuthClient;
use crate::hcp::policy_sets::PolicySet;
use crate::hcp::traits::ApiObject;
use crate::hcp::variables::Variable;
use crate::hcp::workspaces::Workspace;

pub use oauth_clients::{OAuthClientView, OAuthTokenRef};
pub use policy_sets::{PolicySetView, VcsRepoView};
pub use variables::VariableView;
pub use workspaces::WorkspaceView;

/// Resource kinds the renderer knows how to reduce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Workspace,
    Variable,
    PolicySet,
    OAuthClient,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Workspace => write!(f, "workspace"),
            ResourceKind::Variable => write!(f, "variable"),
            ResourceKind::PolicySet => write!(f, "policy-set"),
            ResourceKind::OAuthClient => write!(f, "oauth-client"),
        }
    }
}

impl FromStr for ResourceKind {
    type Err = TfeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "workspace" => Ok(ResourceKind::Workspace),
            "variable" => Ok(ResourceKind::Variable),
            "policy-set" | "policySet" => Ok(ResourceKind::PolicySet),
            "oauth-client" | "OAuthClient" => Ok(ResourceKind::OAuthClient),
            other => Err(TfeError::UnknownKind(other.to_string())),
        }
    }
}

/// Reduced view of a resource, one case per kind
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Projection {
    Workspace(WorkspaceView),
    Variable(VariableView),
    PolicySet(PolicySetView),
    OAuthClient(OAuthClientView),
}

impl Projection {
    /// Decode a raw API object as `kind` and reduce it
    pub fn from_raw(raw: &serde_json::Value, kind: ResourceKind) -> Result<Self> {
        Ok(match kind {
            ResourceKind::Workspace => {
                Projection::Workspace(WorkspaceView::from(&decode::<Workspace>(raw)?))
            }
            ResourceKind::Variable => {
                Projection::Variable(VariableView::from(&decode::<Variable>(raw)?))
            }
            ResourceKind::PolicySet => {
                Projection::PolicySet(PolicySetView::from(&decode::<PolicySet>(raw)?))
            }
            ResourceKind::OAuthClient => {
                Projection::OAuthClient(OAuthClientView::from(&decode::<OAuthClient>(raw)?))
            }
        })
    }
}

fn decode<T: DeserializeOwned>(raw: &serde_json::Value) -> Result<T> {
    Ok(serde_json::from_value(raw.clone())?)
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| TfeError::Json(e.to_string()))
}

/// Render a raw API object as pretty JSON
///
/// With `expand` the object is printed unmodified, otherwise its reduced view is.
pub fn render(raw: &serde_json::Value, kind: ResourceKind, expand: bool) -> Result<String> {
    if expand {
        return to_pretty_json(raw);
    }
    let projection = Projection::from_raw(raw, kind)?;
    to_pretty_json(&projection)
}

/// Render a resource and print it to stdout
pub fn print_resource(raw: &serde_json::Value, kind: ResourceKind, expand: bool) -> Result<()> {
    let rendered = render(raw, kind, expand)?;
    println!("{}", rendered);
    Ok(())
}

/// Render every item of a listing, then print them one after another
///
/// Nothing is printed if any item fails to render.
pub fn print_resources<T>(items: &[ApiObject<T>], kind: ResourceKind, expand: bool) -> Result<()> {
    let rendered = items
        .iter()
        .map(|item| render(&item.raw, kind, expand))
        .collect::<Result<Vec<_>>>()?;

    for item in rendered {
        println!("{}", item);
    }
    Ok(())
}
