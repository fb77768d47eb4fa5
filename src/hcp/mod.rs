//! TFE API client module
//!
//! This module provides functionality to interact with the Terraform Enterprise API.

mod client;
mod credentials;
pub mod oauth_clients;
pub mod policy_sets;
pub mod resolver;
pub mod traits;
pub mod variables;
pub mod workspaces;

pub use client::TfeClient;
pub use credentials::TokenResolver;
pub use oauth_clients::{run_oc_command, OAuthClient};
pub use policy_sets::{run_ps_command, PolicySet};
pub use resolver::{resolve_id, MatchRule};
pub use traits::{ApiObject, TfeResource};
pub use variables::{run_variable_command, Variable};
pub use workspaces::{run_ws_command, Workspace};
