//! tfctl - Manage HCP Terraform and Terraform Enterprise resources
//!
//! A CLI tool to list, read, save and delete workspaces, workspace variables,
//! policy sets and OAuth clients of one organization.
//!
//! # Example
//!
//! ```bash
//! # List workspaces
//! tfctl --org my-org ws list
//!
//! # Create or update a variable
//! tfctl --org my-org var save -w infra --key region --value eu-west-1
//!
//! # Attach a workspace to a policy set
//! tfctl --org my-org ps attach -p sentinel -w infra
//!
//! # Print the full API object
//! tfctl --org my-org oc get --provider-type github -x
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hcp;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command};
pub use error::{Result, TfeError};
pub use hcp::{
    run_oc_command, run_ps_command, run_variable_command, run_ws_command, OAuthClient, PolicySet,
    TfeClient, TfeResource, TokenResolver, Variable, Workspace,
};
pub use output::{print_resource, render, Projection, ResourceKind};
