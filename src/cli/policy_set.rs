//! Policy set command arguments

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

/// Policy set operations
#[derive(Subcommand, Debug)]
pub enum PsAction {
    /// List policy sets in the organization
    #[command(visible_alias = "ls")]
    List,

    /// Show a policy set
    #[command(visible_alias = "read")]
    Get(PsArgs),

    /// Create a VCS-backed policy set, or update it if the name already exists
    #[command(visible_alias = "create")]
    Save(PsSaveArgs),

    /// Delete a policy set
    #[command(visible_alias = "del", visible_alias = "rm")]
    Delete(PsArgs),

    /// Attach a workspace to a policy set
    Attach(PsWorkspaceArgs),

    /// Detach a workspace from a policy set
    Detach(PsWorkspaceArgs),
}

/// Arguments naming a policy set
#[derive(Parser, Debug)]
pub struct PsArgs {
    /// Policy set name
    #[arg(short = 'p', long, alias = "policySet")]
    pub policy_set: String,
}

/// Arguments for 'policy-set save'
#[derive(Parser, Debug)]
pub struct PsSaveArgs {
    /// Policy set name
    #[arg(short = 'p', long, alias = "policySet")]
    pub policy_set: String,

    /// VCS repository identifier, e.g. 'my-org/sentinel-policies'
    #[arg(long, alias = "repoName")]
    pub repo_name: String,

    /// OAuth token ID used to reach the repository (see 'tfctl oauth-client get')
    #[arg(long, alias = "tokenID")]
    pub token_id: String,

    /// Enforce the policy set on every workspace
    #[arg(long, default_value_t = false)]
    pub global: bool,

    /// Sub-path of the repository holding the policies
    #[arg(long, alias = "policiesPath", default_value = "/")]
    pub policies_path: String,

    /// Repository branch to read policies from
    #[arg(long, alias = "repoBranch", default_value = "master")]
    pub repo_branch: String,
}

/// Arguments naming a policy set and a workspace
#[derive(Parser, Debug)]
pub struct PsWorkspaceArgs {
    /// Policy set name
    #[arg(short = 'p', long, alias = "policySet")]
    pub policy_set: String,

    /// Workspace name
    #[arg(short = 'w', long, value_parser = NonEmptyStringValueParser::new())]
    pub workspace: String,
}
