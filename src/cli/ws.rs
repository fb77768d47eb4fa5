//! Workspace command arguments

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

/// Workspace operations
#[derive(Subcommand, Debug)]
pub enum WsAction {
    /// List workspaces in the organization
    #[command(visible_alias = "ls")]
    List,

    /// Show a workspace
    #[command(visible_alias = "read")]
    Get(WsArgs),

    /// Create a workspace, or update it if it already exists
    #[command(visible_alias = "create")]
    Save(WsArgs),

    /// Delete a workspace
    #[command(visible_alias = "del", visible_alias = "rm")]
    Delete(WsArgs),
}

/// Arguments naming a single workspace
#[derive(Parser, Debug)]
pub struct WsArgs {
    /// Workspace name
    #[arg(short = 'w', long, value_parser = NonEmptyStringValueParser::new())]
    pub workspace: String,
}
