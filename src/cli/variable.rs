//! Variable command arguments

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand, ValueEnum};

/// Variable operations
#[derive(Subcommand, Debug)]
pub enum VarAction {
    /// List the variables of a workspace
    #[command(visible_alias = "ls")]
    List(VarWorkspaceArgs),

    /// Show a variable
    #[command(visible_alias = "read")]
    Get(VarArgs),

    /// Create a variable, or update it if the key already exists
    #[command(visible_alias = "create")]
    Save(VarSaveArgs),

    /// Delete a variable
    #[command(visible_alias = "del", visible_alias = "rm")]
    Delete(VarArgs),
}

/// Arguments naming a workspace
#[derive(Parser, Debug)]
pub struct VarWorkspaceArgs {
    /// Workspace name
    #[arg(short = 'w', long, value_parser = NonEmptyStringValueParser::new())]
    pub workspace: String,
}

/// Arguments naming a variable in a workspace
#[derive(Parser, Debug)]
pub struct VarArgs {
    /// Workspace name
    #[arg(short = 'w', long, value_parser = NonEmptyStringValueParser::new())]
    pub workspace: String,

    /// Variable key
    #[arg(short = 'v', long)]
    pub variable: String,
}

/// Arguments for 'variable save'
#[derive(Parser, Debug)]
pub struct VarSaveArgs {
    /// Workspace name
    #[arg(short = 'w', long, value_parser = NonEmptyStringValueParser::new())]
    pub workspace: String,

    /// Variable key
    #[arg(long)]
    pub key: String,

    /// Variable value
    #[arg(long)]
    pub value: String,

    /// Variable category
    #[arg(long, value_enum, default_value_t = VariableCategory::Terraform)]
    pub category: VariableCategory,

    /// Variable description
    #[arg(long)]
    pub description: Option<String>,

    /// Evaluate the value as HCL
    #[arg(long, default_value_t = false)]
    pub hcl: bool,

    /// Mark the value as sensitive (write-only)
    #[arg(long, default_value_t = false)]
    pub sensitive: bool,
}

/// Variable category
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariableCategory {
    /// Terraform input variable
    Terraform,
    /// Environment variable
    Env,
}

impl std::fmt::Display for VariableCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableCategory::Terraform => write!(f, "terraform"),
            VariableCategory::Env => write!(f, "env"),
        }
    }
}
