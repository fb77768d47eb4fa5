//! OAuth client command arguments

use clap::{Parser, Subcommand, ValueEnum};

/// OAuth client operations
#[derive(Subcommand, Debug)]
pub enum OcAction {
    /// List OAuth clients in the organization
    #[command(visible_alias = "ls")]
    List,

    /// Show the OAuth client of a service provider
    #[command(visible_alias = "read")]
    Get(OcGetArgs),

    /// Connect the organization to a VCS provider
    #[command(visible_alias = "create")]
    Save(OcSaveArgs),

    /// Delete the OAuth client of a service provider
    #[command(visible_alias = "del", visible_alias = "rm")]
    Delete(OcDeleteArgs),
}

/// Arguments for 'oauth-client get'
#[derive(Parser, Debug)]
pub struct OcGetArgs {
    /// Service provider name fragment, matched case-insensitively
    #[arg(long, alias = "providerType", default_value = "gitlab")]
    pub provider_type: String,
}

/// Arguments for 'oauth-client delete'
#[derive(Parser, Debug)]
pub struct OcDeleteArgs {
    /// Service provider name fragment, matched case-insensitively
    #[arg(long, alias = "providerType", default_value = "gitlab")]
    pub provider_type: String,
}

/// Arguments for 'oauth-client save'
#[derive(Parser, Debug)]
pub struct OcSaveArgs {
    /// VCS provider to connect
    #[arg(long, alias = "providerType", value_enum, default_value_t = ProviderType::Gitlab)]
    pub provider_type: ProviderType,

    /// Token issued by the VCS provider
    #[arg(short = 't', long)]
    pub oauth_token: String,
}

/// Supported VCS providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderType {
    /// github.com
    Github,
    /// gitlab.com
    Gitlab,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderType::Github => write!(f, "github"),
            ProviderType::Gitlab => write!(f, "gitlab"),
        }
    }
}
