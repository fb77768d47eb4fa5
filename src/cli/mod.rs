//! CLI argument parsing

mod oauth_client;
mod policy_set;
mod variable;
mod ws;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use oauth_client::{OcAction, OcDeleteArgs, OcGetArgs, OcSaveArgs, ProviderType};
pub use policy_set::{PsAction, PsArgs, PsSaveArgs, PsWorkspaceArgs};
pub use variable::{VarAction, VarArgs, VarSaveArgs, VarWorkspaceArgs, VariableCategory};
pub use ws::{WsAction, WsArgs};

/// Manage Terraform Cloud / Enterprise workspaces, variables, policy sets and OAuth clients
#[derive(Parser, Debug)]
#[command(name = "tfctl")]
#[command(version)]
#[command(about = "Manage HCP Terraform / TFE resources", long_about = None)]
pub struct Cli {
    /// TFE host
    #[arg(long, global = true, env = defaults::HOST_ENV_VAR, default_value = defaults::HOST)]
    pub host: String,

    /// Organization name
    #[arg(long, global = true, env = defaults::ORG_ENV_VAR)]
    pub org: Option<String>,

    /// API token (overrides env vars and credentials file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Print full API objects instead of the reduced view
    #[arg(short = 'x', long, global = true, default_value_t = false)]
    pub expand: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode (no spinners)
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Resource groups
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage workspaces
    #[command(visible_alias = "workspace")]
    Ws {
        #[command(subcommand)]
        action: WsAction,
    },

    /// Manage workspace variables
    #[command(visible_alias = "var")]
    Variable {
        #[command(subcommand)]
        action: VarAction,
    },

    /// Manage policy sets
    #[command(name = "policy-set", visible_alias = "ps", alias = "policySet")]
    PolicySet {
        #[command(subcommand)]
        action: PsAction,
    },

    /// Manage OAuth (VCS) clients
    #[command(name = "oauth-client", visible_alias = "oc", alias = "OAuthClient")]
    OauthClient {
        #[command(subcommand)]
        action: OcAction,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from([
            "tfctl",
            "--org",
            "my-org",
            "--host",
            "tfe.example.com",
            "--token",
            "abc",
            "-x",
            "-b",
            "-l",
            "debug",
            "ws",
            "list",
        ]);
        assert_eq!(cli.org.as_deref(), Some("my-org"));
        assert_eq!(cli.host, "tfe.example.com");
        assert_eq!(cli.token.as_deref(), Some("abc"));
        assert!(cli.expand);
        assert!(cli.batch);
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(
            cli.command,
            Command::Ws {
                action: WsAction::List
            }
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tfctl", "ws", "list", "--org", "my-org", "-x"]);
        assert_eq!(cli.org.as_deref(), Some("my-org"));
        assert!(cli.expand);
    }

    #[test]
    fn test_group_aliases() {
        for args in [
            ["tfctl", "workspace", "list"],
            ["tfctl", "var", "list"],
            ["tfctl", "ps", "list"],
            ["tfctl", "policySet", "list"],
            ["tfctl", "oc", "list"],
            ["tfctl", "OAuthClient", "list"],
        ] {
            let result = Cli::try_parse_from(args);
            // var list needs -w; every other alias must parse as-is
            if args[1] == "var" {
                assert!(result.is_err());
            } else {
                assert!(result.is_ok(), "failed to parse {:?}", args);
            }
        }
    }
}
