//! OAuth Client module

mod api;
mod commands;
mod models;

pub use commands::{run_oc_command, save_oauth_client, SaveOutcome};
pub use models::{OAuthClient, OAuthClientAttributes, ProviderPreset};
