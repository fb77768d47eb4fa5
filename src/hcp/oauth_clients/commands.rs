//! OAuth Client command handlers

use log::{debug, info};

use crate::cli::{Cli, OcAction, ProviderType};
use crate::error::Result;
use crate::hcp::resolver::oauth_client_id;
use crate::hcp::traits::ApiObject;
use crate::hcp::TfeClient;
use crate::output::{print_resource, print_resources, ResourceKind};
use crate::ui::{create_spinner, finish_spinner};

use super::models::{OAuthClient, ProviderPreset};

impl From<ProviderType> for ProviderPreset {
    fn from(provider: ProviderType) -> Self {
        match provider {
            ProviderType::Github => ProviderPreset::GITHUB,
            ProviderType::Gitlab => ProviderPreset::GITLAB,
        }
    }
}

/// Result of `oauth-client save`
#[derive(Debug)]
pub enum SaveOutcome {
    /// A new client was created
    Created(ApiObject<OAuthClient>),
    /// A client for the provider already exists; nothing was changed
    AlreadyExists(String),
}

/// Run an OAuth client subcommand
pub async fn run_oc_command(
    client: &TfeClient,
    cli: &Cli,
    org: &str,
    action: &OcAction,
) -> Result<()> {
    match action {
        OcAction::List => {
            let spinner = create_spinner(
                &format!("Fetching OAuth clients from '{}'...", org),
                cli.batch,
            );
            let result = client.get_oauth_clients(org).await;
            finish_spinner(spinner);

            let clients = result?;
            info!("Found {} OAuth clients in '{}'", clients.len(), org);
            print_resources(&clients, ResourceKind::OAuthClient, cli.expand)
        }
        OcAction::Get(args) => {
            let spinner = create_spinner(
                &format!("Fetching OAuth client '{}'...", args.provider_type),
                cli.batch,
            );
            let result = get_oauth_client(client, org, &args.provider_type).await;
            finish_spinner(spinner);

            print_resource(&result?.raw, ResourceKind::OAuthClient, cli.expand)
        }
        OcAction::Save(args) => {
            let spinner = create_spinner(
                &format!("Saving OAuth client '{}'...", args.provider_type),
                cli.batch,
            );
            let result =
                save_oauth_client(client, org, args.provider_type, &args.oauth_token).await;
            finish_spinner(spinner);

            match result? {
                SaveOutcome::Created(oc) => {
                    print_resource(&oc.raw, ResourceKind::OAuthClient, cli.expand)
                }
                SaveOutcome::AlreadyExists(id) => {
                    debug!("Existing OAuth client: {}", id);
                    println!(
                        "OAuth client for service provider '{}' already exists, check with:\n\
                         \t'tfctl oauth-client list'\n\
                         Only one client per service provider is expected.",
                        args.provider_type
                    );
                    Ok(())
                }
            }
        }
        OcAction::Delete(args) => {
            let spinner = create_spinner(
                &format!("Deleting OAuth client '{}'...", args.provider_type),
                cli.batch,
            );
            let result = delete_oauth_client(client, org, &args.provider_type).await;
            finish_spinner(spinner);

            result?;
            println!(
                "OAuth Client '{}' deleted successfully!",
                args.provider_type
            );
            Ok(())
        }
    }
}

async fn resolve_oauth_client(client: &TfeClient, org: &str, provider: &str) -> Result<String> {
    let clients = client.get_oauth_clients(org).await?;
    Ok(oauth_client_id(Some(clients.as_slice()), provider))
}

async fn get_oauth_client(
    client: &TfeClient,
    org: &str,
    provider: &str,
) -> Result<ApiObject<OAuthClient>> {
    let id = resolve_oauth_client(client, org, provider).await?;
    client.get_oauth_client(&id).await
}

/// Create an OAuth client for the provider unless one already matches it
pub async fn save_oauth_client(
    client: &TfeClient,
    org: &str,
    provider: ProviderType,
    oauth_token: &str,
) -> Result<SaveOutcome> {
    let id = resolve_oauth_client(client, org, &provider.to_string()).await?;
    if !id.is_empty() {
        return Ok(SaveOutcome::AlreadyExists(id));
    }

    let preset = ProviderPreset::from(provider);
    let created = client.create_oauth_client(org, &preset, oauth_token).await?;
    Ok(SaveOutcome::Created(created))
}

async fn delete_oauth_client(client: &TfeClient, org: &str, provider: &str) -> Result<()> {
    let id = resolve_oauth_client(client, org, provider).await?;
    client.delete_oauth_client(&id).await
}
