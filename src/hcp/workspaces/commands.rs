//! Workspace command handlers

use log::{debug, info};

use crate::cli::{Cli, WsAction};
use crate::error::Result;
use crate::hcp::traits::ApiObject;
use crate::hcp::TfeClient;
use crate::output::{print_resource, print_resources, ResourceKind};
use crate::ui::{create_spinner, finish_spinner};

use super::models::{Workspace, WorkspaceSettings};

/// Run a workspace subcommand
pub async fn run_ws_command(
    client: &TfeClient,
    cli: &Cli,
    org: &str,
    action: &WsAction,
) -> Result<()> {
    match action {
        WsAction::List => {
            let spinner = create_spinner(
                &format!("Fetching workspaces from '{}'...", org),
                cli.batch,
            );
            let result = client.get_workspaces(org).await;
            finish_spinner(spinner);

            let workspaces = result?;
            info!("Found {} workspaces in '{}'", workspaces.len(), org);
            print_resources(&workspaces, ResourceKind::Workspace, cli.expand)
        }
        WsAction::Get(args) => {
            let spinner = create_spinner(
                &format!("Fetching workspace '{}'...", args.workspace),
                cli.batch,
            );
            let result = client.get_workspace(org, &args.workspace).await;
            finish_spinner(spinner);

            print_resource(&result?.raw, ResourceKind::Workspace, cli.expand)
        }
        WsAction::Save(args) => {
            let spinner = create_spinner(
                &format!("Saving workspace '{}'...", args.workspace),
                cli.batch,
            );
            let result = save_workspace(client, org, &args.workspace).await;
            finish_spinner(spinner);

            print_resource(&result?.raw, ResourceKind::Workspace, cli.expand)
        }
        WsAction::Delete(args) => {
            let spinner = create_spinner(
                &format!("Deleting workspace '{}'...", args.workspace),
                cli.batch,
            );
            let result = client.delete_workspace(org, &args.workspace).await;
            finish_spinner(spinner);

            result?;
            println!("Workspace '{}' deleted successfully!", args.workspace);
            Ok(())
        }
    }
}

/// Update the workspace if it exists, create it otherwise
pub async fn save_workspace(
    client: &TfeClient,
    org: &str,
    name: &str,
) -> Result<ApiObject<Workspace>> {
    let settings = WorkspaceSettings::for_name(name);

    match client.get_workspace_by_name(org, name).await? {
        Some(existing) => {
            debug!("Workspace '{}' exists ({}), updating", name, existing.model.id);
            client.update_workspace(org, name, &settings).await
        }
        None => {
            debug!("Workspace '{}' not found, creating", name);
            client.create_workspace(org, &settings).await
        }
    }
}
