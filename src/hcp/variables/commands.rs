//! Workspace variable command handlers

use log::{debug, info};

use crate::cli::{Cli, VarAction, VarSaveArgs};
use crate::error::Result;
use crate::hcp::resolver::variable_id;
use crate::hcp::traits::ApiObject;
use crate::hcp::TfeClient;
use crate::output::{print_resource, print_resources, ResourceKind};
use crate::ui::{create_spinner, finish_spinner};

use super::models::{Variable, VariableSettings};

impl From<&VarSaveArgs> for VariableSettings {
    fn from(args: &VarSaveArgs) -> Self {
        Self {
            key: args.key.clone(),
            value: args.value.clone(),
            description: args.description.clone(),
            category: args.category.to_string(),
            hcl: args.hcl,
            sensitive: args.sensitive,
        }
    }
}

/// Run a variable subcommand
pub async fn run_variable_command(
    client: &TfeClient,
    cli: &Cli,
    org: &str,
    action: &VarAction,
) -> Result<()> {
    match action {
        VarAction::List(args) => {
            let spinner = create_spinner(
                &format!("Fetching variables of '{}'...", args.workspace),
                cli.batch,
            );
            let result = list_variables(client, org, &args.workspace).await;
            finish_spinner(spinner);

            let vars = result?;
            info!("Found {} variables in '{}'", vars.len(), args.workspace);
            print_resources(&vars, ResourceKind::Variable, cli.expand)
        }
        VarAction::Get(args) => {
            let spinner = create_spinner(
                &format!("Fetching variable '{}'...", args.variable),
                cli.batch,
            );
            let result = get_variable(client, org, &args.workspace, &args.variable).await;
            finish_spinner(spinner);

            print_resource(&result?.raw, ResourceKind::Variable, cli.expand)
        }
        VarAction::Save(args) => {
            let spinner =
                create_spinner(&format!("Saving variable '{}'...", args.key), cli.batch);
            let settings = VariableSettings::from(args);
            let result = save_variable(client, org, &args.workspace, &settings).await;
            finish_spinner(spinner);

            print_resource(&result?.raw, ResourceKind::Variable, cli.expand)
        }
        VarAction::Delete(args) => {
            let spinner = create_spinner(
                &format!("Deleting variable '{}'...", args.variable),
                cli.batch,
            );
            let result = delete_variable(client, org, &args.workspace, &args.variable).await;
            finish_spinner(spinner);

            result?;
            println!(
                "Variable '{}' from workspace '{}' deleted successfully!",
                args.variable, args.workspace
            );
            Ok(())
        }
    }
}

async fn list_variables(
    client: &TfeClient,
    org: &str,
    workspace: &str,
) -> Result<Vec<ApiObject<Variable>>> {
    let ws = client.get_workspace(org, workspace).await?;
    client.get_variables(&ws.model.id).await
}

async fn get_variable(
    client: &TfeClient,
    org: &str,
    workspace: &str,
    key: &str,
) -> Result<ApiObject<Variable>> {
    let ws = client.get_workspace(org, workspace).await?;
    let vars = client.get_variables(&ws.model.id).await?;
    let var_id = variable_id(Some(vars.as_slice()), key);
    client.get_variable(&ws.model.id, &var_id).await
}

/// Update the variable if its key exists in the workspace, create it otherwise
pub async fn save_variable(
    client: &TfeClient,
    org: &str,
    workspace: &str,
    settings: &VariableSettings,
) -> Result<ApiObject<Variable>> {
    let ws = client.get_workspace(org, workspace).await?;
    let vars = client.get_variables(&ws.model.id).await?;
    let var_id = variable_id(Some(vars.as_slice()), &settings.key);

    if var_id.is_empty() {
        debug!("Variable '{}' not found, creating", settings.key);
        client.create_variable(&ws.model.id, settings).await
    } else {
        debug!("Variable '{}' exists ({}), updating", settings.key, var_id);
        client.update_variable(&ws.model.id, &var_id, settings).await
    }
}

async fn delete_variable(
    client: &TfeClient,
    org: &str,
    workspace: &str,
    key: &str,
) -> Result<()> {
    let ws = client.get_workspace(org, workspace).await?;
    let vars = client.get_variables(&ws.model.id).await?;
    let var_id = variable_id(Some(vars.as_slice()), key);
    client.delete_variable(&ws.model.id, &var_id).await
}
