//! Policy set command handlers

use log::{debug, info};

use crate::cli::{Cli, PsAction, PsSaveArgs};
use crate::error::Result;
use crate::hcp::resolver::policy_set_id;
use crate::hcp::traits::ApiObject;
use crate::hcp::TfeClient;
use crate::output::{print_resource, print_resources, ResourceKind};
use crate::ui::{create_spinner, finish_spinner};

use super::models::{PolicySet, PolicySetSettings};

impl From<&PsSaveArgs> for PolicySetSettings {
    fn from(args: &PsSaveArgs) -> Self {
        Self {
            name: args.policy_set.clone(),
            global: args.global,
            policies_path: args.policies_path.clone(),
            repo_identifier: args.repo_name.clone(),
            repo_branch: args.repo_branch.clone(),
            oauth_token_id: args.token_id.clone(),
        }
    }
}

/// Direction of a workspace relationship change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Attach,
    Detach,
}

/// Run a policy set subcommand
pub async fn run_ps_command(
    client: &TfeClient,
    cli: &Cli,
    org: &str,
    action: &PsAction,
) -> Result<()> {
    match action {
        PsAction::List => {
            let spinner = create_spinner(
                &format!("Fetching policy sets from '{}'...", org),
                cli.batch,
            );
            let result = client.get_policy_sets(org).await;
            finish_spinner(spinner);

            let sets = result?;
            info!("Found {} policy sets in '{}'", sets.len(), org);
            print_resources(&sets, ResourceKind::PolicySet, cli.expand)
        }
        PsAction::Get(args) => {
            let spinner = create_spinner(
                &format!("Fetching policy set '{}'...", args.policy_set),
                cli.batch,
            );
            let result = get_policy_set(client, org, &args.policy_set).await;
            finish_spinner(spinner);

            print_resource(&result?.raw, ResourceKind::PolicySet, cli.expand)
        }
        PsAction::Save(args) => {
            let spinner = create_spinner(
                &format!("Saving policy set '{}'...", args.policy_set),
                cli.batch,
            );
            let settings = PolicySetSettings::from(args);
            let result = save_policy_set(client, org, &settings).await;
            finish_spinner(spinner);

            print_resource(&result?.raw, ResourceKind::PolicySet, cli.expand)
        }
        PsAction::Delete(args) => {
            let spinner = create_spinner(
                &format!("Deleting policy set '{}'...", args.policy_set),
                cli.batch,
            );
            let result = delete_policy_set(client, org, &args.policy_set).await;
            finish_spinner(spinner);

            result?;
            println!("Policy set '{}' deleted successfully!", args.policy_set);
            Ok(())
        }
        PsAction::Attach(args) => {
            let spinner = create_spinner(
                &format!(
                    "Attaching '{}' to policy set '{}'...",
                    args.workspace, args.policy_set
                ),
                cli.batch,
            );
            let result =
                link_workspace(client, org, &args.policy_set, &args.workspace, Link::Attach).await;
            finish_spinner(spinner);

            result?;
            println!(
                "Workspace(s) '{}' attached to policy set '{}' successfully!",
                args.workspace, args.policy_set
            );
            Ok(())
        }
        PsAction::Detach(args) => {
            let spinner = create_spinner(
                &format!(
                    "Detaching '{}' from policy set '{}'...",
                    args.workspace, args.policy_set
                ),
                cli.batch,
            );
            let result =
                link_workspace(client, org, &args.policy_set, &args.workspace, Link::Detach).await;
            finish_spinner(spinner);

            result?;
            println!(
                "Workspace(s) '{}' detached from policy set '{}' successfully!",
                args.workspace, args.policy_set
            );
            Ok(())
        }
    }
}

async fn resolve_policy_set(client: &TfeClient, org: &str, name: &str) -> Result<String> {
    let sets = client.get_policy_sets(org).await?;
    Ok(policy_set_id(Some(sets.as_slice()), name))
}

async fn get_policy_set(
    client: &TfeClient,
    org: &str,
    name: &str,
) -> Result<ApiObject<PolicySet>> {
    let id = resolve_policy_set(client, org, name).await?;
    client.get_policy_set(&id).await
}

/// Update the policy set if the name exists in the organization, create it otherwise
pub async fn save_policy_set(
    client: &TfeClient,
    org: &str,
    settings: &PolicySetSettings,
) -> Result<ApiObject<PolicySet>> {
    let id = resolve_policy_set(client, org, &settings.name).await?;

    if id.is_empty() {
        debug!("Policy set '{}' not found, creating", settings.name);
        client.create_policy_set(org, settings).await
    } else {
        debug!("Policy set '{}' exists ({}), updating", settings.name, id);
        client.update_policy_set(&id, settings).await
    }
}

async fn delete_policy_set(client: &TfeClient, org: &str, name: &str) -> Result<()> {
    let id = resolve_policy_set(client, org, name).await?;
    client.delete_policy_set(&id).await
}

async fn link_workspace(
    client: &TfeClient,
    org: &str,
    policy_set: &str,
    workspace: &str,
    link: Link,
) -> Result<()> {
    let id = resolve_policy_set(client, org, policy_set).await?;
    let ws = client.get_workspace(org, workspace).await?;

    match link {
        Link::Attach => client.attach_workspace_to_policy_set(&id, &ws.model.id).await,
        Link::Detach => {
            client
                .detach_workspace_from_policy_set(&id, &ws.model.id)
                .await
        }
    }
}
