//! tfctl - Main entry point

use clap::Parser;
use log::{debug, info};

use tfctl::{
    run_oc_command, run_ps_command, run_variable_command, run_ws_command, Cli, Command, Result,
    TfeClient, TfeError, TokenResolver,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfctl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("Completed successfully");
}

async fn run(cli: &Cli) -> Result<()> {
    debug!(
        "CLI args: org={:?}, host={}, expand={}, batch={}",
        cli.org, cli.host, cli.expand, cli.batch
    );

    let org = cli.org.as_deref().filter(|o| !o.is_empty()).ok_or_else(|| {
        TfeError::Config("organization is required, use --org or set TF_ORG".to_string())
    })?;

    // Resolve token with fallback logic
    let token = TokenResolver::new(&cli.host).resolve(cli.token.as_deref())?;
    let client = TfeClient::new(token, cli.host.clone());

    match &cli.command {
        Command::Ws { action } => run_ws_command(&client, cli, org, action).await,
        Command::Variable { action } => run_variable_command(&client, cli, org, action).await,
        Command::PolicySet { action } => run_ps_command(&client, cli, org, action).await,
        Command::OauthClient { action } => run_oc_command(&client, cli, org, action).await,
    }
}
