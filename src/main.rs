//! Entry point: parse CLI, load configuration and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use moneyball_etl::{
    cli::{Commands, ImportCmd, Moneyball},
    commands::{
        collections::handle_collections, team_statistics_import::handle_import_team_statistics,
        teams_import::handle_import_teams, IterationOrder,
    },
    config::{api_key_from_env, Settings},
    football::ApiClient,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = Moneyball::parse();

    let settings = Settings::load(&app.credentials, app.database)
        .context("Failed to load startup configuration")?;
    tracing::info!(
        project = %settings.credentials.project_id,
        client_email = settings.credentials.client_email.as_deref().unwrap_or("<none>"),
        database = %settings.database_path.display(),
        "configuration loaded"
    );

    match app.command {
        Commands::Import { cmd } => {
            let api_key = api_key_from_env()?;
            let client = ApiClient::new(&api_key)?;

            match cmd {
                ImportCmd::Teams { target } => {
                    handle_import_teams(
                        &client,
                        &settings.database_path,
                        target.league,
                        target.season,
                    )
                    .await?
                }

                ImportCmd::TeamStats { target, reverse } => {
                    handle_import_team_statistics(
                        &client,
                        &settings.database_path,
                        target.league,
                        target.season,
                        IterationOrder::from_reverse_flag(reverse),
                    )
                    .await?
                }
            }
        }

        Commands::Collections => handle_collections(&settings.database_path)?,
    }

    Ok(())
}
