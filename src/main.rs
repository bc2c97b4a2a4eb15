#![forbid(unsafe_code)]

mod config;
mod constants;
mod gui;
mod state;
mod sync;
mod types;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use config::Config;
use state::filter;
use sync::{HttpSyncClient, SyncClient};
use types::Entity;

/// Browse and edit the transformers catalogue
#[derive(Debug, Parser)]
#[command(name = "transformer-db", version)]
struct Cli {
    /// Server base URL (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// trace, debug, info, warn or error (overrides LOG_LEVEL and config)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print records matching QUERY without opening a window
    List {
        #[arg(default_value = "")]
        query: String,
    },
}

fn parse_log_level(value: &str) -> TraceLevel {
    match value.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn format_row(entity: &Entity) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        entity.id,
        entity.name,
        entity.faction,
        entity.alt_mode,
        entity.weapons_text()
    )
}

/// Headless fetch + filter. A load failure is an error exit.
fn run_list(client: HttpSyncClient, query: &str) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build runtime")?;

    let entities = runtime
        .block_on(client.list())
        .with_context(|| format!("Error fetching data from {}", client.collection_url()))?;

    let visible = filter::visible(&entities, query);
    info!(total = entities.len(), shown = visible.len(), "Listing records");
    for entity in visible {
        println!("{}", format_row(entity));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --log-level > LOG_LEVEL > config file. The subscriber goes in before the
    // config is read so its messages are kept; the config level is applied after.
    let override_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("LOG_LEVEL").ok());

    let builder = FmtSubscriber::builder()
        .with_max_level(parse_log_level(override_level.as_deref().unwrap_or("info")))
        .with_filter_reloading();
    let reload = builder.reload_handle();
    tracing::subscriber::set_global_default(builder.finish())?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = &cli.base_url {
        config.server.base_url = base_url.clone();
    }

    if override_level.is_none() {
        reload
            .reload(parse_log_level(&config.log_level))
            .context("Failed to apply configured log level")?;
    }

    info!("config={:#?}", config);

    let client = HttpSyncClient::new(&config.server.base_url, &config.server.resource)
        .context("Failed to create sync client")?;

    match cli.command {
        Some(Command::List { query }) => run_list(client, &query),
        None => gui::run_gui(&config, client),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::EntityId;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), TraceLevel::DEBUG);
        assert_eq!(parse_log_level("error"), TraceLevel::ERROR);
        assert_eq!(parse_log_level("nonsense"), TraceLevel::INFO);
    }

    #[test]
    fn test_format_row() {
        let entity = Entity {
            id: EntityId::Number(1),
            name: "Optimus Prime".to_string(),
            faction: "Autobot".to_string(),
            alt_mode: "Truck".to_string(),
            weapons: vec!["Ion Blaster".to_string(), "Energon Axe".to_string()],
            image: "x".to_string(),
        };
        assert_eq!(
            format_row(&entity),
            "1\tOptimus Prime\tAutobot\tTruck\tIon Blaster, Energon Axe"
        );
    }

    #[test]
    fn test_cli_parses_list_subcommand() {
        let cli = Cli::try_parse_from([
            "transformer-db",
            "--base-url",
            "http://example.test",
            "list",
            "autobot",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://example.test"));
        assert!(matches!(cli.command, Some(Command::List { ref query }) if query == "autobot"));
    }
}
