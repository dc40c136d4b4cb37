//! CLI command implementations.

pub mod healthcheck;
pub mod records;
pub mod uri;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::plugins::create_native_adapter;
use crate::cli::types::{Cli, Commands};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LoggerImpl, TracingLogger};

/// Load configuration from `--config` or the default hierarchy.
pub fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Load config, install logging, build the adapter and run the command.
pub async fn execute(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let _logger = LoggerImpl::init(&LogConfig::from(&config.logging))?;

    let logger = Arc::new(TracingLogger::new().context("Failed to build log scrubber")?);
    let adapter = create_native_adapter(&config, logger)?;

    tracing::debug!(
        adapter_id = adapter.id(),
        table = %adapter.properties().service_now_table,
        "adapter constructed"
    );

    match cli.command {
        Commands::Healthcheck => healthcheck::execute(&adapter, cli.json).await,
        Commands::Get(args) => records::get(&adapter, args, cli.json).await,
        Commands::Post => records::post(&adapter, cli.json).await,
        Commands::Uri(ref args) => uri::execute(&adapter, args, cli.json),
    }
}
