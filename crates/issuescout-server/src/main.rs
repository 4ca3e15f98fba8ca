// SPDX-License-Identifier: Apache-2.0

//! issuescout - first-contribution issue discovery.
//!
//! Serves the analysis API over HTTP, or analyzes a single repository from
//! the command line.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use issuescout_core::{AppConfig, Credentials, EnvTokenProvider, config};
use issuescout_server::{AppState, logging, run_http};
use tracing::debug;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    let mut config: AppConfig = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    let credentials = Credentials::resolve(&EnvTokenProvider);

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let state = AppState::new(&config, credentials)?;
            run_http(&config.server.host, config.server.port, state).await
        }
        Commands::Analyze { url, pretty } => {
            let state = AppState::new(&config, credentials)?;
            let response = state
                .analyzer
                .analyze(&url)
                .await
                .with_context(|| format!("Failed to analyze {url}"))?;

            let json = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{json}");
            Ok(())
        }
    }
}
