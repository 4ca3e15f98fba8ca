// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for issuescout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// issuescout - find approachable issues in GitHub repositories.
#[derive(Parser)]
#[command(name = "issuescout", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ~/.config/issuescout/config.toml)
    #[arg(long, global = true, env = "ISSUESCOUT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Bind address (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides server.port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Analyze one repository and print the result as JSON
    Analyze {
        /// GitHub repository URL (e.g., <https://github.com/owner/repo>)
        url: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_overrides_parse() {
        let cli = Cli::parse_from(["issuescout", "serve", "--host", "::1", "--port", "8080"]);
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host.as_deref(), Some("::1"));
                assert_eq!(port, Some(8080));
            }
            Commands::Analyze { .. } => panic!("expected serve"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from([
            "issuescout",
            "analyze",
            "https://github.com/a/b",
            "--config",
            "/tmp/issuescout.toml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/issuescout.toml")));
    }
}
