// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the issuescout binary.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging written to
//! stderr, so `issuescout analyze` keeps stdout clean for JSON.
//!
//! # Examples
//!
//! ```bash
//! # Default: info level for issuescout, warn for dependencies
//! issuescout serve
//!
//! # Debug output for troubleshooting
//! RUST_LOG=issuescout=debug issuescout serve
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "issuescout=info,reqwest=warn";

/// Initialize the logging subsystem.
///
/// `RUST_LOG` takes precedence over [`DEFAULT_FILTER`].
pub fn init_logging() {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
