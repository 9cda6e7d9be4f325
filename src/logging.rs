// src/logging.rs
// =============================================================================
// Sets up tracing output.
//
// RUST_LOG wins when set; otherwise --log-level applies to this crate only.
// Logs go to stderr so that stdout only carries the converted links.
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber
pub fn init_logging(log_level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("cdn_pin={}", log_level)))
        .map_err(|e| anyhow!("Invalid log level '{}': {}", log_level, e))?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
