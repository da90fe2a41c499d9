//! Logging for the scripd command line
//!
//! Diagnostics go to stderr so generated SQL on stdout stays clean. `RUST_LOG`
//! takes precedence over the verbosity chosen on the command line.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level filter
    pub default_filter: String,

    /// Whether to include file/line information in logs
    pub include_location: bool,

    /// Whether to colorize output
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::from_verbosity(0)
    }
}

impl LoggingConfig {
    /// Maps repeated `-v` flags to a filter
    pub fn from_verbosity(verbosity: u8) -> Self {
        let default_filter = match verbosity {
            0 => "warn",
            1 => "warn,scripd=info,scripd_core=info,scripd_templates=info,scripd_structure=info",
            2 => "info,scripd=debug,scripd_core=debug,scripd_templates=debug,scripd_structure=debug",
            _ => "trace",
        };

        Self {
            default_filter: default_filter.to_string(),
            include_location: verbosity >= 3,
            ansi: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}

/// Initialize the logging system with the given configuration
pub fn init(config: LoggingConfig) -> anyhow::Result<()> {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_ansi(config.ansi)
        .with_filter(config.env_filter());

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    tracing::debug!(filter = %config.default_filter, "logging initialized");
    Ok(())
}
