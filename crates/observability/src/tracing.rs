//! Tracing/logging initialization.
//!
//! Logs always go to stderr: stdout belongs to the interactive console.

use tracing_subscriber::EnvFilter;

/// Output format of log lines.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// How the process should log.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub format: LogFormat,
    /// Debug level for the workspace crates instead of warnings only.
    pub verbose: bool,
}

impl LogSettings {
    /// Filter used when `RUST_LOG` is not set.
    pub fn default_directive(&self) -> &'static str {
        if self.verbose {
            "menagerie_cli=debug,info"
        } else {
            "warn"
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// `RUST_LOG` wins over the settings' default directive. Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_directive()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match settings.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
    };
}
