use clap::{Parser, ValueEnum};

use menagerie_observability::{LogFormat, LogSettings};

/// How reports are written to the console.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[default]
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "menagerie")]
#[command(about = "Console zoo inventory manager")]
pub struct Config {
    /// Render reports as plain text or JSON
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub report_format: ReportFormat,

    /// Log line format (logs go to stderr; RUST_LOG overrides the filter)
    #[arg(long, value_enum, default_value_t = LogFormatArg::Compact)]
    pub log_format: LogFormatArg,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Start with an empty inventory instead of the office furniture
    #[arg(long)]
    pub no_seed: bool,

    /// Admit the stock monkey, rabbit, tiger and wolf at startup
    #[arg(long)]
    pub with_residents: bool,
}

impl Config {
    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            format: self.log_format.into(),
            verbose: self.verbose,
        }
    }
}
