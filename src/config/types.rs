//! Configuration types and CLI options.

use clap::{Parser, ValueEnum};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration, parsed from the command line.
///
/// The report source may be an `http(s)://` URL, a local file path, or `-`
/// for stdin.
#[derive(Debug, Clone, Parser)]
#[command(name = "honeypot_dashboard", version, about)]
pub struct Config {
    /// Report source: URL, file path, or `-` for stdin
    pub report: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Serve the rendered dashboard over HTTP on this port after loading
    #[arg(long)]
    pub status_port: Option<u16>,

    /// Suppress the terminal dashboard printout
    #[arg(long)]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report: "output.txt".to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            status_port: None,
            quiet: false,
        }
    }
}
