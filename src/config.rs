use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::Serialize;
use std::path::PathBuf;

use crate::plugins::PluginCommand;

/// Inspect, document and validate the image visualization plugins.
#[derive(Parser, Debug, Clone)]
#[command(name = "imgvis", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Lists the available plugins
    List {
        /// Output the plugin list as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Generates Markdown documentation for all plugins
    Docs {
        /// Directory to write the Markdown files to
        #[arg(short = 'o', long = "output_dir", default_value = "./plugins")]
        output_dir: PathBuf,
    },

    /// Expands the placeholders in a path template
    Expand {
        /// The template to expand, e.g., {CWD}/{INPUT_NAMENOEXT}.png
        template: String,

        /// The current input file for the input-based placeholders
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,

        /// File with custom placeholders (KEY=VALUE per line)
        #[arg(short = 'p', long = "placeholders")]
        placeholders: Option<PathBuf>,
    },

    #[command(flatten)]
    Plugin(PluginCommand),
}

/// Logging levels in the naming of the host framework.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoggingLevel {
    #[value(name = "DEBUG")]
    Debug,
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
    #[value(name = "CRITICAL")]
    Critical,
}

impl LoggingLevel {
    // log has no level above error
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LoggingLevel::Debug => LevelFilter::Debug,
            LoggingLevel::Info => LevelFilter::Info,
            LoggingLevel::Warning => LevelFilter::Warn,
            LoggingLevel::Error | LoggingLevel::Critical => LevelFilter::Error,
        }
    }
}

/// Options shared by all plugins.
#[derive(Args, Debug, Clone)]
pub struct LoggingArgs {
    /// The logging level to use.
    #[arg(
        short = 'l',
        long = "logging_level",
        value_enum,
        default_value = "WARNING"
    )]
    pub logging_level: LoggingLevel,

    /// The custom name to use for the logger, uses the plugin name by default
    #[arg(short = 'N', long = "logger_name", value_name = "LOGGER_NAME")]
    pub logger_name: Option<String>,
}

impl Default for LoggingArgs {
    fn default() -> Self {
        Self {
            logging_level: LoggingLevel::Warning,
            logger_name: None,
        }
    }
}

impl LoggingArgs {
    pub fn resolve(&self, plugin: &str) -> LoggerSettings {
        let name = match &self.logger_name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => plugin.to_string(),
        };
        LoggerSettings {
            name,
            level: self.logging_level,
        }
    }
}

/// Resolved logger configuration of a plugin; `name` is used as log target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggerSettings {
    pub name: String,
    pub level: LoggingLevel,
}
