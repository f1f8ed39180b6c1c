//! Image visualization plugins for an image dataset converter
//!
//! This library provides the option surface of the visualization plugins
//! (overlays for classification, detection and segmentation data, annotation
//! combination, overlay export and image display), placeholder expansion for
//! output paths and Markdown documentation of all plugins.

pub mod annotation;
pub mod config;
pub mod docs;
pub mod error;
pub mod options;
pub mod placeholders;
pub mod plugins;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::{Cli, Command, LoggingArgs, LoggingLevel};
pub use docs::{render_markdown, write_docs};
pub use error::{ImgvisError, Result};
pub use placeholders::{expand_placeholders, Placeholders};
pub use plugins::{catalog, find_plugin, PluginArgs, PluginCommand, PluginInfo, PluginSettings};
pub use types::{DataKind, Role};
