use clap::{CommandFactory, Parser};
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{LoggerSettings, LoggingArgs};
use crate::error::{ImgvisError, Result};
use crate::options::{parse_fraction, Combination};
use crate::placeholders::Placeholders;
use crate::plugins::{PluginArgs, PluginInfo};
use crate::types::{DataKind, Role, STREAM_INDEX_KEY};

pub const NAME: &str = "combine-annotations-od";
pub const DESCRIPTION: &str =
    "Combines object detection annotations from images passing through into a single annotation.";

const KINDS: &[DataKind] = &[DataKind::ObjectDetectionData];

#[derive(Parser, Debug, Clone)]
#[command(name = NAME, about = DESCRIPTION)]
pub struct CombineAnnotationsOdArgs {
    #[command(flatten)]
    pub logging: LoggingArgs,

    /// The minimum IoU (intersect over union) to use for identifying objects that overlap
    #[arg(
        long = "min_iou",
        value_name = "FLOAT",
        default_value_t = 0.7,
        value_parser = parse_fraction
    )]
    pub min_iou: f64,

    /// How to combine the annotations (intersect|union); the 'stream_index' key in the meta-data contains the stream index
    #[arg(long = "combination", value_enum, default_value = "intersect")]
    pub combination: Combination,

    #[arg(
        short = 'o',
        long = "output_file",
        value_name = "FILE",
        default_value = "./combined.report",
        help = concat!(
            "The .report file to write the combined annotations to. ",
            crate::placeholder_list!()
        )
    )]
    pub output_file: String,
}

pub fn info() -> PluginInfo {
    PluginInfo::new(
        NAME,
        DESCRIPTION,
        Role::Filter,
        KINDS,
        KINDS,
        CombineAnnotationsOdArgs::command,
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct CombineAnnotationsOdSettings {
    pub logger: LoggerSettings,
    pub min_iou: f64,
    pub combination: Combination,
    /// Output template, placeholders unexpanded.
    pub output_file: String,
    pub stream_index_key: &'static str,
}

impl CombineAnnotationsOdSettings {
    pub fn output_path(&self, placeholders: &Placeholders, input: Option<&Path>) -> PathBuf {
        let path = placeholders.expand_path(&self.output_file, input);
        info!(
            target: self.logger.name.as_str(),
            "Writing combined annotations to: {}",
            path.display()
        );
        path
    }

    /// Whether two objects with the given IoU count as the same object.
    ///
    /// Objects without any overlap never match, even with a threshold of 0.
    pub fn is_match(&self, iou: f64) -> bool {
        iou > 0.0 && iou >= self.min_iou
    }
}

impl PluginArgs for CombineAnnotationsOdArgs {
    type Settings = CombineAnnotationsOdSettings;

    fn logging(&self) -> &LoggingArgs {
        &self.logging
    }

    fn initialize(&self) -> Result<CombineAnnotationsOdSettings> {
        if self.output_file.trim().is_empty() {
            return Err(ImgvisError::initialization(NAME, "No output file defined!"));
        }
        Ok(CombineAnnotationsOdSettings {
            logger: self.logging.resolve(NAME),
            min_iou: self.min_iou,
            combination: self.combination,
            output_file: self.output_file.clone(),
            stream_index_key: STREAM_INDEX_KEY,
        })
    }
}
