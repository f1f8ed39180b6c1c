use clap::{CommandFactory, Parser};
use serde::Serialize;

use crate::annotation::LabelFilter;
use crate::config::{LoggerSettings, LoggingArgs};
use crate::error::Result;
use crate::options::parse_rgb;
use crate::plugins::{PluginArgs, PluginInfo};
use crate::types::{DataKind, Rgb, Role};

pub const NAME: &str = "add-annotation-overlay-is";
pub const DESCRIPTION: &str = "Adds the image segmentation annotations on top of images passing through.";

const KINDS: &[DataKind] = &[DataKind::ImageSegmentationData];

#[derive(Parser, Debug, Clone)]
#[command(name = NAME, about = DESCRIPTION)]
pub struct AnnotationOverlayIsArgs {
    #[command(flatten)]
    pub logging: LoggingArgs,

    /// The labels of annotations to overlay, overlays all if omitted.
    #[arg(long = "labels", value_name = "LABEL", num_args = 0..)]
    pub labels: Option<Vec<String>>,

    /// The RGB triplets (R,G,B) of custom colors to use, uses default colors if not supplied
    #[arg(
        short = 'c',
        long = "colors",
        value_name = "R,G,B",
        num_args = 0..,
        value_parser = parse_rgb
    )]
    pub colors: Option<Vec<Rgb>>,

    /// The alpha value to use for overlaying the annotations (0: transparent, 255: opaque).
    #[arg(short = 'a', long = "alpha", value_name = "INT", default_value_t = 64)]
    pub alpha: u8,
}

pub fn info() -> PluginInfo {
    PluginInfo::new(
        NAME,
        DESCRIPTION,
        Role::Filter,
        KINDS,
        KINDS,
        AnnotationOverlayIsArgs::command,
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnotationOverlayIsSettings {
    pub logger: LoggerSettings,
    pub labels: LabelFilter,
    pub custom_colors: Vec<Rgb>,
    pub alpha: u8,
}

impl AnnotationOverlayIsSettings {
    /// The layers of a segmentation annotation that get overlayed, in their original order.
    pub fn selected_layers<'a>(&self, layers: &'a [String]) -> Vec<&'a str> {
        layers
            .iter()
            .map(String::as_str)
            .filter(|label| self.labels.accepts(label))
            .collect()
    }
}

impl PluginArgs for AnnotationOverlayIsArgs {
    type Settings = AnnotationOverlayIsSettings;

    fn logging(&self) -> &LoggingArgs {
        &self.logging
    }

    fn initialize(&self) -> Result<AnnotationOverlayIsSettings> {
        Ok(AnnotationOverlayIsSettings {
            logger: self.logging.resolve(NAME),
            labels: LabelFilter::from_labels(self.labels.as_deref()),
            custom_colors: self.colors.clone().unwrap_or_default(),
            alpha: self.alpha,
        })
    }
}
