use clap::{CommandFactory, Parser};
use log::debug;
use serde::Serialize;

use crate::annotation::LabelFilter;
use crate::config::{LoggerSettings, LoggingArgs};
use crate::error::Result;
use crate::options::{parse_radius, parse_rgb, Radius};
use crate::plugins::{outline_thickness, PluginArgs, PluginInfo};
use crate::types::{DataKind, Rect, Rgb, Role, LABEL_KEY};

pub const NAME: &str = "add-center-overlay-od";
pub const DESCRIPTION: &str = "Adds center dot overlays (object detection) to images passing through.";

const KINDS: &[DataKind] = &[DataKind::ObjectDetectionData];

#[derive(Parser, Debug, Clone)]
#[command(name = NAME, about = DESCRIPTION)]
pub struct CenterOverlayOdArgs {
    #[command(flatten)]
    pub logging: LoggingArgs,

    /// The labels of annotations to overlay, overlays all if omitted.
    #[arg(long = "labels", value_name = "LABEL", num_args = 0..)]
    pub labels: Option<Vec<String>>,

    /// The key in the meta-data that contains the label.
    #[arg(long = "label_key", value_name = "KEY", default_value = LABEL_KEY)]
    pub label_key: String,

    /// The size of the dot/circle in pixels or, if <1 the diameter's relative size to the bbox width.
    #[arg(long = "radius", value_name = "FLOAT", default_value = "10", value_parser = parse_radius)]
    pub radius: Radius,

    /// The RGB triplets (R,G,B) of custom colors to use, uses default colors if not supplied
    #[arg(long = "colors", value_name = "R,G,B", num_args = 0.., value_parser = parse_rgb)]
    pub colors: Option<Vec<Rgb>>,

    /// The line thickness to use for the outline, <1 to turn off.
    #[arg(
        long = "outline_thickness",
        value_name = "INT",
        default_value_t = 3,
        allow_negative_numbers = true
    )]
    pub outline_thickness: i32,

    /// The alpha value to use for the outline (0: transparent, 255: opaque).
    #[arg(long = "outline_alpha", value_name = "INT", default_value_t = 255)]
    pub outline_alpha: u8,

    /// Whether to fill the bounding boxes/polygons.
    #[arg(long = "fill")]
    pub fill: bool,

    /// The alpha value to use for the filling (0: transparent, 255: opaque).
    #[arg(long = "fill_alpha", value_name = "INT", default_value_t = 128)]
    pub fill_alpha: u8,

    /// Whether to vary the colors of the outline/filling regardless of label.
    #[arg(long = "vary_colors")]
    pub vary_colors: bool,
}

pub fn info() -> PluginInfo {
    PluginInfo::new(
        NAME,
        DESCRIPTION,
        Role::Filter,
        KINDS,
        KINDS,
        CenterOverlayOdArgs::command,
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct CenterOverlayOdSettings {
    pub logger: LoggerSettings,
    pub labels: LabelFilter,
    pub label_key: String,
    pub radius: Radius,
    pub custom_colors: Vec<Rgb>,
    pub outline_thickness: Option<u32>,
    pub outline_alpha: u8,
    pub fill_alpha: Option<u8>,
    pub vary_colors: bool,
}

/// Bounding box of a center dot, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DotBounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl CenterOverlayOdSettings {
    /// Bounds of the dot drawn at the center of `rect`.
    pub fn dot_bounds(&self, rect: &Rect) -> DotBounds {
        let center_x = (rect.left + (rect.right - rect.left + 1).div_euclid(2)) as f64;
        let center_y = (rect.top + (rect.bottom - rect.top + 1).div_euclid(2)) as f64;
        let radius = self.radius.resolve(rect);
        DotBounds {
            x0: center_x - radius,
            y0: center_y - radius,
            x1: center_x + radius,
            y1: center_y + radius,
        }
    }
}

impl PluginArgs for CenterOverlayOdArgs {
    type Settings = CenterOverlayOdSettings;

    fn logging(&self) -> &LoggingArgs {
        &self.logging
    }

    fn initialize(&self) -> Result<CenterOverlayOdSettings> {
        let logger = self.logging.resolve(NAME);
        let settings = CenterOverlayOdSettings {
            labels: LabelFilter::from_labels(self.labels.as_deref()),
            label_key: self.label_key.clone(),
            radius: self.radius,
            custom_colors: self.colors.clone().unwrap_or_default(),
            outline_thickness: outline_thickness(self.outline_thickness),
            outline_alpha: self.outline_alpha,
            fill_alpha: self.fill.then_some(self.fill_alpha),
            vary_colors: self.vary_colors,
            logger,
        };
        debug!(target: settings.logger.name.as_str(), "radius: {:?}", settings.radius);
        Ok(settings)
    }
}
