use clap::{CommandFactory, Parser};
use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::annotation::LabelFilter;
use crate::config::{LoggerSettings, LoggingArgs};
use crate::error::{ImgvisError, Result};
use crate::options::{
    parse_text_placement, ColorSpec, FontSettings, TextPlacement, DEFAULT_COLOR_LIST,
};
use crate::plugins::{outline_thickness, PluginArgs, PluginInfo};
use crate::types::{DataKind, Rect, Role, DEFAULT_FONT_FAMILY, LABEL_KEY};

pub const NAME: &str = "add-annotation-overlay-od";
pub const DESCRIPTION: &str = "Adds object detection overlays to images passing through.";

const KINDS: &[DataKind] = &[DataKind::ObjectDetectionData];

#[derive(Parser, Debug, Clone)]
#[command(name = NAME, about = DESCRIPTION)]
pub struct AnnotationOverlayOdArgs {
    #[command(flatten)]
    pub logging: LoggingArgs,

    /// The labels of annotations to overlay, overlays all if omitted.
    #[arg(long = "labels", value_name = "LABEL", num_args = 0..)]
    pub labels: Option<Vec<String>>,

    /// The key in the meta-data that contains the label.
    #[arg(long = "label_key", value_name = "KEY", default_value = LABEL_KEY)]
    pub label_key: String,

    /// Template for the text to print on top of the bounding box or polygon, '{PH}' is a placeholder for the 'PH' value from the meta-data or 'label' for the current label; ignored if empty.
    #[arg(long = "text_format", value_name = "FORMAT", default_value = "{label}")]
    pub text_format: String,

    /// Comma-separated list of vertical (T=top, C=center, B=bottom) and horizontal (L=left, C=center, R=right) anchoring.
    #[arg(
        long = "text_placement",
        value_name = "V,H",
        default_value = "T,L",
        value_parser = parse_text_placement
    )]
    pub text_placement: TextPlacement,

    /// The name of the TTF font-family to use, note: any hyphens need escaping with backslash.
    #[arg(
        long = "font_family",
        value_name = "FONTNAME",
        default_value = DEFAULT_FONT_FAMILY
    )]
    pub font_family: String,

    /// The size of the font.
    #[arg(
        long = "font_size",
        value_name = "SIZE",
        default_value_t = 14,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub font_size: u32,

    /// The number of decimals to use for float numbers in the text format string.
    #[arg(long = "num_decimals", value_name = "INT", default_value_t = 3)]
    pub num_decimals: usize,

    /// The color list name or list of RGB triplets (R,G,B) of custom colors to use, uses default colors if not supplied (X11 colors, without dark/light colors)
    #[arg(short = 'c', long = "colors", value_name = "R,G,B", num_args = 0..)]
    pub colors: Option<Vec<String>>,

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

    /// Whether to force a bounding box even if there is a polygon available.
    #[arg(long = "force_bbox")]
    pub force_bbox: bool,
}

pub fn info() -> PluginInfo {
    PluginInfo::new(
        NAME,
        DESCRIPTION,
        Role::Filter,
        KINDS,
        KINDS,
        AnnotationOverlayOdArgs::command,
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct TextSettings {
    pub format: String,
    pub placement: TextPlacement,
    pub font: FontSettings,
    pub num_decimals: usize,
}

impl TextSettings {
    /// Fills in the template: `{label}` first, then one `{KEY}` per metadata entry.
    ///
    /// Strings and integers are inserted as they are, booleans as `True`/`False`,
    /// floats get formatted with `num_decimals` decimals. Other values stay untouched.
    pub fn expand(&self, label: &str, metadata: &Map<String, Value>) -> String {
        let mut result = self.format.replace("{label}", label);
        for (key, value) in metadata {
            let formatted = match value {
                Value::String(s) => s.clone(),
                Value::Bool(true) => "True".to_string(),
                Value::Bool(false) => "False".to_string(),
                Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
                Value::Number(n) => match n.as_f64() {
                    Some(f) => format!("{:.*}", self.num_decimals, f),
                    None => continue,
                },
                _ => continue,
            };
            result = result.replace(&format!("{{{}}}", key), &formatted);
        }
        result
    }

    /// Top-left corner of a text box of the given size for the object's rectangle.
    pub fn origin(&self, rect: &Rect, text_width: i64, text_height: i64) -> (i64, i64) {
        self.placement.anchor(rect, text_width, text_height)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnotationOverlayOdSettings {
    pub logger: LoggerSettings,
    pub labels: LabelFilter,
    pub label_key: String,
    /// `None` when the text format is empty.
    pub text: Option<TextSettings>,
    pub colors: ColorSpec,
    pub outline_thickness: Option<u32>,
    pub outline_alpha: u8,
    pub fill_alpha: Option<u8>,
    pub vary_colors: bool,
    pub force_bbox: bool,
}

impl PluginArgs for AnnotationOverlayOdArgs {
    type Settings = AnnotationOverlayOdSettings;

    fn logging(&self) -> &LoggingArgs {
        &self.logging
    }

    fn initialize(&self) -> Result<AnnotationOverlayOdSettings> {
        let colors = ColorSpec::from_values(self.colors.as_deref().unwrap_or_default())
            .map_err(|e| ImgvisError::invalid("colors", e))?;
        let text = if self.text_format.is_empty() {
            None
        } else {
            Some(TextSettings {
                format: self.text_format.clone(),
                placement: self.text_placement,
                font: FontSettings::new(&self.font_family, self.font_size),
                num_decimals: self.num_decimals,
            })
        };
        let settings = AnnotationOverlayOdSettings {
            logger: self.logging.resolve(NAME),
            labels: LabelFilter::from_labels(self.labels.as_deref()),
            label_key: self.label_key.clone(),
            text,
            colors,
            outline_thickness: outline_thickness(self.outline_thickness),
            outline_alpha: self.outline_alpha,
            fill_alpha: self.fill.then_some(self.fill_alpha),
            vary_colors: self.vary_colors,
            force_bbox: self.force_bbox,
        };
        if let Some(name) = settings.colors.unchecked_list() {
            warn!(
                target: settings.logger.name.as_str(),
                "Unknown color list '{}', it is passed on unresolved (default: {})",
                name,
                DEFAULT_COLOR_LIST
            );
        }
        if settings.text.is_none() {
            debug!(target: settings.logger.name.as_str(), "empty text format, no text output");
        }
        Ok(settings)
    }
}
