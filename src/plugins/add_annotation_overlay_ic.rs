use clap::{CommandFactory, Parser};
use log::debug;
use serde::Serialize;

use crate::config::{LoggerSettings, LoggingArgs};
use crate::error::Result;
use crate::options::{parse_point, parse_rgb, FontSettings};
use crate::plugins::{PluginArgs, PluginInfo};
use crate::types::{DataKind, Point, Rect, Rgb, Role, DEFAULT_FONT_FAMILY};

pub const NAME: &str = "add-annotation-overlay-ic";
pub const DESCRIPTION: &str = "Adds the image classification label on top of images passing through.";

const KINDS: &[DataKind] = &[DataKind::ImageClassificationData];

#[derive(Parser, Debug, Clone)]
#[command(name = NAME, about = DESCRIPTION)]
pub struct AnnotationOverlayIcArgs {
    #[command(flatten)]
    pub logging: LoggingArgs,

    /// The position of the label (X,Y).
    #[arg(
        short = 'p',
        long = "position",
        value_name = "X,Y",
        default_value = "5,5",
        allow_hyphen_values = true,
        value_parser = parse_point
    )]
    pub position: Point,

    /// The name of the TTF font-family to use, note: any hyphens need escaping with backslash.
    #[arg(
        short = 'f',
        long = "font_family",
        value_name = "FONTNAME",
        default_value = DEFAULT_FONT_FAMILY
    )]
    pub font_family: String,

    /// The size of the font.
    #[arg(
        short = 's',
        long = "font_size",
        value_name = "SIZE",
        default_value_t = 14,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub font_size: u32,

    /// The RGB color triplet to use for the font.
    #[arg(
        short = 'c',
        long = "font_color",
        value_name = "R,G,B",
        default_value = "255,255,255",
        value_parser = parse_rgb
    )]
    pub font_color: Rgb,

    /// Whether to fill the background of the text with the specified color.
    #[arg(short = 'B', long = "fill_background")]
    pub fill_background: bool,

    /// The RGB color triplet to use for the background.
    #[arg(
        short = 'C',
        long = "background_color",
        value_name = "R,G,B",
        default_value = "0,0,0",
        value_parser = parse_rgb
    )]
    pub background_color: Rgb,

    /// The margin in pixels around the background.
    #[arg(
        short = 'M',
        long = "background_margin",
        value_name = "MARGIN",
        default_value_t = 2
    )]
    pub background_margin: u32,
}

pub fn info() -> PluginInfo {
    PluginInfo::new(
        NAME,
        DESCRIPTION,
        Role::Filter,
        KINDS,
        KINDS,
        AnnotationOverlayIcArgs::command,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextBackground {
    pub color: Rgb,
    pub margin: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnotationOverlayIcSettings {
    pub logger: LoggerSettings,
    pub position: Point,
    pub font: FontSettings,
    pub font_color: Rgb,
    pub background: Option<TextBackground>,
}

impl AnnotationOverlayIcSettings {
    /// Area to fill behind a label of the given text size, if backgrounds are enabled.
    ///
    /// The margin gets added once on the top/left and twice on the bottom/right.
    pub fn background_box(&self, text_width: i64, text_height: i64) -> Option<Rect> {
        self.background.map(|background| {
            let margin = background.margin as i64;
            Rect::new(
                self.position.x - margin,
                self.position.y - margin,
                self.position.x + text_width + margin * 2,
                self.position.y + text_height + margin * 2,
            )
        })
    }
}

impl PluginArgs for AnnotationOverlayIcArgs {
    type Settings = AnnotationOverlayIcSettings;

    fn logging(&self) -> &LoggingArgs {
        &self.logging
    }

    fn initialize(&self) -> Result<AnnotationOverlayIcSettings> {
        let settings = AnnotationOverlayIcSettings {
            logger: self.logging.resolve(NAME),
            position: self.position,
            font: FontSettings::new(&self.font_family, self.font_size),
            font_color: self.font_color,
            background: self.fill_background.then_some(TextBackground {
                color: self.background_color,
                margin: self.background_margin,
            }),
        };
        debug!(
            target: settings.logger.name.as_str(),
            "label at {},{} using font '{}' ({})",
            settings.position.x,
            settings.position.y,
            settings.font.family,
            settings.font.size
        );
        Ok(settings)
    }
}
