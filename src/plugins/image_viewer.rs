use clap::{CommandFactory, Parser};
use serde::Serialize;

use crate::config::{LoggerSettings, LoggingArgs};
use crate::error::Result;
use crate::options::{parse_dimensions, parse_point};
use crate::plugins::{PluginArgs, PluginInfo};
use crate::types::{DataKind, Dimensions, Point, Role};

pub const NAME: &str = "image-viewer";
pub const DESCRIPTION: &str = "Displays images.";

#[derive(Parser, Debug, Clone)]
#[command(name = NAME, about = DESCRIPTION)]
pub struct ImageViewerArgs {
    #[command(flatten)]
    pub logging: LoggingArgs,

    /// The title for the window.
    #[arg(
        short = 't',
        long = "title",
        value_name = "TITLE",
        default_value = "image-dataset-converter"
    )]
    pub title: String,

    /// The position of the window on screen (X,Y).
    #[arg(
        short = 'p',
        long = "position",
        value_name = "X,Y",
        default_value = "0,0",
        allow_hyphen_values = true,
        value_parser = parse_point
    )]
    pub position: Point,

    /// The maximum size for the image: WIDTH,HEIGHT.
    #[arg(
        short = 's',
        long = "size",
        value_name = "WIDTH,HEIGHT",
        default_value = "640,480",
        value_parser = parse_dimensions
    )]
    pub size: Dimensions,

    /// The delay in milli-seconds between images, use 0 to wait for keypress, ignored if <0
    #[arg(
        short = 'd',
        long = "delay",
        value_name = "MSEC",
        default_value_t = 500,
        allow_negative_numbers = true
    )]
    pub delay: i64,
}

pub fn info() -> PluginInfo {
    PluginInfo::new(
        NAME,
        DESCRIPTION,
        Role::Writer,
        &[DataKind::ImageData],
        &[],
        ImageViewerArgs::command,
    )
}

/// What happens after an image has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Delay {
    WaitForKey,
    Millis(u64),
    NoWait,
}

impl From<i64> for Delay {
    fn from(value: i64) -> Self {
        match value {
            0 => Delay::WaitForKey,
            v if v < 0 => Delay::NoWait,
            v => Delay::Millis(v as u64),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageViewerSettings {
    pub logger: LoggerSettings,
    pub title: String,
    pub position: Point,
    pub max_size: Dimensions,
    pub delay: Delay,
}

impl ImageViewerSettings {
    /// Display size of an image: unchanged when it fits the window, otherwise
    /// shrunk with its aspect ratio preserved.
    pub fn fit(&self, image: Dimensions) -> Dimensions {
        if image.width <= self.max_size.width && image.height <= self.max_size.height {
            return image;
        }
        let image_ratio = image.ratio();
        let (width, height) = if image_ratio > self.max_size.ratio() {
            let width = self.max_size.width as f64;
            (width, width / image_ratio)
        } else {
            let height = self.max_size.height as f64;
            (height * image_ratio, height)
        };
        Dimensions::new(width as u32, height as u32)
    }
}

impl PluginArgs for ImageViewerArgs {
    type Settings = ImageViewerSettings;

    fn logging(&self) -> &LoggingArgs {
        &self.logging
    }

    fn initialize(&self) -> Result<ImageViewerSettings> {
        Ok(ImageViewerSettings {
            logger: self.logging.resolve(NAME),
            title: self.title.clone(),
            position: self.position,
            max_size: self.size,
            delay: Delay::from(self.delay),
        })
    }
}
