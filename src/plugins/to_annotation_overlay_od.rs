use clap::{CommandFactory, Parser};
use log::{error, info};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{LoggerSettings, LoggingArgs};
use crate::error::Result;
use crate::options::{parse_dimensions, parse_rgba};
use crate::placeholders::Placeholders;
use crate::plugins::{PluginArgs, PluginInfo};
use crate::types::{DataKind, Dimensions, Rgba, Role};

pub const NAME: &str = "to-annotation-overlay-od";
pub const DESCRIPTION: &str =
    "Generates an image with all the annotation shapes (bbox or polygon) overlayed.";

#[derive(Parser, Debug, Clone)]
#[command(name = NAME, about = DESCRIPTION)]
pub struct ToAnnotationOverlayOdArgs {
    #[command(flatten)]
    pub logging: LoggingArgs,

    /// The color to use for drawing the shapes as RGBA byte-quadruplet, e.g.: 255,0,0,64.
    #[arg(
        short = 'c',
        long = "color",
        value_name = "R,G,B,A",
        default_value = "255,0,0,64",
        value_parser = parse_rgba
    )]
    pub color: Rgba,

    /// The color to use for the background as RGBA byte-quadruplet, e.g.: 255,255,255,255.
    #[arg(
        short = 'b',
        long = "background_color",
        value_name = "R,G,B,A",
        default_value = "255,255,255,255",
        value_parser = parse_rgba
    )]
    pub background_color: Rgba,

    /// The dimensions to scale all images to before overlaying them (format: width,height).
    #[arg(
        short = 's',
        long = "scale_to",
        value_name = "WIDTH,HEIGHT",
        default_value = ""
    )]
    pub scale_to: String,

    /// The width to use for drawing the polygons.
    #[arg(
        short = 'w',
        long = "width",
        value_name = "INT",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub width: u32,

    #[arg(
        short = 'o',
        long = "output_file",
        value_name = "FILE",
        default_value = "./output.png",
        help = concat!(
            "The PNG image to write the generated overlay to. ",
            crate::placeholder_list!()
        )
    )]
    pub output_file: String,
}

pub fn info() -> PluginInfo {
    PluginInfo::new(
        NAME,
        DESCRIPTION,
        Role::Writer,
        &[DataKind::ObjectDetectionData],
        &[],
        ToAnnotationOverlayOdArgs::command,
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct ToAnnotationOverlayOdSettings {
    pub logger: LoggerSettings,
    pub color: Rgba,
    pub background_color: Rgba,
    pub scale_to: Option<Dimensions>,
    pub width: u32,
    /// Output template, placeholders unexpanded.
    pub output_file: String,
}

impl ToAnnotationOverlayOdSettings {
    pub fn output_path(&self, placeholders: &Placeholders, input: Option<&Path>) -> PathBuf {
        let path = placeholders.expand_path(&self.output_file, input);
        info!(
            target: self.logger.name.as_str(),
            "Writing overlay to: {}",
            path.display()
        );
        path
    }

    pub fn canvas(&self) -> OverlayCanvas {
        OverlayCanvas::new(self.scale_to)
    }
}

/// Per-axis factors for mapping image coordinates onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    pub const IDENTITY: Scale = Scale { x: 1.0, y: 1.0 };

    /// Scales a point, truncating to whole pixels.
    pub fn apply(&self, x: f64, y: f64) -> (i64, i64) {
        ((x * self.x) as i64, (y * self.y) as i64)
    }
}

/// Tracks the size of the overlay image while images stream past.
///
/// Without a fixed size the canvas starts at the first image's size and grows
/// to fit every later image. With a fixed size every image gets scaled to it.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayCanvas {
    fixed: Option<Dimensions>,
    size: Option<Dimensions>,
}

impl OverlayCanvas {
    pub fn new(fixed: Option<Dimensions>) -> Self {
        Self { fixed, size: None }
    }

    /// Current canvas size, `None` until the first image was added.
    pub fn size(&self) -> Option<Dimensions> {
        self.size
    }

    /// Accounts for the next image and returns the scale for its coordinates.
    pub fn add_image(&mut self, image: Dimensions) -> Scale {
        let size = match (self.size, self.fixed) {
            (None, Some(fixed)) => fixed,
            (None, None) => image,
            (Some(current), Some(_)) => current,
            (Some(current), None) => Dimensions::new(
                current.width.max(image.width),
                current.height.max(image.height),
            ),
        };
        self.size = Some(size);
        match self.fixed {
            Some(fixed) => Scale {
                x: fixed.width as f64 / image.width as f64,
                y: fixed.height as f64 / image.height as f64,
            },
            None => Scale::IDENTITY,
        }
    }
}

impl PluginArgs for ToAnnotationOverlayOdArgs {
    type Settings = ToAnnotationOverlayOdSettings;

    fn logging(&self) -> &LoggingArgs {
        &self.logging
    }

    fn initialize(&self) -> Result<ToAnnotationOverlayOdSettings> {
        let logger = self.logging.resolve(NAME);
        let scale_to = if self.scale_to.trim().is_empty() {
            None
        } else {
            match parse_dimensions(&self.scale_to) {
                Ok(dims) => Some(dims),
                Err(e) => {
                    error!(
                        target: logger.name.as_str(),
                        "'--scale_to' option requires format 'width,height' but received: {} ({})",
                        self.scale_to,
                        e
                    );
                    None
                }
            }
        };
        Ok(ToAnnotationOverlayOdSettings {
            logger,
            color: self.color,
            background_color: self.background_color,
            scale_to,
            width: self.width,
            output_file: self.output_file.clone(),
        })
    }
}
