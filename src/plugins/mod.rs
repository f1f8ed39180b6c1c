//! The plugin catalog and the argument surface of every plugin.

pub mod add_annotation_overlay_ic;
pub mod add_annotation_overlay_is;
pub mod add_annotation_overlay_od;
pub mod add_center_overlay_od;
pub mod combine_annotations_od;
pub mod image_viewer;
pub mod to_annotation_overlay_od;

use clap::{Command, Subcommand};
use serde::Serialize;

use crate::config::LoggingArgs;
use crate::error::{ImgvisError, Result};
use crate::types::{DataKind, Role};

pub use add_annotation_overlay_ic::{AnnotationOverlayIcArgs, AnnotationOverlayIcSettings};
pub use add_annotation_overlay_is::{AnnotationOverlayIsArgs, AnnotationOverlayIsSettings};
pub use add_annotation_overlay_od::{AnnotationOverlayOdArgs, AnnotationOverlayOdSettings};
pub use add_center_overlay_od::{CenterOverlayOdArgs, CenterOverlayOdSettings};
pub use combine_annotations_od::{CombineAnnotationsOdArgs, CombineAnnotationsOdSettings};
pub use image_viewer::{ImageViewerArgs, ImageViewerSettings};
pub use to_annotation_overlay_od::{ToAnnotationOverlayOdArgs, ToAnnotationOverlayOdSettings};

/// Parsed options of a plugin that can be validated into settings.
pub trait PluginArgs {
    type Settings: Serialize;

    fn logging(&self) -> &LoggingArgs;

    fn initialize(&self) -> Result<Self::Settings>;
}

/// Static description of a plugin.
#[derive(Debug, Clone, Serialize)]
pub struct PluginInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub role: Role,
    pub accepts: &'static [DataKind],
    pub generates: &'static [DataKind],
    #[serde(skip)]
    command: fn() -> Command,
}

impl PluginInfo {
    pub fn new(
        name: &'static str,
        description: &'static str,
        role: Role,
        accepts: &'static [DataKind],
        generates: &'static [DataKind],
        command: fn() -> Command,
    ) -> Self {
        Self {
            name,
            description,
            role,
            accepts,
            generates,
            command,
        }
    }

    /// The clap command describing the plugin's options.
    pub fn command(&self) -> Command {
        (self.command)()
    }
}

/// All plugins, sorted by name.
pub fn catalog() -> Vec<PluginInfo> {
    vec![
        add_annotation_overlay_ic::info(),
        add_annotation_overlay_is::info(),
        add_annotation_overlay_od::info(),
        add_center_overlay_od::info(),
        combine_annotations_od::info(),
        image_viewer::info(),
        to_annotation_overlay_od::info(),
    ]
}

pub fn find_plugin(name: &str) -> Result<PluginInfo> {
    catalog()
        .into_iter()
        .find(|info| info.name == name)
        .ok_or_else(|| ImgvisError::UnknownPlugin(name.to_string()))
}

#[derive(Subcommand, Debug, Clone)]
pub enum PluginCommand {
    #[command(
        name = add_annotation_overlay_ic::NAME,
        about = add_annotation_overlay_ic::DESCRIPTION
    )]
    AnnotationOverlayIc(AnnotationOverlayIcArgs),

    #[command(
        name = add_annotation_overlay_is::NAME,
        about = add_annotation_overlay_is::DESCRIPTION
    )]
    AnnotationOverlayIs(AnnotationOverlayIsArgs),

    #[command(
        name = add_annotation_overlay_od::NAME,
        about = add_annotation_overlay_od::DESCRIPTION
    )]
    AnnotationOverlayOd(AnnotationOverlayOdArgs),

    #[command(
        name = add_center_overlay_od::NAME,
        about = add_center_overlay_od::DESCRIPTION
    )]
    CenterOverlayOd(CenterOverlayOdArgs),

    #[command(
        name = combine_annotations_od::NAME,
        about = combine_annotations_od::DESCRIPTION
    )]
    CombineAnnotationsOd(CombineAnnotationsOdArgs),

    #[command(name = image_viewer::NAME, about = image_viewer::DESCRIPTION)]
    ImageViewer(ImageViewerArgs),

    #[command(
        name = to_annotation_overlay_od::NAME,
        about = to_annotation_overlay_od::DESCRIPTION
    )]
    ToAnnotationOverlayOd(ToAnnotationOverlayOdArgs),
}

/// Resolved settings of any plugin, tagged with the plugin name.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "plugin", content = "settings")]
pub enum PluginSettings {
    #[serde(rename = "add-annotation-overlay-ic")]
    AnnotationOverlayIc(AnnotationOverlayIcSettings),
    #[serde(rename = "add-annotation-overlay-is")]
    AnnotationOverlayIs(AnnotationOverlayIsSettings),
    #[serde(rename = "add-annotation-overlay-od")]
    AnnotationOverlayOd(AnnotationOverlayOdSettings),
    #[serde(rename = "add-center-overlay-od")]
    CenterOverlayOd(CenterOverlayOdSettings),
    #[serde(rename = "combine-annotations-od")]
    CombineAnnotationsOd(CombineAnnotationsOdSettings),
    #[serde(rename = "image-viewer")]
    ImageViewer(ImageViewerSettings),
    #[serde(rename = "to-annotation-overlay-od")]
    ToAnnotationOverlayOd(ToAnnotationOverlayOdSettings),
}

impl PluginCommand {
    pub fn name(&self) -> &'static str {
        match self {
            PluginCommand::AnnotationOverlayIc(_) => add_annotation_overlay_ic::NAME,
            PluginCommand::AnnotationOverlayIs(_) => add_annotation_overlay_is::NAME,
            PluginCommand::AnnotationOverlayOd(_) => add_annotation_overlay_od::NAME,
            PluginCommand::CenterOverlayOd(_) => add_center_overlay_od::NAME,
            PluginCommand::CombineAnnotationsOd(_) => combine_annotations_od::NAME,
            PluginCommand::ImageViewer(_) => image_viewer::NAME,
            PluginCommand::ToAnnotationOverlayOd(_) => to_annotation_overlay_od::NAME,
        }
    }

    pub fn logging(&self) -> &LoggingArgs {
        match self {
            PluginCommand::AnnotationOverlayIc(args) => args.logging(),
            PluginCommand::AnnotationOverlayIs(args) => args.logging(),
            PluginCommand::AnnotationOverlayOd(args) => args.logging(),
            PluginCommand::CenterOverlayOd(args) => args.logging(),
            PluginCommand::CombineAnnotationsOd(args) => args.logging(),
            PluginCommand::ImageViewer(args) => args.logging(),
            PluginCommand::ToAnnotationOverlayOd(args) => args.logging(),
        }
    }

    pub fn initialize(&self) -> Result<PluginSettings> {
        Ok(match self {
            PluginCommand::AnnotationOverlayIc(args) => {
                PluginSettings::AnnotationOverlayIc(args.initialize()?)
            }
            PluginCommand::AnnotationOverlayIs(args) => {
                PluginSettings::AnnotationOverlayIs(args.initialize()?)
            }
            PluginCommand::AnnotationOverlayOd(args) => {
                PluginSettings::AnnotationOverlayOd(args.initialize()?)
            }
            PluginCommand::CenterOverlayOd(args) => {
                PluginSettings::CenterOverlayOd(args.initialize()?)
            }
            PluginCommand::CombineAnnotationsOd(args) => {
                PluginSettings::CombineAnnotationsOd(args.initialize()?)
            }
            PluginCommand::ImageViewer(args) => PluginSettings::ImageViewer(args.initialize()?),
            PluginCommand::ToAnnotationOverlayOd(args) => {
                PluginSettings::ToAnnotationOverlayOd(args.initialize()?)
            }
        })
    }
}

/// Thickness of an outline, `None` when turned off (below 1).
pub(crate) fn outline_thickness(value: i32) -> Option<u32> {
    if value < 1 {
        None
    } else {
        Some(value as u32)
    }
}
