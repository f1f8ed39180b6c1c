use serde::Serialize;
use std::fmt;

// Metadata key that holds the label of a located object
pub const LABEL_KEY: &str = "type";

// Label used for objects without a label in their metadata
pub const DEFAULT_LABEL: &str = "object";

// Hyphens in font family names need escaping with a backslash
pub const DEFAULT_FONT_FAMILY: &str = "sans\\-serif";

// Metadata key that records which image of the stream produced a combined object
pub const STREAM_INDEX_KEY: &str = "stream_index";

/// The kinds of records flowing through a conversion pipeline.
///
/// Only the names matter here, the record layouts belong to the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DataKind {
    ImageData,
    ImageClassificationData,
    ObjectDetectionData,
    ImageSegmentationData,
}

impl DataKind {
    /// Fully qualified name as used by the host framework.
    pub fn qualified_name(&self) -> &'static str {
        match self {
            DataKind::ImageData => "idc.api.ImageData",
            DataKind::ImageClassificationData => "idc.api.ImageClassificationData",
            DataKind::ObjectDetectionData => "idc.api.ObjectDetectionData",
            DataKind::ImageSegmentationData => "idc.api.ImageSegmentationData",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualified_name())
    }
}

/// Whether a plugin passes records on (filter) or consumes them (writer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Filter,
    Writer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Filter => f.write_str("filter"),
            Role::Writer => f.write_str("writer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.0, self.1, self.2, self.3)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Axis-aligned rectangle with inclusive pixel bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Rect {
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i64 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top + 1
    }

    /// Corners clockwise, starting at the top-left.
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.left as f64, self.top as f64),
            (self.right as f64, self.top as f64),
            (self.right as f64, self.bottom as f64),
            (self.left as f64, self.bottom as f64),
        ]
    }
}
