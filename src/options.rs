//! Value types and parsers for plugin options.
//!
//! The parsers return `String` errors so that clap can report them against the
//! offending flag.

use clap::ValueEnum;
use serde::Serialize;
use std::str::FromStr;

use crate::types::{Dimensions, Point, Rect, Rgb, Rgba};

// Splits a comma-separated list into exactly `expected` values
fn split_components<T: FromStr>(s: &str, expected: usize, format: &str) -> Result<Vec<T>, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != expected {
        return Err(format!("expected format '{}' but received: {}", format, s));
    }
    parts
        .iter()
        .map(|part| {
            part.parse::<T>()
                .map_err(|_| format!("invalid component '{}' in '{}' (format: {})", part, s, format))
        })
        .collect()
}

pub fn parse_rgb(s: &str) -> Result<Rgb, String> {
    let c: Vec<u8> = split_components(s, 3, "R,G,B")?;
    Ok(Rgb(c[0], c[1], c[2]))
}

pub fn parse_rgba(s: &str) -> Result<Rgba, String> {
    let c: Vec<u8> = split_components(s, 4, "R,G,B,A")?;
    Ok(Rgba(c[0], c[1], c[2], c[3]))
}

pub fn parse_point(s: &str) -> Result<Point, String> {
    let c: Vec<i64> = split_components(s, 2, "X,Y")?;
    Ok(Point::new(c[0], c[1]))
}

pub fn parse_dimensions(s: &str) -> Result<Dimensions, String> {
    let c: Vec<u32> = split_components(s, 2, "WIDTH,HEIGHT")?;
    if c[0] == 0 || c[1] == 0 {
        return Err(format!("WIDTH and HEIGHT must be positive: {}", s));
    }
    Ok(Dimensions::new(c[0], c[1]))
}

// Validate that the value is between 0.0 and 1.0
pub fn parse_fraction(s: &str) -> Result<f64, String> {
    match f64::from_str(s) {
        Ok(val) if (0.0..=1.0).contains(&val) => Ok(val),
        _ => Err("value must be between 0.0 and 1.0".to_string()),
    }
}

/// Removes the backslash escaping of hyphens in font family names.
pub fn unescape_font_family(family: &str) -> String {
    family.replace("\\-", "-")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontSettings {
    /// Family name with the escaping removed.
    pub family: String,
    pub size: u32,
}

impl FontSettings {
    pub fn new(family: &str, size: u32) -> Self {
        Self {
            family: unescape_font_family(family),
            size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAnchor {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

/// Where text gets anchored relative to a rectangle, parsed from `V,H`
/// (T/C/B for vertical, L/C/R for horizontal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextPlacement {
    pub vertical: VerticalAnchor,
    pub horizontal: HorizontalAnchor,
}

impl TextPlacement {
    /// Top-left corner of a `width` x `height` text box anchored inside `rect`.
    pub fn anchor(&self, rect: &Rect, width: i64, height: i64) -> (i64, i64) {
        let x = match self.horizontal {
            HorizontalAnchor::Left => rect.left,
            HorizontalAnchor::Center => rect.left + (rect.right - rect.left - width).div_euclid(2),
            HorizontalAnchor::Right => rect.right - width,
        };
        let y = match self.vertical {
            VerticalAnchor::Top => rect.top,
            VerticalAnchor::Center => rect.top + (rect.bottom - rect.top - height).div_euclid(2),
            VerticalAnchor::Bottom => rect.bottom - height,
        };
        (x, y)
    }
}

impl Default for TextPlacement {
    fn default() -> Self {
        Self {
            vertical: VerticalAnchor::Top,
            horizontal: HorizontalAnchor::Left,
        }
    }
}

pub fn parse_text_placement(s: &str) -> Result<TextPlacement, String> {
    let upper = s.to_uppercase();
    let parts: Vec<&str> = upper.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(format!("expected format 'V,H' but received: {}", s));
    }
    let vertical = match parts[0] {
        "T" => VerticalAnchor::Top,
        "C" => VerticalAnchor::Center,
        "B" => VerticalAnchor::Bottom,
        other => return Err(format!("unhandled vertical text position: {}", other)),
    };
    let horizontal = match parts[1] {
        "L" => HorizontalAnchor::Left,
        "C" => HorizontalAnchor::Center,
        "R" => HorizontalAnchor::Right,
        other => return Err(format!("unhandled horizontal text position: {}", other)),
    };
    Ok(TextPlacement {
        vertical,
        horizontal,
    })
}

// Color list used when no colors were supplied
pub const DEFAULT_COLOR_LIST: &str = "x11";

/// Colors requested by the user: either the name of a color list or custom
/// RGB triplets. Names are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum ColorSpec {
    Default,
    Named(String),
    Custom(Vec<Rgb>),
}

impl ColorSpec {
    /// Name of a color list other than the default one, which cannot be
    /// checked before the colors get resolved.
    pub fn unchecked_list(&self) -> Option<&str> {
        match self {
            ColorSpec::Named(name) if name != DEFAULT_COLOR_LIST => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn from_values(values: &[String]) -> Result<Self, String> {
        match values {
            [] => Ok(ColorSpec::Default),
            [single] if !single.contains(',') => {
                let name = single.trim();
                if name.is_empty() {
                    Err("color list name must not be empty".to_string())
                } else {
                    Ok(ColorSpec::Named(name.to_string()))
                }
            }
            _ => values
                .iter()
                .map(|v| parse_rgb(v))
                .collect::<Result<Vec<_>, _>>()
                .map(ColorSpec::Custom),
        }
    }
}

/// Size of a center dot: pixels, or below 1 the diameter relative to the bbox width
/// (0 gives an empty dot).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Radius {
    Absolute(f64),
    Relative(f64),
}

impl Radius {
    pub fn resolve(&self, rect: &Rect) -> f64 {
        match *self {
            Radius::Absolute(px) => px,
            Radius::Relative(fraction) => (rect.width() as f64 / 2.0 * fraction).trunc(),
        }
    }
}

pub fn parse_radius(s: &str) -> Result<Radius, String> {
    let value = f64::from_str(s).map_err(|_| format!("invalid radius: {}", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("radius must not be negative: {}", s));
    }
    if value < 1.0 {
        Ok(Radius::Relative(value))
    } else {
        Ok(Radius::Absolute(value))
    }
}

/// How overlapping annotations get merged.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Combination {
    Intersect,
    Union,
}
