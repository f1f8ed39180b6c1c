//! Helpers shared by the object detection overlays: label lookup and
//! selection, color keys and outline geometry.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

use crate::types::{Rect, DEFAULT_LABEL};

/// Restricts overlays to a set of labels; no set means every label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelFilter {
    accepted: Option<BTreeSet<String>>,
}

impl LabelFilter {
    /// Builds the filter from `--labels`; an absent or empty list accepts everything.
    pub fn from_labels(labels: Option<&[String]>) -> Self {
        let accepted = match labels {
            Some(labels) if !labels.is_empty() => Some(labels.iter().cloned().collect()),
            _ => None,
        };
        Self { accepted }
    }

    pub fn accepts(&self, label: &str) -> bool {
        self.accepted
            .as_ref()
            .map_or(true, |accepted| accepted.contains(label))
    }

    pub fn is_restricted(&self) -> bool {
        self.accepted.is_some()
    }
}

/// The label stored under `label_key`, falling back to `object`.
pub fn resolve_label(metadata: &Map<String, Value>, label_key: &str) -> String {
    match metadata.get(label_key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => DEFAULT_LABEL.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Key used for picking a color: the label, or the object's position when
/// colors should vary regardless of label.
pub fn color_key(label: &str, index: usize, vary_colors: bool) -> String {
    if vary_colors {
        format!("object-{}", index)
    } else {
        label.to_string()
    }
}

/// Outline of an object: its polygon when available and not overridden,
/// otherwise the corners of its bounding box.
pub fn outline_points(rect: &Rect, polygon: Option<&[(f64, f64)]>, force_bbox: bool) -> Vec<(f64, f64)> {
    match polygon {
        Some(points) if !points.is_empty() && !force_bbox => points.to_vec(),
        _ => rect.corners().to_vec(),
    }
}
