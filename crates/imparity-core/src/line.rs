//! Line element snapshots
//!
//! A [`Line`] is an immutable record of one plotted series: paired data
//! vectors plus the visual attributes a reader could distinguish.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{MalformedSnapshot, SnapshotResult};
use crate::order::{cmp_series, CanonicalOrder};
use crate::types::LineStyle;

fn default_width() -> f64 {
    1.5
}

/// Snapshot of one plotted line
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// X data values
    pub x: Vec<f64>,

    /// Y data values, same length as `x`
    pub y: Vec<f64>,

    /// Stroke width
    #[serde(default = "default_width")]
    pub width: f64,

    /// Dash pattern
    #[serde(default)]
    pub style: LineStyle,

    /// Marker symbol id drawn at each data point, if any
    #[serde(default)]
    pub marker: Option<String>,

    /// Canonical colour string (empty when unstyled)
    #[serde(default)]
    pub colour: String,

    /// Legend label. Empty when the series was never labelled; toolkit
    /// placeholder names normalize to empty so unlabeled series compare
    /// equal regardless of creation order.
    #[serde(default)]
    pub label: String,
}

impl Line {
    /// Attribute names this element defines, for the attribute filter
    pub const ATTRIBUTES: &'static [&'static str] =
        &["x", "y", "width", "style", "marker", "colour", "label"];

    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    pub fn with_colour(mut self, colour: impl Into<String>) -> Self {
        self.colour = colour.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Check the paired-data invariant.
    pub fn validate(&self) -> SnapshotResult<()> {
        if self.x.len() != self.y.len() {
            return Err(MalformedSnapshot::DataLengthMismatch {
                element: "line",
                x_len: self.x.len(),
                y_len: self.y.len(),
            });
        }
        Ok(())
    }

    /// Rewrite a toolkit auto-generated placeholder label (leading `_`) to
    /// empty, so unlabeled series never cause false mismatches.
    pub(crate) fn normalize_label(&mut self) {
        if self.label.starts_with('_') {
            self.label.clear();
        }
    }
}

impl Default for Line {
    fn default() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            width: default_width(),
            style: LineStyle::default(),
            marker: None,
            colour: String::new(),
            label: String::new(),
        }
    }
}

impl CanonicalOrder for Line {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        cmp_series(&self.x, &other.x)
            .then_with(|| cmp_series(&self.y, &other.y))
            .then_with(|| self.label.cmp(&other.label))
            .then_with(|| self.colour.cmp(&other.colour))
            .then_with(|| self.width.total_cmp(&other.width))
            .then_with(|| self.style.cmp(&other.style))
            .then_with(|| self.marker.cmp(&other.marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_literal_form() {
        let line = Line::default();
        assert_eq!(line.width, 1.5);
        assert_eq!(line.style, LineStyle::None);
        assert_eq!(line.marker, None);
        assert_eq!(line.colour, "");
        assert_eq!(line.label, "");
    }

    #[test]
    fn test_validate_rejects_unpaired_data() {
        let line = Line::new(vec![1.0, 2.0, 3.0], vec![1.0]);
        let err = line.validate().unwrap_err();
        assert!(matches!(
            err,
            MalformedSnapshot::DataLengthMismatch {
                element: "line",
                x_len: 3,
                y_len: 1
            }
        ));
    }

    #[test]
    fn test_placeholder_label_normalizes_to_empty() {
        let mut line = Line::new(vec![1.0], vec![1.0]).with_label("_child0");
        line.normalize_label();
        assert_eq!(line.label, "");

        let mut named = Line::new(vec![1.0], vec![1.0]).with_label("flux");
        named.normalize_label();
        assert_eq!(named.label, "flux");
    }

    #[test]
    fn test_canonical_order_by_data_first() {
        let a = Line::new(vec![1.0, 2.0], vec![5.0, 5.0]);
        let b = Line::new(vec![1.0, 3.0], vec![0.0, 0.0]);
        assert_eq!(a.canonical_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_canonical_order_ties_break_on_label() {
        let a = Line::new(vec![1.0], vec![2.0]).with_label("a");
        let b = Line::new(vec![1.0], vec![2.0]).with_label("b");
        assert_eq!(a.canonical_cmp(&b), Ordering::Less);
        assert_eq!(a.canonical_cmp(&a), Ordering::Equal);
    }
}
