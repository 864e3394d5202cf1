//! Common value types shared across the snapshot model
//!
//! These are the leaf vocabulary of a figure snapshot: line styling, axis
//! scales, positioned text, grid geometry, and marker outlines. All of them
//! serialize with serde so they appear verbatim in the literal fixture form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dash pattern of a plotted line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
    #[default]
    None,
}

impl LineStyle {
    /// Parse a host-toolkit style code (`"-"`, `"--"`, `":"`, `"-."`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "-" | "solid" => Some(LineStyle::Solid),
            "--" | "dashed" => Some(LineStyle::Dashed),
            ":" | "dotted" => Some(LineStyle::Dotted),
            "-." | "dashdot" => Some(LineStyle::DashDot),
            "" | " " | "none" => Some(LineStyle::None),
            _ => Option::None,
        }
    }

    /// The name used in the literal form and in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::Dotted => "dotted",
            LineStyle::DashDot => "dashdot",
            LineStyle::None => "none",
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scale type for an axis direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
    SymLog,
}

impl AxisScale {
    pub fn name(&self) -> &'static str {
        match self {
            AxisScale::Linear => "linear",
            AxisScale::Log => "log",
            AxisScale::SymLog => "symlog",
        }
    }
}

impl fmt::Display for AxisScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece of positioned text (tick label or legend entry).
///
/// The host toolkit's text objects carry no usable equality, so a snapshot
/// keeps only what matters for comparison: position and content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    /// Position in data coordinates
    pub position: (f64, f64),

    /// Text content
    pub text: String,
}

impl TextLabel {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            position: (x, y),
            text: text.into(),
        }
    }
}

impl fmt::Display for TextLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) '{}'",
            self.position.0, self.position.1, self.text
        )
    }
}

/// Subplot grid geometry of the figure a subplot belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// The 1x1 layout of a standalone subplot
    pub fn single() -> Self {
        Self { rows: 1, cols: 1 }
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::single()
    }
}

impl fmt::Display for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

/// Polygon outline of a scatter marker symbol
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerOutline {
    /// Ordered vertex list defining the symbol outline
    pub vertices: Vec<(f64, f64)>,
}

impl MarkerOutline {
    pub fn new(vertices: Vec<(f64, f64)>) -> Self {
        Self { vertices }
    }

    /// A regular polygon with `sides` vertices on the unit circle, starting
    /// at angle 90° (the toolkit convention for symbol outlines).
    pub fn regular(sides: usize) -> Self {
        let step = std::f64::consts::TAU / sides as f64;
        let start = std::f64::consts::FRAC_PI_2;
        let vertices = (0..sides)
            .map(|i| {
                let angle = start + step * i as f64;
                (angle.cos(), angle.sin())
            })
            .collect();
        Self { vertices }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_style_codes() {
        assert_eq!(LineStyle::from_code("-"), Some(LineStyle::Solid));
        assert_eq!(LineStyle::from_code("--"), Some(LineStyle::Dashed));
        assert_eq!(LineStyle::from_code("-."), Some(LineStyle::DashDot));
        assert_eq!(LineStyle::from_code(""), Some(LineStyle::None));
        assert_eq!(LineStyle::from_code("~"), None);
    }

    #[test]
    fn test_line_style_serde_names() {
        let json = serde_json::to_string(&LineStyle::DashDot).unwrap();
        assert_eq!(json, "\"dashdot\"");
        let back: LineStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LineStyle::DashDot);
    }

    #[test]
    fn test_axis_scale_default_is_linear() {
        assert_eq!(AxisScale::default(), AxisScale::Linear);
        assert_eq!(AxisScale::Log.to_string(), "log");
    }

    #[test]
    fn test_text_label_equality_is_positional_and_textual() {
        let a = TextLabel::new(0.0, 1.0, "x");
        let b = TextLabel::new(0.0, 1.0, "x");
        let c = TextLabel::new(0.0, 2.0, "x");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_regular_marker_vertex_count() {
        let tri = MarkerOutline::regular(3);
        assert_eq!(tri.vertices.len(), 3);
        // First vertex sits at the top of the unit circle
        assert!(tri.vertices[0].0.abs() < 1e-12);
        assert!((tri.vertices[0].1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_grid_layout_display() {
        assert_eq!(GridLayout::new(2, 3).to_string(), "(2, 3)");
        assert_eq!(GridLayout::default(), GridLayout::single());
    }
}
