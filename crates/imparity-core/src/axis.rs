//! Subplot snapshots
//!
//! An [`AxisSnapshot`] aggregates a subplot's metadata (title, labels,
//! scales, ticks, legend, grid geometry) with its element collections.
//! Element collections are canonically sorted, so two snapshots built from
//! differently-ordered draw calls compare equal when content matches.

use serde::{Deserialize, Serialize};

use crate::cloud::PointCloud;
use crate::error::SnapshotResult;
use crate::line::Line;
use crate::order::sort_canonical;
use crate::shape::Shape;
use crate::types::{AxisScale, GridLayout, TextLabel};

/// Snapshot of one subplot
///
/// Presence flags accompany the title and axis labels: an empty string is
/// ambiguous between "never set" and "set to empty", so presence is tracked
/// separately.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub has_title: bool,

    #[serde(default)]
    pub x_label: String,
    #[serde(default)]
    pub has_x_label: bool,

    #[serde(default)]
    pub y_label: String,
    #[serde(default)]
    pub has_y_label: bool,

    #[serde(default)]
    pub x_scale: AxisScale,
    #[serde(default)]
    pub y_scale: AxisScale,

    /// Tick labels along each axis; absent ticks are `None`
    #[serde(default)]
    pub x_tick_labels: Vec<Option<TextLabel>>,
    #[serde(default)]
    pub y_tick_labels: Vec<Option<TextLabel>>,

    /// Legend entries; empty when the subplot has no legend
    #[serde(default)]
    pub legend_entries: Vec<Option<TextLabel>>,
    #[serde(default)]
    pub legend_count: usize,

    /// Geometry of the figure grid this subplot belongs to
    #[serde(default)]
    pub grid_layout: GridLayout,

    /// Canonically sorted element collections
    #[serde(default)]
    pub lines: Vec<Line>,
    #[serde(default)]
    pub point_clouds: Vec<PointCloud>,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl AxisSnapshot {
    /// Scalar attribute names this entity defines, for the attribute filter.
    /// Element collections are walked structurally, not filtered by name.
    pub const ATTRIBUTES: &'static [&'static str] = &[
        "title",
        "has_title",
        "x_label",
        "has_x_label",
        "y_label",
        "has_y_label",
        "x_scale",
        "y_scale",
        "x_tick_labels",
        "y_tick_labels",
        "legend_entries",
        "legend_count",
        "grid_layout",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Validate element invariants, normalize labels, and impose canonical
    /// order on the element collections. Every constructed snapshot passes
    /// through here before it is compared.
    pub fn canonicalize(mut self) -> SnapshotResult<Self> {
        for line in &mut self.lines {
            line.validate()?;
            line.normalize_label();
        }
        for cloud in &self.point_clouds {
            cloud.validate()?;
        }

        sort_canonical(&mut self.lines);
        sort_canonical(&mut self.point_clouds);
        sort_canonical(&mut self.shapes);

        // Literal fixtures may omit legend_count; derive it from the entries
        if self.legend_count == 0 {
            self.legend_count = self.legend_entries.iter().flatten().count();
        }
        Ok(self)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn point_cloud_count(&self) -> usize {
        self.point_clouds.len()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
}
