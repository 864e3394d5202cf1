//! Scene capability traits and the snapshot construction adapter
//!
//! [`SceneSource`] / [`SubplotSource`] carry the complete accessor surface
//! the adapter needs from a rendering backend; this is the only coupling
//! to any toolkit. The canonical model and the similarity engine never see
//! a backend type; supporting another backend means implementing these two
//! traits for it.

use crate::axis::AxisSnapshot;
use crate::cloud::PointCloud;
use crate::error::SnapshotResult;
use crate::figure::FigureSnapshot;
use crate::line::Line;
use crate::shape::Shape;
use crate::types::{AxisScale, GridLayout, TextLabel};

/// Accessor surface of a live figure
pub trait SceneSource {
    type Subplot: SubplotSource;

    /// Super-title, `None` when never set
    fn super_title(&self) -> Option<String>;

    /// Subplots in layout order
    fn subplots(&self) -> Vec<Self::Subplot>;
}

/// Accessor surface of one live subplot
///
/// Element collections are returned in raw draw order; the adapter imposes
/// canonical order. Labels never set by the caller are returned as `None`
/// or empty; a backend without an explicit "never set" flag should map its
/// placeholder naming convention here.
pub trait SubplotSource {
    fn title(&self) -> Option<String>;
    fn x_label(&self) -> Option<String>;
    fn y_label(&self) -> Option<String>;

    fn x_scale(&self) -> AxisScale;
    fn y_scale(&self) -> AxisScale;

    fn x_tick_labels(&self) -> Vec<Option<TextLabel>>;
    fn y_tick_labels(&self) -> Vec<Option<TextLabel>>;

    /// Legend entries; empty when the subplot has no legend
    fn legend_entries(&self) -> Vec<Option<TextLabel>>;

    fn grid_layout(&self) -> GridLayout;

    fn lines(&self) -> Vec<Line>;
    fn point_clouds(&self) -> Vec<PointCloud>;
    fn shapes(&self) -> Vec<Shape>;
}

impl FigureSnapshot {
    /// Build a canonical snapshot from a live scene.
    ///
    /// Succeeds on an empty figure; fails with `MalformedSnapshot` when any
    /// element's paired data sequences disagree in length.
    pub fn from_scene<S: SceneSource>(scene: &S) -> SnapshotResult<Self> {
        let super_title = scene.super_title();
        let axes = scene
            .subplots()
            .iter()
            .map(AxisSnapshot::from_subplot)
            .collect::<SnapshotResult<Vec<_>>>()?;
        Ok(Self {
            has_super_title: super_title.is_some(),
            super_title: super_title.unwrap_or_default(),
            axes,
        })
    }
}

impl AxisSnapshot {
    /// Build one canonical subplot snapshot from a live subplot.
    pub fn from_subplot<S: SubplotSource>(subplot: &S) -> SnapshotResult<Self> {
        let title = subplot.title();
        let x_label = subplot.x_label();
        let y_label = subplot.y_label();
        let legend_entries = subplot.legend_entries();

        Self {
            has_title: title.is_some(),
            title: title.unwrap_or_default(),
            has_x_label: x_label.is_some(),
            x_label: x_label.unwrap_or_default(),
            has_y_label: y_label.is_some(),
            y_label: y_label.unwrap_or_default(),
            x_scale: subplot.x_scale(),
            y_scale: subplot.y_scale(),
            x_tick_labels: subplot.x_tick_labels(),
            y_tick_labels: subplot.y_tick_labels(),
            legend_count: legend_entries.iter().flatten().count(),
            legend_entries,
            grid_layout: subplot.grid_layout(),
            lines: subplot.lines(),
            point_clouds: subplot.point_clouds(),
            shapes: subplot.shapes(),
        }
        .canonicalize()
    }
}
