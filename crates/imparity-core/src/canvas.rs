//! Headless recording canvas
//!
//! The built-in [`SceneSource`] backend: a canvas records plot-style calls
//! without rasterizing anything, and snapshots are built from it through the
//! same accessor traits any other backend would implement. Handles are
//! cheaply cloneable and share state, so a canvas created inside a captured
//! function stays usable after capture returns it.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};

use crate::cloud::PointCloud;
use crate::error::SnapshotResult;
use crate::figure::FigureSnapshot;
use crate::line::Line;
use crate::scene::{SceneSource, SubplotSource};
use crate::shape::{Rectangle, Shape, Wedge};
use crate::types::{AxisScale, GridLayout, LineStyle, MarkerOutline, TextLabel};

static NEXT_CANVAS_ID: AtomicU64 = AtomicU64::new(1);

/// Default bar width, matching the host toolkit's bar geometry
const BAR_WIDTH: f64 = 0.8;

/// Styling options for [`SubplotHandle::plot_with`]
#[derive(Clone, Debug)]
pub struct LineOptions {
    pub width: f64,
    pub style: LineStyle,
    pub marker: Option<String>,
    pub colour: String,
    /// `None` means the series was never labelled
    pub label: Option<String>,
}

impl LineOptions {
    pub fn new() -> Self {
        Self::default()
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
        self.label = Some(label.into());
        self
    }
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            width: 1.5,
            style: LineStyle::Solid,
            marker: None,
            colour: String::new(),
            label: None,
        }
    }
}

#[derive(Default)]
struct CanvasState {
    super_title: Option<String>,
    subplots: Vec<SubplotHandle>,
}

/// A live figure handle
#[derive(Clone)]
pub struct Canvas {
    id: u64,
    state: Arc<Mutex<CanvasState>>,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas").field("id", &self.id).finish()
    }
}

impl Canvas {
    /// Create a detached canvas. Use [`crate::capture::figure`] instead to
    /// register the canvas for side-effect capture.
    pub fn new() -> Self {
        Self {
            id: NEXT_CANVAS_ID.fetch_add(1, AtomicOrdering::Relaxed),
            state: Arc::new(Mutex::new(CanvasState::default())),
        }
    }

    /// Identity of this canvas; stable across handle clones
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn set_super_title(&self, title: impl Into<String>) {
        self.state.lock().unwrap().super_title = Some(title.into());
    }

    /// Append one subplot in a 1x1 grid
    pub fn subplot(&self) -> SubplotHandle {
        self.add_subplot(GridLayout::single())
    }

    /// Append a full grid of subplots in row-major order
    pub fn subplots(&self, rows: usize, cols: usize) -> Vec<SubplotHandle> {
        let grid = GridLayout::new(rows, cols);
        (0..rows * cols).map(|_| self.add_subplot(grid)).collect()
    }

    pub fn subplot_count(&self) -> usize {
        self.state.lock().unwrap().subplots.len()
    }

    /// Build the canonical snapshot of this canvas.
    pub fn snapshot(&self) -> SnapshotResult<FigureSnapshot> {
        FigureSnapshot::from_scene(self)
    }

    fn add_subplot(&self, grid: GridLayout) -> SubplotHandle {
        let handle = SubplotHandle {
            state: Arc::new(Mutex::new(SubplotState {
                grid,
                ..Default::default()
            })),
        };
        self.state.lock().unwrap().subplots.push(handle.clone());
        handle
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneSource for Canvas {
    type Subplot = SubplotHandle;

    fn super_title(&self) -> Option<String> {
        self.state.lock().unwrap().super_title.clone()
    }

    fn subplots(&self) -> Vec<SubplotHandle> {
        self.state.lock().unwrap().subplots.clone()
    }
}

#[derive(Default)]
struct SubplotState {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    x_scale: AxisScale,
    y_scale: AxisScale,
    x_tick_labels: Vec<Option<TextLabel>>,
    y_tick_labels: Vec<Option<TextLabel>>,
    legend: Vec<Option<TextLabel>>,
    grid: GridLayout,
    lines: Vec<Line>,
    clouds: Vec<PointCloud>,
    shapes: Vec<Shape>,
}

/// A live subplot handle
#[derive(Clone)]
pub struct SubplotHandle {
    state: Arc<Mutex<SubplotState>>,
}

impl SubplotHandle {
    /// Record a line with default styling
    pub fn plot(&self, x: &[f64], y: &[f64]) {
        self.plot_with(x, y, LineOptions::default());
    }

    /// Record a line
    pub fn plot_with(&self, x: &[f64], y: &[f64], options: LineOptions) {
        let line = Line {
            x: x.to_vec(),
            y: y.to_vec(),
            width: options.width,
            style: options.style,
            marker: options.marker,
            colour: options.colour,
            label: options.label.unwrap_or_default(),
        };
        self.state.lock().unwrap().lines.push(line);
    }

    /// Record a scatter layer with the default circular marker
    pub fn scatter(&self, x: &[f64], y: &[f64]) {
        self.scatter_with(x, y, MarkerOutline::regular(8));
    }

    /// Record a scatter layer
    pub fn scatter_with(&self, x: &[f64], y: &[f64], marker: MarkerOutline) {
        let cloud = PointCloud {
            x: x.to_vec(),
            y: y.to_vec(),
            marker,
        };
        self.state.lock().unwrap().clouds.push(cloud);
    }

    /// Record one bar per category: a rectangle of the toolkit's default
    /// width centered on the category position, rising from y = 0.
    pub fn bar(&self, positions: &[f64], heights: &[f64]) {
        let mut state = self.state.lock().unwrap();
        for (&position, &height) in positions.iter().zip(heights.iter()) {
            state.shapes.push(Shape::Rectangle(Rectangle::new(
                height,
                BAR_WIDTH,
                position - BAR_WIDTH / 2.0,
                0.0,
            )));
        }
    }

    /// Record a filled wedge
    pub fn wedge(&self, center: (f64, f64), radius: f64, theta1: f64, theta2: f64) {
        self.add_shape(Shape::Wedge(Wedge::new(
            radius, theta1, theta2, center.0, center.1,
        )));
    }

    pub fn add_shape(&self, shape: Shape) {
        self.state.lock().unwrap().shapes.push(shape);
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.state.lock().unwrap().title = Some(title.into());
    }

    pub fn set_x_label(&self, label: impl Into<String>) {
        self.state.lock().unwrap().x_label = Some(label.into());
    }

    pub fn set_y_label(&self, label: impl Into<String>) {
        self.state.lock().unwrap().y_label = Some(label.into());
    }

    pub fn set_x_scale(&self, scale: AxisScale) {
        self.state.lock().unwrap().x_scale = scale;
    }

    pub fn set_y_scale(&self, scale: AxisScale) {
        self.state.lock().unwrap().y_scale = scale;
    }

    pub fn set_x_tick_labels(&self, labels: Vec<TextLabel>) {
        self.state.lock().unwrap().x_tick_labels = labels.into_iter().map(Some).collect();
    }

    pub fn set_y_tick_labels(&self, labels: Vec<TextLabel>) {
        self.state.lock().unwrap().y_tick_labels = labels.into_iter().map(Some).collect();
    }

    /// Attach a legend with the given entry texts
    pub fn legend(&self, entries: &[&str]) {
        self.state.lock().unwrap().legend = entries
            .iter()
            .map(|text| Some(TextLabel::new(0.0, 0.0, *text)))
            .collect();
    }
}

impl SubplotSource for SubplotHandle {
    fn title(&self) -> Option<String> {
        self.state.lock().unwrap().title.clone()
    }

    fn x_label(&self) -> Option<String> {
        self.state.lock().unwrap().x_label.clone()
    }

    fn y_label(&self) -> Option<String> {
        self.state.lock().unwrap().y_label.clone()
    }

    fn x_scale(&self) -> AxisScale {
        self.state.lock().unwrap().x_scale
    }

    fn y_scale(&self) -> AxisScale {
        self.state.lock().unwrap().y_scale
    }

    fn x_tick_labels(&self) -> Vec<Option<TextLabel>> {
        self.state.lock().unwrap().x_tick_labels.clone()
    }

    fn y_tick_labels(&self) -> Vec<Option<TextLabel>> {
        self.state.lock().unwrap().y_tick_labels.clone()
    }

    fn legend_entries(&self) -> Vec<Option<TextLabel>> {
        self.state.lock().unwrap().legend.clone()
    }

    fn grid_layout(&self) -> GridLayout {
        self.state.lock().unwrap().grid
    }

    fn lines(&self) -> Vec<Line> {
        self.state.lock().unwrap().lines.clone()
    }

    fn point_clouds(&self) -> Vec<PointCloud> {
        self.state.lock().unwrap().clouds.clone()
    }

    fn shapes(&self) -> Vec<Shape> {
        self.state.lock().unwrap().shapes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_records_in_draw_order_snapshot_sorts() {
        let canvas = Canvas::new();
        let subplot = canvas.subplot();
        subplot.plot(&[2.0, 3.0], &[1.0, 1.0]);
        subplot.plot(&[1.0, 2.0], &[1.0, 1.0]);

        let snapshot = canvas.snapshot().unwrap();
        assert_eq!(snapshot.axes[0].lines[0].x, vec![1.0, 2.0]);
        assert_eq!(snapshot.axes[0].lines[1].x, vec![2.0, 3.0]);
    }

    #[test]
    fn test_bar_records_centered_rectangles() {
        let canvas = Canvas::new();
        let subplot = canvas.subplot();
        subplot.bar(&[1.0, 2.0], &[7.0, 6.0]);

        let snapshot = canvas.snapshot().unwrap();
        let shapes = &snapshot.axes[0].shapes;
        assert_eq!(shapes.len(), 2);
        match shapes[0] {
            Shape::Rectangle(rect) => {
                assert_eq!(rect.height, 6.0);
                assert_eq!(rect.width, BAR_WIDTH);
                assert!((rect.x - (2.0 - BAR_WIDTH / 2.0)).abs() < 1e-12);
                assert_eq!(rect.y, 0.0);
            }
            _ => panic!("expected a rectangle"),
        }
    }

    #[test]
    fn test_subplots_share_grid_layout() {
        let canvas = Canvas::new();
        let grid = canvas.subplots(2, 3);
        assert_eq!(grid.len(), 6);

        let snapshot = canvas.snapshot().unwrap();
        for axis in &snapshot.axes {
            assert_eq!(axis.grid_layout, GridLayout::new(2, 3));
        }
    }

    #[test]
    fn test_unlabelled_series_snapshot_with_empty_label() {
        let canvas = Canvas::new();
        let subplot = canvas.subplot();
        subplot.plot(&[1.0], &[1.0]);
        subplot.plot_with(&[2.0], &[2.0], LineOptions::new().with_label("flux"));

        let snapshot = canvas.snapshot().unwrap();
        let labels: Vec<&str> = snapshot.axes[0]
            .lines
            .iter()
            .map(|line| line.label.as_str())
            .collect();
        assert!(labels.contains(&""));
        assert!(labels.contains(&"flux"));
    }

    #[test]
    fn test_legend_entries_count_into_snapshot() {
        let canvas = Canvas::new();
        let subplot = canvas.subplot();
        subplot.plot(&[1.0], &[1.0]);
        subplot.legend(&["a", "b"]);

        let snapshot = canvas.snapshot().unwrap();
        assert_eq!(snapshot.axes[0].legend_count, 2);
        assert_eq!(
            snapshot.axes[0].legend_entries[0],
            Some(TextLabel::new(0.0, 0.0, "a"))
        );
    }

    #[test]
    fn test_mismatched_plot_data_fails_at_snapshot_time() {
        let canvas = Canvas::new();
        let subplot = canvas.subplot();
        subplot.plot(&[1.0, 2.0], &[1.0]);
        assert!(canvas.snapshot().is_err());
    }
}
