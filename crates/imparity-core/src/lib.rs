//! imparity-core - Structural similarity checking for rendered figures
//!
//! This crate decides whether two figures (each composed of subplots
//! carrying lines, point clouds, and filled shapes) are similar under a
//! caller-chosen subset of visual attributes, and explains the first
//! difference it finds when they are not.
//!
//! # Key Components
//!
//! - **Snapshot model**: [`FigureSnapshot`] / [`AxisSnapshot`] plus the
//!   element value objects ([`Line`], [`PointCloud`], [`Shape`]), an
//!   immutable canonical representation of a figure's renderable content
//! - **Canonical ordering**: a deterministic total order per element kind,
//!   imposed at construction so draw order never affects comparison
//! - **Similarity engine**: [`Comparator`], attribute-selective and
//!   tolerance-aware, short-circuiting on the first mismatch
//! - **Scene adapters**: the [`SceneSource`] capability traits, the
//!   headless recording [`Canvas`], and the literal fixture form
//! - **Capture**: [`capture_figures`] collects figures created as a side
//!   effect, restoring the process-wide registry exactly as found
//!
//! # Example
//!
//! ```
//! use imparity_core::{assert_similar_figures, Canvas};
//!
//! let reference = Canvas::new();
//! reference.subplot().plot(&[1.0, 2.0, 3.0, 4.0], &[6.0, 2.0, 5.0, 2.0]);
//!
//! let candidate = Canvas::new();
//! candidate.subplot().plot(&[1.0, 2.0, 3.0, 4.0], &[6.0, 2.0, 5.0, 2.0]);
//!
//! assert_similar_figures(
//!     &reference.snapshot().unwrap(),
//!     &candidate.snapshot().unwrap(),
//!     Some(&["x", "y"]),
//! )
//! .unwrap();
//! ```

pub mod axis;
pub mod canvas;
pub mod capture;
pub mod cloud;
pub mod error;
pub mod figure;
pub mod line;
pub mod literal;
pub mod order;
pub mod scene;
pub mod shape;
pub mod similar;
pub mod types;

pub use axis::AxisSnapshot;
pub use canvas::{Canvas, LineOptions, SubplotHandle};
pub use capture::{capture_figures, close, close_all, current_figure, figure, open_figure_count};
pub use cloud::PointCloud;
pub use error::{
    CaptureError, CaptureResult, ImparityError, ImparityResult, MalformedSnapshot,
    SimilarityMismatch, SimilarityResult, SnapshotResult,
};
pub use figure::FigureSnapshot;
pub use line::Line;
pub use order::CanonicalOrder;
pub use scene::{SceneSource, SubplotSource};
pub use shape::{Rectangle, Shape, Wedge};
pub use similar::{
    assert_similar_figures, check_similar_figures, AttributeFilter, Comparator, Tolerance,
};
pub use types::{AxisScale, GridLayout, LineStyle, MarkerOutline, TextLabel};
