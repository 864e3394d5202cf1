//! Point-cloud (scatter layer) snapshots

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{MalformedSnapshot, SnapshotResult};
use crate::order::{cmp_series, cmp_vertices, CanonicalOrder};
use crate::types::MarkerOutline;

/// Snapshot of one scatter layer: discrete marker-rendered coordinates
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    /// X coordinates
    pub x: Vec<f64>,

    /// Y coordinates, same length as `x`
    pub y: Vec<f64>,

    /// Outline of the symbol drawn at each coordinate
    #[serde(default)]
    pub marker: MarkerOutline,
}

impl PointCloud {
    /// Attribute names this element defines, for the attribute filter
    pub const ATTRIBUTES: &'static [&'static str] = &["x", "y", "marker"];

    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            marker: MarkerOutline::default(),
        }
    }

    pub fn with_marker(mut self, marker: MarkerOutline) -> Self {
        self.marker = marker;
        self
    }

    /// Check the paired-data invariant.
    pub fn validate(&self) -> SnapshotResult<()> {
        if self.x.len() != self.y.len() {
            return Err(MalformedSnapshot::DataLengthMismatch {
                element: "point cloud",
                x_len: self.x.len(),
                y_len: self.y.len(),
            });
        }
        Ok(())
    }
}

impl CanonicalOrder for PointCloud {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        cmp_vertices(&self.marker.vertices, &other.marker.vertices)
            .then_with(|| cmp_series(&self.x, &other.x))
            .then_with(|| cmp_series(&self.y, &other.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_unpaired_data() {
        let cloud = PointCloud::new(vec![1.0], vec![1.0, 2.0]);
        assert!(cloud.validate().is_err());
    }

    #[test]
    fn test_canonical_order_marker_first() {
        let tri = PointCloud::new(vec![9.0], vec![9.0]).with_marker(MarkerOutline::regular(3));
        let square = PointCloud::new(vec![0.0], vec![0.0]).with_marker(MarkerOutline::regular(4));
        // Triangle and square outlines decide the order before any data does
        let expected = cmp_vertices(&tri.marker.vertices, &square.marker.vertices);
        assert_eq!(tri.canonical_cmp(&square), expected);
        assert_ne!(tri.canonical_cmp(&square), Ordering::Equal);
    }

    #[test]
    fn test_canonical_order_falls_back_to_data() {
        let a = PointCloud::new(vec![1.0], vec![1.0]).with_marker(MarkerOutline::regular(4));
        let b = PointCloud::new(vec![2.0], vec![1.0]).with_marker(MarkerOutline::regular(4));
        assert_eq!(a.canonical_cmp(&b), Ordering::Less);
    }
}
