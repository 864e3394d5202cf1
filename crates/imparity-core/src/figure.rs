//! Figure snapshots
//!
//! A [`FigureSnapshot`] is the root of the canonical model: a super-title
//! plus an ordered sequence of subplot snapshots. Subplot order is
//! caller-significant (left-to-right layout, say) and is never resorted;
//! only the elements within each subplot are.

use serde::{Deserialize, Serialize};

use crate::axis::AxisSnapshot;
use crate::error::{SimilarityResult, SnapshotResult};
use crate::similar::Comparator;

/// Snapshot of a whole figure
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FigureSnapshot {
    #[serde(default)]
    pub super_title: String,
    #[serde(default)]
    pub has_super_title: bool,

    /// Subplots in caller order
    #[serde(default)]
    pub axes: Vec<AxisSnapshot>,
}

impl FigureSnapshot {
    /// Figure-level attribute names, for the attribute filter
    pub const ATTRIBUTES: &'static [&'static str] = &["super_title", "has_super_title"];

    pub fn new() -> Self {
        Self::default()
    }

    /// Canonicalize every subplot. Construction succeeds on an empty figure.
    pub fn canonicalize(mut self) -> SnapshotResult<Self> {
        self.axes = self
            .axes
            .into_iter()
            .map(AxisSnapshot::canonicalize)
            .collect::<SnapshotResult<Vec<_>>>()?;
        Ok(self)
    }

    pub fn subplot_count(&self) -> usize {
        self.axes.len()
    }

    /// Compare this snapshot (candidate) against a reference under the given
    /// attribute subset; `None` checks every attribute each entity defines.
    pub fn assert_similar(
        &self,
        reference: &FigureSnapshot,
        attributes: Option<&[&str]>,
    ) -> SimilarityResult<()> {
        Comparator::for_attributes(attributes).compare(reference, self)
    }

    /// Non-propagating variant of [`assert_similar`](Self::assert_similar)
    /// for boolean composition.
    pub fn check_similar(
        &self,
        reference: &FigureSnapshot,
        attributes: Option<&[&str]>,
    ) -> (bool, Option<String>) {
        match self.assert_similar(reference, attributes) {
            Ok(()) => (true, None),
            Err(mismatch) => (false, Some(mismatch.to_string())),
        }
    }
}
