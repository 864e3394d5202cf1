//! Error types for imparity-core
//!
//! Three failure modes are kept apart so a test harness can tell them apart:
//! - `MalformedSnapshot`: the snapshot could not be built at all
//! - `SimilarityMismatch`: the figures compared and differ (the expected
//!   failure mode callers test for)
//! - `CaptureError`: the figure registry was left in an unexpected state

use thiserror::Error;

/// Top-level error type for imparity operations
#[derive(Error, Debug)]
pub enum ImparityError {
    /// Snapshot construction failed
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] MalformedSnapshot),

    /// The figures compared and are not similar
    #[error(transparent)]
    Mismatch(#[from] SimilarityMismatch),

    /// Figure capture left the registry in an unexpected state
    #[error("figure capture failed: {0}")]
    Capture(#[from] CaptureError),

    /// I/O errors (fixture writes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImparityError {
    /// Whether this error is a legitimate similarity failure, as opposed to
    /// a broken comparison. Harnesses use this to classify outcomes.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ImparityError::Mismatch(_))
    }
}

/// Construction-time snapshot errors. Not recoverable; surfaced immediately.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedSnapshot {
    /// Paired data sequences disagree in length within a single element
    #[error("{element} has {x_len} x values but {y_len} y values")]
    DataLengthMismatch {
        element: &'static str,
        x_len: usize,
        y_len: usize,
    },

    /// The literal description could not be deserialized
    #[error("unreadable snapshot literal: {message}")]
    BadLiteral { message: String },
}

/// A similarity failure. Always carries enough context to name the offending
/// subplot, element kind/index, attribute, and both values where feasible.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimilarityMismatch {
    /// Subplot counts differ between the two figures
    #[error("incorrect number of subplots (expected {expected}, found {found})")]
    SubplotCount { expected: usize, found: usize },

    /// Element counts differ within one subplot
    #[error("subplot {subplot}: incorrect number of {element} (expected {expected}, found {found})")]
    ElementCount {
        subplot: usize,
        element: &'static str,
        expected: usize,
        found: usize,
    },

    /// A scalar attribute differs
    #[error("{context}: incorrect {attribute} (expected {expected}, found {actual})")]
    Attribute {
        context: String,
        attribute: &'static str,
        expected: String,
        actual: String,
    },

    /// A numeric data series differs beyond tolerance (or in length)
    #[error("{context}: {attribute} values differ (expected {expected:?}, found {actual:?})")]
    Series {
        context: String,
        attribute: &'static str,
        expected: Vec<f64>,
        actual: Vec<f64>,
    },

    /// A text-label sequence entry differs, or is present on one side only
    #[error("{context}: incorrect {attribute} at entry {index} (expected {expected}, found {actual})")]
    TextEntry {
        context: String,
        attribute: &'static str,
        index: usize,
        expected: String,
        actual: String,
    },

    /// A marker outline differs beyond tolerance
    #[error("{context}: incorrect marker outline")]
    MarkerOutline { context: String },
}

/// Errors from the side-effect figure capture helper
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The registry did not return to its pre-capture population
    #[error("figure registry changed size during capture (expected {expected}, found {found})")]
    RegistryResidue { expected: usize, found: usize },
}

/// Result type alias for imparity operations
pub type ImparityResult<T> = Result<T, ImparityError>;

/// Result type alias for snapshot construction
pub type SnapshotResult<T> = Result<T, MalformedSnapshot>;

/// Result type alias for similarity comparison
pub type SimilarityResult<T> = Result<T, SimilarityMismatch>;

/// Result type alias for figure capture
pub type CaptureResult<T> = Result<T, CaptureError>;
