//! Literal snapshot form
//!
//! A snapshot round-trips through a nested literal description, the format
//! regression fixtures are recorded in. Field names in the literal are
//! exactly the model's field names; optional fields absent from the input
//! take the documented defaults (width 1.5, style none, colour and label
//! empty). Every field explicitly present in the input is reproduced by
//! `to_literal`; defaults introduced during construction need not round-trip
//! back to absence.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{ImparityResult, MalformedSnapshot, SnapshotResult};
use crate::figure::FigureSnapshot;

impl FigureSnapshot {
    /// Build a snapshot from a literal description.
    pub fn from_literal(literal: Value) -> SnapshotResult<Self> {
        let figure: FigureSnapshot =
            serde_json::from_value(literal).map_err(|err| MalformedSnapshot::BadLiteral {
                message: err.to_string(),
            })?;
        figure.canonicalize()
    }

    /// Build a snapshot from literal text, as written by
    /// [`to_literal_text`](Self::to_literal_text) or a fixture file.
    pub fn from_literal_text(text: &str) -> SnapshotResult<Self> {
        let literal: Value =
            serde_json::from_str(text).map_err(|err| MalformedSnapshot::BadLiteral {
                message: err.to_string(),
            })?;
        Self::from_literal(literal)
    }

    /// Render the snapshot back to its literal description.
    pub fn to_literal(&self) -> Value {
        serde_json::to_value(self).expect("snapshot serialization cannot fail")
    }

    /// Render the snapshot to literal text suitable for a fixture file.
    /// The text re-parses with [`from_literal_text`](Self::from_literal_text).
    pub fn to_literal_text(&self) -> String {
        serde_json::to_string_pretty(&self.to_literal())
            .expect("snapshot serialization cannot fail")
    }

    /// Write the literal text to a fixture file.
    pub fn write_fixture(&self, path: impl AsRef<Path>) -> ImparityResult<()> {
        fs::write(path, self.to_literal_text())?;
        Ok(())
    }
}
