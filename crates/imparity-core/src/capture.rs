//! Process-wide canvas registry and side-effect figure capture
//!
//! Some plotting code creates figures without returning them. The registry
//! mirrors the host toolkit's figure bookkeeping: [`figure`] registers a new
//! canvas and marks it current, and [`capture_figures`] collects the
//! canvases a function creates, restoring the registry exactly as found.
//!
//! Capture is not reentrant-safe: concurrent captures would race on the
//! shared registry. Single-threaded test execution is assumed.

use std::sync::Mutex;

use lazy_static::lazy_static;

use crate::canvas::Canvas;
use crate::error::{CaptureError, CaptureResult};

struct RegistryState {
    canvases: Vec<Canvas>,
    current: Option<u64>,
    recording: bool,
}

impl Default for RegistryState {
    fn default() -> Self {
        Self {
            canvases: Vec::new(),
            current: None,
            recording: true,
        }
    }
}

lazy_static! {
    static ref CANVAS_REGISTRY: Mutex<RegistryState> = Mutex::new(RegistryState::default());
}

/// Create a canvas and register it as the current figure.
///
/// When recording is disabled the canvas is returned detached, exactly as
/// [`Canvas::new`] would.
pub fn figure() -> Canvas {
    let canvas = Canvas::new();
    let mut registry = CANVAS_REGISTRY.lock().unwrap();
    if registry.recording {
        registry.canvases.push(canvas.clone());
        registry.current = Some(canvas.id());
    }
    canvas
}

/// The most recently created registered canvas, if any
pub fn current_figure() -> Option<Canvas> {
    let registry = CANVAS_REGISTRY.lock().unwrap();
    let current = registry.current?;
    registry
        .canvases
        .iter()
        .find(|canvas| canvas.id() == current)
        .cloned()
}

/// Unregister one canvas
pub fn close(canvas: &Canvas) {
    let mut registry = CANVAS_REGISTRY.lock().unwrap();
    registry.canvases.retain(|open| open.id() != canvas.id());
    if registry.current == Some(canvas.id()) {
        registry.current = registry.canvases.last().map(Canvas::id);
    }
}

/// Unregister every canvas
pub fn close_all() {
    let mut registry = CANVAS_REGISTRY.lock().unwrap();
    registry.canvases.clear();
    registry.current = None;
}

/// Number of registered canvases
pub fn open_figure_count() -> usize {
    CANVAS_REGISTRY.lock().unwrap().canvases.len()
}

/// Enable or disable registration of new canvases; returns the prior state
pub fn set_recording(enabled: bool) -> bool {
    let mut registry = CANVAS_REGISTRY.lock().unwrap();
    std::mem::replace(&mut registry.recording, enabled)
}

/// Capture the figures a function creates as a side effect.
///
/// Records the pre-existing canvas handles, forces recording on, invokes
/// `f`, collects the newly created canvases, and restores the registry
/// (population, recording mode, and current-figure pointer) exactly as
/// found. The before/after population invariant is checked: a function that
/// closes pre-existing figures leaves residue and fails the capture.
pub fn capture_figures<F: FnOnce()>(f: F) -> CaptureResult<Vec<Canvas>> {
    let (before_ids, prior_recording, prior_current) = {
        let mut registry = CANVAS_REGISTRY.lock().unwrap();
        let ids: Vec<u64> = registry.canvases.iter().map(Canvas::id).collect();
        let recording = std::mem::replace(&mut registry.recording, true);
        (ids, recording, registry.current)
    };

    // The registry lock is not held here: f is free to create figures
    f();

    let mut registry = CANVAS_REGISTRY.lock().unwrap();
    let (kept, captured): (Vec<Canvas>, Vec<Canvas>) = std::mem::take(&mut registry.canvases)
        .into_iter()
        .partition(|canvas| before_ids.contains(&canvas.id()));
    registry.canvases = kept;
    registry.recording = prior_recording;
    registry.current = prior_current
        .filter(|id| registry.canvases.iter().any(|canvas| canvas.id() == *id));

    if registry.canvases.len() != before_ids.len() {
        return Err(CaptureError::RegistryResidue {
            expected: before_ids.len(),
            found: registry.canvases.len(),
        });
    }
    Ok(captured)
}
