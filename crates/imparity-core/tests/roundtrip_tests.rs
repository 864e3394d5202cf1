//! Literal-form round-trip tests
//!
//! A recorded fixture must survive literal → snapshot → literal for every
//! field it sets explicitly, and fixture text written to disk must re-parse
//! into an equal snapshot.

use imparity_core::{assert_similar_figures, FigureSnapshot};
use serde_json::{json, Value};

/// A histogram fixture in the shape regression snapshots are recorded in
fn histogram_literal() -> Value {
    json!({
        "super_title": "",
        "has_super_title": false,
        "axes": [{
            "title": "",
            "has_title": false,
            "x_label": "value",
            "has_x_label": true,
            "y_label": "count",
            "has_y_label": true,
            "x_scale": "linear",
            "y_scale": "linear",
            "x_tick_labels": [
                {"position": [1.0, 0.0], "text": "1"},
                {"position": [2.0, 0.0], "text": "2"},
            ],
            "y_tick_labels": [],
            "legend_entries": [],
            "legend_count": 0,
            "grid_layout": {"rows": 1, "cols": 1},
            "lines": [],
            "point_clouds": [],
            "shapes": [
                {"kind": "rectangle", "height": 1.0, "width": 0.6, "x": 2.8, "y": 0.0},
                {"kind": "rectangle", "height": 2.0, "width": 0.6, "x": 1.6, "y": 0.0},
                {"kind": "rectangle", "height": 3.0, "width": 0.6, "x": 1.0, "y": 0.0},
            ],
        }],
    })
}

/// Assert that every field present in `expected` appears with the same
/// value in `actual`. Extra fields in `actual` (defaults made explicit)
/// are allowed.
fn assert_subset(expected: &Value, actual: &Value, path: &str) {
    match (expected, actual) {
        (Value::Object(expected), Value::Object(actual)) => {
            for (key, value) in expected {
                let inner = actual
                    .get(key)
                    .unwrap_or_else(|| panic!("missing field {path}.{key}"));
                assert_subset(value, inner, &format!("{path}.{key}"));
            }
        }
        (Value::Array(expected), Value::Array(actual)) => {
            assert_eq!(expected.len(), actual.len(), "length differs at {path}");
            for (index, (value, inner)) in expected.iter().zip(actual.iter()).enumerate() {
                assert_subset(value, inner, &format!("{path}[{index}]"));
            }
        }
        _ => assert_eq!(expected, actual, "value differs at {path}"),
    }
}

#[test]
fn test_explicit_fields_round_trip() {
    let literal = histogram_literal();
    let snapshot = FigureSnapshot::from_literal(literal.clone()).unwrap();
    let back = snapshot.to_literal();
    assert_subset(&literal, &back, "figure");
}

#[test]
fn test_sparse_literal_round_trips_its_own_fields() {
    // Only the fields a hand-written fixture would bother setting
    let literal = json!({
        "axes": [{
            "lines": [{"x": [1.0, 2.0, 3.0], "y": [4.0, 5.0, 6.0], "label": "flux"}],
        }],
    });
    let snapshot = FigureSnapshot::from_literal(literal.clone()).unwrap();
    let back = snapshot.to_literal();
    assert_subset(&literal, &back, "figure");

    // Defaults were introduced during construction
    assert_eq!(back["axes"][0]["lines"][0]["width"], 1.5);
    assert_eq!(back["axes"][0]["lines"][0]["style"], "none");
}

#[test]
fn test_literal_text_reparses_to_equal_snapshot() {
    let snapshot = FigureSnapshot::from_literal(histogram_literal()).unwrap();
    let text = snapshot.to_literal_text();
    let reparsed = FigureSnapshot::from_literal_text(&text).unwrap();
    assert_eq!(reparsed, snapshot);
}

#[test]
fn test_fixture_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("histogram.json");

    let snapshot = FigureSnapshot::from_literal(histogram_literal()).unwrap();
    snapshot.write_fixture(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let reloaded = FigureSnapshot::from_literal_text(&text).unwrap();
    assert_eq!(reloaded, snapshot);
    assert_similar_figures(&snapshot, &reloaded, None).unwrap();
}

#[test]
fn test_literal_and_scene_constructions_agree() {
    use imparity_core::Canvas;

    let canvas = Canvas::new();
    let axis = canvas.subplot();
    axis.plot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
    axis.set_x_label("value");

    let from_scene = canvas.snapshot().unwrap();
    let from_literal = FigureSnapshot::from_literal(json!({
        "axes": [{
            "x_label": "value",
            "has_x_label": true,
            "lines": [{"x": [1.0, 2.0, 3.0], "y": [4.0, 5.0, 6.0], "style": "solid"}],
        }],
    }))
    .unwrap();

    assert_similar_figures(&from_scene, &from_literal, None).unwrap();
}
