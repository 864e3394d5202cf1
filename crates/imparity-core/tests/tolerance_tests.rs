//! Parameterized tolerance-boundary tests

use imparity_core::{Comparator, FigureSnapshot, Tolerance};
use rstest::rstest;
use serde_json::json;

fn line_figure(y: &[f64]) -> FigureSnapshot {
    FigureSnapshot::from_literal(json!({
        "axes": [{"lines": [{"x": [1.0, 2.0, 3.0, 4.0], "y": y}]}],
    }))
    .expect("well-formed literal")
}

#[rstest]
#[case::identical(&[6.0, 2.0, 5.0, 2.0], true)]
#[case::within_tolerance(&[6.0, 2.0, 5.0, 2.0000001], true)]
#[case::at_scale_rounding(&[6.0000001, 2.0, 5.0, 2.0], true)]
#[case::beyond_tolerance(&[7.0, 2.0, 5.0, 2.0], false)]
#[case::single_element_off(&[6.0, 2.0, 5.1, 2.0], false)]
#[case::sign_flip(&[6.0, 2.0, -5.0, 2.0], false)]
fn test_default_tolerance_boundary(#[case] y: &[f64], #[case] similar: bool) {
    let reference = line_figure(&[6.0, 2.0, 5.0, 2.0]);
    let candidate = line_figure(y);
    let outcome = Comparator::new().compare(&reference, &candidate);
    assert_eq!(outcome.is_ok(), similar, "y = {y:?}");
}

#[rstest]
#[case::loose(Tolerance::new(0.1, 0.0), &[6.5, 2.0, 5.0, 2.0], true)]
#[case::loose_but_not_enough(Tolerance::new(0.01, 0.0), &[6.5, 2.0, 5.0, 2.0], false)]
#[case::absolute_only(Tolerance::new(0.0, 0.6), &[6.5, 2.0, 5.0, 2.0], true)]
fn test_custom_tolerance(
    #[case] tolerance: Tolerance,
    #[case] y: &[f64],
    #[case] similar: bool,
) {
    let reference = line_figure(&[6.0, 2.0, 5.0, 2.0]);
    let candidate = line_figure(y);
    let outcome = Comparator::new()
        .with_tolerance(tolerance)
        .compare(&reference, &candidate);
    assert_eq!(outcome.is_ok(), similar);
}

#[test]
fn test_length_mismatch_is_a_value_mismatch_not_a_crash() {
    let reference = line_figure(&[6.0, 2.0, 5.0, 2.0]);
    let candidate = FigureSnapshot::from_literal(json!({
        "axes": [{"lines": [{"x": [1.0, 2.0, 3.0, 4.0, 5.0], "y": [6.0, 2.0, 5.0, 2.0, 1.0]}]}],
    }))
    .unwrap();

    let err = Comparator::new().compare(&reference, &candidate).unwrap_err();
    assert!(err.to_string().contains("values differ"));
}
