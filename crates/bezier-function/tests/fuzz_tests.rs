//! Fuzzing tests for evaluation and inversion with edge values.
//!
//! These tests verify that NaN and infinities propagate through evaluation
//! and that the inverse search always terminates.

use bezier_function::{Curve, CurveError, InverseFunction};

type TestResult = Result<(), CurveError>;

fn cubic() -> Result<Curve, CurveError> {
    Curve::new(2, [0.0, 0.0, 0.5, 0.0, 0.5, 1.0, 1.0, 1.0])
}

#[test]
fn fuzz_nan_parameter() -> TestResult {
    let point = cubic()?.interpolate(f64::NAN);
    assert!(point.iter().all(|v| v.is_nan()));
    Ok(())
}

#[test]
fn fuzz_infinite_parameter() -> TestResult {
    let curve = Curve::new(1, [0.0, 2.0])?;
    assert_eq!(curve.interpolate(f64::INFINITY), vec![f64::INFINITY]);
    assert_eq!(curve.interpolate(f64::NEG_INFINITY), vec![f64::NEG_INFINITY]);

    // A flat segment multiplies infinity by zero.
    let flat = Curve::new(1, [3.0, 3.0])?;
    assert!(flat.interpolate(f64::INFINITY)[0].is_nan());
    Ok(())
}

#[test]
fn fuzz_nan_control_point_stays_in_its_component() -> TestResult {
    let curve = Curve::new(2, [0.0, 0.0, f64::NAN, 0.5, 1.0, 1.0])?;
    let point = curve.interpolate(0.5);
    assert!(point[0].is_nan());
    assert_eq!(point[1], 0.5);
    Ok(())
}

#[test]
fn fuzz_large_parameters() -> TestResult {
    let curve = cubic()?;
    for t in [-1e6, -1e3, 1e3, 1e6] {
        let point = curve.interpolate(t);
        assert!(
            point.iter().all(|v| v.is_finite()),
            "t = {t} produced {point:?}"
        );
    }
    Ok(())
}

#[test]
fn fuzz_high_degree_curve() -> TestResult {
    let data: Vec<f64> = (0..200).map(|i| f64::from(i % 7)).collect();
    let curve = Curve::new(1, data)?;
    assert_eq!(curve.point_count(), 200);

    let point = curve.interpolate(0.5);
    assert!(point[0].is_finite());
    assert!((0.0..=6.0).contains(&point[0]));
    Ok(())
}

#[test]
fn fuzz_inverse_special_inputs_terminate() -> TestResult {
    let function = InverseFunction::new(cubic()?);
    for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::MAX, f64::MIN] {
        let point = function.evaluate_point(x);
        assert_eq!(point.len(), 2, "x = {x}");
    }
    Ok(())
}

#[test]
fn fuzz_inverse_smallest_threshold_terminates() -> TestResult {
    let function = InverseFunction::with_threshold(cubic()?, f64::MIN_POSITIVE)?;
    let y = function.evaluate(0.3)?;
    assert!((0.0..=1.0).contains(&y));
    Ok(())
}

#[test]
fn fuzz_inverse_infinite_threshold() -> TestResult {
    // The bracket is already narrower than the threshold: the curve is
    // evaluated once at the initial midpoint.
    let curve = cubic()?;
    let function = InverseFunction::with_threshold(curve.clone(), f64::INFINITY)?;
    assert_eq!(function.evaluate_point(0.9), curve.interpolate(0.5));
    Ok(())
}

#[test]
fn fuzz_inverse_nan_control_points_terminate() -> TestResult {
    let curve = Curve::new(2, [0.0, 0.0, f64::NAN, 0.5, 1.0, 1.0])?;
    let function = InverseFunction::new(curve);
    let y = function.evaluate(0.5)?;
    assert!(y.is_finite());
    Ok(())
}

#[test]
fn fuzz_inverse_outside_bracket_extrapolates() -> TestResult {
    // x(t) = 1.5t - 1.5t^2 + t^3 is increasing everywhere, so roots
    // outside [0, 1] are still inside [min(x, 0), max(x, 1)].
    let curve = cubic()?;
    let function = InverseFunction::new(curve.clone());
    for t in [-3.0, -1.5, 1.5, 3.0] {
        let point = curve.interpolate(t);
        let searched = point[0];
        let found = function.evaluate_point(searched)[0];
        assert!(
            (found - searched).abs() < 1e-3,
            "t = {t}: searched {searched} found {found}"
        );
    }
    Ok(())
}
