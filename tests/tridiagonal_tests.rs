use approx::assert_abs_diff_eq;
use mnspline::math::tridiagonal::second_derivatives;

/// Golden second derivatives for x = 1..=10, y = sin(x), from the reference
/// implementation's debug harness.
const Y2_GOLDEN: [f64; 10] = [
    0.0, -1.23211, -0.087569, 0.803919, 1.0467, 0.299074, -0.701635, -1.11672, -0.289171, 0.0,
];

fn sine_data() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (1..=10).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&v| v.sin()).collect();
    (x, y)
}

#[test]
fn golden_second_derivatives() {
    let (x, y) = sine_data();
    let y2 = second_derivatives(&x, &y).unwrap();

    assert_eq!(y2.len(), 10);
    for (computed, expected) in y2.iter().zip(Y2_GOLDEN.iter()) {
        assert_abs_diff_eq!(computed, expected, epsilon = 1e-4);
    }
}

#[test]
fn endpoints_have_zero_curvature() {
    let (x, y) = sine_data();
    let y2 = second_derivatives(&x, &y).unwrap();
    assert_eq!(y2[0], 0.0);
    assert_eq!(y2[9], 0.0);
}

#[test]
fn non_uniform_knots_still_reproduce_quadratic_curvature_sign() {
    // y = x^2 has constant positive curvature; interior second derivatives
    // should all be positive even on irregular spacing.
    let x = vec![0.0, 0.3, 1.0, 1.1, 2.5, 4.0, 4.2];
    let y: Vec<f64> = x.iter().map(|&v: &f64| v * v).collect();
    let y2 = second_derivatives(&x, &y).unwrap();
    for &c in &y2[1..y2.len() - 1] {
        assert!(c > 0.0, "expected positive interior curvature, got {c}");
    }
}

#[test]
fn minimal_spline_is_a_straight_line() {
    let y2 = second_derivatives(&[0.0_f64, 2.0], &[1.0, 5.0]).unwrap();
    assert_eq!(y2, vec![0.0, 0.0]);
}

#[test]
fn works_in_single_precision() {
    let x: Vec<f32> = (1..=10).map(|i| i as f32).collect();
    let y: Vec<f32> = x.iter().map(|&v| v.sin()).collect();
    let y2 = second_derivatives(&x, &y).unwrap();
    for (computed, expected) in y2.iter().zip(Y2_GOLDEN.iter()) {
        assert_abs_diff_eq!(*computed as f64, expected, epsilon = 1e-3);
    }
}
