use approx::assert_abs_diff_eq;
use mnspline::prelude::*;

/// Golden interpolant values for x = 1..=10, y = sin(x), evaluated at
/// X = [1.5, 2.5, ..., 9.5, 9.8], from the reference debug harness.
const GOLDEN_QUERIES: [f64; 10] = [1.5, 2.5, 3.5, 4.5, 5.5, 6.5, 7.5, 8.5, 9.5, 9.8];
const GOLDEN_VALUES: [f64; 10] = [
    0.952391, 0.607689, -0.352613, -0.973527, -0.703281, 0.213946, 0.936819, 0.788606, -0.0478781,
    -0.34354,
];

fn sine_data() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (1..=10).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&v| v.sin()).collect();
    (x, y)
}

#[test]
fn golden_scenario_under_both_strategies() {
    let (x, y) = sine_data();

    for strategy in [LinearProbe, CachedBisection] {
        let model = Spline::new().strategy(strategy).fit(&x, &y).unwrap();
        let out = model.evaluate(&GOLDEN_QUERIES);
        for (computed, expected) in out.iter().zip(GOLDEN_VALUES.iter()) {
            assert_abs_diff_eq!(computed, expected, epsilon = 1e-4);
        }
    }
}

#[test]
fn interpolant_passes_through_its_samples() {
    let (x, y) = sine_data();

    for strategy in [LinearProbe, CachedBisection] {
        let model = Spline::new().strategy(strategy).fit(&x, &y).unwrap();
        let out = model.evaluate(&x);
        for (computed, expected) in out.iter().zip(y.iter()) {
            assert_abs_diff_eq!(computed, expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn strategies_are_output_identical() {
    let (x, y) = sine_data();

    // Unsorted, clustered, repeated, and out-of-domain queries.
    let queries = vec![
        5.5, 5.6, 5.7, 1.0, 10.0, 0.2, 11.3, 3.14159, 3.14159, 9.99, 2.0, 8.5,
    ];

    let probe = Spline::new()
        .strategy(LinearProbe)
        .fit(&x, &y)
        .unwrap()
        .evaluate(&queries);
    let cached = Spline::new()
        .strategy(CachedBisection)
        .fit(&x, &y)
        .unwrap()
        .evaluate(&queries);

    // Bit-for-bit: same interval, same arithmetic.
    assert_eq!(probe, cached);
}

#[test]
fn evaluate_is_idempotent() {
    let (x, y) = sine_data();
    let model = Spline::new().fit(&x, &y).unwrap();

    let queries: Vec<f64> = (0..200).map(|i| 1.0 + i as f64 * 0.045).collect();
    let first = model.evaluate(&queries);
    let second = model.evaluate(&queries);
    assert_eq!(first, second);
}

#[test]
fn query_at_last_knot_uses_last_interval() {
    let (x, y) = sine_data();
    let model = Spline::new().fit(&x, &y).unwrap();

    // Exactly x[n-1]: must resolve to klo = n-2 and reproduce y[n-1].
    let out = model.evaluate(&[10.0]);
    assert_abs_diff_eq!(out[0], 10.0_f64.sin(), epsilon = 1e-12);
}

#[test]
fn out_of_domain_queries_extrapolate() {
    let (x, y) = sine_data();
    let model = Spline::new().fit(&x, &y).unwrap();

    let out = model.evaluate(&[0.0, 12.0]);
    assert!(out.iter().all(|v| v.is_finite()));

    // Extrapolation continues the boundary cubic: values just outside the
    // domain stay close to the boundary sample.
    let near = model.evaluate(&[0.999, 10.001]);
    assert_abs_diff_eq!(near[0], 1.0_f64.sin(), epsilon = 1e-2);
    assert_abs_diff_eq!(near[1], 10.0_f64.sin(), epsilon = 1e-2);
}

#[test]
fn evaluate_into_fills_caller_buffer() {
    let (x, y) = sine_data();
    let model = Spline::new().fit(&x, &y).unwrap();

    let mut out = vec![f64::NAN; GOLDEN_QUERIES.len()];
    model.evaluate_into(&GOLDEN_QUERIES, &mut out);
    for (computed, expected) in out.iter().zip(GOLDEN_VALUES.iter()) {
        assert_abs_diff_eq!(computed, expected, epsilon = 1e-4);
    }
}

#[test]
fn empty_query_batch_yields_empty_output() {
    let (x, y) = sine_data();
    let model = Spline::new().fit(&x, &y).unwrap();
    assert!(model.evaluate(&[]).is_empty());
}

#[test]
fn one_shot_interpolate_matches_model() {
    let (x, y) = sine_data();
    let via_model = Spline::new().fit(&x, &y).unwrap().evaluate(&GOLDEN_QUERIES);
    let one_shot = interpolate(&x, &y, &GOLDEN_QUERIES).unwrap();
    assert_eq!(via_model, one_shot);
}
