//! Property-based tests using proptest.
//!
//! These tests verify the invariants of the profile computation.

use perfilar::prelude::*;
use proptest::prelude::*;

// Strategy for generating measurement matrices with positive entries
fn measurement_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<f32>> {
    proptest::collection::vec(0.01f32..1000.0, rows * cols).prop_map(move |data| {
        Matrix::from_vec(rows, cols, data).expect("Test data should be valid")
    })
}

// Strategy that additionally fails some runs (NaN), keeping at least one
// valid entry per row
fn matrix_with_failures(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<f32>> {
    let entries = proptest::collection::vec(0.01f32..1000.0, rows * cols);
    let fail_mask = proptest::collection::vec(proptest::bool::ANY, rows * cols);
    (entries, fail_mask).prop_map(move |(data, mask)| {
        let mut m = Matrix::from_vec(rows, cols, data).expect("Test data should be valid");
        for i in 0..rows {
            // Leave column 0 valid so no row is entirely NaN
            for j in 1..cols {
                if mask[i * cols + j] {
                    m.set(i, j, f32::NAN);
                }
            }
        }
        m
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn curves_are_bounded(a in measurement_matrix(6, 3), th_max in 1.0f32..50.0) {
        let profile = PerformanceProfile::compute(&a, th_max, 30).expect("valid input");
        for j in 0..profile.n_algorithms() {
            for &p in profile.curve(j) {
                prop_assert!((0.0..=1.0).contains(&p));
            }
        }
    }

    #[test]
    fn curves_are_non_decreasing(a in measurement_matrix(6, 3), th_max in 1.0f32..50.0) {
        let profile = PerformanceProfile::compute(&a, th_max, 30).expect("valid input");
        for j in 0..profile.n_algorithms() {
            let curve = profile.curve(j);
            for k in 1..curve.len() {
                prop_assert!(curve[k] >= curve[k - 1]);
            }
        }
    }

    #[test]
    fn theta_grid_spans_one_to_th_max(
        a in measurement_matrix(2, 2),
        th_max in 1.0f32..50.0,
        n_intervals in 2usize..80,
    ) {
        let profile = PerformanceProfile::compute(&a, th_max, n_intervals).expect("valid input");
        let theta = profile.theta();
        prop_assert_eq!(theta.len(), n_intervals);
        prop_assert_eq!(theta[0], 1.0);
        prop_assert_eq!(theta[n_intervals - 1], th_max);
        prop_assert!(theta.iter().all(|t| t.is_finite()));
        for k in 1..theta.len() {
            prop_assert!(theta[k] >= theta[k - 1]);
        }
    }

    #[test]
    fn at_least_one_algorithm_is_best_per_problem(a in measurement_matrix(5, 4)) {
        // Every problem has a winner at θ = 1, so the curves' starting
        // values sum to at least 1 across algorithms.
        let profile = PerformanceProfile::compute(&a, 10.0, 10).expect("valid input");
        let total_at_one: f32 = (0..profile.n_algorithms())
            .map(|j| profile.curve(j)[0])
            .sum();
        prop_assert!(total_at_one >= 1.0 - 1e-4);
    }

    #[test]
    fn compute_is_idempotent(a in measurement_matrix(4, 3), th_max in 1.0f32..20.0) {
        let first = PerformanceProfile::compute(&a, th_max, 25).expect("valid input");
        let second = PerformanceProfile::compute(&a, th_max, 25).expect("valid input");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn failures_never_count_as_successes(a in matrix_with_failures(5, 3)) {
        let profile = PerformanceProfile::compute(&a, 1e6, 20).expect("valid input");
        let m = profile.n_problems() as f32;
        let last = profile.theta().len() - 1;
        for j in 0..profile.n_algorithms() {
            let valid = (0..a.n_rows()).filter(|&i| !a.get(i, j).is_nan()).count() as f32;
            // Even at an enormous θ the curve cannot exceed the valid fraction.
            prop_assert!(profile.curve(j)[last] <= valid / m + 1e-6);
        }
    }

    #[test]
    fn single_interval_profile_is_single_point(
        a in measurement_matrix(3, 2),
        th_max in 1.0f32..20.0,
    ) {
        let profile = PerformanceProfile::compute(&a, th_max, 1).expect("valid input");
        prop_assert_eq!(profile.theta().len(), 1);
        prop_assert!((profile.theta()[0] - th_max).abs() < 1e-6);
        for j in 0..profile.n_algorithms() {
            prop_assert_eq!(profile.curve(j).len(), 1);
        }
    }
}
