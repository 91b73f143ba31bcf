//! Performance profile computation.
//!
//! A performance profile [1] compares N algorithms over M test problems.
//! Given an M×N matrix A where A(i, j) > 0 measures algorithm j on
//! problem i (smaller is better, NaN means j failed on i), the profile
//! plots, for each algorithm, the fraction of problems on which it came
//! within a factor θ of the best observed result, for θ on [1, th_max].
//!
//! [1] E. D. Dolan and J. J. Moré, Benchmarking Optimization Software
//!     with Performance Profiles. Math. Programming, 91:201-213, 2002.

use crate::error::{PerfilarError, Result};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};

/// Best valid measurement per problem row.
///
/// `best[i]` is the minimum non-NaN entry of row i, the denominator of
/// every performance ratio on that problem.
///
/// # Errors
///
/// Returns [`PerfilarError::EmptyRow`] if some row contains no valid
/// measurement, since its best value is undefined.
///
/// # Examples
///
/// ```
/// use perfilar::primitives::Matrix;
/// use perfilar::profile::best_per_problem;
///
/// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, f32::NAN, 3.0]).unwrap();
/// let best = best_per_problem(&a).unwrap();
/// assert_eq!(best, vec![1.0, 3.0]);
/// ```
pub fn best_per_problem(a: &Matrix<f32>) -> Result<Vec<f32>> {
    (0..a.n_rows())
        .map(|i| {
            a.row(i)
                .min_finite()
                .ok_or(PerfilarError::EmptyRow { row: i })
        })
        .collect()
}

/// Evenly spaced θ samples spanning [1, th_max], endpoints exact.
///
/// A single-interval grid collapses to the one point `[th_max]`.
fn theta_grid(th_max: f32, n_intervals: usize) -> Vec<f32> {
    if n_intervals == 1 {
        return vec![th_max];
    }
    let span = th_max - 1.0;
    let denom = (n_intervals - 1) as f32;
    (0..n_intervals)
        .map(|k| {
            if k == n_intervals - 1 {
                th_max
            } else {
                1.0 + span * k as f32 / denom
            }
        })
        .collect()
}

/// A computed performance profile: the θ grid plus one success-fraction
/// curve per algorithm.
///
/// Each curve value `curve(j)[k]` is the fraction of the M problems on
/// which algorithm j produced a valid result within a factor `theta[k]`
/// of the best observed result for that problem. Failed (NaN) runs never
/// count as successes but M stays the full problem count, so an
/// algorithm is penalized for its failures.
///
/// Curves are non-decreasing in θ and bounded in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceProfile {
    theta: Vec<f32>,
    curves: Vec<Vec<f32>>,
    n_problems: usize,
}

impl PerformanceProfile {
    /// Computes the performance profile of measurement matrix `a`.
    ///
    /// Rows of `a` are test problems, columns are algorithms; entries are
    /// finite non-negative measurements or NaN for a failed run. `th_max`
    /// is the upper bound of the θ axis and `n_intervals` the number of θ
    /// samples. Pure function: no side effects, identical inputs yield
    /// identical outputs.
    ///
    /// # Errors
    ///
    /// All inputs are validated before any computation:
    ///
    /// - [`PerfilarError::ShapeMismatch`] if `a` has zero rows or columns.
    /// - [`PerfilarError::InvalidParameter`] if `th_max` is not a finite
    ///   value >= 1.0, or `n_intervals < 1`.
    /// - [`PerfilarError::InvalidMeasurement`] if an entry is negative or
    ///   non-finite (other than the NaN sentinel).
    /// - [`PerfilarError::EmptyRow`] if some row is entirely NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfilar::prelude::*;
    ///
    /// let a = Matrix::from_vec(2, 2, vec![
    ///     1.0, 2.0,
    ///     2.0, 1.0,
    /// ]).unwrap();
    /// let profile = PerformanceProfile::compute(&a, 2.0, 2).unwrap();
    ///
    /// assert_eq!(profile.theta(), &[1.0, 2.0]);
    /// // Each algorithm is best on one problem of two at θ = 1,
    /// // and within factor 2 on both at θ = 2.
    /// assert_eq!(profile.curve(0), &[0.5, 1.0]);
    /// assert_eq!(profile.curve(1), &[0.5, 1.0]);
    /// ```
    pub fn compute(a: &Matrix<f32>, th_max: f32, n_intervals: usize) -> Result<Self> {
        let (m, n) = a.shape();
        if m == 0 || n == 0 {
            return Err(PerfilarError::ShapeMismatch {
                expected: "at least 1x1".to_string(),
                actual: format!("{m}x{n}"),
            });
        }
        if !th_max.is_finite() || th_max < 1.0 {
            return Err(PerfilarError::InvalidParameter {
                param: "th_max".to_string(),
                value: th_max.to_string(),
                constraint: ">= 1.0".to_string(),
            });
        }
        if n_intervals < 1 {
            return Err(PerfilarError::InvalidParameter {
                param: "n_intervals".to_string(),
                value: n_intervals.to_string(),
                constraint: ">= 1".to_string(),
            });
        }
        for i in 0..m {
            for j in 0..n {
                let v = a.get(i, j);
                if !v.is_nan() && (!v.is_finite() || v < 0.0) {
                    return Err(PerfilarError::InvalidMeasurement { row: i, col: j, value: v });
                }
            }
        }

        let best = best_per_problem(a)?;
        let theta = theta_grid(th_max, n_intervals);

        let mut curves = Vec::with_capacity(n);
        for j in 0..n {
            let mut curve = Vec::with_capacity(n_intervals);
            for &th in &theta {
                let hits = (0..m)
                    .filter(|&i| {
                        let v = a.get(i, j);
                        !v.is_nan() && v <= th * best[i]
                    })
                    .count();
                curve.push(hits as f32 / m as f32);
            }
            curves.push(curve);
        }

        Ok(Self {
            theta,
            curves,
            n_problems: m,
        })
    }

    /// The θ grid (x-axis values).
    #[must_use]
    pub fn theta(&self) -> &[f32] {
        &self.theta
    }

    /// All success-fraction curves, one per algorithm.
    #[must_use]
    pub fn curves(&self) -> &[Vec<f32>] {
        &self.curves
    }

    /// The success-fraction curve for algorithm `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j` is out of bounds.
    #[must_use]
    pub fn curve(&self, j: usize) -> &[f32] {
        &self.curves[j]
    }

    /// Number of algorithms (columns of the input matrix).
    #[must_use]
    pub fn n_algorithms(&self) -> usize {
        self.curves.len()
    }

    /// Number of test problems (rows of the input matrix).
    #[must_use]
    pub fn n_problems(&self) -> usize {
        self.n_problems
    }

    /// Upper bound of the θ axis.
    #[must_use]
    pub fn th_max(&self) -> f32 {
        *self.theta.last().expect("theta grid is never empty")
    }
}
