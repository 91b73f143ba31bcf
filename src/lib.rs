//! Perfilar: performance profiles for comparing algorithms over problem sets.
//!
//! A performance profile (Dolan and Moré, 2002) summarizes how N algorithms
//! compare across M test problems. Given a matrix of timings or errors
//! (row = problem, column = algorithm, smaller is better, NaN = failed run),
//! each algorithm gets a curve showing the fraction of problems on which it
//! performed within a factor θ of the best observed result. If algorithm A's
//! curve passes through (2, 0.5), A was within a factor of 2 of the smallest
//! observed value on 50% of the problems.
//!
//! # Quick Start
//!
//! ```
//! use perfilar::prelude::*;
//!
//! // Two algorithms on two problems; each is best on one of them.
//! let a = Matrix::from_vec(2, 2, vec![
//!     1.0, 2.0,
//!     2.0, 1.0,
//! ]).unwrap();
//!
//! let profile = PerformanceProfile::compute(&a, 2.0, 2).unwrap();
//! assert_eq!(profile.theta(), &[1.0, 2.0]);
//! assert_eq!(profile.curve(0), &[0.5, 1.0]);
//! ```
//!
//! To draw the curves to an image file:
//!
//! ```no_run
//! use perfilar::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 1.0]).unwrap();
//! let config = PlotConfig::new()
//!     .with_file_name("profile.svg")
//!     .with_legend(vec!["Algorithm A", "Algorithm B"]);
//! performance_profile(&a, 2.0, &config).unwrap();
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`profile`]: Performance profile computation
//! - [`plot`]: Chart rendering via plotters
//! - [`error`]: Error types

pub mod error;
pub mod plot;
pub mod prelude;
pub mod primitives;
pub mod profile;

pub use error::{PerfilarError, Result};
pub use plot::{performance_profile, render, PlotConfig};
pub use primitives::{Matrix, Vector};
pub use profile::PerformanceProfile;
