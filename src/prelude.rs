//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use perfilar::prelude::*;
//! ```

pub use crate::error::{PerfilarError, Result};
pub use crate::plot::{performance_profile, render, PlotConfig};
pub use crate::primitives::{Matrix, Vector};
pub use crate::profile::{best_per_problem, PerformanceProfile};
