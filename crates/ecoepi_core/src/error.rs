//! Error type shared by every fallible operation in the engine.
//!
//! Only configuration and invocation problems are errors. Numerical
//! divergence (NaN, infinities) is ordinary output and flows through
//! trajectories and sweep results untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Missing model parameter \"{name}\".")]
    MissingParameter { name: String },

    #[error("Unknown model parameter \"{name}\"; expected one of r, K, beta, c, m, b, k, d.")]
    UnknownParameter { name: String },

    #[error("Missing initial condition \"{name}\".")]
    MissingInitialCondition { name: String },

    #[error("max_iter must be at least 1, got {max_iter}.")]
    InvalidIterationCount { max_iter: usize },

    #[error("Invalid sweep bounds [{lower}, {upper}]: bounds must be finite with lower <= upper.")]
    InvalidSweepBounds { lower: f64, upper: f64 },

    #[error("num_points must be at least 1, got {num_points}.")]
    InvalidSampleCount { num_points: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
