//! estimator::errors — error types for the KronPCA estimation core.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the layout transform,
//! proximal operators, Toeplitz projector, and proximal-gradient solver,
//! together with a conversion layer to Python exceptions for PyO3-based
//! bindings. All validation and runtime failures in the estimation core
//! are reported through [`KronError`]; nothing in this subtree panics on
//! user-facing invalid input.
//!
//! Key behaviors
//! -------------
//! - Define [`KronResult`] and [`KronError`] as the canonical result and
//!   error types for the estimation core.
//! - Attach human-readable `Display` messages to each variant, phrased in
//!   terms of domain constraints (e.g., "side length must equal ps·pt")
//!   rather than low-level details.
//! - Implement `From<KronError> for PyErr` so Rust-side failures surface
//!   as `ValueError` to Python callers when the `python-bindings` feature
//!   is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`KronError`] values are small, cheap to clone, and carry just enough
//!   payload (offending value or shape) for diagnostics without holding
//!   large data structures.
//! - Shape and configuration errors are detected eagerly at entry points
//!   before any numerical work begins; see `estimator::validation`.
//!
//! Conventions
//! -----------
//! - This module covers estimation-core errors only; cross-validation and
//!   grid-search failures live in `selection::errors`, which wraps
//!   [`KronError`] via `From`.
//!
//! Downstream usage
//! ----------------
//! - Solver entry points and proximal operators return [`KronResult<T>`]
//!   and propagate failures with `?`.
//! - `selection::errors::SelectionError::Estimator` carries a
//!   [`KronError`] when a per-fold fit fails.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload (offending dimension, threshold, or step size).

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for estimation-core operations.
pub type KronResult<T> = Result<T, KronError>;

/// KronError — error conditions for the KronPCA estimation core.
///
/// Variants
/// --------
/// - `InvalidDimensions { ps, pt }`
///   One of the spatial/temporal dimensions is zero; the rearrangement is
///   undefined.
/// - `DimensionMismatch { nrows, ncols, expected }`
///   A matrix handed to the transform or solver does not have the square
///   `expected × expected` shape implied by `(ps, pt)`.
/// - `RearrangedShapeMismatch { nrows, ncols, expected_rows, expected_cols }`
///   A rearranged matrix does not have the `pt² × ps²` shape expected by
///   the inverse transform.
/// - `NegativeThreshold { lambda }`
///   A proximal operator or solver entry point received a negative or
///   non-finite regularization strength.
/// - `InvalidStepSize { tau }`
///   A step size is non-finite or non-positive.
/// - `ScheduleLengthMismatch { expected, actual }`
///   A step-size schedule does not have one entry per iteration.
/// - `InvalidTolerance { tol }`
///   A convergence tolerance is non-finite or non-positive.
/// - `InvalidIterationBudget { max_iter, stop_cond_interval }`
///   The iteration cap is smaller than the convergence-check interval, or
///   the interval is zero.
/// - `SvdRecompositionFailed`
///   Reassembling a factored matrix after singular-value shrinkage failed;
///   indicates an internal factorization bug rather than a caller error.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] so it can
///   be used with idiomatic `?`-based propagation.
/// - A `From<KronError> for PyErr` implementation maps all cases to
///   `ValueError` at the Python boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum KronError {
    // ---- Shape & dimensions ----
    /// ps and pt must both be at least 1.
    InvalidDimensions {
        ps: usize,
        pt: usize,
    },
    /// Covariance side length must equal ps·pt.
    DimensionMismatch {
        nrows: usize,
        ncols: usize,
        expected: usize,
    },
    /// Rearranged matrix must have shape pt²×ps².
    RearrangedShapeMismatch {
        nrows: usize,
        ncols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    // ---- Regularization & stepping ----
    /// Regularization strength must be non-negative and finite.
    NegativeThreshold {
        lambda: f64,
    },
    /// Step size must be finite and strictly positive.
    InvalidStepSize {
        tau: f64,
    },
    /// Step-size schedule must have one entry per iteration.
    ScheduleLengthMismatch {
        expected: usize,
        actual: usize,
    },

    // ---- Convergence control ----
    /// Convergence tolerance must be finite and strictly positive.
    InvalidTolerance {
        tol: f64,
    },
    /// The iteration cap must cover at least one convergence check.
    InvalidIterationBudget {
        max_iter: usize,
        stop_cond_interval: usize,
    },

    // ---- Internal numerics ----
    /// SVD recomposition failed after singular-value shrinkage.
    SvdRecompositionFailed,
}

impl std::error::Error for KronError {}

impl std::fmt::Display for KronError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KronError::InvalidDimensions { ps, pt } => {
                write!(f, "Invalid dimensions ps={ps}, pt={pt}: both must be at least 1.")
            }
            KronError::DimensionMismatch { nrows, ncols, expected } => {
                write!(
                    f,
                    "Covariance shape mismatch: got {nrows}x{ncols}, expected {expected}x{expected} (ps·pt)."
                )
            }
            KronError::RearrangedShapeMismatch {
                nrows,
                ncols,
                expected_rows,
                expected_cols,
            } => {
                write!(
                    f,
                    "Rearranged shape mismatch: got {nrows}x{ncols}, expected {expected_rows}x{expected_cols} (pt²×ps²)."
                )
            }
            KronError::NegativeThreshold { lambda } => {
                write!(
                    f,
                    "Invalid regularization strength {lambda}: must be non-negative and finite."
                )
            }
            KronError::InvalidStepSize { tau } => {
                write!(f, "Invalid step size {tau}: must be finite and strictly positive.")
            }
            KronError::ScheduleLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Step-size schedule length mismatch: expected {expected} entries, got {actual}."
                )
            }
            KronError::InvalidTolerance { tol } => {
                write!(f, "Invalid tolerance {tol}: must be finite and strictly positive.")
            }
            KronError::InvalidIterationBudget { max_iter, stop_cond_interval } => {
                write!(
                    f,
                    "Invalid iteration budget: max_iter={max_iter} must be at least stop_cond_interval={stop_cond_interval}, and the interval must be at least 1."
                )
            }
            KronError::SvdRecompositionFailed => {
                write!(f, "SVD recomposition failed after singular-value shrinkage.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<KronError> for PyErr {
    fn from(err: KronError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
