//! selection::errors — error types for model selection drivers.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the cross-validation and
//! grid-search drivers, wrapping estimation-core failures so that a single
//! error type flows out of the selection surface, with a conversion layer
//! to Python exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`SelectionResult`] and [`SelectionError`] as the canonical
//!   result and error types for fold splitting, grid scanning, and
//!   likelihood scoring.
//! - Wrap [`KronError`] via `From` so per-fold solver failures propagate
//!   with `?` without manual conversion.
//! - Distinguish the fatal `SingularCovariance` condition (a fitted,
//!   non-degenerate covariance that cannot be inverted) from the modeled
//!   degenerate-fit sentinel, which is *not* an error and never appears
//!   here.
//!
//! Conventions
//! -----------
//! - Estimation-core errors live in `estimator::errors`; this module only
//!   adds the selection-specific conditions on top.
//!
//! Testing notes
//! -------------
//! - Unit tests verify `Display` payload embedding and the `From`
//!   wrapping of estimator errors.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::estimator::errors::KronError;

/// Result alias for selection-driver operations.
pub type SelectionResult<T> = Result<T, SelectionError>;

/// SelectionError — error conditions for cross-validation and grid search.
///
/// Variants
/// --------
/// - `InvalidFoldCount { num_folds }`
///   Fewer than two folds were requested; every fold needs a non-empty
///   training complement.
/// - `InsufficientData { num_rows, num_folds }`
///   The observation table has fewer rows than folds, so the contiguous
///   fold size would be zero.
/// - `FeatureMismatch { num_cols, ps, pt }`
///   The observation table's column count differs from `ps·pt`.
/// - `EmptyGrid { axis }`
///   A hyperparameter grid is empty; there is nothing to scan.
/// - `SingularCovariance`
///   A fitted covariance passed the degenerate-zero check but is still
///   not invertible. This is a fatal numerical condition surfaced to the
///   caller, never masked.
/// - `Estimator(KronError)`
///   A propagated estimation-core failure.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// Cross-validation needs at least two folds.
    InvalidFoldCount {
        num_folds: usize,
    },
    /// Not enough rows to form one observation per fold.
    InsufficientData {
        num_rows: usize,
        num_folds: usize,
    },
    /// Observation columns must equal ps·pt.
    FeatureMismatch {
        num_cols: usize,
        ps: usize,
        pt: usize,
    },
    /// A hyperparameter grid must be non-empty.
    EmptyGrid {
        axis: &'static str,
    },
    /// Fitted covariance is singular but not degenerate-zero.
    SingularCovariance,
    /// Wrapped estimation-core error.
    Estimator(KronError),
}

impl std::error::Error for SelectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SelectionError::Estimator(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionError::InvalidFoldCount { num_folds } => {
                write!(
                    f,
                    "Invalid fold count {num_folds}: need at least 2 so every fold has training data."
                )
            }
            SelectionError::InsufficientData { num_rows, num_folds } => {
                write!(
                    f,
                    "Insufficient data: {num_rows} rows cannot fill {num_folds} folds with at least one row each."
                )
            }
            SelectionError::FeatureMismatch { num_cols, ps, pt } => {
                write!(
                    f,
                    "Feature mismatch: {num_cols} columns, expected ps·pt = {}·{} = {}.",
                    ps,
                    pt,
                    ps * pt
                )
            }
            SelectionError::EmptyGrid { axis } => {
                write!(f, "Empty hyperparameter grid for {axis}.")
            }
            SelectionError::SingularCovariance => {
                write!(f, "Fitted covariance is singular and cannot be inverted for scoring.")
            }
            SelectionError::Estimator(err) => write!(f, "Estimator error: {err}"),
        }
    }
}

impl From<KronError> for SelectionError {
    fn from(err: KronError) -> Self {
        SelectionError::Estimator(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<SelectionError> for PyErr {
    fn from(err: SelectionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
