//! selection::validation — eager input guards for the selection drivers.
//!
//! Purpose
//! -------
//! Centralize the checks both drivers perform before any fitting begins:
//! fold-count admissibility, feature/dimension agreement, and non-empty
//! hyperparameter grids. All checks are cheap, allocation free, and run
//! before the first covariance is formed.
//!
//! Downstream usage
//! ----------------
//! - `selection::cross_validation` validates folds and features once per
//!   call; `selection::grid_search` additionally validates both grids.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise every branch, including the exact fold-size
//!   boundary where `num_rows == num_folds`.
use ndarray::Array2;

use crate::selection::errors::{SelectionError, SelectionResult};

/// Validate the fold configuration and return the contiguous fold size.
///
/// Parameters
/// ----------
/// - `num_rows`: `usize`
///   Number of lagged observation rows available.
/// - `num_folds`: `usize`
///   Requested fold count `K`. Must be at least 2 so every fold trains
///   on a non-empty complement.
///
/// Returns
/// -------
/// `SelectionResult<usize>`
///   The fold size `⌊num_rows / num_folds⌋`; remainder rows are dropped
///   by the caller, not redistributed.
///
/// Errors
/// ------
/// - `SelectionError::InvalidFoldCount` if `num_folds < 2`.
/// - `SelectionError::InsufficientData` if the fold size would be zero.
pub fn validate_folds(num_rows: usize, num_folds: usize) -> SelectionResult<usize> {
    if num_folds < 2 {
        return Err(SelectionError::InvalidFoldCount { num_folds });
    }
    let fold_size = num_rows / num_folds;
    if fold_size == 0 {
        return Err(SelectionError::InsufficientData { num_rows, num_folds });
    }
    Ok(fold_size)
}

/// Validate that the observation table's width matches `ps·pt`.
///
/// # Errors
/// - [`SelectionError::FeatureMismatch`] if the column count differs
///   from `ps·pt`.
pub fn validate_features(observations: &Array2<f64>, ps: usize, pt: usize) -> SelectionResult<()> {
    if observations.ncols() != ps * pt {
        return Err(SelectionError::FeatureMismatch {
            num_cols: observations.ncols(),
            ps,
            pt,
        });
    }
    Ok(())
}

/// Validate that both hyperparameter grids are non-empty.
///
/// # Errors
/// - [`SelectionError::EmptyGrid`] naming the offending axis.
pub fn validate_grids(lambda_l_grid: &[f64], lambda_s_grid: &[f64]) -> SelectionResult<()> {
    if lambda_l_grid.is_empty() {
        return Err(SelectionError::EmptyGrid { axis: "lambda_L" });
    }
    if lambda_s_grid.is_empty() {
        return Err(SelectionError::EmptyGrid { axis: "lambda_S" });
    }
    Ok(())
}
