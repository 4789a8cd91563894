//! estimator::validation — eager input guards for the estimation core.
//!
//! Purpose
//! -------
//! Centralize the shape and configuration checks that every estimation
//! entry point performs before any numerical work begins: positive
//! spatio-temporal dimensions, exact `(ps·pt)×(ps·pt)` covariance shape,
//! and non-negative, finite regularization strengths.
//!
//! Key behaviors
//! -------------
//! - [`validate_dimensions`] rejects `ps == 0 || pt == 0`.
//! - [`validate_covariance`] rejects covariance matrices whose side length
//!   differs from `ps·pt` (a caller error; the matrix is never silently
//!   reshaped).
//! - [`validate_penalty`] rejects negative or non-finite `λ` values so the
//!   proximal operators never see them.
//!
//! Invariants & assumptions
//! ------------------------
//! - All checks are side-effect free and allocation free.
//! - Step-size, tolerance, and iteration-budget checks are specific to the
//!   solver configuration types and live next to them in
//!   `estimator::solver` rather than here.
//!
//! Downstream usage
//! ----------------
//! - Both solver entry points call these guards first; the cross-validation
//!   driver relies on them transitively for each per-fold fit.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise every branch: zero dimensions, wrong side length,
//!   non-square input, negative and NaN penalties.
use ndarray::Array2;

use crate::estimator::errors::{KronError, KronResult};

/// Validate the spatio-temporal dimension pair.
///
/// Parameters
/// ----------
/// - `ps`: `usize`
///   Spatial dimension. Must be at least 1.
/// - `pt`: `usize`
///   Temporal dimension. Must be at least 1.
///
/// Returns
/// -------
/// `KronResult<()>`
///   `Ok(())` if both dimensions are positive.
///
/// Errors
/// ------
/// - `KronError::InvalidDimensions` if either dimension is zero.
pub fn validate_dimensions(ps: usize, pt: usize) -> KronResult<()> {
    if ps == 0 || pt == 0 {
        return Err(KronError::InvalidDimensions { ps, pt });
    }
    Ok(())
}

/// Validate that a covariance matrix has the square `(ps·pt)×(ps·pt)` shape.
///
/// Parameters
/// ----------
/// - `cov`: `&Array2<f64>`
///   Candidate covariance matrix.
/// - `ps`: `usize`
///   Spatial dimension.
/// - `pt`: `usize`
///   Temporal dimension.
///
/// Returns
/// -------
/// `KronResult<()>`
///   `Ok(())` when `cov` is `(ps·pt)×(ps·pt)`.
///
/// Errors
/// ------
/// - `KronError::InvalidDimensions` if `ps` or `pt` is zero.
/// - `KronError::DimensionMismatch` if either side of `cov` differs from
///   `ps·pt`, including non-square inputs.
pub fn validate_covariance(cov: &Array2<f64>, ps: usize, pt: usize) -> KronResult<()> {
    validate_dimensions(ps, pt)?;
    let expected = ps * pt;
    if cov.nrows() != expected || cov.ncols() != expected {
        return Err(KronError::DimensionMismatch {
            nrows: cov.nrows(),
            ncols: cov.ncols(),
            expected,
        });
    }
    Ok(())
}

/// Validate a regularization strength.
///
/// Parameters
/// ----------
/// - `lambda`: `f64`
///   Nuclear-norm or ℓ1 regularization strength. Must be non-negative and
///   finite; `0.0` is the degenerate no-shrinkage case and is allowed.
///
/// Returns
/// -------
/// `KronResult<()>`
///   `Ok(())` for admissible strengths.
///
/// Errors
/// ------
/// - `KronError::NegativeThreshold` for negative, NaN, or infinite values.
pub fn validate_penalty(lambda: f64) -> KronResult<()> {
    if !lambda.is_finite() || lambda < 0.0 {
        return Err(KronError::NegativeThreshold { lambda });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Every error branch of the three guards: zero dimensions, wrong
    //   side length, non-square matrices, negative and NaN penalties.
    // - Acceptance of well-formed inputs, including the lambda = 0 edge.
    //
    // They intentionally DO NOT cover:
    // - Solver-configuration checks (step sizes, tolerances, iteration
    //   budgets), which live next to the configuration types in
    //   `estimator::solver`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that zero spatial or temporal dimensions are rejected.
    //
    // Given
    // -----
    // - (ps, pt) pairs with one or both entries zero.
    //
    // Expect
    // ------
    // - `InvalidDimensions` for each, `Ok` for (1, 1).
    fn validate_dimensions_rejects_zero() {
        // Act / Assert
        assert!(matches!(
            validate_dimensions(0, 3),
            Err(KronError::InvalidDimensions { ps: 0, pt: 3 })
        ));
        assert!(matches!(
            validate_dimensions(2, 0),
            Err(KronError::InvalidDimensions { ps: 2, pt: 0 })
        ));
        assert!(validate_dimensions(1, 1).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Verify that a covariance with the wrong side length fails fast.
    //
    // Given
    // -----
    // - A 5x5 matrix validated against ps=2, pt=3 (expected side 6).
    //
    // Expect
    // ------
    // - `DimensionMismatch` with expected = 6.
    fn validate_covariance_rejects_wrong_side_length() {
        // Arrange
        let cov = Array2::<f64>::zeros((5, 5));

        // Act / Assert
        assert!(matches!(
            validate_covariance(&cov, 2, 3),
            Err(KronError::DimensionMismatch { nrows: 5, ncols: 5, expected: 6 })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify that non-square inputs are rejected rather than reshaped.
    //
    // Given
    // -----
    // - A 6x4 matrix validated against ps=2, pt=3.
    //
    // Expect
    // ------
    // - `DimensionMismatch` reporting the observed shape.
    fn validate_covariance_rejects_non_square() {
        // Arrange
        let cov = Array2::<f64>::zeros((6, 4));

        // Act / Assert
        assert!(matches!(
            validate_covariance(&cov, 2, 3),
            Err(KronError::DimensionMismatch { nrows: 6, ncols: 4, expected: 6 })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify penalty validation accepts zero and rejects negative or NaN
    // strengths.
    //
    // Given
    // -----
    // - Lambda values 0.0, 0.3, -1e-9, and NaN.
    //
    // Expect
    // ------
    // - Ok for the first two, `NegativeThreshold` for the rest.
    fn validate_penalty_accepts_zero_rejects_negative_and_nan() {
        // Act / Assert
        assert!(validate_penalty(0.0).is_ok());
        assert!(validate_penalty(0.3).is_ok());
        assert!(matches!(validate_penalty(-1e-9), Err(KronError::NegativeThreshold { .. })));
        assert!(matches!(validate_penalty(f64::NAN), Err(KronError::NegativeThreshold { .. })));
    }
}
