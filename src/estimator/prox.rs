//! estimator::prox — proximal shrinkage operators.
//!
//! Purpose
//! -------
//! Implement the two proximal maps the solver alternates between:
//! singular-value soft-thresholding (the proximal operator of the nuclear
//! norm, promoting low rank) and entrywise soft-thresholding (the proximal
//! operator of the elementwise ℓ1 norm, promoting sparsity).
//!
//! Key behaviors
//! -------------
//! - [`soft_sv_threshold`] factors its input, subtracts `λ` from every
//!   singular value, clamps at zero, and recomposes. It is the unique
//!   minimizer of `½‖X−M‖_F² + λ‖X‖_*`.
//! - [`soft_entrywise_threshold`] applies
//!   `sign(x)·max(|x|−λ, 0)` independently per entry through the scalar
//!   helper [`soft_threshold`], which the Toeplitz-constrained solver also
//!   uses for its per-row weighted thresholds.
//!
//! Invariants & assumptions
//! ------------------------
//! - `λ = 0` is the degenerate no-shrinkage case: the singular-value
//!   operator short-circuits and returns its input unchanged (bit-exact,
//!   no factorization round trip), and the entrywise formula is already
//!   the exact identity. Negative `λ` is rejected; the solver never
//!   produces one, but the operators guard anyway.
//! - Shrinkage clamps at exactly `0.0`, so thresholded entries are
//!   structural zeros — the sparsity diagnostic counts on this.
//! - The output of [`soft_sv_threshold`] has rank no greater than its
//!   input, strictly lower once `λ` exceeds the smallest retained
//!   singular value.
//!
//! Downstream usage
//! ----------------
//! - `estimator::solver` calls both operators with `τ_k`-scaled strengths
//!   every iteration.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the λ = 0 identity for both operators, singular
//!   value monotonicity in λ, rank reduction past the smallest singular
//!   value, the scalar shrinkage formula, and exact-zero clamping.
use ndarray::Array2;

use crate::estimator::errors::{KronError, KronResult};
use crate::estimator::linalg::{fill_dmatrix, to_array2};
use crate::estimator::validation::validate_penalty;

/// Scalar soft-threshold: `sign(x)·max(|x|−λ, 0)`.
///
/// The clamp produces an exact `0.0` whenever `|x| ≤ λ`, which is what
/// makes the sparsity diagnostic a structural count rather than an
/// epsilon comparison.
#[inline]
pub fn soft_threshold(value: f64, lambda: f64) -> f64 {
    value.signum() * (value.abs() - lambda).max(0.0)
}

/// Singular-value soft-thresholding (nuclear-norm proximal map).
///
/// Parameters
/// ----------
/// - `matrix`: `&Array2<f64>`
///   Matrix whose singular values will be shrunk. May be rectangular.
/// - `lambda`: `f64`
///   Amount subtracted from every singular value before clamping at
///   zero. Must be non-negative and finite; `0.0` returns the input
///   unchanged without factoring.
///
/// Returns
/// -------
/// `KronResult<Array2<f64>>`
///   `U·max(Σ−λ, 0)·Vᵀ`, the unique minimizer of
///   `½‖X−M‖_F² + λ‖X‖_*`.
///
/// Errors
/// ------
/// - `KronError::NegativeThreshold` for negative or non-finite `lambda`.
/// - `KronError::SvdRecompositionFailed` if the factorization cannot be
///   reassembled (internal error; does not occur for finite inputs).
pub fn soft_sv_threshold(matrix: &Array2<f64>, lambda: f64) -> KronResult<Array2<f64>> {
    validate_penalty(lambda)?;
    if lambda == 0.0 {
        return Ok(matrix.clone());
    }

    let mut svd = fill_dmatrix(matrix).svd(true, true);
    svd.singular_values.iter_mut().for_each(|s| *s = (*s - lambda).max(0.0));
    let recomposed = svd.recompose().map_err(|_| KronError::SvdRecompositionFailed)?;
    Ok(to_array2(&recomposed))
}

/// Entrywise soft-thresholding (ℓ1 proximal map).
///
/// Parameters
/// ----------
/// - `matrix`: `&Array2<f64>`
///   Matrix whose entries will be shrunk toward zero.
/// - `lambda`: `f64`
///   Amount subtracted from every entry's magnitude. Must be
///   non-negative and finite; `0.0` is the exact identity.
///
/// Returns
/// -------
/// `KronResult<Array2<f64>>`
///   The elementwise image of [`soft_threshold`].
///
/// Errors
/// ------
/// - `KronError::NegativeThreshold` for negative or non-finite `lambda`.
pub fn soft_entrywise_threshold(matrix: &Array2<f64>, lambda: f64) -> KronResult<Array2<f64>> {
    validate_penalty(lambda)?;
    Ok(matrix.mapv(|x| soft_threshold(x, lambda)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{Array2, array};

    use crate::estimator::linalg::matrix_rank;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The scalar shrinkage formula, including exact-zero clamping.
    // - λ = 0 identity behavior for both operators (bit-exact for the
    //   singular-value operator via its short-circuit).
    // - Monotonicity of singular values in λ and rank reduction.
    // - Rejection of negative λ.
    //
    // They intentionally DO NOT cover:
    // - The per-row weighted thresholds of the Toeplitz-constrained
    //   solver, exercised in `estimator::solver`.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-10;

    fn singular_values_of(m: &Array2<f64>) -> Vec<f64> {
        let sv = crate::estimator::linalg::fill_dmatrix(m).singular_values();
        sv.iter().copied().collect()
    }

    #[test]
    // Purpose
    // -------
    // Verify the scalar soft-threshold on positive, negative, and
    // sub-threshold values.
    //
    // Given
    // -----
    // - Values 3.0, -3.0, 0.5, -0.5 with λ = 1.
    //
    // Expect
    // ------
    // - 2.0, -2.0, and exact 0.0 for the sub-threshold pair.
    fn scalar_soft_threshold_shrinks_and_clamps() {
        // Act / Assert
        assert_relative_eq!(soft_threshold(3.0, 1.0), 2.0, epsilon = TOL);
        assert_relative_eq!(soft_threshold(-3.0, 1.0), -2.0, epsilon = TOL);
        assert_eq!(soft_threshold(0.5, 1.0), 0.0);
        assert_eq!(soft_threshold(-0.5, 1.0), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that λ = 0 is a bit-exact identity for both operators.
    //
    // Given
    // -----
    // - A generic 2×3 matrix and λ = 0.
    //
    // Expect
    // ------
    // - Both outputs equal the input exactly (== on f64).
    fn zero_lambda_is_exact_identity() {
        // Arrange
        let m = array![[1.0, -2.0, 0.5], [3.0, 0.0, -0.25]];

        // Act
        let sv = soft_sv_threshold(&m, 0.0).unwrap();
        let ew = soft_entrywise_threshold(&m, 0.0).unwrap();

        // Assert
        assert_eq!(sv, m);
        assert_eq!(ew, m);
    }

    #[test]
    // Purpose
    // -------
    // Verify that singular values after thresholding are entrywise
    // non-increasing in λ and that rank drops once λ exceeds the
    // smallest singular value.
    //
    // Given
    // -----
    // - diag(3, 1) with λ₁ = 0.5 and λ₂ = 1.5.
    //
    // Expect
    // ------
    // - Singular values of the λ₂ output ≤ those of the λ₁ output.
    // - Rank 2 at λ₁, rank 1 at λ₂.
    fn singular_value_shrinkage_is_monotone_in_lambda() {
        // Arrange
        let m = array![[3.0, 0.0], [0.0, 1.0]];

        // Act
        let light = soft_sv_threshold(&m, 0.5).unwrap();
        let heavy = soft_sv_threshold(&m, 1.5).unwrap();

        // Assert
        let sv_light = singular_values_of(&light);
        let sv_heavy = singular_values_of(&heavy);
        for (h, l) in sv_heavy.iter().zip(sv_light.iter()) {
            assert!(h <= &(l + TOL), "heavy {h} exceeds light {l}");
        }
        assert_eq!(matrix_rank(&light), 2);
        assert_eq!(matrix_rank(&heavy), 1);
        assert_relative_eq!(heavy[[0, 0]], 1.5, epsilon = 1e-8);
        assert_relative_eq!(heavy[[1, 1]], 0.0, epsilon = 1e-8);
    }

    #[test]
    // Purpose
    // -------
    // Verify that entrywise thresholding produces exact structural zeros
    // below the threshold and shrinks the rest by λ.
    //
    // Given
    // -----
    // - A matrix mixing sub- and super-threshold magnitudes, λ = 1.
    //
    // Expect
    // ------
    // - Sub-threshold entries are exactly 0.0; others shrink by 1.
    fn entrywise_threshold_produces_structural_zeros() {
        // Arrange
        let m = array![[2.0, -0.5], [-3.0, 0.999]];

        // Act
        let out = soft_entrywise_threshold(&m, 1.0).unwrap();

        // Assert
        assert_relative_eq!(out[[0, 0]], 1.0, epsilon = TOL);
        assert_eq!(out[[0, 1]], 0.0);
        assert_relative_eq!(out[[1, 0]], -2.0, epsilon = TOL);
        assert_eq!(out[[1, 1]], 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that both operators reject a negative λ.
    //
    // Given
    // -----
    // - λ = -0.1 on a small matrix.
    //
    // Expect
    // ------
    // - `NegativeThreshold` from both entry points.
    fn negative_lambda_is_rejected() {
        // Arrange
        let m = array![[1.0, 0.0], [0.0, 1.0]];

        // Act / Assert
        assert!(matches!(
            soft_sv_threshold(&m, -0.1),
            Err(KronError::NegativeThreshold { .. })
        ));
        assert!(matches!(
            soft_entrywise_threshold(&m, -0.1),
            Err(KronError::NegativeThreshold { .. })
        ));
    }
}
