//! estimator::toeplitz — temporal shift-invariance projector.
//!
//! Purpose
//! -------
//! Build the fixed linear map `P` that collapses the `pt²` rows of a
//! PV-rearranged matrix into `2·pt − 1` diagonal-averaged rows, one per
//! temporal offset. Rows of the rearranged image that a Toeplitz temporal
//! structure forces to be equal are combined with orthonormal weights, so
//! `P` preserves energy rather than merely averaging, and `Pᵀ` is the
//! adjoint that spreads each offset row back over its diagonal (a
//! projection — information is lost by design).
//!
//! Key behaviors
//! -------------
//! - [`build_toeplitz_projector`] returns `P` of shape `(2·pt−1, pt²)`.
//!   Row `offset + pt − 1` (for `offset` in `−(pt−1) … pt−1`) is nonzero
//!   exactly at the linear indices of the `offset`-th diagonal of the
//!   *transposed* `pt×pt` row-major index grid, each entry
//!   `1/√(pt − |offset|)`.
//! - Every row of `P` has unit ℓ2 norm.
//!
//! Invariants & assumptions
//! ------------------------
//! - The construction intentionally diverges from the structural formula
//!   in Greenewald & Hero (Eq. 16); the diagonal-index map implemented
//!   here is the authoritative contract, not the paper's equation.
//! - `P` depends only on `pt`; the spatial dimension never enters.
//!
//! Downstream usage
//! ----------------
//! - The Toeplitz-constrained solver premultiplies the rearranged
//!   covariance by `P`, iterates in offset space, and maps back through
//!   `Pᵀ` for reconstruction and the rank diagnostic. Its per-row sparse
//!   thresholds reuse the same `1/√(pt − |offset|)` weights.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the exact `pt = 2` matrix, check unit row norms and
//!   per-row support counts for larger `pt`, and verify the `pt = 1`
//!   degenerate case (a 1×1 identity).
use ndarray::Array2;

use crate::estimator::errors::{KronError, KronResult};

/// Build the Toeplitz diagonal-averaging projector for temporal dimension
/// `pt`.
///
/// Parameters
/// ----------
/// - `pt`: `usize`
///   Temporal dimension. Must be at least 1.
///
/// Returns
/// -------
/// `KronResult<Array2<f64>>`
///   `P` of shape `(2·pt−1, pt²)`. Row `offset + pt − 1` carries weight
///   `1/√(pt − |offset|)` on the `pt − |offset|` rearranged-row indices
///   belonging to temporal offset `offset`, and zero elsewhere.
///
/// Errors
/// ------
/// - `KronError::InvalidDimensions` if `pt == 0`.
///
/// Notes
/// -----
/// - The nonzero columns of the offset row are the diagonal entries of
///   the transposed row-major index grid: for `offset ≥ 0` the indices
///   `(i + offset)·pt + i`, and for `offset < 0` the indices
///   `i·pt + i + |offset|`, with `i` ranging over the diagonal length.
pub fn build_toeplitz_projector(pt: usize) -> KronResult<Array2<f64>> {
    if pt == 0 {
        return Err(KronError::InvalidDimensions { ps: 1, pt });
    }

    let mut projector = Array2::<f64>::zeros((2 * pt - 1, pt * pt));
    for offset in -(pt as isize - 1)..=(pt as isize - 1) {
        let magnitude = offset.unsigned_abs();
        let diag_len = pt - magnitude;
        let weight = 1.0 / (diag_len as f64).sqrt();
        let row = (offset + pt as isize - 1) as usize;
        for i in 0..diag_len {
            let col = if offset >= 0 { (i + magnitude) * pt + i } else { i * pt + i + magnitude };
            projector[[row, col]] = weight;
        }
    }
    Ok(projector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The exact projector for pt = 2 (hand-computed).
    // - Unit ℓ2 row norms and per-row support counts for pt up to 6.
    // - The pt = 1 degenerate case and the pt = 0 guard.
    //
    // They intentionally DO NOT cover:
    // - Interaction with the solver's weighted sparse threshold, which is
    //   exercised in `estimator::solver`.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-12;

    #[test]
    // Purpose
    // -------
    // Pin the exact pt = 2 projector.
    //
    // Given
    // -----
    // - pt = 2, so offsets -1, 0, 1 map to rows 0, 1, 2 over the
    //   transposed index grid [[0, 2], [1, 3]].
    //
    // Expect
    // ------
    // - Row 0 hits column 1 with weight 1, row 1 hits columns 0 and 3
    //   with weight 1/√2, row 2 hits column 2 with weight 1.
    fn projector_matches_hand_computation_for_pt_2() {
        // Arrange
        let inv_sqrt2 = 1.0 / 2.0_f64.sqrt();

        // Act
        let p = build_toeplitz_projector(2).unwrap();

        // Assert
        let expected = array![
            [0.0, 1.0, 0.0, 0.0],
            [inv_sqrt2, 0.0, 0.0, inv_sqrt2],
            [0.0, 0.0, 1.0, 0.0]
        ];
        assert_eq!(p.dim(), (3, 4));
        for (a, b) in p.iter().zip(expected.iter()) {
            assert_relative_eq!(a, b, epsilon = TOL);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify energy preservation: every row of P has unit ℓ2 norm, and
    // the offset row supports exactly pt − |offset| columns.
    //
    // Given
    // -----
    // - pt in 1..=6.
    //
    // Expect
    // ------
    // - Σ_col P[row, col]² == 1 for every row; nonzero counts match the
    //   diagonal lengths.
    fn rows_have_unit_norm_and_expected_support() {
        for pt in 1usize..=6 {
            // Arrange
            let p = build_toeplitz_projector(pt).unwrap();
            assert_eq!(p.dim(), (2 * pt - 1, pt * pt));

            for row in 0..2 * pt - 1 {
                // Act
                let offset = row as isize - (pt as isize - 1);
                let norm_sq: f64 = p.row(row).iter().map(|x| x * x).sum();
                let support = p.row(row).iter().filter(|&&x| x != 0.0).count();

                // Assert
                assert_relative_eq!(norm_sq, 1.0, epsilon = TOL);
                assert_eq!(support, pt - offset.unsigned_abs());
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the degenerate pt = 1 projector and the pt = 0 guard.
    //
    // Given
    // -----
    // - pt = 1 (single offset) and pt = 0 (invalid).
    //
    // Expect
    // ------
    // - A 1×1 matrix [[1.0]] for pt = 1; InvalidDimensions for pt = 0.
    fn degenerate_and_invalid_pt() {
        // Act
        let p = build_toeplitz_projector(1).unwrap();

        // Assert
        assert_eq!(p, array![[1.0]]);
        assert!(matches!(
            build_toeplitz_projector(0),
            Err(KronError::InvalidDimensions { .. })
        ));
    }
}
