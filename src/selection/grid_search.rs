//! selection::grid_search — hyperparameter scanning and full-data refit.
//!
//! Purpose
//! -------
//! Scan a 2-D grid of `(λ_L, λ_S)` pairs, cross-validate every cell,
//! select the pair maximizing mean held-out log-likelihood, and refit the
//! Toeplitz-constrained solver once on the full dataset with the winning
//! pair.
//!
//! Key behaviors
//! -------------
//! - Per-fold results are stored in 3-D tables indexed by
//!   `(λ_L index, λ_S index, fold)` and returned whole for inspection.
//! - The mean log-likelihood surface averages over the fold axis;
//!   selection takes the first maximum in row-major scan order (strict
//!   improvement only), so ties resolve to the earliest cell.
//! - The refit covariance is the *uncentered*, population-normalized
//!   second moment `XᵀX/n` of the full table, and the refit always uses
//!   the selected pair.
//! - One PV permutation and one Toeplitz projector are built up front and
//!   shared across every cell, fold, and the final refit.
//!
//! Invariants & assumptions
//! ------------------------
//! - Cells are scanned serially in deterministic row-major order; given
//!   identical inputs, the entire outcome is bit-for-bit reproducible.
//! - All grid penalties are validated before the first fit, so a bad
//!   value at the end of a grid cannot waste a long scan.
//!
//! Downstream usage
//! ----------------
//! - This is the top-level model-selection entry point; the Python
//!   bindings expose it alongside the raw solvers.
//!
//! Testing notes
//! -------------
//! - Unit tests cover table shapes, rejection of degenerate cells during
//!   selection, the all-degenerate fallback, scan determinism, and the
//!   empty-grid guard. The integration suite exercises the full pipeline
//!   on seeded synthetic data.
use ndarray::{Array2, Array3, Axis, s};

use crate::estimator::rearrange::PermutationCache;
use crate::estimator::solver::{ToeplitzFit, ToeplitzSolverOptions, toeplitz_solve};
use crate::estimator::toeplitz::build_toeplitz_projector;
use crate::estimator::validation::validate_penalty;
use crate::selection::cross_validation::cross_validate_with;
use crate::selection::errors::SelectionResult;
use crate::selection::validation::{validate_features, validate_folds, validate_grids};

/// GridSearchOutcome — full results of a hyperparameter scan.
///
/// Fields
/// ------
/// - `refit`: the full-data fit at the selected pair, including the final
///   covariance estimate, rank, and sparsity.
/// - `selected`: the winning `(λ_L index, λ_S index)` grid cell;
///   unambiguous even when a grid contains duplicate values.
/// - `lambda_l_opt`, `lambda_s_opt`: the selected penalty pair.
/// - `log_likelihoods`, `ranks`, `sparsities`: per-fold result tables of
///   shape `(len(λ_L grid), len(λ_S grid), num_folds)`.
///
/// Invariants
/// ----------
/// - `lambda_l_opt == lambda_l_grid[selected.0]` and
///   `lambda_s_opt == lambda_s_grid[selected.1]`, and `refit` was
///   produced with exactly that pair.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSearchOutcome {
    pub refit: ToeplitzFit,
    pub selected: (usize, usize),
    pub lambda_l_opt: f64,
    pub lambda_s_opt: f64,
    pub log_likelihoods: Array3<f64>,
    pub ranks: Array3<f64>,
    pub sparsities: Array3<f64>,
}

/// Scan a `(λ_L, λ_S)` grid by cross-validation and refit on the winner.
///
/// Parameters
/// ----------
/// - `observations`: `&Array2<f64>`
///   Lagged observation table; rows are time samples, columns are the
///   `ps·pt` features.
/// - `ps`, `pt`: `usize`
///   Spatial and temporal dimensions.
/// - `lambda_l_grid`, `lambda_s_grid`: `&[f64]`
///   Candidate penalty values for the low-rank and sparse components.
/// - `num_folds`: `usize`
///   Fold count `K ≥ 2` passed to every cell's cross-validation.
/// - `opts`: `&ToeplitzSolverOptions`
///   Solver tuning shared by every fit, including the refit.
///
/// Returns
/// -------
/// `SelectionResult<GridSearchOutcome>`
///   The selected pair, the full-data refit, and the per-fold result
///   tables.
///
/// Errors
/// ------
/// - `SelectionError::EmptyGrid` if either grid is empty.
/// - `SelectionError::InvalidFoldCount` / `InsufficientData` /
///   `FeatureMismatch` from eager validation.
/// - `SelectionError::Estimator` for invalid grid penalties or propagated
///   solver failures.
/// - `SelectionError::SingularCovariance` when a non-degenerate per-fold
///   fit cannot be inverted for scoring.
pub fn grid_search_toeplitz_kron_pca(
    observations: &Array2<f64>, ps: usize, pt: usize, lambda_l_grid: &[f64],
    lambda_s_grid: &[f64], num_folds: usize, opts: &ToeplitzSolverOptions,
) -> SelectionResult<GridSearchOutcome> {
    validate_grids(lambda_l_grid, lambda_s_grid)?;
    for &lambda in lambda_l_grid.iter().chain(lambda_s_grid.iter()) {
        validate_penalty(lambda)?;
    }
    validate_folds(observations.nrows(), num_folds)?;

    let mut cache = PermutationCache::new();
    let permutation = cache.get_or_compute(ps, pt)?;
    validate_features(observations, permutation.ps(), permutation.pt())?;
    let projector = build_toeplitz_projector(pt)?;

    let num_l = lambda_l_grid.len();
    let num_s = lambda_s_grid.len();
    let mut log_likelihoods = Array3::<f64>::zeros((num_l, num_s, num_folds));
    let mut ranks = Array3::<f64>::zeros((num_l, num_s, num_folds));
    let mut sparsities = Array3::<f64>::zeros((num_l, num_s, num_folds));

    for (l_idx, &lambda_l) in lambda_l_grid.iter().enumerate() {
        for (s_idx, &lambda_s) in lambda_s_grid.iter().enumerate() {
            log::debug!(
                "grid cell ({l_idx}, {s_idx}): lambda_L = {lambda_l}, lambda_S = {lambda_s}"
            );

            let cell = cross_validate_with(
                &permutation,
                &projector,
                observations,
                lambda_l,
                lambda_s,
                num_folds,
                opts,
            )?;

            log_likelihoods
                .slice_mut(s![l_idx, s_idx, ..])
                .assign(&cell.log_likelihoods);
            ranks.slice_mut(s![l_idx, s_idx, ..]).assign(&cell.ranks);
            sparsities.slice_mut(s![l_idx, s_idx, ..]).assign(&cell.sparsities);
        }
    }

    // Mean over the fold axis; a single −∞ fold drags its cell to −∞.
    let mean_surface = log_likelihoods.mean_axis(Axis(2)).unwrap();
    let mut best = (0, 0);
    let mut best_mean = f64::NEG_INFINITY;
    for l_idx in 0..num_l {
        for s_idx in 0..num_s {
            if mean_surface[[l_idx, s_idx]] > best_mean {
                best_mean = mean_surface[[l_idx, s_idx]];
                best = (l_idx, s_idx);
            }
        }
    }
    let lambda_l_opt = lambda_l_grid[best.0];
    let lambda_s_opt = lambda_s_grid[best.1];
    log::debug!(
        "selected cell ({}, {}): lambda_L = {lambda_l_opt}, lambda_S = {lambda_s_opt}, \
         mean log-likelihood = {best_mean}",
        best.0,
        best.1
    );

    let n = observations.nrows() as f64;
    let sample_cov = observations.t().dot(observations) / n;
    let refit = toeplitz_solve(&permutation, &projector, &sample_cov, lambda_l_opt, lambda_s_opt, opts)?;

    Ok(GridSearchOutcome {
        refit,
        selected: best,
        lambda_l_opt,
        lambda_s_opt,
        log_likelihoods,
        ranks,
        sparsities,
    })
}
