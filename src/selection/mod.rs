//! selection — model selection drivers for the KronPCA estimator.
//!
//! Purpose
//! -------
//! Collect the hyperparameter machinery built on top of the estimation
//! core: k-fold cross-validation scoring of individual `(λ_L, λ_S)`
//! pairs, and the grid search that scans a 2-D penalty grid, picks the
//! pair maximizing mean held-out log-likelihood, and refits on the full
//! dataset.
//!
//! Key behaviors
//! -------------
//! - Expose the two driver entry points
//!   [`cross_validate_toeplitz_fit`](cross_validation::cross_validate_toeplitz_fit)
//!   and
//!   [`grid_search_toeplitz_kron_pca`](grid_search::grid_search_toeplitz_kron_pca),
//!   with their outcome types [`CvOutcome`](cross_validation::CvOutcome)
//!   and [`GridSearchOutcome`](grid_search::GridSearchOutcome).
//! - Centralize fold/feature/grid guards in [`validation`] and error
//!   reporting in [`errors`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Both drivers are synchronous and deterministic: folds are contiguous
//!   blocks, grid cells are scanned serially in row-major order, and
//!   identical inputs reproduce identical outputs bit for bit.
//! - Expensive shared state (the PV permutation and the Toeplitz
//!   projector) is built once per driver call and reused across folds and
//!   cells.
//!
//! Downstream usage
//! ----------------
//! - Typical callers run the grid search end to end:
//!
//!   ```rust
//!   use kronpca::estimator::ToeplitzSolverOptions;
//!   use kronpca::selection::grid_search_toeplitz_kron_pca;
//!
//!   # fn demo(x: &ndarray::Array2<f64>) -> kronpca::selection::errors::SelectionResult<()> {
//!   let opts = ToeplitzSolverOptions::default();
//!   let outcome = grid_search_toeplitz_kron_pca(x, 2, 3, &[0.05, 0.1], &[0.01, 0.05], 5, &opts)?;
//!   let _ = (outcome.lambda_l_opt, outcome.refit.cov_est);
//!   # Ok(())
//!   # }
//!   ```
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit tests; the full
//!   data-to-selected-model pipeline is exercised in the crate's
//!   integration tests.

pub mod cross_validation;
pub mod errors;
pub mod grid_search;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::cross_validation::{CvOutcome, cross_validate_toeplitz_fit};
pub use self::errors::{SelectionError, SelectionResult};
pub use self::grid_search::{GridSearchOutcome, grid_search_toeplitz_kron_pca};
