//! estimator — robust KronPCA covariance estimation core.
//!
//! Purpose
//! -------
//! Collect the optimization engine for robust Kronecker-product PCA: the
//! Pitsianis–Van Loan layout transform, the proximal shrinkage operators,
//! the Toeplitz diagonal-averaging projector, and the proximal-gradient
//! solvers that tie them together, plus the shared error and validation
//! infrastructure.
//!
//! Key behaviors
//! -------------
//! - Expose the two solver entry points
//!   [`prox_grad_robust_kron_pca`](solver::prox_grad_robust_kron_pca) and
//!   [`prox_grad_robust_toeplitz_kron_pca`](solver::prox_grad_robust_toeplitz_kron_pca),
//!   with their configuration types [`StepSchedule`](solver::StepSchedule)
//!   and [`ToeplitzSolverOptions`](solver::ToeplitzSolverOptions).
//! - Expose the layout transform ([`PvPermutation`](rearrange::PvPermutation),
//!   [`pv_rearrange`](rearrange::pv_rearrange),
//!   [`pv_rearrange_inv`](rearrange::pv_rearrange_inv)) and the
//!   [`PermutationCache`](rearrange::PermutationCache) for reuse across
//!   repeated fits.
//! - Centralize shape/configuration guards in [`validation`] and error
//!   reporting in [`errors`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Everything in this subtree is synchronous, single-threaded, and
//!   deterministic; the permutation cache is the only cross-call state
//!   and is owned by whoever created it.
//! - Entry points validate shapes and configuration eagerly and report
//!   failures via [`KronResult`](errors::KronResult); panics indicate
//!   programming errors, not bad caller input.
//!
//! Downstream usage
//! ----------------
//! - The `selection` subtree drives the constrained solver across folds
//!   and hyperparameter grids.
//! - Typical Rust callers import the main surface as:
//!
//!   ```rust
//!   use kronpca::estimator::{ToeplitzSolverOptions, prox_grad_robust_toeplitz_kron_pca};
//!
//!   # fn demo(cov: &ndarray::Array2<f64>) -> kronpca::estimator::errors::KronResult<()> {
//!   let opts = ToeplitzSolverOptions::default();
//!   let fit = prox_grad_robust_toeplitz_kron_pca(cov, 2, 3, 0.1, 0.05, &opts)?;
//!   let _ = (fit.rank, fit.sparsity);
//!   # Ok(())
//!   # }
//!   ```
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit tests; end-to-end behavior is
//!   exercised in the crate's integration tests together with the
//!   `selection` drivers.

pub mod errors;
pub mod linalg;
pub mod prox;
pub mod rearrange;
pub mod solver;
pub mod toeplitz;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{KronError, KronResult};
pub use self::rearrange::{PermutationCache, PvPermutation, pv_rearrange, pv_rearrange_inv};
pub use self::solver::{
    StepSchedule, ToeplitzFit, ToeplitzSolverOptions, prox_grad_robust_kron_pca,
    prox_grad_robust_toeplitz_kron_pca,
};
pub use self::toeplitz::build_toeplitz_projector;
