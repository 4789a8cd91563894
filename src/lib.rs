//! kronpca — robust Kronecker-product PCA covariance estimation with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the robust KronPCA solvers and model-selection drivers to Python via the
//! `_kronpca` extension module. When the `python-bindings` feature is enabled,
//! this module defines the Python-facing functions, result classes, and
//! submodules used by the `kronpca` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`estimator` and `selection`) as the
//!   public crate surface.
//! - Define `#[pyfunction]` entry points, `#[pyclass]` result wrappers, and
//!   the `#[pymodule]` initializer for the `_kronpca` Python extension.
//! - Create and register Python submodules (`estimator`, `selection`) under
//!   `kronpca` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible functions mirror
//!   the invariants and signatures of their Rust counterparts (e.g.
//!   [`ToeplitzFit`](estimator::ToeplitzFit),
//!   [`GridSearchOutcome`](selection::GridSearchOutcome)).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed items live under `_kronpca.<submodule>` and are typically
//!   wrapped by thin pure-Python facades in the top-level `kronpca` package.
//! - Matrix conventions (row-major layout, `ps·pt` feature ordering) follow
//!   the documentation of the underlying Rust modules.
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_kronpca` module defined here
//!   and wraps its functions in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by the crate's integration tests; smoke tests for the PyO3 bindings
//!   verify that functions can be called and results round-tripped from
//!   Python.

pub mod estimator;
pub mod selection;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1, PyArray2, PyArray3};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    estimator::solver::{
        ToeplitzFit, prox_grad_robust_kron_pca, prox_grad_robust_toeplitz_kron_pca,
    },
    selection::{
        cross_validation::cross_validate_toeplitz_fit,
        grid_search::{GridSearchOutcome, grid_search_toeplitz_kron_pca},
    },
    utils::{extract_f64_matrix, extract_solver_options, extract_step_schedule, to_owned_matrix},
};

/// ToeplitzKronPCAFit — Python-facing wrapper for a constrained solve result.
///
/// Purpose
/// -------
/// Present the covariance estimate and diagnostics of a Toeplitz-constrained
/// robust KronPCA solve to Python callers as a read-only result object.
///
/// Key behaviors
/// -------------
/// - Expose `cov_est` as a freshly allocated 2-D numpy array and the scalar
///   diagnostics (`rank`, `sparsity`, `iterations`, `converged`) as
///   Python properties.
///
/// Fields
/// ------
/// - `inner`: [`ToeplitzFit`]
///   Rust-side result holding the estimate and diagnostics.
///
/// Notes
/// -----
/// - This type is part of the Python FFI surface; Rust code should use
///   [`ToeplitzFit`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "kronpca.estimator")]
pub struct ToeplitzKronPCAFit {
    /// Underlying Rust fit result.
    inner: ToeplitzFit,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl ToeplitzKronPCAFit {
    /// The `(ps·pt)×(ps·pt)` covariance estimate.
    #[getter]
    pub fn cov_est<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.cov_est.clone().into_pyarray(py)
    }

    /// Post-projection rank of the recovered Kronecker factor.
    #[getter]
    pub fn rank(&self) -> usize {
        self.inner.rank
    }

    /// Fraction of structurally nonzero entries in the sparse component.
    #[getter]
    pub fn sparsity(&self) -> f64 {
        self.inner.sparsity
    }

    /// Number of iterations actually run.
    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }

    /// Whether the RMS convergence criterion fired before the cap.
    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged
    }
}

/// GridSearchResult — Python-facing wrapper for a hyperparameter scan.
///
/// Purpose
/// -------
/// Present the selected penalty pair, the full-data refit, and the per-fold
/// result tables of a grid search to Python callers.
///
/// Key behaviors
/// -------------
/// - Expose the refit covariance as a 2-D numpy array, the result tables as
///   3-D numpy arrays indexed `(λ_L index, λ_S index, fold)`, and the
///   selected pair plus refit diagnostics as scalars.
///
/// Fields
/// ------
/// - `inner`: [`GridSearchOutcome`]
///   Rust-side outcome holding the tables and the refit.
///
/// Notes
/// -----
/// - This type is part of the Python FFI surface; Rust code should use
///   [`GridSearchOutcome`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "kronpca.selection")]
pub struct GridSearchResult {
    /// Underlying Rust grid-search outcome.
    inner: GridSearchOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl GridSearchResult {
    /// The full-data refit covariance estimate at the selected pair.
    #[getter]
    pub fn cov_est<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.refit.cov_est.clone().into_pyarray(py)
    }

    /// Winning `(λ_L index, λ_S index)` grid cell.
    #[getter]
    pub fn selected(&self) -> (usize, usize) {
        self.inner.selected
    }

    /// Selected low-rank penalty.
    #[getter]
    pub fn lambda_l_opt(&self) -> f64 {
        self.inner.lambda_l_opt
    }

    /// Selected sparse penalty.
    #[getter]
    pub fn lambda_s_opt(&self) -> f64 {
        self.inner.lambda_s_opt
    }

    /// Rank of the refit's recovered Kronecker factor.
    #[getter]
    pub fn rank(&self) -> usize {
        self.inner.refit.rank
    }

    /// Sparsity of the refit's sparse component.
    #[getter]
    pub fn sparsity(&self) -> f64 {
        self.inner.refit.sparsity
    }

    /// Whether the refit converged before the iteration cap.
    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.refit.converged
    }

    /// Per-fold log-likelihood table, shape `(len(λ_L), len(λ_S), folds)`.
    #[getter]
    pub fn log_likelihoods<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray3<f64>> {
        self.inner.log_likelihoods.clone().into_pyarray(py)
    }

    /// Per-fold rank table, same shape as `log_likelihoods`.
    #[getter]
    pub fn ranks<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray3<f64>> {
        self.inner.ranks.clone().into_pyarray(py)
    }

    /// Per-fold sparsity table, same shape as `log_likelihoods`.
    #[getter]
    pub fn sparsities<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray3<f64>> {
        self.inner.sparsities.clone().into_pyarray(py)
    }
}

/// Unconstrained robust KronPCA solve over a fixed iteration count.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "robust_kron_pca",
    text_signature = "(sample_cov, ps, pt, lambda_l, lambda_s, num_iter, /, tau=0.1)",
    signature = (sample_cov, ps, pt, lambda_l, lambda_s, num_iter, tau = None)
)]
fn py_robust_kron_pca<'py>(
    py: Python<'py>, sample_cov: &Bound<'py, PyAny>, ps: usize, pt: usize, lambda_l: f64,
    lambda_s: f64, num_iter: usize, tau: Option<&Bound<'py, PyAny>>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let cov = to_owned_matrix(&extract_f64_matrix(py, sample_cov)?);
    let step = match tau {
        Some(obj) => extract_step_schedule(obj)?,
        None => crate::estimator::solver::StepSchedule::Constant(0.1),
    };
    let estimate = prox_grad_robust_kron_pca(&cov, ps, pt, lambda_l, lambda_s, num_iter, &step)?;
    Ok(estimate.into_pyarray(py))
}

/// Toeplitz-constrained robust KronPCA solve with RMS convergence checks.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "robust_toeplitz_kron_pca",
    text_signature = "(sample_cov, ps, pt, lambda_l, lambda_s, /, tau=0.1, tol=1e-8, \
                      max_iter=1000000, stop_cond_interval=20)",
    signature = (sample_cov, ps, pt, lambda_l, lambda_s, tau = None, tol = None, max_iter = None, stop_cond_interval = None)
)]
fn py_robust_toeplitz_kron_pca<'py>(
    py: Python<'py>, sample_cov: &Bound<'py, PyAny>, ps: usize, pt: usize, lambda_l: f64,
    lambda_s: f64, tau: Option<f64>, tol: Option<f64>, max_iter: Option<usize>,
    stop_cond_interval: Option<usize>,
) -> PyResult<ToeplitzKronPCAFit> {
    let cov = to_owned_matrix(&extract_f64_matrix(py, sample_cov)?);
    let opts = extract_solver_options(tau, tol, max_iter, stop_cond_interval)?;
    let fit = prox_grad_robust_toeplitz_kron_pca(&cov, ps, pt, lambda_l, lambda_s, &opts)?;
    Ok(ToeplitzKronPCAFit { inner: fit })
}

/// K-fold cross-validation of one penalty pair; returns per-fold
/// `(log_likelihoods, ranks, sparsities)` arrays.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "cross_validate_toeplitz_fit",
    text_signature = "(observations, ps, pt, lambda_l, lambda_s, /, num_folds=10, tau=0.1, \
                      tol=1e-8, max_iter=1000000, stop_cond_interval=20)",
    signature = (observations, ps, pt, lambda_l, lambda_s, num_folds = 10, tau = None, tol = None, max_iter = None, stop_cond_interval = None)
)]
#[allow(clippy::type_complexity)]
fn py_cross_validate_toeplitz_fit<'py>(
    py: Python<'py>, observations: &Bound<'py, PyAny>, ps: usize, pt: usize, lambda_l: f64,
    lambda_s: f64, num_folds: usize, tau: Option<f64>, tol: Option<f64>, max_iter: Option<usize>,
    stop_cond_interval: Option<usize>,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let x = to_owned_matrix(&extract_f64_matrix(py, observations)?);
    let opts = extract_solver_options(tau, tol, max_iter, stop_cond_interval)?;
    let outcome = cross_validate_toeplitz_fit(&x, ps, pt, lambda_l, lambda_s, num_folds, &opts)?;
    Ok((
        outcome.log_likelihoods.into_pyarray(py),
        outcome.ranks.into_pyarray(py),
        outcome.sparsities.into_pyarray(py),
    ))
}

/// Grid search over `(λ_L, λ_S)` pairs with a full-data refit on the winner.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "grid_search_toeplitz_kron_pca",
    text_signature = "(observations, ps, pt, lambda_l_vals, lambda_s_vals, /, num_folds=10, \
                      tau=0.1, tol=1e-8, max_iter=1000000, stop_cond_interval=20)",
    signature = (observations, ps, pt, lambda_l_vals, lambda_s_vals, num_folds = 10, tau = None, tol = None, max_iter = None, stop_cond_interval = None)
)]
fn py_grid_search_toeplitz_kron_pca<'py>(
    py: Python<'py>, observations: &Bound<'py, PyAny>, ps: usize, pt: usize,
    lambda_l_vals: Vec<f64>, lambda_s_vals: Vec<f64>, num_folds: usize, tau: Option<f64>,
    tol: Option<f64>, max_iter: Option<usize>, stop_cond_interval: Option<usize>,
) -> PyResult<GridSearchResult> {
    let x = to_owned_matrix(&extract_f64_matrix(py, observations)?);
    let opts = extract_solver_options(tau, tol, max_iter, stop_cond_interval)?;
    let outcome = grid_search_toeplitz_kron_pca(
        &x,
        ps,
        pt,
        &lambda_l_vals,
        &lambda_s_vals,
        num_folds,
        &opts,
    )?;
    Ok(GridSearchResult { inner: outcome })
}

/// _kronpca — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_kronpca` Python module and register its submodules used by
/// the public `kronpca` package.
///
/// Key behaviors
/// -------------
/// - Create `estimator` and `selection` submodules.
/// - Attach those submodules to the parent `_kronpca` module.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths from Python.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `_kronpca`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating submodules or manipulating `sys.modules` fails.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _kronpca<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let estimator_mod = PyModule::new(_py, "estimator")?;
    let selection_mod = PyModule::new(_py, "selection")?;
    estimator_bindings(_py, m, &estimator_mod)?;
    selection_bindings(_py, m, &selection_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("kronpca.estimator", estimator_mod)?;

    _py.import("sys")?
        .getattr("modules")?
        .set_item("kronpca.selection", selection_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn estimator_bindings<'py>(
    _py: Python, kronpca: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<ToeplitzKronPCAFit>()?;
    m.add_function(wrap_pyfunction!(py_robust_kron_pca, m)?)?;
    m.add_function(wrap_pyfunction!(py_robust_toeplitz_kron_pca, m)?)?;
    kronpca.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn selection_bindings<'py>(
    _py: Python, kronpca: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<GridSearchResult>()?;
    m.add_function(wrap_pyfunction!(py_cross_validate_toeplitz_fit, m)?)?;
    m.add_function(wrap_pyfunction!(py_grid_search_toeplitz_kron_pca, m)?)?;
    kronpca.add_submodule(m)?;
    Ok(())
}
