#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::estimator::solver::{StepSchedule, ToeplitzSolverOptions};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Array → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
    PyReadonlyArray2,
};

/// Extract a 2-D float64 matrix from a numpy array, a pandas DataFrame,
/// or a nested sequence of floats.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray2<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            if frame_ro.as_slice().is_ok() {
                return Ok(frame_ro);
            }
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or nested sequence of float64",
        )
    })?;
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != ncols) {
        return Err(PyValueError::new_err("nested sequence rows must all have the same length"));
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    let matrix = Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(matrix.into_pyarray(py).readonly())
}

/// Copy a readonly 2-D numpy view into an owned `Array2`.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn to_owned_matrix(arr: &PyReadonlyArray2<'_, f64>) -> Array2<f64> {
    arr.as_array().to_owned()
}

/// Build solver options from optional Python keyword arguments, applying
/// the documented defaults for anything left as `None`.
#[cfg(feature = "python-bindings")]
pub fn extract_solver_options(
    tau: Option<f64>, tol: Option<f64>, max_iter: Option<usize>,
    stop_cond_interval: Option<usize>,
) -> PyResult<ToeplitzSolverOptions> {
    let defaults = ToeplitzSolverOptions::default();
    let opts = ToeplitzSolverOptions::new(
        tau.unwrap_or(defaults.tau),
        tol.unwrap_or(defaults.tol),
        max_iter.unwrap_or(defaults.max_iter),
        stop_cond_interval.unwrap_or(defaults.stop_cond_interval),
    )?;
    Ok(opts)
}

/// Extract a step schedule from either a scalar step size or a 1-D array
/// of per-iteration step sizes.
#[cfg(feature = "python-bindings")]
pub fn extract_step_schedule<'py>(tau: &Bound<'py, PyAny>) -> PyResult<StepSchedule> {
    if let Ok(scalar) = tau.extract::<f64>() {
        return Ok(StepSchedule::Constant(scalar));
    }

    if let Ok(arr_ro) = tau.extract::<PyReadonlyArray1<f64>>() {
        if let Ok(slice) = arr_ro.as_slice() {
            return Ok(StepSchedule::Scheduled(Array1::from(slice.to_vec())));
        }
    }

    let steps: Vec<f64> = tau.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a float step size or a 1-D float64 array of per-iteration step sizes",
        )
    })?;
    Ok(StepSchedule::Scheduled(Array1::from(steps)))
}
