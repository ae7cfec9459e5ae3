use crate::utils::moving_average::moving_average_py::PyVectorMovingAverageFilter;
use crate::utils::rect::Rect;
use crate::utils::vector::Vector;
use crate::Errors;
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;

pub(crate) fn to_py_err(e: anyhow::Error) -> PyErr {
    match e.downcast_ref::<Errors>() {
        Some(Errors::DivisionByZero(m)) => PyZeroDivisionError::new_err(m.clone()),
        Some(Errors::InvalidOperation(m)) | Some(Errors::InvalidArgument(m)) => {
            PyValueError::new_err(m.clone())
        }
        Some(Errors::ResourceUnavailable(m)) => PyIOError::new_err(m.clone()),
        None => PyRuntimeError::new_err(format!("{:?}", e)),
    }
}

#[pymodule]
#[pyo3(name = "trackzone")]
fn trackzone(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<Vector>()?;
    m.add_class::<Rect>()?;
    m.add_class::<PyVectorMovingAverageFilter>()?;
    Ok(())
}
