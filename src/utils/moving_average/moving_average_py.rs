use crate::py::to_py_err;
use crate::utils::moving_average::VectorMovingAverageFilter;
use crate::utils::vector::Vector;
use pyo3::prelude::*;

#[pyclass]
#[pyo3(name = "VectorMovingAverageFilter")]
pub struct PyVectorMovingAverageFilter {
    filter: VectorMovingAverageFilter,
}

#[pymethods]
impl PyVectorMovingAverageFilter {
    #[new]
    #[pyo3(signature = (window_size))]
    pub fn new(window_size: i64) -> PyResult<Self> {
        Ok(Self {
            filter: VectorMovingAverageFilter::from_signed_window(window_size)
                .map_err(to_py_err)?,
        })
    }

    #[getter]
    pub fn window_size(&self) -> usize {
        self.filter.window_size()
    }

    #[pyo3(signature = (value))]
    pub fn smoothen_value(&mut self, value: Vector) -> Vector {
        self.filter.smoothen_value(value)
    }

    pub fn reset(&mut self) {
        self.filter.reset()
    }

    fn __len__(&self) -> usize {
        self.filter.len()
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.filter)
    }
}
