use crate::py::to_py_err;
use crate::utils::rect::{Rect, DEFAULT_PERCENTAGE_THRESHOLD};
use crate::utils::vector::Vector;
use pyo3::prelude::*;

#[pymethods]
impl Rect {
    #[classattr]
    const __hash__: Option<Py<PyAny>> = None;

    fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }

    #[new]
    #[pyo3(signature = (position, width, height))]
    fn new_py(position: Vector, width: f32, height: f32) -> Self {
        Self::new(position, width, height)
    }

    #[getter(position)]
    fn position_py(&self) -> Vector {
        self.position()
    }

    #[getter(width)]
    fn width_py(&self) -> f32 {
        self.width()
    }

    #[getter(height)]
    fn height_py(&self) -> f32 {
        self.height()
    }

    #[pyo3(name = "get_centroid")]
    fn centroid_py(&self) -> Vector {
        self.centroid()
    }

    #[staticmethod]
    #[pyo3(
        name = "is_rect_within_rect",
        signature = (outer_rect, inner_rect, percentage_threshold = DEFAULT_PERCENTAGE_THRESHOLD)
    )]
    fn is_rect_within_rect_py(
        outer_rect: Rect,
        inner_rect: Rect,
        percentage_threshold: f32,
    ) -> PyResult<bool> {
        Rect::is_rect_within_rect(&outer_rect, &inner_rect, Some(percentage_threshold))
            .map_err(to_py_err)
    }

    #[staticmethod]
    #[pyo3(name = "is_point_within_rect", signature = (point, rect))]
    fn is_point_within_rect_py(point: Vector, rect: Rect) -> bool {
        Rect::is_point_within_rect(&point, &rect)
    }
}
