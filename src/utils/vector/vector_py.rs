use crate::py::to_py_err;
use crate::utils::vector::Vector;
use pyo3::prelude::*;

#[pymethods]
impl Vector {
    #[classattr]
    const __hash__: Option<Py<PyAny>> = None;

    fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }

    #[new]
    #[pyo3(signature = (x, y))]
    fn new_py(x: f32, y: f32) -> Self {
        Self::new(x, y)
    }

    #[getter(x)]
    fn x_py(&self) -> f32 {
        self.x()
    }

    #[getter(y)]
    fn y_py(&self) -> f32 {
        self.y()
    }

    fn __add__(&self, other: Vector) -> Vector {
        *self + other
    }

    fn __sub__(&self, other: Vector) -> Vector {
        *self - other
    }

    fn __mul__(&self, scalar: f32) -> Vector {
        *self * scalar
    }

    fn __truediv__(&self, scalar: f32) -> PyResult<Vector> {
        self.divide(scalar).map_err(to_py_err)
    }

    fn __eq__(&self, other: Vector) -> bool {
        self.equals(other)
    }

    fn __ne__(&self, other: Vector) -> bool {
        self.not_equals(other)
    }

    #[pyo3(name = "is_zero")]
    fn is_zero_py(&self) -> bool {
        self.is_zero()
    }

    #[staticmethod]
    #[pyo3(name = "normalize", signature = (vector))]
    fn normalize_py(vector: Vector) -> PyResult<Vector> {
        vector.normalize().map_err(to_py_err)
    }

    #[staticmethod]
    #[pyo3(name = "magnitude", signature = (vector))]
    fn magnitude_py(vector: Vector) -> f32 {
        vector.magnitude()
    }

    #[staticmethod]
    #[pyo3(name = "distance", signature = (vector1, vector2))]
    fn distance_py(vector1: Vector, vector2: Vector) -> f32 {
        vector1.distance(vector2)
    }

    #[staticmethod]
    #[pyo3(name = "dot_product", signature = (vector1, vector2))]
    fn dot_product_py(vector1: Vector, vector2: Vector) -> f32 {
        vector1.dot_product(vector2)
    }

    #[staticmethod]
    #[pyo3(name = "cross_product", signature = (vector1, vector2))]
    fn cross_product_py(vector1: Vector, vector2: Vector) -> f32 {
        vector1.cross_product(vector2)
    }

    #[staticmethod]
    #[pyo3(name = "angle_between", signature = (vector1, vector2))]
    fn angle_between_py(vector1: Vector, vector2: Vector) -> PyResult<f32> {
        vector1.angle_between(vector2).map_err(to_py_err)
    }
}
