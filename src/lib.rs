use thiserror::Error;

/// Geometry primitives and the motion smoothing filter
pub mod utils;

/// Frame sources, background model and annotation sinks the geometry is used with
pub mod video;

/// Synthetic motion generators used in benchmarks and demos
pub mod examples;

pub mod prelude;

#[cfg(feature = "python")]
mod py;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Errors {
    #[error("Division by zero: {0}")]
    DivisionByZero(String),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),
}

pub(crate) const EPS: f32 = 0.00001;

/// Tolerance comparison for float-backed values.
///
/// Equality on the geometry types is exact; use this one after arithmetic chains.
///
pub trait EstimateClose {
    fn almost_same(&self, other: &Self, eps: f32) -> bool;
}

impl EstimateClose for f32 {
    fn almost_same(&self, other: &Self, eps: f32) -> bool {
        (self - other).abs() < eps
    }
}
