/// Raster frame buffer
pub mod frame;

/// Frame sources and video metadata
pub mod source;

/// Median background model and background subtraction
pub mod background;

/// Annotation commands produced from geometry
pub mod annotation;
