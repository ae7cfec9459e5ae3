/// 2D vectors
pub mod vector;

/// Axis-aligned rectangles and region predicates
pub mod rect;

/// Sliding window smoothing for vector observations
pub mod moving_average;
