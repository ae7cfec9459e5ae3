pub use crate::utils::moving_average::VectorMovingAverageFilter;
pub use crate::utils::rect::Rect;
pub use crate::utils::vector::Vector;
pub use crate::video::annotation::{AnnotationLog, DrawStyle, DrawingSink};
pub use crate::video::background::{median_frame, subtract_background, BackgroundOptions};
pub use crate::video::frame::Frame;
pub use crate::video::source::{FrameSequence, FrameSource, RawVideo, VideoMetadata};
pub use crate::{Errors, EstimateClose};
