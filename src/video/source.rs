use crate::video::frame::Frame;
use crate::Errors;
use anyhow::Result;
use itertools::Itertools;
use log::debug;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Properties of an opened video
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoMetadata {
    pub frame_rate: f32,
    pub frame_count: usize,
    pub frame_width: usize,
    pub frame_height: usize,
}

/// Rounds to the nearest integer, halves go to the even neighbour
fn round_half_even(v: f64) -> f64 {
    let r = v.round();
    if (v - v.trunc()).abs() == 0.5 && r % 2.0 != 0.0 {
        r - v.signum()
    } else {
        r
    }
}

impl VideoMetadata {
    /// Duration rounded to whole seconds, ties to even; `0` when the frame rate is unknown
    pub fn duration_secs(&self) -> u64 {
        if self.frame_rate > 0.0 {
            round_half_even(self.frame_count as f64 / self.frame_rate as f64) as u64
        } else {
            0
        }
    }
}

/// Random access to decoded frames
pub trait FrameSource {
    fn metadata(&self) -> VideoMetadata;

    /// # Errors
    /// [`Errors::InvalidArgument`] for an index past the last frame,
    /// [`Errors::ResourceUnavailable`] when the underlying storage can't be read.
    ///
    fn read_frame(&mut self, index: usize) -> Result<Frame>;
}

fn out_of_range(index: usize, frame_count: usize) -> anyhow::Error {
    Errors::InvalidArgument(format!(
        "frame {} requested, the source has {} frames",
        index, frame_count
    ))
    .into()
}

/// Frames held in memory
#[derive(Debug, Clone)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    frame_rate: f32,
}

impl FrameSequence {
    /// # Errors
    /// [`Errors::InvalidArgument`] when the frames don't share the same shape.
    ///
    pub fn new(frames: Vec<Frame>, frame_rate: f32) -> Result<Self> {
        if !frames.iter().map(|f| f.shape()).all_equal() {
            return Err(
                Errors::InvalidArgument("all frames of a sequence must share a shape".into())
                    .into(),
            );
        }
        Ok(Self { frames, frame_rate })
    }
}

impl FrameSource for FrameSequence {
    fn metadata(&self) -> VideoMetadata {
        let (frame_width, frame_height) = self
            .frames
            .first()
            .map(|f| (f.width(), f.height()))
            .unwrap_or_default();
        VideoMetadata {
            frame_rate: self.frame_rate,
            frame_count: self.frames.len(),
            frame_width,
            frame_height,
        }
    }

    fn read_frame(&mut self, index: usize) -> Result<Frame> {
        self.frames
            .get(index)
            .cloned()
            .ok_or_else(|| out_of_range(index, self.frames.len()))
    }
}

/// Headerless file of concatenated frames with known geometry
#[derive(Debug)]
pub struct RawVideo {
    path: PathBuf,
    file: File,
    width: usize,
    height: usize,
    channels: usize,
    frame_rate: f32,
    frame_count: usize,
}

impl RawVideo {
    /// Opens the file and derives the frame count from its size.
    ///
    /// # Errors
    /// [`Errors::ResourceUnavailable`] when the file can't be opened or its size is not a
    /// whole number of frames.
    ///
    pub fn open<P: AsRef<Path>>(
        path: P,
        width: usize,
        height: usize,
        channels: usize,
        frame_rate: f32,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let unavailable =
            |reason: String| Errors::ResourceUnavailable(format!("{}: {}", path.display(), reason));

        let file = File::open(&path).map_err(|e| unavailable(e.to_string()))?;
        let len = file
            .metadata()
            .map_err(|e| unavailable(e.to_string()))?
            .len() as usize;

        let frame_size = width * height * channels;
        if frame_size == 0 || len % frame_size != 0 {
            return Err(unavailable(format!(
                "{} bytes is not a whole number of {}x{}x{} frames",
                len, width, height, channels
            ))
            .into());
        }

        let frame_count = len / frame_size;
        debug!("Opened {} with {} frames", path.display(), frame_count);

        Ok(Self {
            path,
            file,
            width,
            height,
            channels,
            frame_rate,
            frame_count,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn frame_size(&self) -> usize {
        self.width * self.height * self.channels
    }
}

impl FrameSource for RawVideo {
    fn metadata(&self) -> VideoMetadata {
        VideoMetadata {
            frame_rate: self.frame_rate,
            frame_count: self.frame_count,
            frame_width: self.width,
            frame_height: self.height,
        }
    }

    fn read_frame(&mut self, index: usize) -> Result<Frame> {
        if index >= self.frame_count {
            return Err(out_of_range(index, self.frame_count));
        }

        let offset = (index * self.frame_size()) as u64;
        let mut data = vec![0; self.frame_size()];
        self.file
            .seek(SeekFrom::Start(offset))
            .and_then(|_| self.file.read_exact(&mut data))
            .map_err(|e| {
                Errors::ResourceUnavailable(format!("{}: {}", self.path.display(), e))
            })?;

        Frame::from_raw(self.width, self.height, self.channels, data)
    }
}
