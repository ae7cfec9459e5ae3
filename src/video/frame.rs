use crate::utils::vector::Vector;
use crate::Errors;
use anyhow::Result;

/// Interleaved 8-bit raster, rows top to bottom, `channels` bytes per pixel
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl Frame {
    /// Black frame
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![0; width * height * channels],
        }
    }

    /// Wraps existing pixel data.
    ///
    /// # Errors
    /// [`Errors::InvalidArgument`] when `channels` is zero or the buffer length is not
    /// `width * height * channels`.
    ///
    pub fn from_raw(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        if channels == 0 {
            return Err(
                Errors::InvalidArgument("frame must have at least one channel".into()).into(),
            );
        }
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(Errors::InvalidArgument(format!(
                "{}x{}x{} frame requires {} bytes, got {}",
                width,
                height,
                channels,
                expected,
                data.len()
            ))
            .into());
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.channels)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn row_len(&self) -> usize {
        self.width * self.channels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = y * self.row_len() + x * self.channels;
        Some(&self.data[start..start + self.channels])
    }

    /// Whether the point maps onto a pixel of this frame
    pub fn contains(&self, point: &Vector) -> bool {
        point.x() >= 0.0
            && point.y() >= 0.0
            && (point.x() as usize) < self.width
            && (point.y() as usize) < self.height
    }

    /// Pixel-wise absolute difference.
    ///
    /// # Errors
    /// [`Errors::InvalidArgument`] when the frames differ in width, height or channels.
    ///
    pub fn absdiff(&self, other: &Frame) -> Result<Frame> {
        if self.shape() != other.shape() {
            return Err(Errors::InvalidArgument(format!(
                "frames must have the same shape, got {:?} and {:?}",
                self.shape(),
                other.shape()
            ))
            .into());
        }
        Ok(Frame {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.abs_diff(*b))
                .collect(),
        })
    }
}
