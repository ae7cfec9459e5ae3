use crate::video::frame::Frame;
use crate::video::source::FrameSource;
use crate::Errors;
use anyhow::Result;
use itertools::Itertools;
use log::debug;
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

pub const DEFAULT_NUM_SAMPLES: usize = 50;

/// Class that is used to configure the median background model
#[derive(Debug, Clone)]
pub struct BackgroundOptions {
    num_samples: usize,
    seed: Option<u64>,
}

impl Default for BackgroundOptions {
    fn default() -> Self {
        Self {
            num_samples: DEFAULT_NUM_SAMPLES,
            seed: None,
        }
    }
}

impl BackgroundOptions {
    /// The number of randomly chosen frames the median is taken over. Frames may be picked
    /// more than once.
    ///
    pub fn num_samples(mut self, n: usize) -> Self {
        assert!(n > 0, "Number of samples must be a positive number");
        self.num_samples = n;
        self
    }

    /// Fixes the frame selection; when unset the generator is seeded from the OS.
    ///
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn median(values: &mut [u8]) -> u8 {
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        ((values[mid - 1] as u16 + values[mid] as u16) / 2) as u8
    }
}

/// Estimates a static background as the per-pixel median of randomly sampled frames.
///
/// # Errors
/// * [`Errors::InvalidArgument`] when the source has no frames or the sampled frames differ in shape;
/// * any error of [`FrameSource::read_frame`].
///
pub fn median_frame<S: FrameSource>(source: &mut S, options: &BackgroundOptions) -> Result<Frame> {
    let frame_count = source.metadata().frame_count;
    if frame_count == 0 {
        return Err(Errors::InvalidArgument("the source has no frames".into()).into());
    }

    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let indices = rng
        .sample_iter(Uniform::new(0, frame_count))
        .take(options.num_samples)
        .collect::<Vec<_>>();
    debug!("Background sampled from frames {:?}", &indices);

    let frames = indices
        .into_iter()
        .map(|i| source.read_frame(i))
        .collect::<Result<Vec<_>>>()?;

    if !frames.iter().map(|f| f.shape()).all_equal() {
        return Err(
            Errors::InvalidArgument("sampled frames differ in shape".into()).into(),
        );
    }

    let first = &frames[0];
    let mut background = Frame::new(first.width(), first.height(), first.channels());
    let row_len = background.row_len();
    if row_len == 0 {
        return Ok(background);
    }

    background
        .data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(row, out)| {
            let offset = row * row_len;
            let mut column = Vec::with_capacity(frames.len());
            for (i, px) in out.iter_mut().enumerate() {
                column.clear();
                column.extend(frames.iter().map(|f| f.data()[offset + i]));
                *px = median(&mut column);
            }
        });

    Ok(background)
}

/// Absolute difference of the current frame against the background.
///
/// # Errors
/// [`Errors::InvalidArgument`] when the frames have different shapes.
///
pub fn subtract_background(background: &Frame, current: &Frame) -> Result<Frame> {
    background.absdiff(current)
}

#[cfg(test)]
mod tests {
    use crate::video::background::{median, median_frame, subtract_background, BackgroundOptions};
    use crate::video::frame::Frame;
    use crate::video::source::FrameSequence;
    use crate::Errors;

    #[test]
    fn median_values() {
        assert_eq!(median(&mut [7]), 7);
        assert_eq!(median(&mut [9, 1, 5]), 5);
        assert_eq!(median(&mut [1, 4]), 2);
        assert_eq!(median(&mut [255, 254, 0, 1]), 127);
        assert_eq!(median(&mut [255, 255]), 255);
    }

    #[test]
    fn static_background_survives_noise() {
        // the scene is 100 everywhere, a blob passes through one pixel at a time
        let frames = (0..9)
            .map(|i| {
                let mut data = vec![100u8; 3 * 3];
                data[i] = 255;
                Frame::from_raw(3, 3, 1, data).unwrap()
            })
            .collect::<Vec<_>>();
        let mut source = FrameSequence::new(frames, 30.0).unwrap();

        let bg = median_frame(&mut source, &BackgroundOptions::default().seed(42)).unwrap();
        assert_eq!(bg.shape(), (3, 3, 1));
        assert!(bg.data().iter().all(|p| *p == 100), "{:?}", bg.data());
    }

    #[test]
    fn seeded_selection_is_repeatable() {
        let frames = (0..20u8)
            .map(|i| Frame::from_raw(2, 2, 1, vec![i * 10; 4]).unwrap())
            .collect::<Vec<_>>();
        let mut source = FrameSequence::new(frames, 30.0).unwrap();
        let options = BackgroundOptions::default().num_samples(5).seed(7);

        let a = median_frame(&mut source, &options).unwrap();
        let b = median_frame(&mut source, &options).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_source() {
        let mut source = FrameSequence::new(vec![], 30.0).unwrap();
        let err = median_frame(&mut source, &BackgroundOptions::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Errors>(),
            Some(Errors::InvalidArgument(_))
        ));
    }

    #[test]
    fn subtraction() {
        let bg = Frame::from_raw(2, 1, 3, vec![100; 6]).unwrap();
        let cur = Frame::from_raw(2, 1, 3, vec![100, 100, 100, 20, 180, 100]).unwrap();
        let diff = subtract_background(&bg, &cur).unwrap();
        assert_eq!(diff.data(), &[0, 0, 0, 80, 80, 0]);

        let other = Frame::new(1, 2, 3);
        let err = subtract_background(&bg, &other).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Errors>(),
            Some(Errors::InvalidArgument(_))
        ));
    }
}
