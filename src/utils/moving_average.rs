#[cfg(feature = "python")]
pub mod moving_average_py;

use crate::utils::vector::Vector;
use crate::Errors;
use anyhow::Result;
use log::debug;
use std::collections::VecDeque;

/// Sliding window mean over vector observations.
///
/// Keeps at most `window_size` most recent samples, the oldest is evicted first. One
/// instance is meant to be owned by a single tracked object; mutation requires `&mut self`.
///
#[derive(Debug, Clone)]
pub struct VectorMovingAverageFilter {
    window_size: usize,
    samples: VecDeque<Vector>,
}

impl VectorMovingAverageFilter {
    /// Constructor
    ///
    /// # Errors
    /// [`Errors::InvalidArgument`] when `window_size` is `0`.
    ///
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(
                Errors::InvalidArgument("window size must be a positive number".into()).into(),
            );
        }
        Ok(Self {
            window_size,
            samples: VecDeque::with_capacity(window_size + 1),
        })
    }

    /// Constructor for callers holding a signed window size, e.g. from Python.
    ///
    /// # Errors
    /// [`Errors::InvalidArgument`] when `window_size` is not positive.
    ///
    pub fn from_signed_window(window_size: i64) -> Result<Self> {
        let window_size = usize::try_from(window_size).map_err(|_| {
            Errors::InvalidArgument(format!(
                "window size must be a positive number, got {}",
                window_size
            ))
        })?;
        Self::new(window_size)
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `true` once `window_size` samples are retained. Before that the mean is taken over
    /// fewer samples and is less smoothed.
    ///
    pub fn is_warm(&self) -> bool {
        self.samples.len() == self.window_size
    }

    /// Retained samples, oldest first
    pub fn samples(&self) -> impl Iterator<Item = &Vector> + '_ {
        self.samples.iter()
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Pushes the sample and returns the mean of the retained ones.
    ///
    /// During warm-up the mean is over the samples seen so far, not over `window_size`.
    ///
    pub fn smoothen_value(&mut self, sample: Vector) -> Vector {
        self.samples.push_back(sample);

        if self.samples.len() > self.window_size {
            if let Some(evicted) = self.samples.pop_front() {
                debug!("Evicted {:?} from the smoothing window", evicted);
            }
        }

        let sum: Vector = self.samples.iter().sum();
        // the window holds at least the sample just pushed
        sum.divide(self.samples.len() as f32).unwrap_or(sample)
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::moving_average::VectorMovingAverageFilter;
    use crate::utils::vector::Vector;
    use crate::{Errors, EstimateClose, EPS};

    #[test]
    fn zero_window() {
        let err = VectorMovingAverageFilter::new(0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Errors>(),
            Some(Errors::InvalidArgument(_))
        ));
    }

    #[test]
    fn signed_window() {
        for w in [0, -1, i64::MIN] {
            let err = VectorMovingAverageFilter::from_signed_window(w).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<Errors>(),
                Some(Errors::InvalidArgument(_))
            ));
        }
        let f = VectorMovingAverageFilter::from_signed_window(5).unwrap();
        assert_eq!(f.window_size(), 5);
    }

    #[test]
    fn mean_is_vector_division() {
        let mut f = VectorMovingAverageFilter::new(3).unwrap();
        let samples = [
            Vector::new(0.1, 7.0),
            Vector::new(0.2, -3.0),
            Vector::new(0.7, 1.0),
        ];
        let out = samples
            .iter()
            .map(|v| f.smoothen_value(*v))
            .last()
            .unwrap();
        let expected = samples.iter().sum::<Vector>().divide(3.0).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn warm_up_and_eviction() {
        let mut f = VectorMovingAverageFilter::new(3).unwrap();
        assert!(f.is_empty());

        let out = [0.0, 2.0, 4.0, 6.0]
            .into_iter()
            .map(|x| f.smoothen_value(Vector::new(x, 0.0)))
            .collect::<Vec<_>>();

        assert_eq!(
            out,
            vec![
                Vector::new(0.0, 0.0),
                Vector::new(1.0, 0.0),
                Vector::new(2.0, 0.0),
                Vector::new(4.0, 0.0),
            ]
        );
        assert_eq!(f.len(), 3);
        assert!(f.is_warm());
        assert_eq!(
            f.samples().copied().collect::<Vec<_>>(),
            vec![
                Vector::new(2.0, 0.0),
                Vector::new(4.0, 0.0),
                Vector::new(6.0, 0.0)
            ]
        );
    }

    #[test]
    fn window_never_exceeds_size() {
        let mut f = VectorMovingAverageFilter::new(4).unwrap();
        for i in 0..100 {
            f.smoothen_value(Vector::new(i as f32, -(i as f32)));
            assert!(f.len() <= f.window_size());
            assert_eq!(f.is_warm(), i >= 3);
        }
        let last = f.smoothen_value(Vector::new(100.0, -100.0));
        assert!(last.almost_same(&Vector::new(98.5, -98.5), EPS));
    }

    #[test]
    fn unit_window_is_identity() {
        let mut f = VectorMovingAverageFilter::new(1).unwrap();
        for v in [
            Vector::new(1.5, -2.0),
            Vector::new(100.25, 3.0),
            Vector::new(-7.0, 0.125),
        ] {
            assert_eq!(f.smoothen_value(v), v);
        }
    }

    #[test]
    fn reset() {
        let mut f = VectorMovingAverageFilter::new(2).unwrap();
        f.smoothen_value(Vector::new(10.0, 10.0));
        f.smoothen_value(Vector::new(20.0, 20.0));
        f.reset();
        assert!(f.is_empty());
        assert_eq!(
            f.smoothen_value(Vector::new(1.0, 1.0)),
            Vector::new(1.0, 1.0)
        );
    }
}
