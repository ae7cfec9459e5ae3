use crate::utils::rect::Rect;
use crate::utils::vector::Vector;
use rand::distributions::Uniform;
use rand::prelude::ThreadRng;
use rand::Rng;

/// Point moving with a constant velocity plus uniform jitter
pub struct PointGen {
    position: Vector,
    velocity: Vector,
    gen: ThreadRng,
    dist: Uniform<f32>,
}

impl PointGen {
    pub fn new(x: f32, y: f32, velocity: Vector, jitter: f32) -> Self {
        Self {
            position: Vector::new(x, y),
            velocity,
            gen: rand::thread_rng(),
            dist: Uniform::new_inclusive(-jitter, jitter),
        }
    }
}

impl Iterator for PointGen {
    type Item = Vector;

    fn next(&mut self) -> Option<Self::Item> {
        self.position = self.position + self.velocity;
        let noise = Vector::new(self.gen.sample(self.dist), self.gen.sample(self.dist));
        Some(self.position + noise)
    }
}

/// Detection box of fixed size following a [`PointGen`] track with its top-left corner
pub struct BoxGen {
    points: PointGen,
    width: f32,
    height: f32,
}

impl BoxGen {
    pub fn new(x: f32, y: f32, width: f32, height: f32, velocity: Vector, jitter: f32) -> Self {
        Self {
            points: PointGen::new(x, y, velocity, jitter),
            width,
            height,
        }
    }
}

impl Iterator for BoxGen {
    type Item = Rect;

    fn next(&mut self) -> Option<Self::Item> {
        self.points
            .next()
            .map(|p| Rect::new(p, self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use crate::examples::{BoxGen, PointGen};
    use crate::utils::vector::Vector;

    #[test]
    fn stays_within_jitter() {
        let gen = PointGen::new(0.0, 0.0, Vector::new(1.0, 0.5), 0.2);
        for (i, p) in gen.take(100).enumerate() {
            let expected = Vector::new(1.0, 0.5).scale((i + 1) as f32);
            assert!(p.distance(expected) <= 0.2 * 2.0_f32.sqrt() + 1e-4);
        }
    }

    #[test]
    fn boxes_keep_size() {
        let r = BoxGen::new(0.0, 0.0, 20.0, 10.0, Vector::new(2.0, 0.0), 1.0)
            .nth(5)
            .unwrap();
        assert_eq!((r.width(), r.height()), (20.0, 10.0));
    }
}
