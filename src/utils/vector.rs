#[cfg(feature = "python")]
pub mod vector_py;

use crate::{Errors, EstimateClose};
use anyhow::Result;
use nalgebra::{Point2, Vector2};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

/// 2D point or displacement.
///
/// Every operation returns a new value, operands are never modified. Equality is exact
/// field-wise comparison, use [`EstimateClose`] after chains of float arithmetic.
///
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "python", pyo3::pyclass)]
pub struct Vector {
    v: Vector2<f32>,
}

impl Default for Vector {
    fn default() -> Self {
        Self {
            v: Vector2::zeros(),
        }
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("x", &self.v.x)
            .field("y", &self.v.y)
            .finish()
    }
}

impl Vector {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            v: Vector2::new(x, y),
        }
    }

    pub fn x(&self) -> f32 {
        self.v.x
    }

    pub fn y(&self) -> f32 {
        self.v.y
    }

    pub fn add(self, other: Vector) -> Vector {
        Self { v: self.v + other.v }
    }

    pub fn subtract(self, other: Vector) -> Vector {
        Self { v: self.v - other.v }
    }

    pub fn scale(self, k: f32) -> Vector {
        Self { v: self.v * k }
    }

    /// Component-wise division by a scalar.
    ///
    /// Fails with [`Errors::DivisionByZero`] when `k` is zero instead of producing
    /// infinities or NaN.
    ///
    pub fn divide(self, k: f32) -> Result<Vector> {
        if k == 0.0 {
            return Err(Errors::DivisionByZero(format!("{:?} divided by zero", self)).into());
        }
        Ok(Self { v: self.v / k })
    }

    pub fn equals(self, other: Vector) -> bool {
        self == other
    }

    pub fn not_equals(self, other: Vector) -> bool {
        self != other
    }

    pub fn is_zero(self) -> bool {
        self.v.x == 0.0 && self.v.y == 0.0
    }

    /// Euclidean norm
    pub fn magnitude(self) -> f32 {
        self.v.norm()
    }

    /// Unit vector with the same direction. The zero vector has no direction and fails with
    /// [`Errors::DivisionByZero`].
    ///
    pub fn normalize(self) -> Result<Vector> {
        self.divide(self.magnitude())
    }

    pub fn distance(self, other: Vector) -> f32 {
        other.subtract(self).magnitude()
    }

    pub fn dot_product(self, other: Vector) -> f32 {
        self.v.dot(&other.v)
    }

    /// Scalar 2D cross product `a.x * b.y - a.y * b.x`
    pub fn cross_product(self, other: Vector) -> f32 {
        self.v.perp(&other.v)
    }

    /// Angle between two vectors in degrees, within `[0, 180]`.
    ///
    /// The cosine is evaluated in `f64` and clamped to `[-1, 1]` before `acos`, so parallel
    /// vectors give `0` and anti-parallel ones give `180` rather than NaN.
    ///
    /// # Errors
    /// [`Errors::InvalidOperation`] if either vector has zero magnitude.
    ///
    pub fn angle_between(self, other: Vector) -> Result<f32> {
        let (ax, ay) = (self.v.x as f64, self.v.y as f64);
        let (bx, by) = (other.v.x as f64, other.v.y as f64);

        let magnitude_product = (ax * ax + ay * ay).sqrt() * (bx * bx + by * by).sqrt();
        if magnitude_product == 0.0 {
            return Err(Errors::InvalidOperation(format!(
                "angle is undefined for zero magnitude vector: {:?}, {:?}",
                self, other
            ))
            .into());
        }

        let cos_theta = ((ax * bx + ay * by) / magnitude_product).clamp(-1.0, 1.0);
        Ok(cos_theta.acos().to_degrees() as f32)
    }

    /// Pixel coordinates, truncated toward zero
    pub fn to_pixel(self) -> (i32, i32) {
        (self.v.x as i32, self.v.y as i32)
    }
}

impl EstimateClose for Vector {
    fn almost_same(&self, other: &Self, eps: f32) -> bool {
        (self.v.x - other.v.x).abs() < eps && (self.v.y - other.v.y).abs() < eps
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Self { v: self.v + rhs.v }
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Self { v: self.v - rhs.v }
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        Self { v: self.v * rhs }
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Self { v: -self.v }
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
        iter.fold(Vector::default(), |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a Vector> for Vector {
    fn sum<I: Iterator<Item = &'a Vector>>(iter: I) -> Vector {
        iter.fold(Vector::default(), |acc, v| acc + *v)
    }
}

impl From<(f32, f32)> for Vector {
    fn from((x, y): (f32, f32)) -> Self {
        Vector::new(x, y)
    }
}

impl From<Point2<f32>> for Vector {
    fn from(p: Point2<f32>) -> Self {
        Vector::new(p.x, p.y)
    }
}

impl From<Vector> for Point2<f32> {
    fn from(v: Vector) -> Self {
        Point2::from([v.v.x, v.v.y])
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::vector::Vector;
    use crate::{Errors, EstimateClose, EPS};

    #[test]
    fn arithmetic() {
        let a = Vector::new(1.5, -2.0);
        let b = Vector::new(-3.0, 4.25);

        assert_eq!(a.add(b), b.add(a));
        assert_eq!(a.add(b), Vector::new(-1.5, 2.25));
        assert_eq!(a.subtract(b), Vector::new(4.5, -6.25));
        assert!(a.subtract(a).is_zero());
        assert_eq!(a.scale(2.0), Vector::new(3.0, -4.0));
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.subtract(b));
        assert_eq!(a * 2.0, a.scale(2.0));
        assert_eq!(-a, Vector::new(-1.5, 2.0));
        assert!(a.equals(Vector::new(1.5, -2.0)));
        assert!(a.not_equals(b));
    }

    #[test]
    fn division() {
        let v = Vector::new(3.0, -6.0);
        assert_eq!(v.divide(3.0).unwrap(), Vector::new(1.0, -2.0));

        let err = v.divide(0.0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Errors>(),
            Some(Errors::DivisionByZero(_))
        ));
    }

    #[test]
    fn zero() {
        assert!(Vector::default().is_zero());
        assert!(Vector::new(-0.0, 0.0).is_zero());
        assert!(!Vector::new(0.0, f32::MIN_POSITIVE).is_zero());
    }

    #[test]
    fn magnitude_and_normalize() {
        let v = Vector::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < EPS);

        for v in [
            Vector::new(3.0, 4.0),
            Vector::new(-0.001, 7.0),
            Vector::new(1234.5, -987.25),
        ] {
            let n = v.normalize().unwrap();
            assert!((n.magnitude() - 1.0).abs() < EPS);
        }

        let err = Vector::default().normalize().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Errors>(),
            Some(Errors::DivisionByZero(_))
        ));
    }

    #[test]
    fn distance() {
        let a = Vector::new(1.0, 1.0);
        let b = Vector::new(4.0, 5.0);
        assert!((a.distance(b) - 5.0).abs() < EPS);
        assert_eq!(a.distance(b), b.distance(a));
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn products() {
        let a = Vector::new(2.0, 3.0);
        let b = Vector::new(-1.0, 5.0);
        assert_eq!(a.dot_product(b), 13.0);
        assert_eq!(a.cross_product(b), 13.0);
        assert_eq!(a.cross_product(b), -b.cross_product(a));
        assert_eq!(a.cross_product(a), 0.0);
    }

    #[test]
    fn angles() {
        let x = Vector::new(1.0, 0.0);
        let y = Vector::new(0.0, 1.0);
        assert!((x.angle_between(y).unwrap() - 90.0).abs() < EPS);
        assert!((x.angle_between(-x).unwrap() - 180.0).abs() < EPS);
        assert!((x.angle_between(Vector::new(1.0, 1.0)).unwrap() - 45.0).abs() < 1e-4);

        for v in [
            Vector::new(1.0, 1.0),
            Vector::new(0.1, 0.7),
            Vector::new(-13.3, 2.9),
        ] {
            let a = v.angle_between(v).unwrap();
            assert!(a.abs() < 1e-3, "angle of {:?} with itself is {}", v, a);
            assert!(a >= 0.0);
        }

        let err = x.angle_between(Vector::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Errors>(),
            Some(Errors::InvalidOperation(_))
        ));
    }

    #[test]
    fn sum_and_conversions() {
        let vs = [
            Vector::new(1.0, 2.0),
            Vector::new(3.0, 4.0),
            Vector::new(-1.0, 0.5),
        ];
        let s: Vector = vs.iter().sum();
        assert_eq!(s, Vector::new(3.0, 6.5));
        assert_eq!(vs.into_iter().sum::<Vector>(), s);

        assert_eq!(Vector::from((2.0, 3.0)), Vector::new(2.0, 3.0));
        let p: nalgebra::Point2<f32> = Vector::new(2.0, 3.0).into();
        assert_eq!(Vector::from(p), Vector::new(2.0, 3.0));

        assert_eq!(Vector::new(10.9, -3.7).to_pixel(), (10, -3));
        assert!(Vector::new(0.1, 0.2)
            .add(Vector::new(0.2, 0.1))
            .almost_same(&Vector::new(0.3, 0.3), EPS));
    }
}
