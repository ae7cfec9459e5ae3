#[cfg(feature = "python")]
pub mod rect_py;

use crate::utils::vector::Vector;
use crate::{Errors, EstimateClose};
use anyhow::Result;
use geo::{LineString, Polygon};
use log::warn;

/// Default share of the inner rectangle that must lie inside the outer one, in percent
pub const DEFAULT_PERCENTAGE_THRESHOLD: f32 = 100.0;

/// Axis-aligned rectangle in the format (top-left position, width, height)
///
/// Width and height are expected to be non-negative; nothing enforces it and the predicates
/// give meaningless answers for negative dimensions.
///
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "python", pyo3::pyclass)]
pub struct Rect {
    position: Vector,
    width: f32,
    height: f32,
}

impl Rect {
    pub fn new(position: Vector, width: f32, height: f32) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// Builds the rectangle from its top-left and bottom-right corners
    pub fn from_xyxy(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Vector::new(x1, y1), x2 - x1, y2 - y1)
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn x(&self) -> f32 {
        self.position.x()
    }

    pub fn y(&self) -> f32 {
        self.position.y()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn right(&self) -> f32 {
        self.x() + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y() + self.height
    }

    /// Corners as `[x1, y1, x2, y2]`
    pub fn as_xyxy(&self) -> [f32; 4] {
        [self.x(), self.y(), self.right(), self.bottom()]
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Edge-wise enclosure test, exact for a rectangle against itself
    fn encloses(&self, other: &Rect) -> bool {
        self.x() <= other.x()
            && self.y() <= other.y()
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    pub fn centroid(&self) -> Vector {
        self.position
            .add(Vector::new(self.width / 2.0, self.height / 2.0))
    }

    /// Top-left and bottom-right corners in pixel coordinates, truncated toward zero
    pub fn to_pixel_corners(&self) -> ((i32, i32), (i32, i32)) {
        (
            self.position.to_pixel(),
            Vector::new(self.right(), self.bottom()).to_pixel(),
        )
    }

    /// Area shared by two rectangles; `0` when they don't overlap on either axis.
    ///
    pub fn intersection_area(l: &Rect, r: &Rect) -> f32 {
        let x_overlap = (l.right().min(r.right()) - l.x().max(r.x())).max(0.0);
        let y_overlap = (l.bottom().min(r.bottom()) - l.y().max(r.y())).max(0.0);
        x_overlap * y_overlap
    }

    /// Share of `inner`'s area that lies inside `outer`, in `[0, 100]`.
    ///
    /// An `inner` enclosed by `outer` edge-wise is `100` exactly, whatever rounding the
    /// overlap arithmetic would introduce.
    ///
    /// # Errors
    /// [`Errors::DivisionByZero`] when `inner` has zero area.
    ///
    pub fn containment_percentage(outer: &Rect, inner: &Rect) -> Result<f32> {
        let inner_area = inner.area();
        if inner_area == 0.0 {
            warn!(
                "Containment requested for the degenerate rectangle {:?}",
                inner
            );
            return Err(Errors::DivisionByZero(format!(
                "inner rectangle {:?} has zero area",
                inner
            ))
            .into());
        }
        if outer.encloses(inner) {
            return Ok(100.0);
        }
        Ok((Rect::intersection_area(outer, inner) / inner_area * 100.0).min(100.0))
    }

    /// Checks that at least `percentage_threshold` percent of `inner` lies within `outer`.
    ///
    /// # Parameters
    /// * `outer` - the enclosing region;
    /// * `inner` - the rectangle checked against the region, must have a non-zero area;
    /// * `percentage_threshold` - required share in percent; when `None`,
    ///   [`DEFAULT_PERCENTAGE_THRESHOLD`] (full containment) is used.
    ///
    pub fn is_rect_within_rect(
        outer: &Rect,
        inner: &Rect,
        percentage_threshold: Option<f32>,
    ) -> Result<bool> {
        let threshold = percentage_threshold.unwrap_or(DEFAULT_PERCENTAGE_THRESHOLD);
        Ok(Rect::containment_percentage(outer, inner)? >= threshold)
    }

    /// Inclusive bounds check: points lying exactly on an edge are inside.
    ///
    pub fn is_point_within_rect(point: &Vector, rect: &Rect) -> bool {
        point.x() >= rect.x()
            && point.x() <= rect.right()
            && point.y() >= rect.y()
            && point.y() <= rect.bottom()
    }
}

impl EstimateClose for Rect {
    fn almost_same(&self, other: &Self, eps: f32) -> bool {
        self.position.almost_same(&other.position, eps)
            && (self.width - other.width).abs() < eps
            && (self.height - other.height).abs() < eps
    }
}

impl From<&Rect> for geo::Rect<f64> {
    fn from(r: &Rect) -> Self {
        geo::Rect::new(
            (r.x() as f64, r.y() as f64),
            (r.right() as f64, r.bottom() as f64),
        )
    }
}

impl From<&Rect> for Polygon<f64> {
    fn from(r: &Rect) -> Self {
        let [x1, y1, x2, y2] = r.as_xyxy().map(|c| c as f64);
        Polygon::new(
            LineString::from(vec![(x1, y1), (x2, y1), (x2, y2), (x1, y2)]),
            vec![],
        )
    }
}
