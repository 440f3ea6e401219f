//! Axis-aligned bounding rectangle over 2D point sets.

use glam::DVec2;

/// Axis-aligned bounding rectangle in the tangent-plane coordinate frame.
///
/// Invariant: `minimum.x <= maximum.x` and `minimum.y <= maximum.y`, enforced
/// by construction from a non-empty point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect2 {
    minimum: DVec2,
    maximum: DVec2,
}

impl Rect2 {
    /// Compute the bounding rectangle of a point set.
    ///
    /// Returns `None` when `points` is empty.
    pub fn from_points(points: &[DVec2]) -> Option<Self> {
        let first = *points.first()?;
        let mut minimum = first;
        let mut maximum = first;
        for p in &points[1..] {
            minimum = minimum.min(*p);
            maximum = maximum.max(*p);
        }
        Some(Self { minimum, maximum })
    }

    /// The corner with the smallest coordinates.
    pub fn minimum(&self) -> DVec2 {
        self.minimum
    }

    /// The corner with the largest coordinates.
    pub fn maximum(&self) -> DVec2 {
        self.maximum
    }

    /// Width and height of the rectangle.
    pub fn extent(&self) -> DVec2 {
        self.maximum - self.minimum
    }

    /// Returns true if the point lies inside or on the boundary.
    pub fn contains_point(&self, p: DVec2) -> bool {
        p.x >= self.minimum.x
            && p.x <= self.maximum.x
            && p.y >= self.minimum.y
            && p.y <= self.maximum.y
    }
}
