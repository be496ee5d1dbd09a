//! Line segments in the plane.

use crate::{consts::TOLERANCE, geometry::Rect, matrix::Matrix2, vector::Vector2};
use bytemuck::{Pod, Zeroable};

/// A line segment from `start` to `end`.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Line2 {
    pub start: Vector2,
    pub end: Vector2,
}

impl Line2 {
    pub const fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }

    /// The displacement from `start` to `end`.
    pub fn direction(&self) -> Vector2 {
        self.start.displacement_to(&self.end)
    }

    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    /// The point at parameter `t`, where `t = 0` is `start` and `t = 1` is
    /// `end`.
    pub fn point_at(&self, t: f32) -> Vector2 {
        self.start.lerped(&self.end, t)
    }

    /// Finds the point where this segment crosses `other`.
    ///
    /// Writing the crossing as `start + t * direction = other.start + s *
    /// other.direction` gives a 2x2 system for `t` and `s`, which is solved
    /// with [`Matrix2::solve_for`]. Returns [`None`] if the segments are
    /// parallel or if they would only cross outside of either segment.
    pub fn intersection(&self, other: &Self) -> Option<Vector2> {
        let system = Matrix2::from_columns(self.direction(), -other.direction());
        if !system.is_independent() {
            return None;
        }

        let parameters = system.solve_for(&self.start.displacement_to(&other.start));
        let t = parameters.x();
        let s = parameters.y();

        (lies_on_segment(t) && lies_on_segment(s)).then(|| self.point_at(t))
    }

    /// Finds the point closest to `start` where this segment crosses the
    /// boundary of the given rectangle.
    pub fn intersect_rect(&self, rect: &Rect) -> Option<Vector2> {
        rect.edges()
            .iter()
            .filter_map(|edge| self.intersection(edge))
            .min_by(|a, b| {
                self.start
                    .distance_to(a)
                    .total_cmp(&self.start.distance_to(b))
            })
    }

    /// The shortest distance from the given point to any point on the
    /// segment.
    pub fn distance_to_point(&self, point: &Vector2) -> f32 {
        let direction = self.direction();
        let squared_length = direction.squared_length();
        if squared_length == 0.0 {
            return self.start.distance_to(point);
        }
        let t = (self.start.displacement_to(point).dot(&direction) / squared_length).clamp(0.0, 1.0);
        self.point_at(t).distance_to(point)
    }
}

fn lies_on_segment(t: f32) -> bool {
    (-TOLERANCE..=1.0 + TOLERANCE).contains(&t)
}
