//! Axis-aligned rectangles.

use crate::{geometry::Line2, vector::Vector2};
use approx::AbsDiffEq;
use bytemuck::{Pod, Zeroable};

/// An axis-aligned rectangle in the plane, given by its corner with the
/// smallest coordinates and its extents.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates the rectangle spanned by the two given corners, in any order.
    pub fn from_corners(corner_1: &Vector2, corner_2: &Vector2) -> Self {
        let x = corner_1.x().min(corner_2.x());
        let y = corner_1.y().min(corner_2.y());
        Self::new(
            x,
            y,
            corner_1.x().max(corner_2.x()) - x,
            corner_1.y().max(corner_2.y()) - y,
        )
    }

    /// The corner with the smallest coordinates.
    pub fn min(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// The corner with the largest coordinates.
    pub fn max(&self) -> Vector2 {
        Vector2::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x + 0.5 * self.width, self.y + 0.5 * self.height)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Whether the given point lies inside the rectangle or on its boundary.
    pub fn contains(&self, point: &Vector2) -> bool {
        let max = self.max();
        (self.x..=max.x()).contains(&point.x()) && (self.y..=max.y()).contains(&point.y())
    }

    /// The four edges in counterclockwise order, starting with the bottom
    /// edge.
    pub fn edges(&self) -> [Line2; 4] {
        let min = self.min();
        let max = self.max();
        let lower_right = Vector2::new(max.x(), min.y());
        let upper_left = Vector2::new(min.x(), max.y());
        [
            Line2::new(min, lower_right),
            Line2::new(lower_right, max),
            Line2::new(max, upper_left),
            Line2::new(upper_left, min),
        ]
    }
}

impl AbsDiffEq for Rect {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.min().abs_diff_eq(&other.min(), epsilon)
            && self.max().abs_diff_eq(&other.max(), epsilon)
    }
}
