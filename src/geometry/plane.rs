//! Representation of planes.

use crate::{num::approx_zero, vector::Vector3};
use bytemuck::{Pod, Zeroable};

/// A plane in 3D, represented by a unit normal and a displacement.
///
/// The displacement `d` can be determined from the normal `n` and any point
/// `p` lying on the plane as `d = n.dot(p)`.
///
/// The positive halfspace is the one the unit normal points into.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Plane {
    unit_normal: Vector3,
    displacement: f32,
}

impl Plane {
    /// The xy-coordinate plane, with the positive halfspace being the space
    /// of positive z-coordinates.
    pub const XY_PLANE: Self = Self {
        unit_normal: Vector3::forward(),
        displacement: 0.0,
    };

    /// Creates a new plane with the given normal through the given point.
    /// The normal does not have to be normalized.
    pub fn from_normal_and_point(normal: &Vector3, point_in_plane: &Vector3) -> Self {
        let unit_normal = normal.normalized();
        Self {
            unit_normal,
            displacement: unit_normal.dot(point_in_plane),
        }
    }

    /// Creates the plane through the three given points, with the normal
    /// following the right-hand rule for the order `a`, `b`, `c`. Returns
    /// [`None`] if the points are collinear.
    pub fn from_points(a: &Vector3, b: &Vector3, c: &Vector3) -> Option<Self> {
        let normal = a.displacement_to(b).cross(&a.displacement_to(c));
        if approx_zero(normal.length()) {
            return None;
        }
        Some(Self::from_normal_and_point(&normal, a))
    }

    pub fn unit_normal(&self) -> &Vector3 {
        &self.unit_normal
    }

    pub fn displacement(&self) -> f32 {
        self.displacement
    }

    /// Computes the signed distance from the plane to the given point. If
    /// the signed distance is negative, the point lies in the negative
    /// halfspace of the plane.
    pub fn signed_distance(&self, point: &Vector3) -> f32 {
        self.unit_normal.dot(point) - self.displacement
    }

    /// Whether the given point is strictly in the positive halfspace of the
    /// plane.
    pub fn point_lies_in_positive_halfspace(&self, point: &Vector3) -> bool {
        self.signed_distance(point) > 0.0
    }

    /// Finds the point in the plane closest to the given point.
    pub fn project_point(&self, point: &Vector3) -> Vector3 {
        point - self.unit_normal * self.signed_distance(point)
    }

    /// Finds where the line through `origin` along `direction` crosses the
    /// plane. Returns [`None`] if the line is parallel to the plane.
    pub fn intersect_line(&self, origin: &Vector3, direction: &Vector3) -> Option<Vector3> {
        let normal_component = self.unit_normal.dot(direction);
        if approx_zero(normal_component) {
            return None;
        }
        let t = -self.signed_distance(origin) / normal_component;
        Some(origin + direction * t)
    }
}
