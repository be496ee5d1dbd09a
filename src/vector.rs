//! Vectors.
//!
//! All vector types are plain `Copy` values. Each arithmetic operation comes
//! in a pure flavour returning a new vector (`scaled`, `added`, ...) and a
//! destructive flavour mutating `self` and returning `&mut Self` for chaining
//! (`scale_in_place`, `add_in_place`, ...).
//!
//! # Numeric policy
//! Division by zero does not fail: [`Vector2::divided`] and friends return the
//! [`infinity`](Vector2::infinity) vector (every component `+∞`). Normalizing a
//! zero vector goes through the same division and therefore also yields the
//! infinity vector. Callers that cannot accept non-finite results must check
//! for zero divisors themselves.
//!
//! # Equality
//! `==` compares components within [`TOLERANCE`]. This makes equality
//! reflexive and symmetric but not transitive. Use the [`approx`] traits for a
//! custom epsilon.

use crate::{
    angle::{Angle, Degrees, Radians},
    consts::TOLERANCE,
    num::lerp_step,
};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    num::ParseFloatError,
    ops::{Index, IndexMut},
    str::FromStr,
};
use thiserror::Error;

/// A 2-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct Vector2 {
    x: f32,
    y: f32,
}

/// A 3-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct Vector3 {
    x: f32,
    y: f32,
    z: f32,
}

/// A 4-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct Vector4 {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

/// Error returned when parsing a vector from text fails.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseVectorError {
    #[error("expected {expected} vector components, found {found}")]
    WrongComponentCount { expected: usize, found: usize },
    #[error("invalid vector component `{component}`")]
    InvalidComponent {
        component: String,
        #[source]
        source: ParseFloatError,
    },
}

macro_rules! impl_vector {
    ($t:ident, $n:literal, [$($c:ident => $label:literal),+]) => {
        impl $t {
            /// The number of components.
            pub const DIMENSION: usize = $n;

            /// Creates a new vector with all zeros.
            #[inline]
            pub const fn zeros() -> Self {
                Self::same(0.0)
            }

            /// Creates a new vector with the same value for all components.
            #[inline]
            pub const fn same(value: f32) -> Self {
                Self { $($c: value),+ }
            }

            /// The vector with every component set to positive infinity. This
            /// is what division by zero produces.
            #[inline]
            pub const fn infinity() -> Self {
                Self::same(f32::INFINITY)
            }

            /// Copies all components from `other`.
            #[inline]
            pub fn set_from(&mut self, other: &Self) -> &mut Self {
                *self = *other;
                self
            }

            /// Computes the square of the length of the vector.
            #[inline]
            pub fn squared_length(&self) -> f32 {
                0.0 $(+ self.$c * self.$c)+
            }

            /// Computes the length of the vector.
            #[inline]
            pub fn length(&self) -> f32 {
                self.squared_length().sqrt()
            }

            /// Computes the dot product of this vector with another.
            #[inline]
            pub fn dot(&self, other: &Self) -> f32 {
                0.0 $(+ self.$c * other.$c)+
            }

            /// Returns the sum of this vector and another.
            #[inline]
            pub fn added(&self, other: &Self) -> Self {
                Self { $($c: self.$c + other.$c),+ }
            }

            /// Adds another vector to this one.
            #[inline]
            pub fn add_in_place(&mut self, other: &Self) -> &mut Self {
                $(self.$c += other.$c;)+
                self
            }

            /// Returns the difference between this vector and another.
            #[inline]
            pub fn subtracted(&self, other: &Self) -> Self {
                Self { $($c: self.$c - other.$c),+ }
            }

            /// Subtracts another vector from this one.
            #[inline]
            pub fn subtract_in_place(&mut self, other: &Self) -> &mut Self {
                $(self.$c -= other.$c;)+
                self
            }

            /// Returns this vector multiplied by `factor`.
            #[inline]
            pub fn scaled(&self, factor: f32) -> Self {
                Self { $($c: self.$c * factor),+ }
            }

            /// Multiplies this vector by `factor`.
            #[inline]
            pub fn scale_in_place(&mut self, factor: f32) -> &mut Self {
                $(self.$c *= factor;)+
                self
            }

            /// Returns this vector divided by `divisor`, or the
            /// [`infinity`](Self::infinity) vector if `divisor` is zero.
            #[inline]
            pub fn divided(&self, divisor: f32) -> Self {
                if divisor == 0.0 {
                    log::trace!("Dividing {} by zero, saturating to infinity", self);
                    return Self::infinity();
                }
                Self { $($c: self.$c / divisor),+ }
            }

            /// Divides this vector by `divisor`. A zero divisor turns it into
            /// the [`infinity`](Self::infinity) vector.
            #[inline]
            pub fn divide_in_place(&mut self, divisor: f32) -> &mut Self {
                *self = self.divided(divisor);
                self
            }

            /// Computes the vector of unit length pointing in the same
            /// direction. A zero vector gives the infinity vector.
            #[inline]
            pub fn normalized(&self) -> Self {
                self.divided(self.length())
            }

            /// Rescales this vector to unit length.
            #[inline]
            pub fn normalize_in_place(&mut self) -> &mut Self {
                let length = self.length();
                self.divide_in_place(length)
            }

            /// The vector leading from this point to `other`.
            #[inline]
            pub fn displacement_to(&self, other: &Self) -> Self {
                other.subtracted(self)
            }

            /// The distance between this point and `other`.
            #[inline]
            pub fn distance_to(&self, other: &Self) -> f32 {
                self.displacement_to(other).length()
            }

            /// The factor `dot(self, other) / dot(other, other)` by which
            /// `other` must be scaled to give the projection of this vector
            /// onto it.
            #[inline]
            pub fn projection_factor(&self, other: &Self) -> f32 {
                self.dot(other) / other.squared_length()
            }

            /// Computes the projection of this vector onto `other`.
            #[inline]
            pub fn projected_onto(&self, other: &Self) -> Self {
                other.scaled(self.projection_factor(other))
            }

            /// Computes the angle between this vector and another. Both
            /// operands are normalized first, and the angle is zero for
            /// vectors that compare equal.
            pub fn angle_between(&self, other: &Self) -> Degrees {
                if self == other {
                    return Degrees(0.0);
                }
                let cos_angle = self
                    .normalized()
                    .dot(&other.normalized())
                    .clamp(-1.0, 1.0);
                Radians(cos_angle.acos()).as_degrees()
            }

            /// Returns the point reached by moving from this point towards
            /// `target` by `max_distance`, without overshooting `target`.
            pub fn moved_towards(&self, target: &Self, max_distance: f32) -> Self {
                let displacement = self.displacement_to(target);
                let distance = displacement.length();
                if distance <= max_distance || distance == 0.0 {
                    return *target;
                }
                self.added(&displacement.scaled(max_distance / distance))
            }

            /// Moves this point towards `target` by `max_distance`, without
            /// overshooting `target`.
            #[inline]
            pub fn move_towards_in_place(&mut self, target: &Self, max_distance: f32) -> &mut Self {
                *self = self.moved_towards(target, max_distance);
                self
            }

            /// The cosine of the angle between `other_forward` and the
            /// direction from `other` to this point. Positive values mean this
            /// point lies ahead of `other`.
            pub fn in_front_of(&self, other: &Self, other_forward: &Self) -> f32 {
                other
                    .displacement_to(self)
                    .normalized()
                    .dot(&other_forward.normalized())
            }

            /// The negation of [`in_front_of`](Self::in_front_of).
            pub fn behind_of(&self, other: &Self, other_forward: &Self) -> f32 {
                -self.in_front_of(other, other_forward)
            }

            /// Linearly interpolates between this vector (`t = 0`) and `other`
            /// (`t = 1`).
            #[inline]
            pub fn lerped(&self, other: &Self, t: f32) -> Self {
                Self { $($c: crate::num::lerp(self.$c, other.$c, t)),+ }
            }

            /// Moves every component towards the corresponding component of
            /// `goal` by at most `step`.
            #[inline]
            pub fn stepped_towards(&self, goal: &Self, step: f32) -> Self {
                Self { $($c: lerp_step(goal.$c, self.$c, step)),+ }
            }

            /// Evaluates the quadratic Bézier curve from `start` to `end` with
            /// the given control point at parameter `t`.
            pub fn quadratic_bezier(start: &Self, control: &Self, end: &Self, t: f32) -> Self {
                let first = start.lerped(control, t);
                let second = control.lerped(end, t);
                first.lerped(&second, t)
            }

            /// Returns a vector with the given closure applied to each
            /// component.
            #[inline]
            pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
                Self { $($c: f(self.$c)),+ }
            }

            /// Whether all components are finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                true $(&& self.$c.is_finite())+
            }

            #[inline]
            fn as_array(&self) -> &[f32; $n] {
                bytemuck::cast_ref(self)
            }

            #[inline]
            fn as_array_mut(&mut self) -> &mut [f32; $n] {
                bytemuck::cast_mut(self)
            }
        }

        impl From<[f32; $n]> for $t {
            #[inline]
            fn from([$($c),+]: [f32; $n]) -> Self {
                Self { $($c),+ }
            }
        }

        impl From<$t> for [f32; $n] {
            #[inline]
            fn from(vector: $t) -> Self {
                [$(vector.$c),+]
            }
        }

        impl_binop!(Add, add, $t, $t, $t, |a, b| { a.added(b) });

        impl_binop!(Sub, sub, $t, $t, $t, |a, b| { a.subtracted(b) });

        impl_binop!(Mul, mul, $t, f32, $t, |a, b| { a.scaled(*b) });

        impl_binop!(Mul, mul, f32, $t, $t, |a, b| { b.scaled(*a) });

        impl_binop!(Div, div, $t, f32, $t, |a, b| { a.divided(*b) });

        impl_binop_assign!(AddAssign, add_assign, $t, $t, |a, b| {
            a.add_in_place(b);
        });

        impl_binop_assign!(SubAssign, sub_assign, $t, $t, |a, b| {
            a.subtract_in_place(b);
        });

        impl_binop_assign!(MulAssign, mul_assign, $t, f32, |a, b| {
            a.scale_in_place(*b);
        });

        impl_binop_assign!(DivAssign, div_assign, $t, f32, |a, b| {
            a.divide_in_place(*b);
        });

        impl_unary_op!(Neg, neg, $t, $t, |val| { val.scaled(-1.0) });

        /// Indices past the last component are clamped to the last component.
        impl Index<usize> for $t {
            type Output = f32;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                &self.as_array()[index.min($n - 1)]
            }
        }

        /// Indices past the last component are clamped to the last component.
        impl IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.as_array_mut()[index.min($n - 1)]
            }
        }

        impl_tolerance_eq!($t, |a, b| {
            true $(&& (a.$c - b.$c).abs() < TOLERANCE)+
        });

        impl_abs_diff_eq!($t, |a, b, epsilon| {
            true $(&& ::approx::AbsDiffEq::abs_diff_eq(&a.$c, &b.$c, epsilon))+
        });

        impl_relative_eq!($t, |a, b, epsilon, max_relative| {
            true $(&& ::approx::RelativeEq::relative_eq(&a.$c, &b.$c, epsilon, max_relative))+
        });

        impl fmt::Debug for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($t))
                    $(.field(stringify!($c), &self.$c))+
                    .finish()
            }
        }

        /// Formats the vector as `[X: <x> Y: <y> ]`, for debugging only.
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                $(write!(f, "{}: {} ", $label, self.$c)?;)+
                write!(f, "]")
            }
        }

        /// Parses whitespace- or comma-separated components, optionally
        /// enclosed in brackets or parentheses.
        impl FromStr for $t {
            type Err = ParseVectorError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let components = parse_components(s)?;
                match <[f32; $n]>::try_from(components.as_slice()) {
                    Ok(array) => Ok(Self::from(array)),
                    Err(_) => Err(ParseVectorError::WrongComponentCount {
                        expected: $n,
                        found: components.len(),
                    }),
                }
            }
        }
    };
}

impl_vector!(Vector2, 2, [x => "X", y => "Y"]);
impl_vector!(Vector3, 3, [x => "X", y => "Y", z => "Z"]);
impl_vector!(Vector4, 4, [x => "X", y => "Y", z => "Z", w => "W"]);

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The unit vector pointing up (+y).
    #[inline]
    pub const fn up() -> Self {
        Self::new(0.0, 1.0)
    }

    /// The unit vector pointing down (-y).
    #[inline]
    pub const fn down() -> Self {
        Self::new(0.0, -1.0)
    }

    /// The unit vector pointing left (-x).
    #[inline]
    pub const fn left() -> Self {
        Self::new(-1.0, 0.0)
    }

    /// The unit vector pointing right (+x).
    #[inline]
    pub const fn right() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.y
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) -> &mut Self {
        self.x = x;
        self
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) -> &mut Self {
        self.y = y;
        self
    }

    /// Sets both components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        *self = Self::new(x, y);
        self
    }

    /// The z-component of the cross product of the two vectors extended
    /// into the xy-plane.
    #[inline]
    pub fn perp_dot(&self, other: &Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The unit vector pointing up (+y).
    #[inline]
    pub const fn up() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The unit vector pointing down (-y).
    #[inline]
    pub const fn down() -> Self {
        Self::new(0.0, -1.0, 0.0)
    }

    /// The unit vector pointing left (-x). Equals `forward × up`.
    #[inline]
    pub const fn left() -> Self {
        Self::new(-1.0, 0.0, 0.0)
    }

    /// The unit vector pointing right (+x).
    #[inline]
    pub const fn right() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The unit vector pointing forward (+z).
    #[inline]
    pub const fn forward() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The unit vector pointing back (-z).
    #[inline]
    pub const fn back() -> Self {
        Self::new(0.0, 0.0, -1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.z
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) -> &mut Self {
        self.x = x;
        self
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) -> &mut Self {
        self.y = y;
        self
    }

    #[inline]
    pub fn set_z(&mut self, z: f32) -> &mut Self {
        self.z = z;
        self
    }

    /// Sets all three components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        *self = Self::new(x, y, z);
        self
    }

    /// Computes the right-handed cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut f32 {
        &mut self.w
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) -> &mut Self {
        self.x = x;
        self
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) -> &mut Self {
        self.y = y;
        self
    }

    #[inline]
    pub fn set_z(&mut self, z: f32) -> &mut Self {
        self.z = z;
        self
    }

    #[inline]
    pub fn set_w(&mut self, w: f32) -> &mut Self {
        self.w = w;
        self
    }

    /// Sets all four components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        *self = Self::new(x, y, z, w);
        self
    }

    /// The 3D vector containing the x-, y- and z-components of this vector.
    #[inline]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

fn parse_components(s: &str) -> Result<Vec<f32>, ParseVectorError> {
    let trimmed = s
        .trim()
        .trim_start_matches(['[', '('])
        .trim_end_matches([']', ')']);

    trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|component| !component.is_empty())
        .map(|component| {
            component
                .parse::<f32>()
                .map_err(|source| ParseVectorError::InvalidComponent {
                    component: component.to_owned(),
                    source,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-6;

    prop_compose! {
        fn vector2_strategy(max_component: f32)(
            x in -max_component..max_component,
            y in -max_component..max_component,
        ) -> Vector2 {
            Vector2::new(x, y)
        }
    }

    prop_compose! {
        fn vector3_strategy(max_component: f32)(
            x in -max_component..max_component,
            y in -max_component..max_component,
            z in -max_component..max_component,
        ) -> Vector3 {
            Vector3::new(x, y, z)
        }
    }

    prop_compose! {
        fn vector4_strategy(max_component: f32)(
            x in -max_component..max_component,
            y in -max_component..max_component,
            z in -max_component..max_component,
            w in -max_component..max_component,
        ) -> Vector4 {
            Vector4::new(x, y, z, w)
        }
    }

    // === Vector2 Tests ===

    #[test]
    fn computing_vector2_length_works() {
        let v = Vector2::new(3.0, 4.0);
        assert_abs_diff_eq!(v.length(), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.squared_length(), 25.0, epsilon = EPSILON);
    }

    #[test]
    fn vector2_length_follows_mutation() {
        let mut v = Vector2::new(3.0, 4.0);
        assert_abs_diff_eq!(v.length(), 5.0, epsilon = EPSILON);
        v.set_x(6.0).set_y(8.0);
        assert_abs_diff_eq!(v.length(), 10.0, epsilon = EPSILON);
        v.scale_in_place(0.5);
        assert_abs_diff_eq!(v.length(), 5.0, epsilon = EPSILON);
        v.set(0.0, 2.0);
        assert_abs_diff_eq!(v.length(), 2.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_vector2_gives_unit_vector() {
        let v = Vector2::new(3.0, 4.0);
        let normalized = v.normalized();
        assert_abs_diff_eq!(normalized.length(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(normalized, Vector2::new(0.6, 0.8), epsilon = EPSILON);

        let mut w = v;
        w.normalize_in_place();
        assert_eq!(w, normalized);
    }

    #[test]
    fn normalizing_zero_vector2_gives_infinity() {
        let normalized = Vector2::zeros().normalized();
        assert!(normalized.x().is_infinite() && normalized.x() > 0.0);
        assert!(normalized.y().is_infinite() && normalized.y() > 0.0);
    }

    #[test]
    fn dividing_vector2_by_zero_gives_positive_infinity_sentinel() {
        for v in [
            Vector2::new(1.0, -2.0),
            Vector2::zeros(),
            Vector2::new(-3.0, 0.0),
        ] {
            let divided = v.divided(0.0);
            assert_eq!(divided.x(), f32::INFINITY);
            assert_eq!(divided.y(), f32::INFINITY);
            assert_eq!((&v / 0.0).x(), f32::INFINITY);
        }

        let mut v = Vector2::new(1.0, 1.0);
        v /= 0.0;
        assert_eq!(<[f32; 2]>::from(v), [f32::INFINITY; 2]);
    }

    #[test]
    fn vector2_dot_product_works() {
        let v1 = Vector2::new(1.0, 2.0);
        let v2 = Vector2::new(3.0, 4.0);
        assert_abs_diff_eq!(v1.dot(&v2), 11.0, epsilon = EPSILON);
    }

    #[test]
    fn vector2_pure_and_in_place_arithmetic_agree() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);

        let mut sum = a;
        sum.add_in_place(&b);
        assert_eq!(sum, a.added(&b));

        let mut difference = a;
        difference.subtract_in_place(&b);
        assert_eq!(difference, a.subtracted(&b));

        let mut scaled = a;
        scaled.scale_in_place(3.0);
        assert_eq!(scaled, a.scaled(3.0));

        let mut divided = a;
        divided.divide_in_place(4.0);
        assert_eq!(divided, a.divided(4.0));
    }

    #[test]
    fn vector2_in_place_operations_chain() {
        let mut v = Vector2::new(1.0, 1.0);
        v.add_in_place(&Vector2::new(1.0, 3.0))
            .scale_in_place(2.0)
            .subtract_in_place(&Vector2::new(4.0, 0.0));
        assert_eq!(v, Vector2::new(0.0, 8.0));
    }

    #[test]
    fn vector2_arithmetic_operators_work() {
        let v1 = Vector2::new(1.0, 2.0);
        let v2 = Vector2::new(3.0, 4.0);

        assert_eq!(&v1 + &v2, Vector2::new(4.0, 6.0));
        assert_eq!(v1 - v2, Vector2::new(-2.0, -2.0));
        assert_eq!(&v1 * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(3.0 * v1, Vector2::new(3.0, 6.0));
        assert_eq!(&v1 / 2.0, Vector2::new(0.5, 1.0));
        assert_eq!(-&v1, Vector2::new(-1.0, -2.0));

        let mut v = v1;
        v += v2;
        v -= &v1;
        v *= 2.0;
        assert_eq!(v, Vector2::new(6.0, 8.0));
    }

    #[test]
    fn setting_vector2_from_itself_is_a_no_op() {
        let mut v = Vector2::new(1.5, -2.5);
        let copy = v;
        v.set_from(&copy);
        assert_eq!(v, Vector2::new(1.5, -2.5));
    }

    #[test]
    fn vector2_equality_uses_tolerance() {
        let v = Vector2::new(1.0, 2.0);
        assert_eq!(v, Vector2::new(1.0 + 0.5 * TOLERANCE, 2.0 - 0.5 * TOLERANCE));
        assert_ne!(v, Vector2::new(1.0 + 2.0 * TOLERANCE, 2.0));
    }

    #[test]
    fn vector2_tolerance_equality_is_not_transitive() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(0.6 * TOLERANCE, 0.0);
        let c = Vector2::new(1.2 * TOLERANCE, 0.0);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn diagonals_of_parallelogram_bisect_each_other() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(5.0, 1.0);
        let c = Vector2::new(4.0, 0.0);
        let d = Vector2::new(0.0, 0.0);

        let diagonal_1 = d.displacement_to(&b);
        let diagonal_2 = a.displacement_to(&c);

        assert_eq!(d + diagonal_1 * 0.5, a + diagonal_2 * 0.5);
        assert_eq!(d + 0.5 * (b - d), a + 0.5 * (c - a));
    }

    #[test]
    fn vector2_directions_are_unit_axes() {
        assert_eq!(Vector2::up(), Vector2::new(0.0, 1.0));
        assert_eq!(Vector2::down(), -Vector2::up());
        assert_eq!(Vector2::left(), -Vector2::right());
        assert_abs_diff_eq!(Vector2::right().length(), 1.0);
    }

    #[test]
    fn vector2_angle_between_normalizes_operands() {
        let right = Vector2::new(5.0, 0.0);
        let diagonal = Vector2::new(3.0, 3.0);
        assert_abs_diff_eq!(right.angle_between(&diagonal), Degrees(45.0), epsilon = 1e-3);
        assert_abs_diff_eq!(
            right.angle_between(&Vector2::new(0.0, -0.1)),
            Degrees(90.0),
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            right.angle_between(&Vector2::new(-2.0, 0.0)),
            Degrees(180.0),
            epsilon = 1e-3
        );
    }

    #[test]
    fn angle_between_equal_vector2s_is_zero() {
        let v = Vector2::new(0.3, 0.7);
        assert_eq!(v.angle_between(&v), Degrees(0.0));
        assert_eq!(v.angle_between(&Vector2::new(0.30001, 0.7)), Degrees(0.0));
    }

    #[test]
    fn projecting_vector2_gives_component_along_other() {
        let v = Vector2::new(2.0, 3.0);
        let onto = Vector2::new(4.0, 0.0);
        assert_abs_diff_eq!(v.projection_factor(&onto), 0.5, epsilon = EPSILON);
        assert_eq!(v.projected_onto(&onto), Vector2::new(2.0, 0.0));
    }

    #[test]
    fn moving_vector2_towards_target_steps_absolute_distance() {
        let start = Vector2::new(0.0, 0.0);
        let target = Vector2::new(3.0, 4.0);
        assert_eq!(start.moved_towards(&target, 2.5), Vector2::new(1.5, 2.0));
        assert_abs_diff_eq!(
            start.moved_towards(&target, 1.0).distance_to(&start),
            1.0,
            epsilon = EPSILON
        );
    }

    #[test]
    fn moving_vector2_towards_target_does_not_overshoot() {
        let start = Vector2::new(1.0, 1.0);
        let target = Vector2::new(2.0, 1.0);
        assert_eq!(start.moved_towards(&target, 10.0), target);
        assert_eq!(target.moved_towards(&target, 1.0), target);

        let mut v = start;
        v.move_towards_in_place(&target, 0.25)
            .move_towards_in_place(&target, 0.25);
        assert_eq!(v, Vector2::new(1.5, 1.0));
    }

    #[test]
    fn vector2_in_front_of_and_behind_of_are_opposite() {
        let observer = Vector2::new(0.0, 0.0);
        let forward = Vector2::new(0.0, 2.0);
        let ahead = Vector2::new(0.0, 5.0);
        let aside = Vector2::new(5.0, 0.0);

        assert_abs_diff_eq!(ahead.in_front_of(&observer, &forward), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(ahead.behind_of(&observer, &forward), -1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(aside.in_front_of(&observer, &forward), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn vector2_interpolation_works() {
        let a = Vector2::new(0.0, 10.0);
        let b = Vector2::new(4.0, 0.0);
        assert_eq!(a.lerped(&b, 0.25), Vector2::new(1.0, 7.5));
        assert_eq!(a.stepped_towards(&b, 1.0), Vector2::new(1.0, 9.0));
        assert_eq!(a.stepped_towards(&b, 100.0), b);
    }

    #[test]
    fn quadratic_bezier_passes_through_endpoints() {
        let start = Vector2::new(0.0, 0.0);
        let control = Vector2::new(1.0, 2.0);
        let end = Vector2::new(2.0, 0.0);
        assert_eq!(Vector2::quadratic_bezier(&start, &control, &end, 0.0), start);
        assert_eq!(Vector2::quadratic_bezier(&start, &control, &end, 1.0), end);
        assert_eq!(
            Vector2::quadratic_bezier(&start, &control, &end, 0.5),
            Vector2::new(1.0, 1.0)
        );
    }

    #[test]
    fn vector2_indexing_works() {
        let mut v = Vector2::new(1.0, 2.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);

        v[0] = 10.0;
        v[1] = 20.0;
        assert_eq!(v, Vector2::new(10.0, 20.0));
    }

    #[test]
    fn indexing_vector2_out_of_bounds_clamps_to_last_component() {
        let mut v = Vector2::new(1.0, 2.0);
        assert_eq!(v[2], 2.0);
        assert_eq!(v[usize::MAX], 2.0);
        v[7] = 5.0;
        assert_eq!(v, Vector2::new(1.0, 5.0));
    }

    #[test]
    fn formatting_vector2_uses_bracketed_labels() {
        assert_eq!(Vector2::new(1.0, -2.5).to_string(), "[X: 1 Y: -2.5 ]");
    }

    #[test]
    fn parsing_vector2_accepts_common_separators() {
        assert_eq!("1 2".parse::<Vector2>(), Ok(Vector2::new(1.0, 2.0)));
        assert_eq!("[3.5, -1]".parse::<Vector2>(), Ok(Vector2::new(3.5, -1.0)));
        assert_eq!(" (0,0) ".parse::<Vector2>(), Ok(Vector2::zeros()));
    }

    #[test]
    fn parsing_vector2_with_wrong_component_count_fails() {
        assert_eq!(
            "1 2 3".parse::<Vector2>(),
            Err(ParseVectorError::WrongComponentCount {
                expected: 2,
                found: 3
            })
        );
        assert!(matches!(
            "1 two".parse::<Vector2>(),
            Err(ParseVectorError::InvalidComponent { component, .. }) if component == "two"
        ));
    }

    #[test]
    fn extending_vector2_to_vector3_works() {
        assert_eq!(Vector2::new(1.0, 2.0).extended(3.0), Vector3::new(1.0, 2.0, 3.0));
    }

    proptest! {
        #[test]
        fn normalized_vector2_has_unit_length(v in vector2_strategy(1e3)) {
            prop_assume!(v.length() > 1e-3);
            prop_assert!((v.normalized().length() - 1.0).abs() < TOLERANCE);
        }

        #[test]
        fn adding_then_subtracting_vector2_round_trips(
            a in vector2_strategy(1e2),
            b in vector2_strategy(1e2),
        ) {
            prop_assert_eq!(a + b - b, a);
        }
    }

    // === Vector3 Tests ===

    #[test]
    fn computing_vector3_length_works() {
        let v = Vector3::new(1.0, 2.0, 2.0);
        assert_abs_diff_eq!(v.length(), 3.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.squared_length(), 9.0, epsilon = EPSILON);
    }

    #[test]
    fn vector3_cross_product_works() {
        let cross = Vector3::new(1.0, 0.0, 0.0).cross(&Vector3::new(0.0, 1.0, 0.0));
        assert_abs_diff_eq!(cross, Vector3::new(0.0, 0.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn vector3_cross_product_is_anticommutative() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);
        assert_eq!(a.cross(&b), -b.cross(&a));
    }

    #[test]
    fn vector3_cross_product_of_parallel_vectors_is_zero() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a.cross(&a.scaled(-2.0)), Vector3::zeros());
    }

    #[test]
    fn vector3_forward_cross_up_is_left() {
        assert_eq!(Vector3::forward().cross(&Vector3::up()), Vector3::left());
        assert_eq!(Vector3::right(), -Vector3::left());
        assert_eq!(Vector3::back(), -Vector3::forward());
        assert_eq!(Vector3::down(), -Vector3::up());
    }

    #[test]
    fn moving_in_3d_space_with_direction_vectors_works() {
        let mut position = Vector3::new(3.0, 0.0, 4.0);
        let look_direction = Vector3::forward();
        let left = look_direction.cross(&Vector3::up()).normalized();

        position += 2.0 * look_direction + 3.0 * left;

        assert_eq!(position, Vector3::new(0.0, 0.0, 6.0));
    }

    #[test]
    fn vector3_linear_combination_works() {
        let result = 2.0 * Vector3::new(-2.0, 1.0, -2.0) + 5.0 * Vector3::new(-1.0, 3.0, 0.0)
            - 6.0 * Vector3::new(4.0, 1.0, 3.0)
            - Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(result, Vector3::new(-34.0, 10.0, -23.0));
    }

    #[test]
    fn vector3_angle_between_works() {
        let a = Vector3::new(1.0, 2.0, -2.0);
        let b = Vector3::new(-3.0, -3.0, 0.0);
        assert_abs_diff_eq!(a.dot(&b), -9.0, epsilon = EPSILON);
        assert_abs_diff_eq!(a.angle_between(&b), Degrees(135.0), epsilon = 1e-3);
    }

    #[test]
    fn dividing_vector3_by_zero_gives_positive_infinity_sentinel() {
        assert_eq!(
            <[f32; 3]>::from(Vector3::new(-1.0, 0.0, 1.0).divided(0.0)),
            [f32::INFINITY; 3]
        );
        assert!(!Vector3::zeros().normalized().is_finite());
    }

    #[test]
    fn indexing_vector3_out_of_bounds_clamps_to_last_component() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        assert_eq!(v[3], 3.0);
    }

    #[test]
    fn vector3_swizzling_and_extension_work() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.xy(), Vector2::new(1.0, 2.0));
        assert_eq!(v.extended(4.0), Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Vector3::from([1.0, 2.0, 3.0]), v);
    }

    #[test]
    fn formatting_and_parsing_vector3_works() {
        let v = Vector3::new(1.0, 2.0, -3.0);
        assert_eq!(v.to_string(), "[X: 1 Y: 2 Z: -3 ]");
        assert_eq!("1, 2, -3".parse::<Vector3>(), Ok(v));
    }

    proptest! {
        #[test]
        fn vector3_cross_product_is_orthogonal_to_operands(
            a in vector3_strategy(10.0),
            b in vector3_strategy(10.0),
        ) {
            let cross = a.cross(&b);
            prop_assume!(cross.length() > 1e-2);
            let scale = a.length() * b.length();
            prop_assert!(cross.dot(&a).abs() <= 1e-5 * scale * a.length() + 1e-5);
            prop_assert!(cross.dot(&b).abs() <= 1e-5 * scale * b.length() + 1e-5);
        }

        #[test]
        fn normalized_vector3_has_unit_length(v in vector3_strategy(1e3)) {
            prop_assume!(v.length() > 1e-3);
            prop_assert!((v.normalized().length() - 1.0).abs() < TOLERANCE);
        }

        #[test]
        fn adding_then_subtracting_vector3_round_trips(
            a in vector3_strategy(1e2),
            b in vector3_strategy(1e2),
        ) {
            prop_assert_eq!(a + b - b, a);
        }
    }

    // === Vector4 Tests ===

    #[test]
    fn computing_vector4_length_works() {
        let v = Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_abs_diff_eq!(v.length(), 2.0, epsilon = EPSILON);
    }

    #[test]
    fn vector4_accessors_and_setters_work() {
        let mut v = Vector4::zeros();
        v.set_x(1.0).set_y(2.0).set_z(3.0).set_w(4.0);
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 4.0));
        *v.w_mut() = 5.0;
        assert_eq!(v.w(), 5.0);
        assert_eq!(v.xyz(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v[4], 5.0);
    }

    #[test]
    fn formatting_vector4_includes_w() {
        assert_eq!(
            Vector4::new(1.0, 2.0, 3.0, 4.0).to_string(),
            "[X: 1 Y: 2 Z: 3 W: 4 ]"
        );
    }

    proptest! {
        #[test]
        fn normalized_vector4_has_unit_length(v in vector4_strategy(1e3)) {
            prop_assume!(v.length() > 1e-3);
            prop_assert!((v.normalized().length() - 1.0).abs() < TOLERANCE);
        }

        #[test]
        fn adding_then_subtracting_vector4_round_trips(
            a in vector4_strategy(1e2),
            b in vector4_strategy(1e2),
        ) {
            prop_assert_eq!(a + b - b, a);
        }
    }
}
