//! Angle units.
//!
//! Public APIs in this crate take and return [`Degrees`]. Conversion to
//! [`Radians`] happens only where a trigonometric function is evaluated.

use crate::consts::{DEG_TO_RAD, RAD_TO_DEG};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Represents an angle.
pub trait Angle: Copy {
    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> f32 {
        self.as_degrees().0
    }

    /// Returns the value of the angle in radians.
    fn radians(self) -> f32 {
        self.as_radians().0
    }

    /// Computes the sine and cosine of the angle.
    fn sin_cos(self) -> (f32, f32) {
        self.radians().sin_cos()
    }
}

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Degrees(pub f32);

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Radians(pub f32);

impl Angle for Degrees {
    fn as_degrees(self) -> Degrees {
        self
    }

    fn as_radians(self) -> Radians {
        Radians(degrees_to_radians(self.0))
    }
}

impl Angle for Radians {
    fn as_degrees(self) -> Degrees {
        Degrees(radians_to_degrees(self.0))
    }

    fn as_radians(self) -> Radians {
        self
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        rad.as_degrees()
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        deg.as_radians()
    }
}

macro_rules! impl_angle_arithmetic {
    ($t:ident) => {
        impl<A: Angle> Add<A> for $t {
            type Output = Self;
            fn add(self, rhs: A) -> Self {
                Self(self.0 + Self::from_angle(rhs).0)
            }
        }

        impl<A: Angle> Sub<A> for $t {
            type Output = Self;
            fn sub(self, rhs: A) -> Self {
                Self(self.0 - Self::from_angle(rhs).0)
            }
        }

        impl Mul<f32> for $t {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Div<f32> for $t {
            type Output = Self;
            fn div(self, rhs: f32) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl Neg for $t {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                f32::abs_diff_eq(&self.0, &other.0, epsilon)
            }
        }

        impl RelativeEq for $t {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                f32::relative_eq(&self.0, &other.0, epsilon, max_relative)
            }
        }
    };
}

impl Degrees {
    fn from_angle(angle: impl Angle) -> Self {
        angle.as_degrees()
    }
}

impl Radians {
    fn from_angle(angle: impl Angle) -> Self {
        angle.as_radians()
    }
}

impl_angle_arithmetic!(Degrees);
impl_angle_arithmetic!(Radians);

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.0)
    }
}

pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PI;
    use approx::assert_abs_diff_eq;

    #[test]
    fn degrees_to_radians_for_special_angles_work() {
        assert_abs_diff_eq!(Degrees(0.0).radians(), 0.0);
        assert_abs_diff_eq!(Degrees(90.0).radians(), PI / 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Degrees(180.0).radians(), PI, epsilon = 1e-6);
        assert_abs_diff_eq!(Degrees(-270.0).radians(), -3.0 * PI / 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Degrees(360.0).radians(), 2.0 * PI, epsilon = 1e-6);
    }

    #[test]
    fn radians_to_degrees_for_special_angles_work() {
        assert_abs_diff_eq!(Radians(0.0).degrees(), 0.0);
        assert_abs_diff_eq!(Radians(PI / 2.0).degrees(), 90.0, epsilon = 1e-5);
        assert_abs_diff_eq!(Radians(PI).degrees(), 180.0, epsilon = 1e-5);
        assert_abs_diff_eq!(Radians(-PI).degrees(), -180.0, epsilon = 1e-5);
    }

    #[test]
    fn mixed_unit_arithmetic_converts_right_operand() {
        assert_abs_diff_eq!(
            Degrees(45.0) + Radians(PI / 2.0),
            Degrees(135.0),
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            Radians(PI / 2.0) - Degrees(45.0),
            Radians(PI / 4.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(Degrees(42.0) * 2.5, Degrees(105.0));
        assert_abs_diff_eq!(Degrees(42.0) / 4.0, Degrees(10.5));
        assert_abs_diff_eq!(-Degrees(30.0), Degrees(-30.0));
    }

    #[test]
    fn sin_cos_of_degrees_uses_radians() {
        let (sin, cos) = Degrees(90.0).sin_cos();
        assert_abs_diff_eq!(sin, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(cos, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn formatting_angles_shows_unit() {
        assert_eq!(Degrees(90.0).to_string(), "90°");
        assert_eq!(Radians(1.5).to_string(), "1.5 rad");
    }
}
