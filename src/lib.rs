//! Small fixed-size linear algebra.
//!
//! Vectors and square matrices of dimension 2, 3 and 4 with determinants,
//! inverses and Cramer's-rule solving, plus a few geometric primitives built
//! on top of them.

#[macro_use]
mod macros;

pub mod angle;
pub mod consts;
pub mod geometry;
pub mod matrix;
pub mod num;
pub mod vector;

pub use angle::{Angle, Degrees, Radians};
pub use matrix::{Matrix2, Matrix3, Matrix4};
pub use num::Float;
pub use vector::{ParseVectorError, Vector2, Vector3, Vector4};
