//! Matrices.
//!
//! Matrices are stored as columns of the vector type of the same dimension.
//! The columns are named `i`, `j`, `k` and `l` after the images of the
//! standard basis vectors.
//!
//! Determinants and adjugates use cofactor expansion. [`Matrix3`] minors are
//! [`Matrix2`] determinants and [`Matrix4`] minors are [`Matrix3`]
//! determinants. There is no pivoting, which is fine for these sizes.
//!
//! Inverting a singular matrix, or solving a system with one, does not fail.
//! The result saturates the same way as vector division by zero: every
//! component becomes `+∞`. Check [`is_independent`](Matrix3::is_independent)
//! first when that matters.

use crate::{
    angle::Angle,
    num::approx_zero,
    vector::{Vector2, Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 2x2 matrix.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct Matrix2 {
    i: Vector2,
    j: Vector2,
}

/// A 3x3 matrix.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct Matrix3 {
    i: Vector3,
    j: Vector3,
    k: Vector3,
}

/// A 4x4 matrix.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct Matrix4 {
    i: Vector4,
    j: Vector4,
    k: Vector4,
    l: Vector4,
}

macro_rules! impl_matrix {
    ($t:ident, $v:ident, $n:literal, [$($c:ident),+]) => {
        impl $t {
            /// Creates a matrix with the given columns.
            #[inline]
            pub const fn from_columns($($c: $v),+) -> Self {
                Self { $($c),+ }
            }

            /// Creates a matrix with all zeros.
            #[inline]
            pub const fn zeros() -> Self {
                Self { $($c: $v::zeros()),+ }
            }

            /// Creates an identity matrix.
            pub fn identity() -> Self {
                Self::from_diagonal(&$v::same(1.0))
            }

            /// Creates a matrix with the given diagonal and zeros elsewhere.
            pub fn from_diagonal(diagonal: &$v) -> Self {
                let mut matrix = Self::zeros();
                for idx in 0..$n {
                    *matrix.element_mut(idx, idx) = diagonal[idx];
                }
                matrix
            }

            $(
                #[inline]
                pub const fn $c(&self) -> &$v {
                    &self.$c
                }
            )+

            /// The column with the given index. Indices past the last column
            /// are clamped to the last column.
            #[inline]
            pub fn column(&self, idx: usize) -> &$v {
                &self.as_columns()[idx.min($n - 1)]
            }

            /// A mutable reference to the column with the given index,
            /// clamped like [`column`](Self::column).
            #[inline]
            pub fn column_mut(&mut self, idx: usize) -> &mut $v {
                &mut self.as_columns_mut()[idx.min($n - 1)]
            }

            /// Replaces the column with the given index.
            #[inline]
            pub fn set_column(&mut self, idx: usize, column: $v) -> &mut Self {
                *self.column_mut(idx) = column;
                self
            }

            /// The row with the given index, assembled from the columns.
            #[inline]
            pub fn row(&self, idx: usize) -> $v {
                $v::from([$(self.$c[idx]),+])
            }

            /// Replaces the row with the given index.
            pub fn set_row(&mut self, idx: usize, row: &$v) -> &mut Self {
                for col in 0..$n {
                    *self.element_mut(idx, col) = row[col];
                }
                self
            }

            /// The element at the given row and column.
            #[inline]
            pub fn element(&self, row: usize, col: usize) -> f32 {
                self.column(col)[row]
            }

            #[inline]
            pub fn element_mut(&mut self, row: usize, col: usize) -> &mut f32 {
                &mut self.column_mut(col)[row]
            }

            /// The diagonal elements.
            pub fn diagonal(&self) -> $v {
                let mut diagonal = $v::zeros();
                for idx in 0..$n {
                    diagonal[idx] = self.element(idx, idx);
                }
                diagonal
            }

            /// The sum of the diagonal elements.
            pub fn trace(&self) -> f32 {
                let diagonal: [f32; $n] = self.diagonal().into();
                diagonal.iter().sum()
            }

            /// Copies all columns from `other`.
            #[inline]
            pub fn set_from(&mut self, other: &Self) -> &mut Self {
                *self = *other;
                self
            }

            #[inline]
            pub fn added(&self, other: &Self) -> Self {
                Self { $($c: self.$c.added(&other.$c)),+ }
            }

            #[inline]
            pub fn add_in_place(&mut self, other: &Self) -> &mut Self {
                $(self.$c.add_in_place(&other.$c);)+
                self
            }

            #[inline]
            pub fn subtracted(&self, other: &Self) -> Self {
                Self { $($c: self.$c.subtracted(&other.$c)),+ }
            }

            #[inline]
            pub fn subtract_in_place(&mut self, other: &Self) -> &mut Self {
                $(self.$c.subtract_in_place(&other.$c);)+
                self
            }

            #[inline]
            pub fn scaled(&self, factor: f32) -> Self {
                Self { $($c: self.$c.scaled(factor)),+ }
            }

            #[inline]
            pub fn scale_in_place(&mut self, factor: f32) -> &mut Self {
                $(self.$c.scale_in_place(factor);)+
                self
            }

            /// Divides every element by `divisor`. A zero divisor gives a
            /// matrix of `+∞`.
            pub fn divided(&self, divisor: f32) -> Self {
                if divisor == 0.0 {
                    log::trace!("Dividing matrix by zero, saturating to infinity\n{}", self);
                }
                self.saturating_divided(divisor)
            }

            #[inline]
            pub fn divide_in_place(&mut self, divisor: f32) -> &mut Self {
                *self = self.divided(divisor);
                self
            }

            /// Like [`divided`](Self::divided), but leaves reporting the zero
            /// divisor to the caller.
            #[inline]
            fn saturating_divided(&self, divisor: f32) -> Self {
                if divisor == 0.0 {
                    Self { $($c: $v::infinity()),+ }
                } else {
                    Self { $($c: self.$c.mapped(|element| element / divisor)),+ }
                }
            }

            /// Computes the transpose of the matrix.
            pub fn transposed(&self) -> Self {
                let mut transposed = Self::zeros();
                for idx in 0..$n {
                    transposed.set_column(idx, self.row(idx));
                }
                transposed
            }

            pub fn transpose_in_place(&mut self) -> &mut Self {
                *self = self.transposed();
                self
            }

            /// Computes the matrix-vector product `self * vector`.
            pub fn apply_to(&self, vector: &$v) -> $v {
                let mut result = $v::zeros();
                for idx in 0..$n {
                    result.add_in_place(&self.column(idx).scaled(vector[idx]));
                }
                result
            }

            /// Replaces `vector` with `self * vector`.
            pub fn apply_in_place(&self, vector: &mut $v) {
                *vector = self.apply_to(vector);
            }

            /// Computes the matrix product `self * other`.
            pub fn multiply_right(&self, other: &Self) -> Self {
                Self { $($c: self.apply_to(&other.$c)),+ }
            }

            /// Replaces this matrix with `other * self`.
            ///
            /// Note the order: this multiplies from the left, whereas
            /// [`multiply_right`](Self::multiply_right) multiplies from the
            /// right.
            pub fn multiply_left_in_place(&mut self, other: &Self) -> &mut Self {
                *self = other.multiply_right(self);
                self
            }

            /// The minor of the element at `(row, col)` with the sign of its
            /// position applied.
            pub fn cofactor(&self, row: usize, col: usize) -> f32 {
                let minor = self.minor(row, col);
                if (row + col) % 2 == 0 { minor } else { -minor }
            }

            /// Computes the adjugate, the transpose of the cofactor matrix.
            pub fn adjugated(&self) -> Self {
                let mut adjugate = Self::zeros();
                for row in 0..$n {
                    for col in 0..$n {
                        *adjugate.element_mut(row, col) = self.cofactor(col, row);
                    }
                }
                adjugate
            }

            pub fn adjugate_in_place(&mut self) -> &mut Self {
                *self = self.adjugated();
                self
            }

            /// Computes the inverse as the adjugate divided by the
            /// determinant. A singular matrix gives a matrix of `+∞`.
            pub fn inverted(&self) -> Self {
                let determinant = self.determinant();
                if determinant == 0.0 {
                    log::trace!("Inverting singular matrix\n{}", self);
                }
                self.adjugated().saturating_divided(determinant)
            }

            pub fn invert_in_place(&mut self) -> &mut Self {
                *self = self.inverted();
                self
            }

            /// Solves `self * x = results` for `x` with Cramer's rule. A
            /// singular matrix gives a vector of `+∞`.
            pub fn solve_for(&self, results: &$v) -> $v {
                let determinant = self.determinant();
                if determinant == 0.0 {
                    log::trace!("Solving system with singular matrix\n{}", self);
                    return $v::infinity();
                }
                let mut substituted_determinants = $v::zeros();
                for idx in 0..$n {
                    let mut substituted = *self;
                    substituted.set_column(idx, *results);
                    substituted_determinants[idx] = substituted.determinant();
                }
                substituted_determinants.divided(determinant)
            }

            /// Whether all elements are finite.
            pub fn is_finite(&self) -> bool {
                true $(&& self.$c.is_finite())+
            }

            #[inline]
            fn as_columns(&self) -> &[$v; $n] {
                bytemuck::cast_ref(self)
            }

            #[inline]
            fn as_columns_mut(&mut self) -> &mut [$v; $n] {
                bytemuck::cast_mut(self)
            }
        }

        impl_binop!(Add, add, $t, $t, $t, |a, b| { a.added(b) });

        impl_binop!(Sub, sub, $t, $t, $t, |a, b| { a.subtracted(b) });

        impl_binop!(Mul, mul, $t, $t, $t, |a, b| { a.multiply_right(b) });

        impl_binop!(Mul, mul, $t, $v, $v, |a, b| { a.apply_to(b) });

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

        /// Indexes columns. Indices past the last column are clamped.
        impl Index<usize> for $t {
            type Output = $v;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                self.column(index)
            }
        }

        impl IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                self.column_mut(index)
            }
        }

        impl_tolerance_eq!($t, |a, b| { true $(&& a.$c == b.$c)+ });

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

        /// Writes one bracketed row per line.
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for row in 0..$n {
                    if row > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "[")?;
                    for col in 0..$n {
                        write!(f, "{} ", self.element(row, col))?;
                    }
                    write!(f, "]")?;
                }
                Ok(())
            }
        }
    };
}

impl_matrix!(Matrix2, Vector2, 2, [i, j]);
impl_matrix!(Matrix3, Vector3, 3, [i, j, k]);
impl_matrix!(Matrix4, Vector4, 4, [i, j, k, l]);

impl Matrix2 {
    /// Creates a matrix from its elements listed row by row.
    #[inline]
    pub const fn new(m11: f32, m12: f32, m21: f32, m22: f32) -> Self {
        Self::from_columns(Vector2::new(m11, m21), Vector2::new(m12, m22))
    }

    /// Creates a matrix rotating vectors counterclockwise by the given
    /// angle.
    pub fn rotation(angle: impl Angle) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_columns(Vector2::new(cos, sin), Vector2::new(-sin, cos))
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        self.i.x() * self.j.y() - self.j.x() * self.i.y()
    }

    /// The element diagonally opposite `(row, col)`, which is the
    /// determinant of the 1x1 submatrix left after removing that row and
    /// column.
    pub fn minor(&self, row: usize, col: usize) -> f32 {
        let [other_row] = remaining_indices::<1>(row);
        let [other_col] = remaining_indices::<1>(col);
        self.element(other_row, other_col)
    }

    /// If the columns are linearly dependent, returns the ratio `r` for which
    /// the second column is closest to `r` times the first. A zero first
    /// column with a nonzero second column gives `Some(f32::INFINITY)`, and
    /// two zero columns give `Some(0.0)`. Returns `None` when the columns are
    /// linearly independent.
    ///
    /// Dependence is decided by the determinant, exactly as in
    /// [`is_independent`](Self::is_independent).
    pub fn dependence_ratio(&self) -> Option<f32> {
        if self.is_independent() {
            return None;
        }

        let first_is_zero = approx_zero(self.i.x()) && approx_zero(self.i.y());
        let second_is_zero = approx_zero(self.j.x()) && approx_zero(self.j.y());

        Some(match (first_is_zero, second_is_zero) {
            (true, true) => 0.0,
            (true, false) => f32::INFINITY,
            _ => self.j.projection_factor(&self.i),
        })
    }

    /// Whether the columns are linearly independent, which is the case when
    /// the determinant is not approximately zero.
    pub fn is_independent(&self) -> bool {
        !approx_zero(self.determinant())
    }
}

impl Matrix3 {
    /// Creates a matrix from its elements listed row by row.
    #[inline]
    pub const fn new(
        m11: f32,
        m12: f32,
        m13: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Self {
        Self::from_columns(
            Vector3::new(m11, m21, m31),
            Vector3::new(m12, m22, m32),
            Vector3::new(m13, m23, m33),
        )
    }

    /// Computes the determinant with the six-term expansion.
    pub fn determinant(&self) -> f32 {
        let (i, j, k) = (&self.i, &self.j, &self.k);
        i.x() * (j.y() * k.z() - k.y() * j.z()) - j.x() * (i.y() * k.z() - k.y() * i.z())
            + k.x() * (i.y() * j.z() - j.y() * i.z())
    }

    /// The 2x2 matrix left after removing the given row and column.
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix2 {
        let rows = remaining_indices::<2>(row);
        let cols = remaining_indices::<2>(col);
        Matrix2::new(
            self.element(rows[0], cols[0]),
            self.element(rows[0], cols[1]),
            self.element(rows[1], cols[0]),
            self.element(rows[1], cols[1]),
        )
    }

    /// The determinant of the [`submatrix`](Self::submatrix) for the given
    /// row and column.
    pub fn minor(&self, row: usize, col: usize) -> f32 {
        self.submatrix(row, col).determinant()
    }

    /// Whether the columns are linearly independent, which is the case when
    /// the determinant is nonzero.
    pub fn is_independent(&self) -> bool {
        !approx_zero(self.determinant())
    }
}

impl Matrix4 {
    /// Creates a matrix from its elements listed row by row.
    #[inline]
    pub const fn new(
        m11: f32,
        m12: f32,
        m13: f32,
        m14: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m24: f32,
        m31: f32,
        m32: f32,
        m33: f32,
        m34: f32,
        m41: f32,
        m42: f32,
        m43: f32,
        m44: f32,
    ) -> Self {
        Self::from_columns(
            Vector4::new(m11, m21, m31, m41),
            Vector4::new(m12, m22, m32, m42),
            Vector4::new(m13, m23, m33, m43),
            Vector4::new(m14, m24, m34, m44),
        )
    }

    /// Computes the determinant by expanding along the first row, with
    /// each minor evaluated as a [`Matrix3`] determinant.
    pub fn determinant(&self) -> f32 {
        (0..4)
            .map(|col| self.element(0, col) * self.cofactor(0, col))
            .sum()
    }

    /// The 3x3 matrix left after removing the given row and column.
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix3 {
        let rows = remaining_indices::<3>(row);
        let cols = remaining_indices::<3>(col);
        let mut submatrix = Matrix3::zeros();
        for (sub_row, &row) in rows.iter().enumerate() {
            for (sub_col, &col) in cols.iter().enumerate() {
                *submatrix.element_mut(sub_row, sub_col) = self.element(row, col);
            }
        }
        submatrix
    }

    pub fn minor(&self, row: usize, col: usize) -> f32 {
        self.submatrix(row, col).determinant()
    }

    /// Whether the columns are linearly independent, which is the case when
    /// the determinant is nonzero.
    pub fn is_independent(&self) -> bool {
        !approx_zero(self.determinant())
    }
}

/// The `M` indices in `0..=M` other than `removed`, which is clamped to `M`.
fn remaining_indices<const M: usize>(removed: usize) -> [usize; M] {
    let removed = removed.min(M);
    let mut indices = [0; M];
    for (slot, idx) in indices
        .iter_mut()
        .zip((0..=M).filter(|&idx| idx != removed))
    {
        *slot = idx;
    }
    indices
}
