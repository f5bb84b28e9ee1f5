//! Two-dimensional vector value type.
//!
//! [`Vector`] is a plain `Copy` value: arithmetic operators and constructors
//! always produce a new vector, and [`Vector::normalize`] is the only method
//! that rewrites a vector in place.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use thiserror::Error;

/// Errors raised by vector operations that are not total.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// Normalization was requested for a vector of length zero.
    #[error("the zero vector cannot be normalized")]
    ZeroLength,
    /// A component index other than 0 (x) or 1 (y) was requested.
    #[error("vector component index {0} is out of range")]
    IndexOutOfRange(usize),
}

/// A 2D vector with `f64` components.
///
/// Equality is exact component-wise comparison, with no tolerance.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Vector {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector {
    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The zero vector `(0, 0)`.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// `(1, 1)`.
    pub const fn one() -> Self {
        Self::new(1.0, 1.0)
    }

    /// Unit vector along positive y.
    pub const fn up() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Unit vector along negative y.
    pub const fn down() -> Self {
        Self::new(0.0, -1.0)
    }

    /// Unit vector along negative x.
    pub const fn left() -> Self {
        Self::new(-1.0, 0.0)
    }

    /// Unit vector along positive x.
    pub const fn right() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Returns `x² + y²`.
    pub fn square_magnitude(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the Euclidean length of the vector.
    ///
    /// Computed without squaring the components directly, so it is non-zero
    /// for every non-zero finite vector and finite whenever the true length is.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns a unit-length vector pointing in the same direction.
    ///
    /// # Errors
    ///
    /// [`VectorError::ZeroLength`] if the magnitude is not positive.
    pub fn normalized(&self) -> Result<Self, VectorError> {
        if self.magnitude() <= 0.0 {
            return Err(VectorError::ZeroLength);
        }
        // rescale by the largest component first so the length of
        // vectors near f64::MAX stays finite
        let largest = self.x.abs().max(self.y.abs());
        let (x, y) = (self.x / largest, self.y / largest);
        let length = x.hypot(y);
        Ok(Self::new(x / length, y / length))
    }

    /// Rescales this vector to unit length in place.
    ///
    /// On error the vector is left unchanged.
    ///
    /// # Errors
    ///
    /// [`VectorError::ZeroLength`] if the magnitude is not positive.
    pub fn normalize(&mut self) -> Result<(), VectorError> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Signed angle from the positive x-axis in radians, in `(-π, π]`.
    ///
    /// The zero vector yields `0`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns component `0` (x) or `1` (y).
    ///
    /// # Errors
    ///
    /// [`VectorError::IndexOutOfRange`] for any other index.
    pub fn component(&self, index: usize) -> Result<f64, VectorError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(VectorError::IndexOutOfRange(index)),
        }
    }

    /// Named form of `vector1 == vector2`.
    pub fn equals(vector1: Self, vector2: Self) -> bool {
        vector1 == vector2
    }

    /// Dot product `a.x * b.x + a.y * b.y`.
    pub fn dot_product(vector1: Self, vector2: Self) -> f64 {
        vector1.x * vector2.x + vector1.y * vector2.y
    }

    /// Euclidean distance between two points.
    pub fn distance(vector1: Self, vector2: Self) -> f64 {
        (vector1 - vector2).magnitude()
    }

    /// Difference of the two vectors' angles, `angle(b) - angle(a)`.
    ///
    /// The result is not wrapped and may lie anywhere in `(-2π, 2π)`.
    pub fn angle_between(vector1: Self, vector2: Self) -> f64 {
        vector2.angle() - vector1.angle()
    }

    /// Scales `vector` down so its magnitude does not exceed `max_length`.
    ///
    /// Vectors already within the bound are returned unchanged.
    pub fn clamp_magnitude(vector: Self, max_length: f64) -> Self {
        let magnitude = vector.magnitude();
        if magnitude > max_length {
            vector * (max_length / magnitude)
        } else {
            vector
        }
    }

    /// Linear interpolation `a * (1 - t) + b * t`.
    ///
    /// `t` is not restricted to `[0, 1]`; values outside extrapolate.
    pub fn lerp(vector1: Self, vector2: Self, amount: f64) -> Self {
        Self::new(
            vector1.x * (1.0 - amount) + vector2.x * amount,
            vector1.y * (1.0 - amount) + vector2.y * amount,
        )
    }

    fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    fn divided(self, divisor: f64) -> Self {
        Self::new(self.x / divisor, self.y / divisor)
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", std::any::type_name::<Self>(), self.x, self.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("vector component index {index} is out of range"),
        }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Vector) {
        *self = *self + other;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, other: Vector) {
        *self = *self - other;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

// `scalar / vector` divides the vector's components by the scalar, the same
// as `vector / scalar`; it is not a reciprocal.
macro_rules! impl_scalar_ops {
    ($($scalar:ty),*) => {$(
        impl Mul<$scalar> for Vector {
            type Output = Vector;

            fn mul(self, scalar: $scalar) -> Vector {
                self.scaled(f64::from(scalar))
            }
        }

        impl Mul<Vector> for $scalar {
            type Output = Vector;

            fn mul(self, vector: Vector) -> Vector {
                vector.scaled(f64::from(self))
            }
        }

        impl MulAssign<$scalar> for Vector {
            fn mul_assign(&mut self, scalar: $scalar) {
                *self = *self * scalar;
            }
        }

        impl Div<$scalar> for Vector {
            type Output = Vector;

            fn div(self, scalar: $scalar) -> Vector {
                self.divided(f64::from(scalar))
            }
        }

        impl Div<Vector> for $scalar {
            type Output = Vector;

            fn div(self, vector: Vector) -> Vector {
                vector.divided(f64::from(self))
            }
        }

        impl DivAssign<$scalar> for Vector {
            fn div_assign(&mut self, scalar: $scalar) {
                *self = *self / scalar;
            }
        }
    )*};
}

impl_scalar_ops!(f64, i32);
