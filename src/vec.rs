//! Vector types and traits for physics calculations.
//!
//! Arithmetic is exposed two ways: the `+`/`-`/unary `-` operators and the
//! named free functions [`add`], [`sub`], [`scale`], [`div`]. Both return new
//! values and never touch their operands.

use crate::error::PhysicsError;
use crate::float::Float;
use core::fmt;
use core::ops::{Add, Neg, Sub};

/// Trait for vector types used in physics calculations.
///
/// Abstracts over dimensionality (2D, 3D) so all physics code
/// is generic over the vector type.
pub trait Vector:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    /// Number of components.
    const DIM: usize;

    /// Zero vector.
    fn zero() -> Self;

    /// Vector with all components set to the same value.
    fn splat(value: Self::Scalar) -> Self;

    /// Dot product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Scale all components by a scalar.
    fn scale(self, s: Self::Scalar) -> Self;

    /// Divide all components by a scalar.
    ///
    /// No guard: dividing by zero follows IEEE-754 and yields infinities or
    /// NaN. Use [`Vector::checked_div`] when the divisor is untrusted.
    fn div(self, s: Self::Scalar) -> Self;

    /// Component-wise multiplication.
    fn component_mul(self, other: Self) -> Self;

    /// Like [`Vector::div`], but fails on a zero divisor.
    fn checked_div(self, s: Self::Scalar) -> Result<Self, PhysicsError> {
        if s == Self::Scalar::zero() {
            Err(PhysicsError::DivideByZero)
        } else {
            Ok(self.div(s))
        }
    }

    /// Squared length (avoids sqrt).
    fn magnitude_squared(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Length (magnitude).
    fn magnitude(self) -> Self::Scalar {
        self.magnitude_squared().sqrt()
    }

    /// Normalize to unit length.
    ///
    /// A vector whose magnitude is exactly zero normalizes to the zero
    /// vector, so the result is not always a unit vector.
    fn normalize(self) -> Self {
        let len = self.magnitude();
        if len == Self::Scalar::zero() {
            Self::zero()
        } else {
            self.div(len)
        }
    }

    /// Distance between two points.
    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).magnitude()
    }

    /// Squared distance between two points.
    fn distance_squared(self, other: Self) -> Self::Scalar {
        (self - other).magnitude_squared()
    }

    /// Linear interpolation between self and other.
    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self + (other - self).scale(t)
    }
}

/// Vectors with a distinguished "up" axis, used by floor collision and gravity.
///
/// Both [`Vec2`] and [`Vec3`] treat +y as up, so gravity is negative y in
/// every dimension.
pub trait UpAxis: Vector {
    /// Unit vector pointing up.
    fn up() -> Self;

    /// Component along the up axis.
    fn height(self) -> Self::Scalar;

    /// Copy with the up-axis component replaced.
    fn with_height(self, height: Self::Scalar) -> Self;
}

/// Component-wise sum.
pub fn add<V: Vector>(a: V, b: V) -> V {
    a + b
}

/// Component-wise difference.
pub fn sub<V: Vector>(a: V, b: V) -> V {
    a - b
}

/// Multiply every component by `k`.
pub fn scale<V: Vector>(v: V, k: V::Scalar) -> V {
    v.scale(k)
}

/// Divide every component by `k` (IEEE-754 on zero).
pub fn div<V: Vector>(v: V, k: V::Scalar) -> V {
    v.div(k)
}

/// Sum of pairwise component products.
pub fn dot<V: Vector>(a: V, b: V) -> V::Scalar {
    a.dot(b)
}

/// Sum of squared components; never negative.
pub fn magnitude_squared<V: Vector>(v: V) -> V::Scalar {
    v.magnitude_squared()
}

/// Euclidean length; never negative.
pub fn magnitude<V: Vector>(v: V) -> V::Scalar {
    v.magnitude()
}

/// Unit vector along `v`, or zero when `v` has exactly zero length.
pub fn normalize<V: Vector>(v: V) -> V {
    v.normalize()
}

/// Right-handed cross product (3D only).
pub fn cross<F: Float>(a: Vec3<F>, b: Vec3<F>) -> Vec3<F> {
    a.cross(b)
}

// --------------------------------------------------------------------------
// Vec2<F> — 2D vector
// --------------------------------------------------------------------------

/// 2D vector for planar simulations.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Scalar z-component of the 3D cross product of the two vectors
    /// lifted into the xy-plane. 2D has no vector-valued cross product.
    pub fn perp_dot(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Vector for Vec2<F> {
    type Scalar = F;
    const DIM: usize = 2;
    fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }
    fn splat(value: F) -> Self { Vec2 { x: value, y: value } }
    fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }
    fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
    fn div(self, s: F) -> Self { Vec2 { x: self.x / s, y: self.y / s } }
    fn component_mul(self, other: Self) -> Self {
        Vec2 { x: self.x * other.x, y: self.y * other.y }
    }
}

impl<F: Float> UpAxis for Vec2<F> {
    fn up() -> Self { Vec2 { x: F::zero(), y: F::one() } }
    fn height(self) -> F { self.y }
    fn with_height(self, height: F) -> Self { Vec2 { x: self.x, y: height } }
}

impl<F: Float> From<[F; 2]> for Vec2<F> {
    fn from([x, y]: [F; 2]) -> Self { Vec2 { x, y } }
}

impl<F: Float> fmt::Display for Vec2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({:.2}, {:.2})", self.x, self.y)
    }
}

// --------------------------------------------------------------------------
// Vec3<F> — 3D vector
// --------------------------------------------------------------------------

/// 3D vector for spatial simulations.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// 3D cross product (right-handed).
    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Vector for Vec3<F> {
    type Scalar = F;
    const DIM: usize = 3;
    fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }
    fn splat(value: F) -> Self { Vec3 { x: value, y: value, z: value } }
    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }
    fn div(self, s: F) -> Self {
        Vec3 { x: self.x / s, y: self.y / s, z: self.z / s }
    }
    fn component_mul(self, other: Self) -> Self {
        Vec3 { x: self.x * other.x, y: self.y * other.y, z: self.z * other.z }
    }
}

impl<F: Float> UpAxis for Vec3<F> {
    fn up() -> Self { Vec3 { x: F::zero(), y: F::one(), z: F::zero() } }
    fn height(self) -> F { self.y }
    fn with_height(self, height: F) -> Self { Vec3 { x: self.x, y: height, z: self.z } }
}

impl<F: Float> From<[F; 3]> for Vec3<F> {
    fn from([x, y, z]: [F; 3]) -> Self { Vec3 { x, y, z } }
}

impl<F: Float> fmt::Display for Vec3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
