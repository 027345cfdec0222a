//! Runtime-dimension vectors.
//!
//! [`Vec2`] and [`Vec3`] make dimension mismatches a compile error. When the
//! dimension is only known at runtime (data loaded from elsewhere, mixed 2D
//! and 3D scenes), [`DynVector`] carries it as a length and every binary
//! operation checks it before touching a component.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::{Vec2, Vec3};
use alloc::vec::Vec as AllocVec;

/// Vector whose dimension is carried at runtime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DynVector<F: Float> {
    components: AllocVec<F>,
}

impl<F: Float> DynVector<F> {
    pub fn new(components: AllocVec<F>) -> Self {
        DynVector { components }
    }

    /// Zero vector of the given dimension.
    pub fn zeros(dim: usize) -> Self {
        DynVector { components: alloc::vec![F::zero(); dim] }
    }

    pub fn dim(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> &[F] {
        &self.components
    }

    fn check_dim(&self, other: &Self) -> Result<(), PhysicsError> {
        if self.dim() != other.dim() {
            return Err(PhysicsError::DimensionMismatch {
                expected: self.dim(),
                found: other.dim(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, op: impl Fn(F, F) -> F) -> Result<Self, PhysicsError> {
        self.check_dim(other)?;
        let components = self
            .components
            .iter()
            .zip(other.components.iter())
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(DynVector { components })
    }

    fn map(&self, op: impl Fn(F) -> F) -> Self {
        DynVector { components: self.components.iter().map(|&c| op(c)).collect() }
    }

    /// Component-wise sum.
    pub fn try_add(&self, other: &Self) -> Result<Self, PhysicsError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Component-wise difference.
    pub fn try_sub(&self, other: &Self) -> Result<Self, PhysicsError> {
        self.zip_with(other, |a, b| a - b)
    }

    pub fn try_dot(&self, other: &Self) -> Result<F, PhysicsError> {
        self.check_dim(other)?;
        Ok(self
            .components
            .iter()
            .zip(other.components.iter())
            .fold(F::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Cross product; both operands must be 3D.
    pub fn try_cross(&self, other: &Self) -> Result<Self, PhysicsError> {
        let a = Vec3::try_from(self.clone())?;
        let b = Vec3::try_from(other.clone())?;
        Ok(a.cross(b).into())
    }

    pub fn scale(&self, k: F) -> Self {
        self.map(|c| c * k)
    }

    /// Divide by `k`. Same IEEE-754 policy as [`crate::Vector::div`].
    pub fn div(&self, k: F) -> Self {
        self.map(|c| c / k)
    }

    pub fn magnitude_squared(&self) -> F {
        self.components.iter().fold(F::zero(), |acc, &c| acc + c * c)
    }

    pub fn magnitude(&self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector, or the zero vector when the magnitude is exactly zero.
    pub fn normalize(&self) -> Self {
        let len = self.magnitude();
        if len == F::zero() {
            Self::zeros(self.dim())
        } else {
            self.div(len)
        }
    }
}

impl<F: Float> From<Vec2<F>> for DynVector<F> {
    fn from(v: Vec2<F>) -> Self {
        DynVector { components: alloc::vec![v.x, v.y] }
    }
}

impl<F: Float> From<Vec3<F>> for DynVector<F> {
    fn from(v: Vec3<F>) -> Self {
        DynVector { components: alloc::vec![v.x, v.y, v.z] }
    }
}

impl<F: Float> TryFrom<DynVector<F>> for Vec2<F> {
    type Error = PhysicsError;

    fn try_from(v: DynVector<F>) -> Result<Self, Self::Error> {
        match v.components.as_slice() {
            &[x, y] => Ok(Vec2::new(x, y)),
            other => Err(PhysicsError::DimensionMismatch { expected: 2, found: other.len() }),
        }
    }
}

impl<F: Float> TryFrom<DynVector<F>> for Vec3<F> {
    type Error = PhysicsError;

    fn try_from(v: DynVector<F>) -> Result<Self, Self::Error> {
        match v.components.as_slice() {
            &[x, y, z] => Ok(Vec3::new(x, y, z)),
            other => Err(PhysicsError::DimensionMismatch { expected: 3, found: other.len() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn add_same_dimension() {
        let a = DynVector::new(vec![1.0f64, 2.0, 3.0]);
        let b = DynVector::new(vec![0.5f64, -2.0, 1.0]);
        assert_eq!(a.try_add(&b).unwrap().components(), &[1.5, 0.0, 4.0]);
    }

    #[test]
    fn mismatch_is_rejected() {
        let a: DynVector<f64> = Vec2::new(1.0, 2.0).into();
        let b: DynVector<f64> = Vec3::new(1.0, 2.0, 3.0).into();
        assert_eq!(
            a.try_add(&b),
            Err(PhysicsError::DimensionMismatch { expected: 2, found: 3 })
        );
        assert_eq!(
            a.try_dot(&b),
            Err(PhysicsError::DimensionMismatch { expected: 2, found: 3 })
        );
    }

    #[test]
    fn cross_requires_3d() {
        let a: DynVector<f64> = Vec2::new(1.0, 0.0).into();
        let b: DynVector<f64> = Vec2::new(0.0, 1.0).into();
        assert!(matches!(
            a.try_cross(&b),
            Err(PhysicsError::DimensionMismatch { expected: 3, found: 2 })
        ));

        let i: DynVector<f64> = Vec3::new(1.0, 0.0, 0.0).into();
        let j: DynVector<f64> = Vec3::new(0.0, 1.0, 0.0).into();
        assert_eq!(i.try_cross(&j).unwrap().components(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn normalize_zero_keeps_dimension() {
        let z = DynVector::<f32>::zeros(4);
        assert_eq!(z.normalize(), DynVector::zeros(4));
    }

    #[test]
    fn converts_back_to_fixed() {
        let d: DynVector<f64> = Vec3::new(1.0, 2.0, 3.0).into();
        assert_eq!(Vec3::try_from(d.clone()), Ok(Vec3::new(1.0, 2.0, 3.0)));
        assert!(Vec2::try_from(d).is_err());
    }
}
