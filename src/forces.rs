//! Force sources evaluated once per body per step.

use crate::body::Body;
use crate::float::Float;
use crate::vec::{UpAxis, Vector};

/// Standard gravitational acceleration magnitude (units/s^2).
pub const STANDARD_GRAVITY: f64 = 9.8;

/// Anything that pushes on a body.
///
/// The returned force is fed to [`Body::apply_force`]; sources never mutate
/// the body themselves.
pub trait ForceSource<V: Vector> {
    fn force(&self, body: &Body<V>) -> V;
}

/// Uniform gravitational field. Force is `acceleration * mass`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gravity<V: Vector> {
    pub acceleration: V,
}

impl<V: Vector> Gravity<V> {
    pub fn new(acceleration: V) -> Self {
        Gravity { acceleration }
    }
}

impl<V: UpAxis> Gravity<V> {
    /// 9.8 units/s^2 along the negative up axis.
    pub fn standard() -> Self {
        Gravity { acceleration: V::up().scale(V::Scalar::from_f64(-STANDARD_GRAVITY)) }
    }
}

impl<V: Vector> ForceSource<V> for Gravity<V> {
    fn force(&self, body: &Body<V>) -> V {
        self.acceleration.scale(body.mass())
    }
}

/// Drag proportional to velocity: `-coefficient * velocity`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearDrag<F: Float> {
    pub coefficient: F,
}

impl<F: Float> LinearDrag<F> {
    /// Negative coefficients are clamped to zero.
    pub fn new(coefficient: F) -> Self {
        LinearDrag { coefficient: coefficient.max(F::zero()) }
    }
}

impl<V: Vector> ForceSource<V> for LinearDrag<V::Scalar> {
    fn force(&self, body: &Body<V>) -> V {
        body.velocity.scale(-self.coefficient)
    }
}
