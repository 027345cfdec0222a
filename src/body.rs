//! Point-mass bodies with force accumulation and semi-implicit Euler integration.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vector;
use core::fmt;

/// Display color. Carried for renderers; the physics never reads it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };
    pub const RED: Color = Color { r: 1.0, g: 0.0, b: 0.0 };

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// A point mass.
///
/// Each tick: zero or more [`Body::apply_force`] calls, then exactly one
/// [`Body::update`]. The force accumulator is private and always zero after
/// `update` returns successfully.
#[derive(Clone, Debug, PartialEq)]
pub struct Body<V: Vector> {
    pub position: V,
    pub velocity: V,
    pub color: Color,
    mass: V::Scalar,
    radius: V::Scalar,
    force: V,
}

fn check_mass<F: Float>(mass: F) -> Result<F, PhysicsError> {
    // NaN fails the comparison as well.
    if mass.is_finite() && mass > F::zero() {
        Ok(mass)
    } else {
        Err(PhysicsError::InvalidMass)
    }
}

impl<V: Vector> Body<V> {
    /// Create a body with radius 1 and a white color.
    pub fn new(mass: V::Scalar, position: V, velocity: V) -> Result<Self, PhysicsError> {
        Ok(Body {
            position,
            velocity,
            color: Color::default(),
            mass: check_mass(mass)?,
            radius: V::Scalar::one(),
            force: V::zero(),
        })
    }

    /// Body at rest at `position`.
    pub fn at_rest(mass: V::Scalar, position: V) -> Result<Self, PhysicsError> {
        Self::new(mass, position, V::zero())
    }

    pub fn with_radius(mut self, radius: V::Scalar) -> Result<Self, PhysicsError> {
        if !radius.is_finite() || radius < V::Scalar::zero() {
            return Err(PhysicsError::InvalidRadius);
        }
        self.radius = radius;
        Ok(self)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn mass(&self) -> V::Scalar {
        self.mass
    }

    pub fn set_mass(&mut self, mass: V::Scalar) -> Result<(), PhysicsError> {
        self.mass = check_mass(mass)?;
        Ok(())
    }

    pub fn radius(&self) -> V::Scalar {
        self.radius
    }

    /// Forces accumulated since the last [`Body::update`].
    pub fn force(&self) -> V {
        self.force
    }

    /// Add `force` to the pending sum for this tick.
    pub fn apply_force(&mut self, force: V) {
        self.force = self.force + force;
    }

    /// Acceleration the pending forces would produce.
    pub fn acceleration(&self) -> V {
        self.force.div(self.mass)
    }

    /// Advance one step of semi-implicit Euler and clear the accumulator.
    ///
    /// Velocity is updated first and the new velocity moves the position.
    /// `dt == 0` is a valid tick. A negative or non-finite `dt` is rejected
    /// and leaves the body untouched.
    pub fn update(&mut self, dt: V::Scalar) -> Result<(), PhysicsError> {
        if !dt.is_finite() || dt < V::Scalar::zero() {
            return Err(PhysicsError::InvalidTimeStep);
        }
        let acceleration = self.acceleration();
        self.velocity = self.velocity + acceleration.scale(dt);
        self.position = self.position + self.velocity.scale(dt);
        self.force = V::zero();
        Ok(())
    }

    /// Kinetic energy: 0.5 * m * |v|^2.
    pub fn kinetic_energy(&self) -> V::Scalar {
        V::Scalar::from_f64(0.5) * self.mass * self.velocity.magnitude_squared()
    }

    pub fn momentum(&self) -> V {
        self.velocity.scale(self.mass)
    }
}

impl<V: Vector + fmt::Display> fmt::Display for Body<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Body(mass={}, pos={}, vel={})", self.mass, self.position, self.velocity)
    }
}
