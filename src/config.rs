//! Configuration types for the simulation.

use crate::collision::Floor;
use crate::float::Float;
use crate::forces::STANDARD_GRAVITY;
use crate::vec::{UpAxis, Vector};

/// Configuration for a [`crate::Simulation`].
///
/// # Builder Pattern
/// ```
/// use pointmass::config::SimulationConfig;
/// use pointmass::vec::Vec3;
///
/// let config: SimulationConfig<Vec3<f64>> = SimulationConfig::new()
///     .with_gravity(Vec3::new(0.0, -1.62, 0.0))
///     .with_max_time_step(1.0 / 30.0)
///     .with_sub_steps(2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig<V: UpAxis> {
    /// Gravitational acceleration, applied to every body as `gravity * mass`.
    /// Default: 9.8 along the negative up axis.
    pub gravity: V,
    /// Floor plane bodies bounce off. Default: height 0, restitution 0.8.
    pub floor: Option<Floor<V::Scalar>>,
    /// Upper bound on the `dt` of one tick, like a capped frame clock.
    /// Default: none.
    pub max_time_step: Option<V::Scalar>,
    /// Number of equal sub-steps per tick. Default: 1.
    pub sub_steps: usize,
}

impl<V: UpAxis> SimulationConfig<V> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            gravity: V::up().scale(V::Scalar::from_f64(-STANDARD_GRAVITY)),
            floor: Some(Floor::default()),
            max_time_step: None,
            sub_steps: 1,
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn without_gravity(mut self) -> Self {
        self.gravity = V::zero();
        self
    }

    pub fn with_floor(mut self, floor: Floor<V::Scalar>) -> Self {
        self.floor = Some(floor);
        self
    }

    pub fn without_floor(mut self) -> Self {
        self.floor = None;
        self
    }

    /// Cap the per-tick `dt`. Non-positive or non-finite caps are ignored.
    pub fn with_max_time_step(mut self, max_dt: V::Scalar) -> Self {
        if max_dt.is_finite() && max_dt > V::Scalar::zero() {
            self.max_time_step = Some(max_dt);
        }
        self
    }

    /// Set the number of sub-steps.
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }
}

impl<V: UpAxis> Default for SimulationConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}
