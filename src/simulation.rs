//! A world of independent bodies advanced tick by tick.

use crate::body::Body;
use crate::config::SimulationConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::forces::ForceSource;
use crate::observer::StepObserver;
use crate::vec::{UpAxis, Vector};
use alloc::boxed::Box;
use alloc::vec::Vec as AllocVec;

/// Owns the bodies, gravity and extra force sources of one simulation.
///
/// The driver loop calls [`Simulation::tick`] once per frame; renderers read
/// through [`Simulation::bodies`].
pub struct Simulation<V: UpAxis> {
    bodies: AllocVec<Body<V>>,
    forces: AllocVec<Box<dyn ForceSource<V>>>,
    config: SimulationConfig<V>,
    time: V::Scalar,
}

impl<V: UpAxis> Simulation<V> {
    pub fn new(config: SimulationConfig<V>) -> Self {
        Simulation {
            bodies: AllocVec::new(),
            forces: AllocVec::new(),
            config,
            time: V::Scalar::zero(),
        }
    }

    pub fn add_body(&mut self, body: Body<V>) -> usize {
        let idx = self.bodies.len();
        self.bodies.push(body);
        idx
    }

    /// Register a force applied to every body each step, after gravity.
    pub fn add_force_source(&mut self, source: Box<dyn ForceSource<V>>) {
        self.forces.push(source);
    }

    pub fn bodies(&self) -> &[Body<V>] { &self.bodies }
    pub fn body_count(&self) -> usize { self.bodies.len() }
    pub fn config(&self) -> &SimulationConfig<V> { &self.config }
    pub fn config_mut(&mut self) -> &mut SimulationConfig<V> { &mut self.config }

    /// Elapsed simulated time.
    pub fn time(&self) -> V::Scalar { self.time }

    fn out_of_bounds(&self, index: usize) -> PhysicsError {
        PhysicsError::BodyOutOfBounds { index, count: self.bodies.len() }
    }

    pub fn body(&self, index: usize) -> Result<&Body<V>, PhysicsError> {
        self.bodies.get(index).ok_or_else(|| self.out_of_bounds(index))
    }

    pub fn body_mut(&mut self, index: usize) -> Result<&mut Body<V>, PhysicsError> {
        let count = self.bodies.len();
        self.bodies
            .get_mut(index)
            .ok_or(PhysicsError::BodyOutOfBounds { index, count })
    }

    /// Queue a one-off force (user input, impulses) on one body for the
    /// next tick.
    pub fn apply_force_to(&mut self, index: usize, force: V) -> Result<(), PhysicsError> {
        self.body_mut(index)?.apply_force(force);
        Ok(())
    }

    /// Advance every body by `dt`.
    ///
    /// Per sub-step and per body: gravity, registered force sources,
    /// integration, then floor collision. `dt` is clamped to the configured
    /// maximum. An invalid `dt` is rejected before any body is touched.
    pub fn tick<O: StepObserver>(
        &mut self,
        dt: V::Scalar,
        observer: &mut O,
    ) -> Result<(), PhysicsError> {
        if !dt.is_finite() || dt < V::Scalar::zero() {
            return Err(PhysicsError::InvalidTimeStep);
        }
        let dt = match self.config.max_time_step {
            Some(max_dt) => dt.min(max_dt),
            None => dt,
        };
        let sub_steps = self.config.sub_steps.max(1);
        let sub_dt = dt / V::Scalar::from_usize(sub_steps);
        // `max_time_step` can be set directly through `config_mut`, so the
        // capped step is checked again before any body gets a force.
        if !sub_dt.is_finite() || sub_dt < V::Scalar::zero() {
            return Err(PhysicsError::InvalidTimeStep);
        }

        for _sub in 0..sub_steps {
            for (i, body) in self.bodies.iter_mut().enumerate() {
                body.apply_force(self.config.gravity.scale(body.mass()));
                for source in self.forces.iter() {
                    let force = source.force(body);
                    body.apply_force(force);
                }

                body.update(sub_dt)?;
                observer.on_integrate(i);

                if let Some(floor) = &self.config.floor {
                    if floor.resolve(body) {
                        observer.on_bounce(i);
                    }
                }
            }
        }

        self.time = self.time + dt;
        observer.on_tick_complete(self.time.to_f64());
        Ok(())
    }

    /// Run `steps` ticks of `dt` each.
    pub fn run<O: StepObserver>(
        &mut self,
        steps: usize,
        dt: V::Scalar,
        observer: &mut O,
    ) -> Result<(), PhysicsError> {
        for _ in 0..steps {
            self.tick(dt, observer)?;
        }
        Ok(())
    }

    pub fn total_kinetic_energy(&self) -> V::Scalar {
        self.bodies
            .iter()
            .fold(V::Scalar::zero(), |acc, b| acc + b.kinetic_energy())
    }
}

impl<V: UpAxis> Default for Simulation<V> {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
