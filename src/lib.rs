//! Point-mass physics: vector algebra, symplectic Euler bodies and floor bounce.
//!
//! `pointmass` is the numeric core of a small bouncing-ball simulation. It owns
//! no window, renderer or input handling: a driver loop feeds it a time step
//! each frame and a renderer reads back positions.
//!
//! # Features
//!
//! - **Vectors**: `Vec2` and `Vec3` behind one `Vector` trait, plus a
//!   runtime-dimension `DynVector` with checked operations
//! - **Bodies**: force accumulation and semi-implicit Euler integration
//! - **Floor collision**: inelastic bounce off a horizontal plane
//! - **Simulation**: gravity, pluggable force sources, sub-steps and a capped `dt`
//! - **Observable**: monitor ticks via the `StepObserver` trait
//! - **`no_std` compatible**: only needs `alloc`
//!
//! # Example
//! ```
//! use pointmass::{Body, NoOpStepObserver, Simulation, SimulationConfig, Vec3};
//!
//! let mut sim: Simulation<Vec3<f64>> = Simulation::new(SimulationConfig::new());
//! let ball = Body::at_rest(1.0, Vec3::new(0.0, 20.0, -10.0))?.with_radius(2.0)?;
//! sim.add_body(ball);
//! sim.run(60, 1.0 / 60.0, &mut NoOpStepObserver)?;
//! assert!(sim.bodies()[0].position.y < 20.0);
//! # Ok::<(), pointmass::PhysicsError>(())
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod dynamic;
pub mod body;
pub mod collision;
pub mod forces;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vector, UpAxis, Vec2, Vec3};
pub use dynamic::DynVector;
pub use body::{Body, Color};
pub use collision::{Floor, resolve_floor_collision, DEFAULT_RESTITUTION};
pub use forces::{ForceSource, Gravity, LinearDrag, STANDARD_GRAVITY};
pub use simulation::Simulation;
pub use config::SimulationConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
