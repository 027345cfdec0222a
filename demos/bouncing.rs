//! Two balls dropped onto the floor, printed every tenth of a second.
//!
//! Run with `cargo run --example bouncing`.

use pointmass::{
    Body, Color, PhysicsError, Simulation, SimulationConfig, StepObserver, Vec3,
};

/// Prints every body whenever a bounce happens.
struct BounceLog;

impl StepObserver for BounceLog {
    fn on_bounce(&mut self, index: usize) {
        println!("  body {} hit the floor", index);
    }
}

fn main() -> Result<(), PhysicsError> {
    let config = SimulationConfig::new().with_max_time_step(1.0 / 30.0);
    let mut sim: Simulation<Vec3<f64>> = Simulation::new(config);

    sim.add_body(Body::at_rest(1.0, Vec3::new(0.0, 20.0, -10.0))?.with_radius(2.0)?);
    sim.add_body(
        Body::at_rest(1.0, Vec3::new(5.0, 30.0, -15.0))?
            .with_radius(2.0)?
            .with_color(Color::RED),
    );

    println!("--- Initial State ---");
    for body in sim.bodies() {
        println!("Time: 0.0s, State: {}", body);
    }

    let dt = 1.0 / 60.0;
    let mut log = BounceLog;
    for frame in 1..=360 {
        sim.tick(dt, &mut log)?;
        if frame % 6 == 0 {
            for body in sim.bodies() {
                println!("Time: {:.1}s, State: {}", sim.time(), body);
            }
        }
    }
    Ok(())
}
