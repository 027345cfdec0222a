use pointmass::{
    Body, Color, Floor, Gravity, LinearDrag, NoOpStepObserver, PhysicsError, Simulation,
    SimulationConfig, StepObserver, Vec2, Vec3, Vector,
};

fn two_ball_scene() -> Simulation<Vec3<f64>> {
    let mut sim = Simulation::new(SimulationConfig::new());
    sim.add_body(
        Body::at_rest(1.0, Vec3::new(0.0, 20.0, -10.0))
            .unwrap()
            .with_radius(2.0)
            .unwrap(),
    );
    sim.add_body(
        Body::at_rest(1.0, Vec3::new(5.0, 30.0, -15.0))
            .unwrap()
            .with_radius(2.0)
            .unwrap()
            .with_color(Color::RED),
    );
    sim
}

#[test]
fn balls_never_sink_below_floor() {
    let mut sim = two_ball_scene();
    for _ in 0..600 {
        sim.tick(1.0 / 60.0, &mut NoOpStepObserver).unwrap();
        for body in sim.bodies() {
            assert!(body.position.y >= body.radius());
        }
    }
}

#[test]
fn bouncing_settles() {
    let mut sim = two_ball_scene();
    let start_energy: f64 = sim
        .bodies()
        .iter()
        .map(|b| b.mass() * 9.8 * (b.position.y - b.radius()))
        .sum();
    sim.run(60 * 60, 1.0 / 60.0, &mut NoOpStepObserver).unwrap();
    let end_energy: f64 = sim
        .bodies()
        .iter()
        .map(|b| b.kinetic_energy() + b.mass() * 9.8 * (b.position.y - b.radius()))
        .sum();
    assert!(end_energy < start_energy * 0.1, "start {} end {}", start_energy, end_energy);
}

#[test]
fn horizontal_position_unchanged_by_gravity() {
    let mut sim = two_ball_scene();
    sim.run(120, 1.0 / 60.0, &mut NoOpStepObserver).unwrap();
    assert_eq!(sim.bodies()[1].position.x, 5.0);
    assert_eq!(sim.bodies()[1].position.z, -15.0);
    assert_eq!(sim.bodies()[1].color, Color::RED);
}

#[test]
fn one_off_force_applies_to_one_tick_only() {
    let mut sim: Simulation<Vec2<f64>> =
        Simulation::new(SimulationConfig::new().without_gravity().without_floor());
    let idx = sim.add_body(Body::at_rest(2.0, Vec2::zero()).unwrap());
    sim.apply_force_to(idx, Vec2::new(4.0, 0.0)).unwrap();
    sim.tick(1.0, &mut NoOpStepObserver).unwrap();
    assert_eq!(sim.body(idx).unwrap().velocity, Vec2::new(2.0, 0.0));
    sim.tick(1.0, &mut NoOpStepObserver).unwrap();
    assert_eq!(sim.body(idx).unwrap().velocity, Vec2::new(2.0, 0.0));
    assert_eq!(sim.body(idx).unwrap().position, Vec2::new(4.0, 0.0));
}

#[test]
fn drag_source_slows_bodies() {
    let mut sim: Simulation<Vec2<f64>> =
        Simulation::new(SimulationConfig::new().without_gravity().without_floor());
    sim.add_body(Body::new(1.0, Vec2::zero(), Vec2::new(10.0, 0.0)).unwrap());
    sim.add_force_source(Box::new(LinearDrag::new(0.5f64)));
    sim.run(10, 0.1, &mut NoOpStepObserver).unwrap();
    let v = sim.bodies()[0].velocity.x;
    assert!(v < 10.0 && v > 0.0);
}

#[test]
fn extra_gravity_source_adds_up() {
    let mut sim: Simulation<Vec3<f64>> =
        Simulation::new(SimulationConfig::new().without_floor());
    sim.add_body(Body::at_rest(3.0, Vec3::zero()).unwrap());
    sim.add_force_source(Box::new(Gravity::<Vec3<f64>>::standard()));
    sim.tick(0.5, &mut NoOpStepObserver).unwrap();
    assert!((sim.bodies()[0].velocity.y + 9.8).abs() < 1e-12);
}

#[test]
fn raised_floor() {
    let mut sim: Simulation<Vec2<f64>> =
        Simulation::new(SimulationConfig::new().with_floor(Floor::new(5.0, 0.5)));
    sim.add_body(Body::new(1.0, Vec2::new(0.0, 5.5), Vec2::new(0.0, -4.0)).unwrap());
    sim.tick(0.1, &mut NoOpStepObserver).unwrap();
    let body = &sim.bodies()[0];
    assert_eq!(body.position.y, 6.0);
    assert!(body.velocity.y > 0.0);
}

#[test]
fn sub_steps_cover_the_full_tick() {
    let mut sim: Simulation<Vec2<f64>> = Simulation::new(
        SimulationConfig::new().without_gravity().without_floor().with_sub_steps(4),
    );
    sim.add_body(Body::new(1.0, Vec2::zero(), Vec2::new(1.0, 0.0)).unwrap());
    sim.tick(1.0, &mut NoOpStepObserver).unwrap();
    assert_eq!(sim.time(), 1.0);
    assert!((sim.bodies()[0].position.x - 1.0).abs() < 1e-12);
}

#[test]
fn rejects_bad_time_steps() {
    let mut sim = two_ball_scene();
    assert_eq!(sim.tick(-0.1, &mut NoOpStepObserver), Err(PhysicsError::InvalidTimeStep));
    assert_eq!(sim.tick(f64::INFINITY, &mut NoOpStepObserver), Err(PhysicsError::InvalidTimeStep));
    assert_eq!(sim.tick(0.0, &mut NoOpStepObserver), Ok(()));
}

struct TimeLog(Vec<f64>);

impl StepObserver for TimeLog {
    fn on_tick_complete(&mut self, time: f64) {
        self.0.push(time);
    }
}

#[test]
fn observer_receives_tick_times() {
    let mut sim: Simulation<Vec2<f32>> = Simulation::default();
    sim.add_body(Body::at_rest(1.0, Vec2::new(0.0, 3.0)).unwrap());
    let mut log = TimeLog(Vec::new());
    sim.run(4, 0.25, &mut log).unwrap();
    assert_eq!(log.0, vec![0.25, 0.5, 0.75, 1.0]);
    assert!(sim.bodies()[0].position.y < 3.0);
    assert!(sim.total_kinetic_energy() > 0.0);
}
