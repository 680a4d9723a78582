//! The arena and its bodies
//!
//! One `step` is one full pass over the bodies in index order. Each moving
//! body applies its own forces and boundary response, resolves contacts
//! against every other body, then advances its position. Resting bodies only
//! re-apply their pinned height.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::Body;
use super::bounds::Bounds;
use super::collision;
use super::config::PhysicsConfig;
use crate::consts::DEFAULT_SEED;
use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct World {
    bounds: Bounds,
    /// Stable order; indices are the only way bodies refer to each other
    bodies: Vec<Body>,
    config: PhysicsConfig,
    /// Kick randomness
    rng: Pcg32,
    ticks: u64,
}

impl World {
    pub fn new(
        bounds: Bounds,
        bodies: Vec<Body>,
        config: PhysicsConfig,
    ) -> Result<Self, ConfigError> {
        Self::with_seed(bounds, bodies, config, DEFAULT_SEED)
    }

    /// Build a world, validating every body against the arena
    pub fn with_seed(
        bounds: Bounds,
        bodies: Vec<Body>,
        config: PhysicsConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        for (index, body) in bodies.iter().enumerate() {
            body.validate(index)?;
        }

        let max_radius = bodies.iter().map(|b| b.radius).fold(0.0, f64::max);
        if !bounds.width.is_finite() || !bounds.height.is_finite() || !bounds.fits(max_radius) {
            return Err(ConfigError::ArenaTooSmall {
                width: bounds.width,
                height: bounds.height,
                max_radius,
            });
        }

        log::info!(
            "World created: {}x{} arena, {} bodies, seed {seed}",
            bounds.width,
            bounds.height,
            bodies.len()
        );

        Ok(Self {
            bounds,
            bodies,
            config,
            rng: Pcg32::seed_from_u64(seed),
            ticks: 0,
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Completed physics passes
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) {
        for index in 0..self.bodies.len() {
            self.step_body(index);
        }
        self.ticks += 1;
    }

    fn step_body(&mut self, index: usize) {
        let body = &mut self.bodies[index];
        if body.is_resting() {
            body.pin_to_rest();
            return;
        }

        body.integrate_forces(self.bounds, &self.config);
        collision::resolve_contacts(&mut self.bodies, index, &self.config);
        self.bodies[index].integrate_position();
    }

    /// Give every body a random velocity in `[-energy, energy]` per axis and
    /// wake them all.
    pub fn kick(&mut self, energy: u32) {
        let scale = 2.0 * f64::from(energy);
        for body in &mut self.bodies {
            let vx = (self.rng.random::<f64>() - 0.5) * scale;
            let vy = (self.rng.random::<f64>() - 0.5) * scale;
            body.kick(DVec2::new(vx, vy));
        }
        log::info!("Kicked {} bodies with energy {energy}", self.bodies.len());
    }

    /// Set restitution on every body, clamped into [0, 1]
    pub fn set_restitution(&mut self, restitution: f64) {
        let restitution = if restitution.is_nan() {
            0.0
        } else {
            restitution.clamp(0.0, 1.0)
        };
        for body in &mut self.bodies {
            body.restitution = restitution;
        }
        log::info!("Restitution set to {restitution:.2}");
    }

    /// Map a 0-100 bounciness control onto restitution
    pub fn set_bounciness_percent(&mut self, percent: u8) {
        self.set_restitution(f64::from(percent.min(100)) / 100.0);
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn all_resting(&self) -> bool {
        self.bodies.iter().all(Body::is_resting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn single_ball_world() -> World {
        let ball = Body::new(DVec2::new(100.0, 100.0), 20.0).with_restitution(0.7);
        World::new(Bounds::new(500.0, 500.0), vec![ball], PhysicsConfig::default()).unwrap()
    }

    #[test]
    fn test_single_ball_settles_on_floor() {
        let mut world = single_ball_world();
        for _ in 0..500 {
            world.step();
        }

        let ball = &world.bodies()[0];
        assert!(ball.is_resting());
        assert_eq!(ball.pos.y, 480.0);
        assert_eq!(ball.resting_y(), Some(480.0));
        assert_eq!(ball.vel, DVec2::ZERO);
        assert_eq!(world.ticks(), 500);
    }

    #[test]
    fn test_resting_body_stays_pinned() {
        let mut resting = Body::new(DVec2::new(100.0, 480.0), 20.0);
        resting.rest_at(480.0);
        let bouncer = Body::new(DVec2::new(400.0, 100.0), 20.0).with_velocity(DVec2::new(-3.0, 0.0));
        let mut world =
            World::new(Bounds::new(500.0, 500.0), vec![resting, bouncer], PhysicsConfig::default())
                .unwrap();

        for _ in 0..60 {
            world.step();
            let body = &world.bodies()[0];
            assert!(body.is_resting());
            assert_eq!(body.pos, DVec2::new(100.0, 480.0));
        }
    }

    #[test]
    fn test_resting_height_restored_after_push() {
        let mut world = single_ball_world();
        for _ in 0..500 {
            world.step();
        }
        assert!(world.bodies()[0].is_resting());

        // Simulate an overlap push
        world.bodies[0].pos.y = 484.0;
        world.step();
        assert_eq!(world.bodies()[0].pos.y, 480.0);
    }

    #[test]
    fn test_kick_wakes_everything() {
        let mut world = single_ball_world();
        for _ in 0..500 {
            world.step();
        }
        assert!(world.all_resting());

        world.kick(16);
        assert!(!world.all_resting());
        let ball = &world.bodies()[0];
        assert!(ball.vel.x.abs() <= 16.0 && ball.vel.y.abs() <= 16.0);
    }

    #[test]
    fn test_same_seed_same_run() {
        let build = || {
            let bodies = vec![
                Body::new(DVec2::new(100.0, 100.0), 20.0),
                Body::new(DVec2::new(200.0, 200.0), 20.0),
                Body::new(DVec2::new(300.0, 150.0), 20.0),
                Body::new(DVec2::new(150.0, 300.0), 20.0),
            ];
            World::with_seed(Bounds::new(800.0, 600.0), bodies, PhysicsConfig::default(), 42)
                .unwrap()
        };
        let mut a = build();
        let mut b = build();
        a.kick(20);
        b.kick(20);
        for _ in 0..300 {
            a.step();
            b.step();
        }
        for (x, y) in a.bodies().iter().zip(b.bodies()) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.vel, y.vel);
            assert_eq!(x.state, y.state);
        }
    }

    /// One pass done by hand in index order; returns contacts per body
    fn replay_pass(bodies: &mut [Body], bounds: Bounds, config: &PhysicsConfig) -> Vec<usize> {
        let mut contacts = Vec::with_capacity(bodies.len());
        for index in 0..bodies.len() {
            if bodies[index].is_resting() {
                bodies[index].pin_to_rest();
                contacts.push(0);
                continue;
            }
            bodies[index].integrate_forces(bounds, config);
            contacts.push(collision::resolve_contacts(bodies, index, config));
            bodies[index].integrate_position();
        }
        contacts
    }

    fn assert_same_bodies(a: &[Body], b: &[Body]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.vel, y.vel);
            assert_eq!(x.state, y.state);
        }
    }

    #[test]
    fn test_pair_resolved_from_both_sides_in_one_step() {
        // The trailing ball keeps chasing after the exchange, so the pair
        // still overlaps when the second body takes its turn.
        let bounds = Bounds::new(800.0, 600.0);
        let config = PhysicsConfig::default();
        let bodies = vec![
            Body::new(DVec2::new(100.0, 300.0), 20.0).with_velocity(DVec2::new(3.0, 0.0)),
            Body::new(DVec2::new(130.0, 300.0), 20.0).with_velocity(DVec2::new(1.0, 0.0)),
        ];

        let mut replay = bodies.clone();
        let contacts = replay_pass(&mut replay, bounds, &config);
        assert_eq!(contacts, vec![1, 1]);

        let mut world = World::new(bounds, bodies, config).unwrap();
        world.step();
        assert_same_bodies(world.bodies(), &replay);
    }

    #[test]
    fn test_pushes_visible_to_later_pairs_in_pass() {
        // Ball 0 only reaches ball 2 after ball 1 has pushed it left
        let bounds = Bounds::new(800.0, 600.0);
        let config = PhysicsConfig::default();
        let bodies = vec![
            Body::new(DVec2::new(100.0, 300.0), 20.0).with_velocity(DVec2::new(0.5, 0.0)),
            Body::new(DVec2::new(130.0, 300.0), 20.0),
            Body::new(DVec2::new(60.0, 300.0), 20.0),
        ];
        assert!(collision::detect(&bodies[0], &bodies[2]).is_none());

        let mut replay = bodies.clone();
        let contacts = replay_pass(&mut replay, bounds, &config);
        assert_eq!(contacts[0], 2);
        assert!(replay[2].pos.x < 60.0);

        let mut world = World::new(bounds, bodies, config).unwrap();
        world.step();
        assert_same_bodies(world.bodies(), &replay);
    }

    #[test]
    fn test_collisions_lose_energy() {
        let bodies = vec![
            Body::new(DVec2::new(200.0, 300.0), 20.0).with_velocity(DVec2::new(8.0, 0.0)),
            Body::new(DVec2::new(260.0, 300.0), 20.0).with_velocity(DVec2::new(-8.0, 0.0)),
        ];
        let mut world =
            World::new(Bounds::new(800.0, 600.0), bodies, PhysicsConfig::default()).unwrap();
        let before = world.total_kinetic_energy();
        for _ in 0..5 {
            world.step();
        }
        let after = world.total_kinetic_energy();
        assert!(after.is_finite());
        assert!(after < before);
        assert!(world.bodies()[0].pos.x < world.bodies()[1].pos.x);
    }

    #[test]
    fn test_bounciness_percent_broadcast() {
        let bodies = vec![
            Body::new(DVec2::new(100.0, 100.0), 20.0),
            Body::new(DVec2::new(200.0, 100.0), 10.0).with_restitution(0.2),
        ];
        let mut world =
            World::new(Bounds::new(500.0, 500.0), bodies, PhysicsConfig::default()).unwrap();

        world.set_bounciness_percent(35);
        assert!(world.bodies().iter().all(|b| (b.restitution - 0.35).abs() < 1e-12));

        world.set_bounciness_percent(250);
        assert!(world.bodies().iter().all(|b| b.restitution == 1.0));

        world.set_restitution(-3.0);
        assert!(world.bodies().iter().all(|b| b.restitution == 0.0));
    }

    #[test]
    fn test_arena_must_fit_largest_body() {
        let bodies = vec![
            Body::new(DVec2::new(50.0, 50.0), 10.0),
            Body::new(DVec2::new(50.0, 50.0), 50.0),
        ];
        let result = World::new(Bounds::new(300.0, 100.0), bodies, PhysicsConfig::default());
        assert!(matches!(
            result,
            Err(ConfigError::ArenaTooSmall { max_radius, .. }) if max_radius == 50.0
        ));
    }

    #[test]
    fn test_invalid_body_rejected() {
        let bodies = vec![
            Body::new(DVec2::new(50.0, 50.0), 10.0),
            Body::new(DVec2::new(50.0, 50.0), -1.0),
        ];
        let result = World::new(Bounds::new(300.0, 300.0), bodies, PhysicsConfig::default());
        assert!(matches!(result, Err(ConfigError::InvalidRadius { index: 1, .. })));
    }

    proptest! {
        #[test]
        fn prop_kick_respects_energy_bound(energy in 1u32..=30, seed in any::<u64>()) {
            let bodies = (0..6)
                .map(|i| Body::new(DVec2::new(60.0 + 60.0 * i as f64, 100.0), 20.0))
                .collect();
            let mut world =
                World::with_seed(Bounds::new(500.0, 500.0), bodies, PhysicsConfig::default(), seed)
                    .unwrap();
            world.kick(energy);
            let limit = 2.0 * f64::from(energy);
            for body in world.bodies() {
                prop_assert!(body.vel.x.abs() <= limit);
                prop_assert!(body.vel.y.abs() <= limit);
                prop_assert!(!body.is_resting());
            }
        }

        #[test]
        fn prop_single_body_never_escapes(
            x in 20.0f64..480.0,
            y in 20.0f64..480.0,
            vx in -60.0f64..60.0,
            vy in -60.0f64..60.0,
        ) {
            let bounds = Bounds::new(500.0, 500.0);
            let body = Body::new(DVec2::new(x, y), 20.0).with_velocity(DVec2::new(vx, vy));
            let mut world = World::new(bounds, vec![body], PhysicsConfig::default()).unwrap();

            for _ in 0..400 {
                world.step();
                let body = &world.bodies()[0];

                // Integration may carry the center past a wall by at most one
                // tick of travel; the next boundary pass pulls it back in.
                let eps = 1e-9;
                prop_assert!(body.pos.x >= body.radius - body.vel.x.abs() - eps);
                prop_assert!(body.pos.x <= bounds.width - body.radius + body.vel.x.abs() + eps);
                prop_assert!(body.pos.y >= body.radius - body.vel.y.abs() - eps);
                prop_assert!(body.pos.y <= bounds.height - body.radius + body.vel.y.abs() + eps);

                let mut probe = body.clone();
                if !probe.is_resting() {
                    probe.integrate_forces(bounds, world.config());
                }
                prop_assert!(bounds.contains_circle(probe.pos, probe.radius));
            }
        }
    }
}
