//! A single ball and its per-tick motion
//!
//! Handles everything a body does on its own: gravity, wall/floor/ceiling
//! response, air drag, position integration, and the hysteretic transition
//! into the resting state. Ball-ball contact lives in `collision`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::config::PhysicsConfig;
use crate::consts::DEFAULT_RESTITUTION;
use crate::error::ConfigError;
use crate::render::colors;

/// Motion state of a body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyState {
    /// Under gravity, bouncing or sliding
    Moving,
    /// Frozen on the floor; `y` is re-applied every tick
    Resting { y: f64 },
}

/// A simulated ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    /// Fraction of vertical speed kept on floor/ceiling bounces, in [0, 1]
    pub restitution: f64,
    /// Display color (RGBA), only read by rendering
    pub color: [f32; 4],
    pub state: BodyState,
}

impl Body {
    pub fn new(pos: DVec2, radius: f64) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            radius,
            restitution: DEFAULT_RESTITUTION,
            color: colors::WHITE,
            state: BodyState::Moving,
        }
    }

    pub fn with_velocity(mut self, vel: DVec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    #[inline]
    pub fn is_resting(&self) -> bool {
        matches!(self.state, BodyState::Resting { .. })
    }

    /// Pinned height while resting
    pub fn resting_y(&self) -> Option<f64> {
        match self.state {
            BodyState::Resting { y } => Some(y),
            BodyState::Moving => None,
        }
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Mass is proportional to radius
    #[inline]
    pub fn mass(&self) -> f64 {
        self.radius
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.vel.length_squared()
    }

    /// Freeze the body at height `y`
    pub fn rest_at(&mut self, y: f64) {
        self.vel = DVec2::ZERO;
        self.pos.y = y;
        self.state = BodyState::Resting { y };
    }

    pub fn wake(&mut self) {
        self.state = BodyState::Moving;
    }

    /// Replace velocity and clear any resting state
    pub fn kick(&mut self, vel: DVec2) {
        self.vel = vel;
        self.wake();
    }

    /// Re-apply the resting height. No-op for moving bodies.
    pub fn pin_to_rest(&mut self) {
        if let BodyState::Resting { y } = self.state {
            self.pos.y = y;
        }
    }

    /// Everything that happens to a moving body before contacts are resolved:
    /// gravity, wall and floor/ceiling response, then air drag.
    pub fn integrate_forces(&mut self, bounds: Bounds, config: &PhysicsConfig) {
        self.vel.y += config.gravity;
        self.resolve_walls(bounds, config);
        self.resolve_floor_and_ceiling(bounds, config);
        if !self.is_resting() {
            self.apply_air_drag(config);
        }
    }

    /// Advance position by one tick of velocity
    #[inline]
    pub fn integrate_position(&mut self) {
        self.pos += self.vel;
    }

    /// Left/right walls: clamp and reflect with friction
    pub fn resolve_walls(&mut self, bounds: Bounds, config: &PhysicsConfig) {
        if self.pos.x + self.radius > bounds.width {
            self.pos.x = bounds.width - self.radius;
            self.vel.x = -self.vel.x * config.wall_friction;
        } else if self.pos.x - self.radius < 0.0 {
            self.pos.x = self.radius;
            self.vel.x = -self.vel.x * config.wall_friction;
        }
    }

    /// Floor and ceiling: clamp, bounce by restitution, and settle on the
    /// floor once both axes have decayed below threshold on the same contact.
    pub fn resolve_floor_and_ceiling(&mut self, bounds: Bounds, config: &PhysicsConfig) {
        if self.pos.y + self.radius > bounds.height {
            let floor = bounds.floor_for(self.radius);
            self.pos.y = floor;

            if self.vel.y.abs() < config.settle_vertical_speed {
                self.vel.y = 0.0;
                self.vel.x *= config.settle_damping;

                if self.vel.x.abs() < config.rest_horizontal_speed {
                    self.rest_at(floor);
                    log::debug!("body settled at y={floor}");
                }
            } else {
                self.vel.y = -self.vel.y * self.restitution;
                self.vel.x *= config.wall_friction;
            }
        } else if self.pos.y - self.radius < 0.0 {
            // Ceiling never puts a body to rest
            self.pos.y = self.radius;
            self.vel.y = -self.vel.y * self.restitution;
        }
    }

    fn apply_air_drag(&mut self, config: &PhysicsConfig) {
        self.vel.x *= config.air_drag;
        if self.vel.x.abs() < config.air_stop_speed {
            self.vel.x = 0.0;
        }
    }

    /// Check construction-time preconditions for the body at `index`
    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius {
                index,
                radius: self.radius,
            });
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::InvalidRestitution {
                index,
                restitution: self.restitution,
            });
        }
        if !self.pos.is_finite() || !self.vel.is_finite() {
            return Err(ConfigError::NonFiniteState { index });
        }
        Ok(())
    }
}
