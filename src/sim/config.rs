//! Physics tuning shared by every body in a world

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Per-tick physics parameters.
///
/// Values are per nominal frame, not per second; the caller is expected to
/// tick at roughly 60 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f64,
    pub wall_friction: f64,
    pub collision_damping: f64,
    pub air_drag: f64,
    pub air_stop_speed: f64,
    pub settle_vertical_speed: f64,
    pub settle_damping: f64,
    pub rest_horizontal_speed: f64,
    pub wake_speed: f64,
    pub near_rest_speed: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            wall_friction: WALL_FRICTION,
            collision_damping: COLLISION_DAMPING,
            air_drag: AIR_DRAG,
            air_stop_speed: AIR_STOP_SPEED,
            settle_vertical_speed: SETTLE_VERTICAL_SPEED,
            settle_damping: SETTLE_DAMPING,
            rest_horizontal_speed: REST_HORIZONTAL_SPEED,
            wake_speed: WAKE_SPEED,
            near_rest_speed: NEAR_REST_SPEED,
        }
    }
}
