//! Ballpit - bouncing balls in a rectangular arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, walls, ball-ball collisions, resting)
//! - `render`: Read-only draw data extraction
//! - `settings`: User-facing control values (bounciness, kick energy)
//! - `error`: Configuration errors reported at setup

pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::ConfigError;
pub use settings::Settings;
pub use sim::{Body, Bounds, PhysicsConfig, Scenario, World};

/// Simulation tuning constants (per tick, tuned for a ~60 Hz caller)
pub mod consts {
    /// Downward acceleration added to vertical velocity every tick
    pub const GRAVITY: f64 = 0.2;
    /// Velocity retained on wall bounces (and horizontally on floor bounces)
    pub const WALL_FRICTION: f64 = 0.98;
    /// Default fraction of vertical speed kept after a floor/ceiling bounce
    pub const DEFAULT_RESTITUTION: f64 = 0.7;
    /// Velocity scale applied to both bodies after an elastic exchange
    pub const COLLISION_DAMPING: f64 = 0.95;
    /// Horizontal air resistance per tick
    pub const AIR_DRAG: f64 = 0.99;
    /// Horizontal speed snapped to zero while airborne
    pub const AIR_STOP_SPEED: f64 = 0.1;

    /// Below this vertical speed a floor contact stops bouncing
    pub const SETTLE_VERTICAL_SPEED: f64 = 2.0;
    /// Horizontal damping while sliding on the floor
    pub const SETTLE_DAMPING: f64 = 0.9;
    /// Below this horizontal speed a settled body goes to rest
    pub const REST_HORIZONTAL_SPEED: f64 = 0.5;

    /// A resting body wakes only when hit by something faster than this
    pub const WAKE_SPEED: f64 = 1.0;
    /// Bodies slower than this exchange no momentum, only get separated
    pub const NEAR_REST_SPEED: f64 = 0.1;

    /// Kick energy slider range
    pub const MIN_KICK_ENERGY: u32 = 1;
    pub const MAX_KICK_ENERGY: u32 = 30;
    pub const DEFAULT_KICK_ENERGY: u32 = 16;

    /// Bounciness slider default (percent)
    pub const DEFAULT_BOUNCINESS_PERCENT: u8 = 70;

    /// Seed used when none is supplied
    pub const DEFAULT_SEED: u64 = 0x0ba1_1b17;
}
