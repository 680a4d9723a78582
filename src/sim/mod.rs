//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - One call = one nominal frame, no measured delta time
//! - Seeded RNG only
//! - Stable iteration order (by body index)
//! - No platform dependencies; rendering only reads bodies

pub mod body;
pub mod bounds;
pub mod collision;
pub mod config;
pub mod scenario;
pub mod tick;
pub mod world;

pub use body::{Body, BodyState};
pub use bounds::Bounds;
pub use collision::{Contact, ContactResponse, detect, resolve_contact};
pub use config::PhysicsConfig;
pub use scenario::{BodySpec, Scenario};
pub use tick::{TickInput, tick};
pub use world::World;
