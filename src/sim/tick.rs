//! Between-tick input application
//!
//! Control changes (bounciness, kicks) are collected by the caller and
//! applied here, before the physics pass, so a pass never sees a
//! half-applied control change.

use super::world::World;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Kick every body with this energy
    pub kick_energy: Option<u32>,
    /// New bounciness control value (0-100)
    pub bounciness_percent: Option<u8>,
}

/// Apply pending input, then advance the world by one tick
pub fn tick(world: &mut World, input: &TickInput) {
    if let Some(percent) = input.bounciness_percent {
        world.set_bounciness_percent(percent);
    }
    if let Some(energy) = input.kick_energy {
        world.kick(energy);
    }
    world.step();
}
