//! Rectangular arena bounds
//!
//! Origin is the top-left corner, +y points down (screen space), so the
//! floor is at `y = height` and the ceiling at `y = 0`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Floor height a body of `radius` comes to rest at
    #[inline]
    pub fn floor_for(&self, radius: f64) -> f64 {
        self.height - radius
    }

    /// Whether a circle lies fully inside the arena (touching counts)
    #[cfg(test)]
    pub fn contains_circle(&self, center: glam::DVec2, radius: f64) -> bool {
        center.x - radius >= 0.0
            && center.x + radius <= self.width
            && center.y - radius >= 0.0
            && center.y + radius <= self.height
    }

    /// Whether a body of `radius` has room to exist on both axes
    pub fn fits(&self, radius: f64) -> bool {
        self.width > 2.0 * radius && self.height > 2.0 * radius
    }
}
