//! Scene descriptions
//!
//! A scene is plain JSON: arena size, optional seed and restitution, and the
//! starting bodies. Colors are given by name.
//!
//! ```json
//! {
//!   "width": 500, "height": 500,
//!   "restitution": 0.7,
//!   "bodies": [
//!     { "x": 100, "y": 100, "radius": 20, "color": "red" }
//!   ]
//! }
//! ```

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::bounds::Bounds;
use super::config::PhysicsConfig;
use super::world::World;
use crate::consts::{DEFAULT_RESTITUTION, DEFAULT_SEED};
use crate::error::ConfigError;
use crate::render::colors;

/// Starting state of one body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySpec {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub vx: f64,
    #[serde(default)]
    pub vy: f64,
}

fn default_color() -> String {
    "white".to_string()
}

impl BodySpec {
    fn new(x: f64, y: f64, radius: f64, color: &str) -> Self {
        Self {
            x,
            y,
            radius,
            color: color.to_string(),
            vx: 0.0,
            vy: 0.0,
        }
    }
}

/// A complete scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub restitution: Option<f64>,
    #[serde(default)]
    pub physics: PhysicsConfig,
    pub bodies: Vec<BodySpec>,
}

impl Default for Scenario {
    /// Four motionless balls in an 800x600 arena
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            seed: None,
            restitution: Some(DEFAULT_RESTITUTION),
            physics: PhysicsConfig::default(),
            bodies: vec![
                BodySpec::new(100.0, 100.0, 20.0, "red"),
                BodySpec::new(200.0, 200.0, 20.0, "blue"),
                BodySpec::new(300.0, 150.0, 20.0, "green"),
                BodySpec::new(150.0, 300.0, 20.0, "green"),
            ],
        }
    }
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Turn the scene into a validated world
    pub fn build(&self) -> Result<World, ConfigError> {
        let restitution = self.restitution.unwrap_or(DEFAULT_RESTITUTION);
        let bodies = self
            .bodies
            .iter()
            .map(|spec| -> Result<Body, ConfigError> {
                let color = colors::from_name(&spec.color)
                    .ok_or_else(|| ConfigError::UnknownColor(spec.color.clone()))?;
                Ok(Body::new(DVec2::new(spec.x, spec.y), spec.radius)
                    .with_velocity(DVec2::new(spec.vx, spec.vy))
                    .with_color(color)
                    .with_restitution(restitution))
            })
            .collect::<Result<Vec<_>, _>>()?;

        World::with_seed(
            Bounds::new(self.width, self.height),
            bodies,
            self.physics,
            self.seed.unwrap_or(DEFAULT_SEED),
        )
    }
}
