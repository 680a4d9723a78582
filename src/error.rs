//! Setup-time configuration errors
//!
//! The per-tick simulation never fails; everything that can go wrong is
//! caught when a world or scene is built.

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    /// Radius must be finite and strictly positive
    InvalidRadius { index: usize, radius: f64 },
    /// Restitution must lie in [0, 1]
    InvalidRestitution { index: usize, restitution: f64 },
    /// Position or velocity contains NaN/inf
    NonFiniteState { index: usize },
    /// Arena must be larger than the widest body on both axes
    ArenaTooSmall {
        width: f64,
        height: f64,
        max_radius: f64,
    },
    /// Color name not in the palette
    UnknownColor(String),
    /// Scene JSON could not be parsed
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRadius { index, radius } => {
                write!(f, "body {index}: radius must be positive, got {radius}")
            }
            ConfigError::InvalidRestitution { index, restitution } => {
                write!(
                    f,
                    "body {index}: restitution must be within [0, 1], got {restitution}"
                )
            }
            ConfigError::NonFiniteState { index } => {
                write!(f, "body {index}: position and velocity must be finite")
            }
            ConfigError::ArenaTooSmall {
                width,
                height,
                max_radius,
            } => write!(
                f,
                "arena {width}x{height} must exceed twice the largest radius ({max_radius}) on both axes"
            ),
            ConfigError::UnknownColor(name) => write!(f, "unknown color '{name}'"),
            ConfigError::Parse(err) => write!(f, "invalid scene: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
