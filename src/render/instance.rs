//! Per-body circle instances

use bytemuck::{Pod, Zeroable};

use crate::sim::{Body, World};

/// One filled circle, GPU-friendly layout
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub color: [f32; 4],
}

impl CircleInstance {
    /// Number of `f32`s per instance in a flattened buffer
    pub const FLOATS: usize = std::mem::size_of::<CircleInstance>() / std::mem::size_of::<f32>();

    pub fn from_body(body: &Body) -> Self {
        Self {
            center: [body.pos.x as f32, body.pos.y as f32],
            radius: body.radius as f32,
            color: body.color,
        }
    }
}

/// One instance per body, in body order
pub fn extract(world: &World) -> Vec<CircleInstance> {
    world.bodies().iter().map(CircleInstance::from_body).collect()
}

/// Named ball colors
pub mod colors {
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const ORANGE: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
    pub const PURPLE: [f32; 4] = [0.5, 0.0, 0.5, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    /// Look up a color by (case-insensitive) name
    pub fn from_name(name: &str) -> Option<[f32; 4]> {
        match name.to_lowercase().as_str() {
            "red" => Some(RED),
            "green" => Some(GREEN),
            "blue" => Some(BLUE),
            "yellow" => Some(YELLOW),
            "orange" => Some(ORANGE),
            "purple" => Some(PURPLE),
            "black" => Some(BLACK),
            "white" => Some(WHITE),
            _ => None,
        }
    }
}
