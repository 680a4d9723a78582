//! Draw data for an external renderer
//!
//! The simulation never draws. A renderer asks for one `CircleInstance` per
//! body and uploads the slice as-is (the type is `Pod`).

pub mod instance;

pub use instance::{CircleInstance, colors, extract};
