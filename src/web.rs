//! Browser binding
//!
//! JS owns the canvas, the sliders, and the animation frame loop. It calls
//! `tick` once per frame and draws from `instances`.

use wasm_bindgen::prelude::*;

use crate::render;
use crate::settings::Settings;
use crate::sim::{Scenario, TickInput, World, tick};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
}

#[wasm_bindgen]
pub struct WebArena {
    world: World,
    settings: Settings,
    /// Applied at the start of the next tick
    pending: TickInput,
}

#[wasm_bindgen]
impl WebArena {
    /// Default four-ball scene in a `width` x `height` canvas
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<WebArena, JsValue> {
        let settings = Settings::load();
        let scenario = Scenario {
            width,
            height,
            seed: Some(js_sys::Date::now() as u64),
            restitution: Some(settings.restitution()),
            ..Scenario::default()
        };
        let world = scenario
            .build()
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        Ok(WebArena {
            world,
            settings,
            pending: TickInput::default(),
        })
    }

    pub fn tick(&mut self) {
        let input = std::mem::take(&mut self.pending);
        tick(&mut self.world, &input);
    }

    /// Queue a kick with the current energy setting
    pub fn kick(&mut self) {
        self.pending.kick_energy = self.settings.kick_input().kick_energy;
    }

    pub fn set_bounciness(&mut self, percent: u8) {
        self.settings.set_bounciness_percent(percent);
        self.settings.save();
        self.pending.bounciness_percent = self.settings.bounciness_input().bounciness_percent;
    }

    pub fn set_kick_energy(&mut self, energy: u32) {
        self.settings.set_kick_energy(energy);
        self.settings.save();
    }

    pub fn bounciness(&self) -> u8 {
        self.settings.bounciness_percent
    }

    pub fn kick_energy(&self) -> u32 {
        self.settings.kick_energy
    }

    /// Flat `[x, y, radius, r, g, b, a]` per ball
    pub fn instances(&self) -> js_sys::Float32Array {
        let instances = render::extract(&self.world);
        let floats: &[f32] = bytemuck::cast_slice(&instances);
        js_sys::Float32Array::from(floats)
    }
}
