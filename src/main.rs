//! Ballpit entry point
//!
//! Native: runs a scene headless and logs where every ball ended up.
//! The browser build is driven from JS through `ballpit::web`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use ballpit::consts::{MAX_KICK_ENERGY, MIN_KICK_ENERGY};
    use ballpit::sim::{Scenario, TickInput, tick};

    /// Run a ballpit scene headless
    #[derive(Parser, Debug)]
    #[command(version, about)]
    pub struct Args {
        /// Scene JSON file (defaults to the built-in four-ball scene)
        pub scene: Option<PathBuf>,

        /// Number of ticks to simulate
        #[arg(long, default_value_t = 600)]
        pub ticks: u64,

        /// Kick every ball with this energy before the first tick
        #[arg(long, value_parser = clap::value_parser!(u32).range(i64::from(MIN_KICK_ENERGY)..=i64::from(MAX_KICK_ENERGY)))]
        pub kick: Option<u32>,
    }

    fn load_scenario(path: Option<&PathBuf>) -> Result<Scenario> {
        let Some(path) = path else {
            return Ok(Scenario::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?;
        Scenario::from_json(&json).with_context(|| format!("parsing scene {}", path.display()))
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();
        log::info!("Ballpit (native) starting...");

        let scenario = load_scenario(args.scene.as_ref())?;
        let mut world = scenario.build().context("building world")?;

        let mut input = TickInput {
            kick_energy: args.kick,
            ..Default::default()
        };
        for _ in 0..args.ticks {
            tick(&mut world, &input);
            input = TickInput::default();
        }

        log::info!(
            "After {} ticks: kinetic energy {:.3}, all resting: {}",
            world.ticks(),
            world.total_kinetic_energy(),
            world.all_resting()
        );
        for (index, body) in world.bodies().iter().enumerate() {
            log::info!(
                "ball {index}: pos ({:.2}, {:.2}) vel ({:.2}, {:.2}) resting {}",
                body.pos.x,
                body.pos.y,
                body.vel.x,
                body.vel.y,
                body.is_resting()
            );
        }
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is ballpit::web::start, this is just to satisfy the compiler
}
