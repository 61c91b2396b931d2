use anyhow::{Context, Result};
use bevy_ecs::prelude::Resource;
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::warn;

use swarm::{builtins, ArenaSpec, BotSpec};

#[derive(Parser, Debug, Clone, Resource)]
#[command(about = "Headless swarm-bot control simulation")]
pub struct Args {
    /// Path to the sim config TOML.
    #[arg(long, default_value = "sim.toml")]
    pub config: String,
    /// Number of ticks to run before exiting (0 = run until interrupted).
    #[arg(long, default_value_t = 3000)]
    pub steps: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Resource)]
#[serde(default)]
pub struct Config {
    /// Number of bots to spawn.
    pub bots: u32,
    /// RNG seed for spawn placement and goal-field jitter.
    pub seed: u64,
    /// Physics tick rate (Hz). Flocking runs at the per-bot `control_hz`.
    pub fixed_hz: f32,
    /// Spawn ring radius around the arena origin.
    pub spawn_radius: f32,
    /// Drive wheels on each side of the chassis.
    pub wheels_per_side: u32,
    pub bot: BotSpec,
    pub arena: ArenaSpec,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bots: 12,
            seed: 7,
            fixed_hz: 50.0,
            spawn_radius: 4.0,
            wheels_per_side: 2,
            bot: BotSpec::default(),
            arena: builtins::greybox_arena(),
        }
    }
}

/// Load and validate the sim config. A missing file is not an error; the
/// built-in defaults describe a complete run.
pub fn load_config(path: &str) -> Result<Config> {
    let cfg = if std::path::Path::new(path).exists() {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
        toml::from_str(&text).with_context(|| format!("parsing config {path}"))?
    } else {
        warn!(path, "config file not found, using defaults");
        Config::default()
    };
    cfg.bot.validate().context("bot spec")?;
    cfg.arena.validate().context("arena spec")?;
    Ok(cfg)
}
