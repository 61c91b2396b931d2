//! Headless host simulation for the swarm control core.
//!
//! The core's capability interfaces are wired to the [`Arena`] resource and
//! the whole thing runs on one single-threaded system chain per tick, so
//! the low-rate desired-vector publish and the high-rate steering consumer
//! never race.

use std::collections::HashMap;
use std::sync::Arc;

use bevy::app::{App, Startup, Update};
use bevy::prelude::MinimalPlugins;
use bevy_ecs::prelude::*;
use parking_lot::RwLock;
use rand::{rngs::SmallRng, SeedableRng};

use swarm::{BotId, BotSpec, BotState, BotInputs, Vec3f, WheelTorques};

mod config;
pub use config::{load_config, Args, Config};
mod world;
pub use world::{integrate_drive, Arena};
mod systems;
pub use systems::{
    drive_bots, flocking_control, log_progress, publish_outputs, refresh_peer_snapshot,
    spawn_bots,
};

#[derive(Component)]
pub struct Bot {
    pub id: BotId,
}

#[derive(Component)]
pub struct BotSpecComp(pub BotSpec);

#[derive(Component)]
pub struct BotStateComp(pub BotState);

/// Per-bot timer driving the low-rate flocking recompute.
#[derive(Component)]
pub struct FlockClock(pub bevy::time::Timer);

/// Manual-override sticks, only consulted when the spec says the bot is
/// not swarm controlled.
#[derive(Component, Default)]
pub struct ManualInputs(pub BotInputs);

/// Latest actuation computed for a bot, refreshed every tick.
#[derive(Component, Default)]
pub struct DriveOutputs {
    pub torques: WheelTorques,
    pub turn_control: f32,
}

/// Fixed simulation timestep. Every `App::update` advances exactly one
/// tick of this length, which keeps headless runs deterministic.
#[derive(Resource, Clone, Copy)]
pub struct SimClock {
    pub dt: f32,
}

#[derive(Resource)]
pub struct SimRng(pub SmallRng);

#[derive(Debug, Clone, Copy)]
pub struct BotOutputs {
    pub position: Vec3f,
    pub velocity: Vec3f,
    pub move_vector: Vec3f,
    pub torques: WheelTorques,
}

/// Shared handle external consumers (actuation, rendering) read drive
/// outputs from without touching the ECS world.
#[derive(Resource, Clone, Default)]
pub struct SharedOutputs(pub Arc<RwLock<HashMap<u32, BotOutputs>>>);

pub fn build_sim_app(cfg: Config) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(SimClock {
        dt: 1.0 / cfg.fixed_hz,
    });
    app.insert_resource(Arena::new(cfg.arena.clone()));
    app.insert_resource(SimRng(SmallRng::seed_from_u64(cfg.seed)));
    app.insert_resource(SharedOutputs::default());
    app.insert_resource(cfg);
    app.add_systems(Startup, spawn_bots);
    app.add_systems(
        Update,
        (
            refresh_peer_snapshot,
            flocking_control,
            drive_bots,
            publish_outputs,
            log_progress,
        )
            .chain(),
    );
    app
}
