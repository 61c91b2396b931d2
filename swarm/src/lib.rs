//! Control core shared by the swarm simulation and its tests.
//!
//! This crate intentionally avoids any Bevy app types. It exposes the pure
//! flocking and steering math plus a simple, serializable arena schema the
//! host simulation can validate and drive against fakes in tests.

mod math;
pub use math::{lerp, Quatf, Vec3f, BODY_FWD, BODY_RIGHT, BODY_UP};
mod spec;
pub use spec::botspecs;
pub use spec::{BotSpec, SpecError};
mod arena;
pub use arena::{ArenaError, ArenaSpec, BoxSpec, GoalSpec};

pub mod builtins;

pub mod sense;
pub use sense::{BotId, GoalLookup, ObstacleQuery, PeerSample, SpatialQuery};

pub mod flocking;
pub use flocking::{
    alignment_field, drive_torques, flocking_step, flocking_step_dbg, goal_field,
    proximal_field, sharp_in_damp, steer_manual, steer_step, steer_step_dbg, BotInputs,
    BotState, FlockStepDebug, GoalBranch, SteerStepDebug, WheelTorques,
};
