use crate::flocking::fields::GoalBranch;
use crate::math::{Quatf, Vec3f, BODY_FWD, BODY_RIGHT};

/// Mutable control state for one bot.
#[derive(Debug, Clone)]
pub struct BotState {
    pub position: Vec3f,
    pub velocity: Vec3f,
    /// Orientation as quaternion (body→world).
    /// Body axes: +Z forward, +Y up, +X right.
    pub orientation: Quatf,
    /// Smoothed forward-control scalar in roughly [-1, 1]. Persists across
    /// ticks; the steering translator is its only writer.
    pub fwd_control: f32,
    /// Desired-movement vector published by the flocking controller.
    /// |v| <= 1 once published; replaced wholesale, never merged. Read
    /// every tick by the steering translator.
    pub move_vector: Vec3f,
}

impl BotState {
    /// Fresh state at a spawn pose, velocities zero.
    pub fn at_spawn(position: Vec3f, orientation: Quatf) -> Self {
        Self {
            position,
            velocity: Vec3f::ZERO,
            orientation,
            fwd_control: 0.0,
            move_vector: Vec3f::ZERO,
        }
    }

    pub fn forward(&self) -> Vec3f {
        self.orientation * BODY_FWD
    }

    pub fn right(&self) -> Vec3f {
        self.orientation * BODY_RIGHT
    }

    /// Ray origin for the obstacle fan (sensor head in world space).
    pub fn head_position(&self, head_offset_body: Vec3f) -> Vec3f {
        self.position + self.orientation * head_offset_body
    }
}

/// Direct actuation intents used when a bot is not swarm controlled.
#[derive(Debug, Clone, Copy, Default)]
pub struct BotInputs {
    /// Forward drive in [-1, 1].
    pub fwd: f32,
    /// Turn rate in [-1, 1]; +1 is full right.
    pub turn: f32,
}

/// Per-side motor torques. Applied identically to every wheel on a side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelTorques {
    pub right: f32,
    pub left: f32,
}

/// Telemetry filled by `flocking_step_dbg`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlockStepDebug {
    pub peer_count: usize,
    // Raw field outputs before weighting
    pub proximal: Vec3f,
    pub alignment: Vec3f,
    pub goal: Vec3f,
    pub goal_branch: GoalBranch,
    // Aggregation
    pub weighted: Vec3f,
    pub clamped: Vec3f,
    pub published: bool,
}

/// Telemetry filled by `steer_step_dbg`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteerStepDebug {
    pub dt: f32,
    pub move_vector: Vec3f,
    pub fwd_align: f32,
    pub fwd_target: f32,
    pub fwd_control: f32,
    /// Heading error in radians, before the anti-flip damping.
    pub turn_angle: f32,
    pub turn_damping: f32,
    pub turn_sign: f32,
    pub turn_control: f32,
}
