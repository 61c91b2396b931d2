use crate::math::Vec3f;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuning parameters for one bot. Fixed at spawn for the bot's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotSpec {
    /// How far the bot scans for flock mates (meters).
    pub scan_radius: f32,
    /// Equilibrium distance to keep from neighbouring bots.
    pub spread: f32,
    /// Wiggle room around `spread` inside which relative velocities are
    /// damped instead of pushed.
    pub spread_tolerance: f32,
    /// Depth of the pairwise repulsion/attraction well.
    pub repulsion: f32,
    /// Field weights applied by the flocking controller.
    pub w_prox: f32,
    pub w_align: f32,
    pub w_goal: f32,
    /// Forward-control to wheel-torque scale.
    pub speed: f32,
    /// Turn-control to differential-torque scale.
    pub turn_speed: f32,
    /// 0 = hold speed through turns, 1 = slow fully in proportion to
    /// misalignment with the desired direction.
    pub turn_sharpness: f32,
    /// Flocking recompute rate (Hz). Steering still runs every tick.
    pub control_hz: f32,
    /// Autonomous swarm control vs. direct manual inputs.
    pub swarm_controlled: bool,
    /// Sensor head offset in body space; origin of the obstacle ray fan.
    pub head_offset_body: Vec3f,
    /// Logical tag the goal marker is resolved by.
    pub goal_tag: String,
}

impl Default for BotSpec {
    fn default() -> Self {
        botspecs::scout_bot_spec()
    }
}

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("{name} must be finite and > 0 (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must be finite and >= 0 (got {value})")]
    Negative { name: &'static str, value: f32 },
    #[error("{name} must be finite (got {value})")]
    NotFinite { name: &'static str, value: f32 },
    #[error("goal_tag must not be empty")]
    EmptyGoalTag,
}

fn positive(name: &'static str, value: f32) -> Result<(), SpecError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SpecError::NonPositive { name, value });
    }
    Ok(())
}

fn non_negative(name: &'static str, value: f32) -> Result<(), SpecError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SpecError::Negative { name, value });
    }
    Ok(())
}

fn finite(name: &'static str, value: f32) -> Result<(), SpecError> {
    if !value.is_finite() {
        return Err(SpecError::NotFinite { name, value });
    }
    Ok(())
}

impl BotSpec {
    /// Reject tuning values that would poison the control math. Run once
    /// at startup on operator-supplied config.
    pub fn validate(&self) -> Result<(), SpecError> {
        positive("scan_radius", self.scan_radius)?;
        positive("spread", self.spread)?;
        non_negative("spread_tolerance", self.spread_tolerance)?;
        non_negative("repulsion", self.repulsion)?;
        finite("w_prox", self.w_prox)?;
        finite("w_align", self.w_align)?;
        finite("w_goal", self.w_goal)?;
        positive("speed", self.speed)?;
        positive("turn_speed", self.turn_speed)?;
        finite("turn_sharpness", self.turn_sharpness)?;
        positive("control_hz", self.control_hz)?;
        finite("head_offset_body.x", self.head_offset_body.x)?;
        finite("head_offset_body.y", self.head_offset_body.y)?;
        finite("head_offset_body.z", self.head_offset_body.z)?;
        if self.goal_tag.is_empty() {
            return Err(SpecError::EmptyGoalTag);
        }
        Ok(())
    }
}

pub mod botspecs {
    use super::*;

    // Sensible defaults for a small differential-drive scout bot (SI units)
    pub fn scout_bot_spec() -> BotSpec {
        BotSpec {
            scan_radius: 5.0,
            spread: 1.0,
            spread_tolerance: 0.3,
            repulsion: 0.02,
            // Equal weighting; the unit clamp keeps the sum bounded
            w_prox: 1.0,
            w_align: 1.0,
            w_goal: 1.0,
            speed: 50.0,
            turn_speed: 5.0,
            turn_sharpness: 0.3,
            control_hz: 10.0,
            swarm_controlled: true,
            head_offset_body: Vec3f::new(0.0, 0.0, 0.35),
            goal_tag: "goal_ball".to_string(),
        }
    }
}
