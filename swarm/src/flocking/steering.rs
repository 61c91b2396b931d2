use crate::flocking::types::{BotInputs, BotState, SteerStepDebug, WheelTorques};
use crate::math::{lerp, Vec3f};
use crate::spec::BotSpec;

/// Critically damped scalar tracker: moves `current` toward `target` at a
/// rate bounded by `speed`, without overshoot. Frame-rate independent.
pub fn sharp_in_damp(current: f32, target: f32, speed: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return current;
    }
    current + (target - current) * (1.0 - (-8.0 * speed * dt).exp())
}

/// Per-tick steering translation: the published desired-movement vector in,
/// a turn-control scalar out. Mutates the persisted forward control on
/// `state`; turn control is stateless and recomputed every tick.
pub fn steer_step(spec: &BotSpec, state: &mut BotState, dt: f32) -> f32 {
    steer_step_dbg(spec, state, dt, None)
}

/// Variant of `steer_step` that fills out an optional telemetry struct.
pub fn steer_step_dbg(
    spec: &BotSpec,
    state: &mut BotState,
    dt: f32,
    mut dbg: Option<&mut SteerStepDebug>,
) -> f32 {
    let mv = state.move_vector;
    let fwd = state.forward();
    let right = state.right();
    let dir = mv.normalize_or_zero();
    let degenerate = dir == Vec3f::ZERO;

    // Slow down in proportion to how far off the desired heading we are
    let fwd_align = if degenerate { 0.0 } else { fwd.dot(dir) };
    let fwd_target = lerp(mv.length(), mv.length() * fwd_align, spec.turn_sharpness);
    // Rate-limit speed changes so the vector can jump without the bot lurching
    state.fwd_control = sharp_in_damp(state.fwd_control, fwd_target, 1.0, dt);

    // Turn harder the larger the heading error, easing off near alignment
    let turn_angle = if degenerate { 0.0 } else { fwd.angle_between(mv) };
    // Back off turn authority when moving fast through a sharp turn so the
    // chassis does not flip
    let turn_damping = lerp(1.0, 0.5, lerp(0.0, state.fwd_control, turn_angle / 3.0));

    // Divide-based sign: bounded in (-1, 1), no zero-division branch, at
    // the cost of a tiny magnitude distortion near zero
    let side = right.dot(dir);
    let turn_sign = side / (side.abs() + 0.01);

    let turn_control = turn_sign * turn_angle * turn_damping;

    if let Some(d) = dbg.as_mut() {
        d.dt = dt;
        d.move_vector = mv;
        d.fwd_align = fwd_align;
        d.fwd_target = fwd_target;
        d.fwd_control = state.fwd_control;
        d.turn_angle = turn_angle;
        d.turn_damping = turn_damping;
        d.turn_sign = turn_sign;
        d.turn_control = turn_control;
    }

    turn_control
}

/// Manual override path: raw stick inputs clamped straight into control
/// scalars, bypassing the vector translation entirely.
pub fn steer_manual(inputs: BotInputs) -> (f32, f32) {
    (inputs.fwd.clamp(-1.0, 1.0), inputs.turn.clamp(-1.0, 1.0))
}

/// Differential-drive actuator map. Pure; the caller applies the result to
/// every wheel on the given side.
pub fn drive_torques(spec: &BotSpec, fwd_control: f32, turn_control: f32) -> WheelTorques {
    WheelTorques {
        right: fwd_control * spec.speed - turn_control * spec.turn_speed,
        left: fwd_control * spec.speed + turn_control * spec.turn_speed,
    }
}
