use crate::flocking::fields::{alignment_field, goal_field, proximal_field};
use crate::flocking::types::{BotState, FlockStepDebug};
use crate::sense::{BotId, GoalLookup, ObstacleQuery, SpatialQuery};
use crate::spec::BotSpec;

/// Low-rate flocking update: recompute the desired-movement vector from
/// the three force fields and publish it while the bot is under swarm
/// control. See `flocking_step_dbg` for the telemetry variant.
pub fn flocking_step(
    spec: &BotSpec,
    id: BotId,
    state: &mut BotState,
    peers: &dyn SpatialQuery,
    obstacles: &dyn ObstacleQuery,
    goals: &dyn GoalLookup,
    jitter: &mut dyn FnMut() -> f32,
) {
    flocking_step_dbg(spec, id, state, peers, obstacles, goals, jitter, None);
}

/// Variant of `flocking_step` that fills out an optional telemetry struct.
#[allow(clippy::too_many_arguments)]
pub fn flocking_step_dbg(
    spec: &BotSpec,
    id: BotId,
    state: &mut BotState,
    peers: &dyn SpatialQuery,
    obstacles: &dyn ObstacleQuery,
    goals: &dyn GoalLookup,
    jitter: &mut dyn FnMut() -> f32,
    mut dbg: Option<&mut FlockStepDebug>,
) {
    let nearby = peers.query_nearby(state.position, spec.scan_radius);

    let proximal = proximal_field(
        id,
        state.position,
        state.velocity,
        &nearby,
        spec.scan_radius,
        spec.spread,
        spec.spread_tolerance,
        spec.repulsion,
    );
    let alignment = alignment_field(state.velocity, &nearby);
    let (goal, goal_branch) = goal_field(
        state.head_position(spec.head_offset_body),
        state.position,
        state.forward(),
        state.right(),
        state.velocity,
        obstacles,
        goals.resolve(&spec.goal_tag),
        jitter,
    );

    let weighted = spec.w_prox * proximal + spec.w_align * alignment + spec.w_goal * goal;
    let clamped = weighted.clamp_length_max(1.0);

    // Whole-vector replace; manual control leaves the published value alone
    let published = spec.swarm_controlled;
    if published {
        state.move_vector = clamped;
    }

    if let Some(d) = dbg.as_mut() {
        d.peer_count = nearby.len();
        d.proximal = proximal;
        d.alignment = alignment;
        d.goal = goal;
        d.goal_branch = goal_branch;
        d.weighted = weighted;
        d.clamped = clamped;
        d.published = published;
    }
}
