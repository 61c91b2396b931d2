use crate::math::{lerp, Vec3f};
use crate::sense::{BotId, ObstacleQuery, PeerSample};

// Two coincident bots would hit the d^-5 singularity below this.
const MIN_PEER_DISTANCE: f32 = 1e-6;

/// Separation/spacing field. For every peer inside `scan_radius` the bot
/// feels a Lennard-Jones style push/pull around the configured `spread`,
/// plus relative-velocity damping while it sits inside the comfort band
/// `|d - spread| < tolerance`. Returns the unclamped sum; the controller
/// clamps after weighting.
#[allow(clippy::too_many_arguments)]
pub fn proximal_field(
    self_id: BotId,
    self_pos: Vec3f,
    self_vel: Vec3f,
    peers: &[PeerSample],
    scan_radius: f32,
    spread: f32,
    tolerance: f32,
    repulsion: f32,
) -> Vec3f {
    let mut acc = Vec3f::ZERO;
    for peer in peers {
        if peer.id == self_id {
            continue;
        }
        let d = self_pos.distance(peer.position);
        if d > scan_radius || d < MIN_PEER_DISTANCE {
            continue;
        }

        if (d - spread).abs() < tolerance {
            // Close enough: damp the relative velocity instead of pushing
            acc += (peer.velocity - self_vel).normalize_or_zero();
        }

        let sigma = spread / 2f32.powf(1.0 / 6.0);
        let pidi =
            -8.0 * repulsion * (2.0 * sigma.powi(4) / d.powi(5) - sigma.powi(2) / d.powi(3));
        acc += pidi * (peer.position - self_pos) / d;
    }
    acc
}

/// Velocity-matching hook. Returns zero for now; the controller aggregates
/// it like any other field, so an implementation can slot in without
/// touching the aggregation.
pub fn alignment_field(_self_vel: Vec3f, _peers: &[PeerSample]) -> Vec3f {
    Vec3f::ZERO
}

/// Which branch of the goal field produced its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GoalBranch {
    #[default]
    Clear,
    ForwardRay,
    RightRay,
    LeftRay,
    Target,
}

/// Obstacle-avoidance steering blended with goal attraction. A three-ray
/// fan is probed in strict priority order (forward, forward-right,
/// forward-left); the first hit wins outright and the target is only
/// consulted when the path ahead is clear.
///
/// `jitter` must yield uniform samples in [-0.3, 0.3]; it is only consumed
/// on the forward-ray branch.
#[allow(clippy::too_many_arguments)]
pub fn goal_field(
    head_pos: Vec3f,
    self_pos: Vec3f,
    fwd: Vec3f,
    right: Vec3f,
    vel: Vec3f,
    obstacles: &dyn ObstacleQuery,
    goal: Option<Vec3f>,
    jitter: &mut dyn FnMut() -> f32,
) -> (Vec3f, GoalBranch) {
    let range = vel.length() * 0.3 + 0.5;

    if let Some(hit) = obstacles.ray_cast(head_pos, fwd, range) {
        let diff = self_pos - hit;
        let push = diff.normalize_or_zero() * lerp(5.0, 0.1, diff.length_squared());
        return (push + jitter() * right, GoalBranch::ForwardRay);
    }
    if let Some(hit) = obstacles.ray_cast(head_pos, fwd + 0.5 * right, range) {
        let diff = self_pos - hit;
        let push = diff.normalize_or_zero() * lerp(5.0, 0.1, diff.length_squared());
        return (push - 0.5 * right, GoalBranch::RightRay);
    }
    if let Some(hit) = obstacles.ray_cast(head_pos, fwd - 0.5 * right, range) {
        let diff = self_pos - hit;
        let push = diff.normalize_or_zero() * lerp(5.0, 0.1, diff.length_squared());
        return (push + 0.5 * right, GoalBranch::LeftRay);
    }
    if let Some(target) = goal {
        return ((target - self_pos).clamp_length_max(1.0), GoalBranch::Target);
    }
    (Vec3f::ZERO, GoalBranch::Clear)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_well_crosses_zero_above_spread() {
        // With sigma = spread / 2^(1/6) the 4-2 well's zero sits at
        // sqrt(2) * sigma, i.e. ~1.12 * spread, not at spread itself.
        let spread = 1.0;
        let sigma = spread / 2f32.powf(1.0 / 6.0);
        let zero_d = 2f32.sqrt() * sigma;
        let pidi = |d: f32| {
            -8.0 * 0.02 * (2.0 * sigma.powi(4) / d.powi(5) - sigma.powi(2) / d.powi(3))
        };
        assert!(pidi(zero_d).abs() < 1e-6);
        assert!(pidi(zero_d * 0.9) < 0.0, "repulsive below the crossover");
        assert!(pidi(zero_d * 1.1) > 0.0, "attractive above the crossover");
    }

    #[test]
    fn goal_push_extrapolates_past_unit_distance() {
        // The magnitude interpolation is deliberately unclamped; at
        // |diff|^2 = 4 it runs well past the 0.1 floor and flips sign.
        assert!((lerp(5.0, 0.1, 4.0) - -14.5).abs() < 0.2);
    }
}
