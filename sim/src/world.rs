use bevy_ecs::prelude::Resource;

use swarm::{
    ArenaSpec, BotState, BoxSpec, GoalLookup, ObstacleQuery, PeerSample, SpatialQuery, Vec3f,
    WheelTorques, BODY_UP,
};

// Host-side drive model constants. Deliberately crude: the spec work lives
// in the control core, this just has to move the chassis plausibly.
const BOT_MASS: f32 = 10.0;
const LINEAR_DRAG: f32 = 1.2;
const FORCE_PER_TORQUE: f32 = 0.25;
const YAW_RATE_PER_TORQUE: f32 = 0.1;
const CHASSIS_MARGIN: f32 = 0.3;

/// Host-side world: arena geometry plus a pose snapshot of every bot that
/// backs the neighbour queries. Implements the core's capability traits.
#[derive(Resource)]
pub struct Arena {
    pub spec: ArenaSpec,
    /// Refreshed at the top of every tick, before the controllers run.
    pub peers: Vec<PeerSample>,
}

impl Arena {
    pub fn new(spec: ArenaSpec) -> Self {
        Self {
            spec,
            peers: Vec::new(),
        }
    }

    /// Keep a bot on the playable floor. Walls are solid to rays; this is
    /// the cheap stand-in for chassis collision against them.
    pub fn clamp_inside(&self, p: Vec3f) -> Vec3f {
        let half_x = (self.spec.floor.x * 0.5 - CHASSIS_MARGIN).max(0.0);
        let half_z = (self.spec.floor.z * 0.5 - CHASSIS_MARGIN).max(0.0);
        Vec3f::new(p.x.clamp(-half_x, half_x), p.y, p.z.clamp(-half_z, half_z))
    }
}

/// Slab test: entry distance of a ray against an axis-aligned box, or None.
/// An origin already inside the box reports distance zero.
fn ray_box(origin: Vec3f, dir: Vec3f, b: &BoxSpec) -> Option<f32> {
    let half = b.size * 0.5;
    let min = b.pos - half;
    let max = b.pos + half;
    let mut t_near = 0.0f32;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let (o, d, lo, hi) = match axis {
            0 => (origin.x, dir.x, min.x, max.x),
            1 => (origin.y, dir.y, min.y, max.y),
            _ => (origin.z, dir.z, min.z, max.z),
        };
        if d.abs() < 1e-8 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let (mut t0, mut t1) = ((lo - o) * inv, (hi - o) * inv);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }
    Some(t_near)
}

impl ObstacleQuery for Arena {
    fn ray_cast(&self, origin: Vec3f, dir: Vec3f, max_dist: f32) -> Option<Vec3f> {
        let dir = dir.normalize_or_zero();
        if dir == Vec3f::ZERO {
            return None;
        }
        let mut nearest: Option<f32> = None;
        for b in self.spec.walls().iter().chain(self.spec.obstacles.iter()) {
            if let Some(t) = ray_box(origin, dir, b) {
                if t <= max_dist && nearest.map_or(true, |n| t < n) {
                    nearest = Some(t);
                }
            }
        }
        nearest.map(|t| origin + dir * t)
    }
}

impl SpatialQuery for Arena {
    fn query_nearby(&self, origin: Vec3f, radius: f32) -> Vec<PeerSample> {
        self.peers
            .iter()
            .copied()
            .filter(|p| p.position.distance(origin) <= radius)
            .collect()
    }
}

impl GoalLookup for Arena {
    fn resolve(&self, tag: &str) -> Option<Vec3f> {
        self.spec.goals.iter().find(|g| g.tag == tag).map(|g| g.pos)
    }
}

/// Differential-drive kinematics: side torques become a longitudinal force
/// and a direct yaw rate; the wheels grip laterally, so velocity always
/// points along the chassis forward axis.
pub fn integrate_drive(
    state: &mut BotState,
    torques: WheelTorques,
    wheels_per_side: u32,
    dt: f32,
) {
    if dt <= 0.0 {
        return;
    }
    let wheels = wheels_per_side as f32;

    let omega = (torques.left - torques.right) * wheels * YAW_RATE_PER_TORQUE;
    state.orientation =
        (state.orientation * swarm::Quatf::from_axis_angle(BODY_UP, omega * dt)).normalize();

    let fwd = state.forward();
    let speed = state.velocity.dot(fwd);
    let drive = (torques.right + torques.left) * wheels * FORCE_PER_TORQUE;
    let accel = drive / BOT_MASS - LINEAR_DRAG * speed;
    state.velocity = fwd * (speed + accel * dt);
    state.position += state.velocity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarm::{builtins, Quatf};

    #[test]
    fn ray_hits_the_far_wall() {
        let arena = Arena::new(builtins::open_field_arena());
        let hit = arena
            .ray_cast(Vec3f::new(0.0, 1.0, 0.0), Vec3f::new(0.0, 0.0, 1.0), 100.0)
            .expect("wall ahead");
        assert!((hit.z - arena.spec.floor.z * 0.5).abs() < 1e-3, "got {hit:?}");
    }

    #[test]
    fn ray_respects_max_distance() {
        let arena = Arena::new(builtins::open_field_arena());
        assert!(arena
            .ray_cast(Vec3f::new(0.0, 1.0, 0.0), Vec3f::new(0.0, 0.0, 1.0), 2.0)
            .is_none());
    }

    #[test]
    fn unnormalized_direction_does_not_stretch_the_probe() {
        let arena = Arena::new(builtins::open_field_arena());
        let long = Vec3f::new(0.0, 0.0, 10.0);
        assert!(arena.ray_cast(Vec3f::new(0.0, 1.0, 0.0), long, 2.0).is_none());
    }

    #[test]
    fn nearest_obstacle_wins() {
        let arena = Arena::new(builtins::greybox_arena());
        // Aim straight at pillar_a from the origin side
        let hit = arena
            .ray_cast(Vec3f::new(3.5, 1.0, 0.0), Vec3f::new(0.0, 0.0, 1.0), 100.0)
            .expect("pillar");
        assert!(hit.z < arena.spec.floor.z * 0.5, "pillar, not the wall: {hit:?}");
    }

    #[test]
    fn goal_lookup_by_tag() {
        let arena = Arena::new(builtins::greybox_arena());
        assert!(arena.resolve("goal_ball").is_some());
        assert!(arena.resolve("nope").is_none());
    }

    #[test]
    fn even_torque_drives_straight() {
        let mut state = BotState::at_spawn(Vec3f::ZERO, Quatf::IDENTITY);
        for _ in 0..100 {
            integrate_drive(
                &mut state,
                WheelTorques {
                    right: 25.0,
                    left: 25.0,
                },
                2,
                0.02,
            );
        }
        assert!(state.position.z > 1.0, "moved forward: {:?}", state.position);
        assert!(state.position.x.abs() < 1e-4, "no drift: {:?}", state.position);
    }

    #[test]
    fn torque_split_turns_toward_the_weak_side() {
        let mut state = BotState::at_spawn(Vec3f::ZERO, Quatf::IDENTITY);
        // Right side weaker: should come about to the right (+X)
        for _ in 0..10 {
            integrate_drive(
                &mut state,
                WheelTorques {
                    right: 10.0,
                    left: 30.0,
                },
                2,
                0.02,
            );
        }
        assert!(state.forward().x > 0.1, "yawed right: {:?}", state.forward());
    }
}
