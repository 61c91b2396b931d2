//! Capability interfaces the control core consumes from its host.
//!
//! Everything the host environment provides (neighbour discovery, obstacle
//! probing, goal lookup) arrives through these traits so the controller can
//! run against fakes in tests instead of a live scene.

use crate::math::Vec3f;
use serde::{Deserialize, Serialize};

/// Opaque bot identity. Only ever compared for equality, to drop the
/// querying bot from its own neighbour scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BotId(pub u32);

/// Snapshot of one nearby peer as returned by a spatial query. Supplied
/// fresh per call; nothing here is retained between updates.
#[derive(Debug, Clone, Copy)]
pub struct PeerSample {
    pub id: BotId,
    pub position: Vec3f,
    pub velocity: Vec3f,
}

/// Neighbour lookup around a world position.
pub trait SpatialQuery {
    fn query_nearby(&self, origin: Vec3f, radius: f32) -> Vec<PeerSample>;
}

/// Forward obstacle probing. `dir` need not be normalized; implementations
/// normalize it so `max_dist` is a true distance. Returns the hit point.
pub trait ObstacleQuery {
    fn ray_cast(&self, origin: Vec3f, dir: Vec3f, max_dist: f32) -> Option<Vec3f>;
}

/// Resolution of a logical goal tag to a world point. Absence is a normal
/// state (the marker may not have been placed yet), not an error.
pub trait GoalLookup {
    fn resolve(&self, tag: &str) -> Option<Vec3f>;
}
