use crate::math::Vec3f;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Axis-aligned box obstacle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxSpec {
    pub pos: Vec3f,  // center position in world coordinates
    pub size: Vec3f, // full extents
}

/// A tagged world point bots can be told to steer toward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSpec {
    pub tag: String,
    pub pos: Vec3f,
}

/// World schema for the host sim: a walled floor plus box obstacles and
/// goal markers. Serializable so layouts can ship in config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaSpec {
    /// Playable extent, centered on the origin. `y` is the wall height.
    pub floor: Vec3f,
    pub wall_thickness: f32,
    pub obstacles: Vec<BoxSpec>,
    pub goals: Vec<GoalSpec>,
}

#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("floor extents must be finite and > 0 (got {0:?})")]
    BadFloor(Vec3f),
    #[error("wall_thickness must be finite and > 0 (got {0})")]
    BadWallThickness(f32),
    #[error("obstacle {index} has a non-positive extent ({size:?})")]
    BadObstacle { index: usize, size: Vec3f },
    #[error("goal {index} has an empty tag")]
    EmptyGoalTag { index: usize },
}

impl ArenaSpec {
    /// Perimeter wall boxes derived from the floor extent, one per side.
    pub fn walls(&self) -> [BoxSpec; 4] {
        let half_x = self.floor.x * 0.5;
        let half_z = self.floor.z * 0.5;
        let height = self.floor.y;
        let t = self.wall_thickness;
        let long_x = Vec3f::new(self.floor.x + 2.0 * t, height, t);
        let long_z = Vec3f::new(t, height, self.floor.z + 2.0 * t);
        let y = height * 0.5;
        [
            BoxSpec {
                pos: Vec3f::new(0.0, y, half_z + t * 0.5),
                size: long_x,
            },
            BoxSpec {
                pos: Vec3f::new(0.0, y, -half_z - t * 0.5),
                size: long_x,
            },
            BoxSpec {
                pos: Vec3f::new(half_x + t * 0.5, y, 0.0),
                size: long_z,
            },
            BoxSpec {
                pos: Vec3f::new(-half_x - t * 0.5, y, 0.0),
                size: long_z,
            },
        ]
    }

    pub fn validate(&self) -> Result<(), ArenaError> {
        let f = self.floor;
        if !(f.x.is_finite() && f.y.is_finite() && f.z.is_finite())
            || f.x <= 0.0
            || f.y <= 0.0
            || f.z <= 0.0
        {
            return Err(ArenaError::BadFloor(f));
        }
        if !self.wall_thickness.is_finite() || self.wall_thickness <= 0.0 {
            return Err(ArenaError::BadWallThickness(self.wall_thickness));
        }
        for (index, b) in self.obstacles.iter().enumerate() {
            if b.size.x <= 0.0 || b.size.y <= 0.0 || b.size.z <= 0.0 {
                return Err(ArenaError::BadObstacle {
                    index,
                    size: b.size,
                });
            }
        }
        for (index, g) in self.goals.iter().enumerate() {
            if g.tag.is_empty() {
                return Err(ArenaError::EmptyGoalTag { index });
            }
        }
        Ok(())
    }
}
