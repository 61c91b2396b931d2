use crate::{ArenaSpec, BoxSpec, GoalSpec, Vec3f};

// Mirrors the walled test pen used for prototype tuning runs.
pub fn greybox_arena() -> ArenaSpec {
    let floor_w = 40.0;
    let floor_d = 40.0;
    let wall_height = 4.0;
    let wall_thick = 0.5;

    // Pillars flanking the direct line to the goal so the ray fan has
    // something to steer around.
    let pillar_a = BoxSpec {
        pos: Vec3f::new(3.5, 1.0, 7.0),
        size: Vec3f::new(2.0, 2.0, 2.0),
    };
    let pillar_b = BoxSpec {
        pos: Vec3f::new(-3.0, 1.0, 10.0),
        size: Vec3f::new(2.0, 2.0, 3.0),
    };

    ArenaSpec {
        floor: Vec3f::new(floor_w, wall_height, floor_d),
        wall_thickness: wall_thick,
        obstacles: vec![pillar_a, pillar_b],
        goals: vec![GoalSpec {
            tag: "goal_ball".to_string(),
            pos: Vec3f::new(0.0, 0.5, 15.0),
        }],
    }
}

/// Same pen with nothing in it. Useful when a run should exercise pure
/// flocking and goal seeking without avoidance kicking in.
pub fn open_field_arena() -> ArenaSpec {
    ArenaSpec {
        obstacles: Vec::new(),
        ..greybox_arena()
    }
}

impl Default for ArenaSpec {
    fn default() -> Self {
        greybox_arena()
    }
}
