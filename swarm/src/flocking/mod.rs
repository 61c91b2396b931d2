mod controller;
mod fields;
mod steering;
mod types;

pub use controller::{flocking_step, flocking_step_dbg};
pub use fields::{alignment_field, goal_field, proximal_field, GoalBranch};
pub use steering::{drive_torques, sharp_in_damp, steer_manual, steer_step, steer_step_dbg};
pub use types::{BotInputs, BotState, FlockStepDebug, SteerStepDebug, WheelTorques};
