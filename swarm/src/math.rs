use bevy_math::{Quat, Vec3};

/// Shared vector/quaternion aliases so every crate agrees on one math
/// backend without pulling in the full Bevy prelude.
pub type Vec3f = Vec3;
pub type Quatf = Quat;

// Basis: standard RHS with +Z forward, +Y up, +X right
pub const BODY_FWD: Vec3f = Vec3f::new(0.0, 0.0, 1.0);
pub const BODY_RIGHT: Vec3f = Vec3f::new(1.0, 0.0, 0.0);
pub const BODY_UP: Vec3f = Vec3f::new(0.0, 1.0, 0.0);

/// Plain affine interpolation. Deliberately unclamped: the goal-field
/// magnitude and the turn damping chain both run the parameter past 1.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
