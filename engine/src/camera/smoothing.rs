//! Temporal smoothing
//!
//! Position follows a critically damped spring integrator (the classic
//! `SmoothDamp` formulation): it approaches the target as fast as possible
//! without oscillating past it, carrying a velocity term between ticks.
//! Orientation converges via spherical interpolation toward a level
//! look-at rotation.

use glam::{Quat, Vec3};

/// Critically damped spring step toward `target`.
///
/// `velocity` is the smoother's scratch state and must be carried between
/// calls. `smooth_time` is the approximate response time in seconds (the
/// rig uses `1 / follow_speed`).
///
/// The result never overshoots the target: the final clamp snaps the output
/// to `target` the moment the spring would cross it.
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    dt: f32,
) -> Vec3 {
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;

    // Pade-style approximation of e^-x, stable for large steps
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + change * omega) * dt;
    *velocity = (*velocity - temp * omega) * exp;
    let mut output = target + (change + temp) * exp;

    // Overshoot clamp
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = Vec3::ZERO;
    }

    output
}

/// Level look-at rotation from `eye` toward `focus`.
///
/// The vertical component is flattened to zero so the camera stays level;
/// returns `None` when eye and focus share a ground-plane footprint (no
/// meaningful look direction).
pub fn look_rotation_level(eye: Vec3, focus: Vec3) -> Option<Quat> {
    let mut dir = focus - eye;
    dir.y = 0.0;

    if dir.length_squared() < 1e-8 {
        return None;
    }

    // +Z forward convention: yaw 0 looks along +Z
    let yaw = dir.x.atan2(dir.z);
    Some(Quat::from_rotation_y(yaw))
}

/// Advances `current` toward `target` by `fraction` of the remaining arc.
///
/// A fraction of 1 or more snaps to the target.
pub fn rotate_toward(current: Quat, target: Quat, fraction: f32) -> Quat {
    current.slerp(target, fraction.clamp(0.0, 1.0)).normalize()
}
