//! Camera collision resolution
//!
//! Turns an unclamped desired position into a *safe* one: a probe cast from
//! the target toward the desired spot pulls the camera in front of the first
//! obstruction, a short downward ray rescues positions hovering just below a
//! floor the lateral cast missed, and a final height floor keeps the camera
//! out of the ground. This is the main protection against the camera
//! clipping into terrain.

use glam::Vec3;

use super::rig::CameraConfig;
use crate::physics::SpatialQuery;

/// Directions shorter than this are treated as degenerate (target and
/// desired position coincide) and skip casting entirely.
const DEGENERATE_DISTANCE: f32 = 1e-4;

/// Range of the downward ground-rescue ray below the desired position.
const GROUND_RESCUE_RANGE: f32 = 1.0;

/// Resolves `desired` against the collision world.
///
/// The returned position:
/// - lies strictly between the target and the first obstruction, at
///   `config.min_distance` before the hit point, when the view ray is
///   blocked;
/// - sits `config.min_distance` above a floor detected directly below an
///   unblocked desired position;
/// - always satisfies `y >= config.min_height`.
///
/// Desired positions farther than `config.max_distance` from the target are
/// pulled onto that radius before casting.
pub fn resolve<Q: SpatialQuery>(
    desired: Vec3,
    target_position: Vec3,
    config: &CameraConfig,
    query: &Q,
) -> Vec3 {
    let to_desired = desired - target_position;
    let distance = to_desired.length();

    if distance < DEGENERATE_DISTANCE {
        // Nothing to cast along; just enforce the floor
        let mut position = desired;
        position.y = position.y.max(config.min_height);
        return position;
    }

    let direction = to_desired / distance;
    let distance = distance.min(config.max_distance);
    let mut position = target_position + direction * distance;

    if let Some(hit) = query.cast_probe(
        target_position,
        direction,
        config.probe_radius,
        distance,
        config.obstacle_mask,
    ) {
        // Place the camera between the target and the obstruction,
        // never through it
        log::trace!(
            "camera pull-in: obstruction at {:.2} m along view ray",
            hit.distance
        );
        let mut safe = hit.point - direction * config.min_distance;
        safe.y = safe.y.max(config.min_height);
        return safe;
    }

    // Lateral cast was clear; make sure we are not hovering just below a
    // floor (e.g. looking straight down a slope)
    if let Some(hit) = query.cast_down(position, GROUND_RESCUE_RANGE, config.obstacle_mask) {
        position.y = hit.point.y + config.min_distance;
    }

    position.y = position.y.max(config.min_height);
    position
}
