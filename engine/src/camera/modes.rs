//! Camera modes and per-mode desired positions
//!
//! Each mode maps the tracked target's pose to an *unclamped desired
//! position* - the spot the camera would occupy if the world were empty.
//! Obstacle avoidance happens later in [`crate::camera::collision`].

use glam::Vec3;

use super::rig::CameraConfig;
use super::target::Pose;

/// Camera mode - determines camera position relative to the tank.
///
/// [`CameraMode::Free`] suspends automatic repositioning entirely; the
/// camera pose stays under external control until the mode changes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CameraMode {
    /// Default: chase camera behind/above the tank
    #[default]
    FollowBehind,
    /// Straight down from a fixed height, ignoring tank orientation
    TopDown,
    /// At the commander's eye point
    FirstPerson,
    /// Externally driven - no automatic updates
    Free,
}

impl CameraMode {
    /// Number of camera modes.
    pub const COUNT: usize = 4;

    /// The mode after this one in cycling order (`(current + 1) % 4`).
    pub fn next(self) -> CameraMode {
        match self {
            CameraMode::FollowBehind => CameraMode::TopDown,
            CameraMode::TopDown => CameraMode::FirstPerson,
            CameraMode::FirstPerson => CameraMode::Free,
            CameraMode::Free => CameraMode::FollowBehind,
        }
    }

    /// Numeric index of this mode in cycling order.
    pub fn index(self) -> usize {
        match self {
            CameraMode::FollowBehind => 0,
            CameraMode::TopDown => 1,
            CameraMode::FirstPerson => 2,
            CameraMode::Free => 3,
        }
    }

    /// Mode for a numeric index; `None` when out of range.
    pub fn from_index(index: usize) -> Option<CameraMode> {
        match index {
            0 => Some(CameraMode::FollowBehind),
            1 => Some(CameraMode::TopDown),
            2 => Some(CameraMode::FirstPerson),
            3 => Some(CameraMode::Free),
            _ => None,
        }
    }
}

/// Computes the unclamped desired camera position for `mode`.
///
/// Pure function of its inputs; ignores obstacles. Returns `None` in
/// [`CameraMode::Free`], where no position is computed at all.
pub fn desired_position(mode: CameraMode, target: &Pose, config: &CameraConfig) -> Option<Vec3> {
    match mode {
        CameraMode::FollowBehind => {
            let mut position = target.position + target.transform_direction(config.follow_offset);
            // Soft pre-clamp; the resolver applies the authoritative floor
            // after collision adjustment
            position.y = position.y.clamp(config.min_height, config.max_height);
            Some(position)
        }
        CameraMode::TopDown => Some(target.position + Vec3::Y * config.top_down_height),
        CameraMode::FirstPerson => Some(
            target.position
                + Vec3::Y * config.eye_height
                + target.forward() * config.eye_forward_offset,
        ),
        CameraMode::Free => None,
    }
}
