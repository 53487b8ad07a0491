//! Tracked target abstraction
//!
//! The rig never searches the scene for something to follow. Its owner hands
//! it a [`PoseProvider`] and the rig polls that provider once per tick
//! through a weak handle - the rig looks the target up but never owns it or
//! keeps it alive.

use glam::{Quat, Vec3};

/// A position plus orientation snapshot.
///
/// Forward is `orientation * Vec3::Z` (+Z forward), so the stock follow
/// offset `(0, 8, -12)` places the camera 12 m behind and 8 m above a
/// target with identity orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position
    pub position: Vec3,
    /// World-space orientation (unit quaternion)
    pub orientation: Quat,
}

impl Pose {
    /// Creates a pose from position and orientation.
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Pose at `position` with identity orientation.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    /// The pose's forward direction (+Z rotated by orientation).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    /// Rotates a local-space offset into world space.
    #[inline]
    pub fn transform_direction(&self, local: Vec3) -> Vec3 {
        self.orientation * local
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

/// Something the camera can track.
///
/// Polled once per rig tick, strictly after the provider's own movement
/// update for that frame (the caller guarantees the ordering).
pub trait PoseProvider {
    /// Current world-space pose.
    fn pose(&self) -> Pose;
}

impl PoseProvider for Pose {
    fn pose(&self) -> Pose {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_forward_is_positive_z() {
        let pose = Pose::at(Vec3::ZERO);
        assert!((pose.forward() - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_yaw_rotates_forward() {
        let pose = Pose::new(Vec3::ZERO, Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        // Quarter turn about Y takes +Z to +X
        assert!((pose.forward() - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_transform_direction_identity() {
        let pose = Pose::at(Vec3::new(5.0, 0.0, 5.0));
        let offset = Vec3::new(0.0, 8.0, -12.0);
        assert_eq!(pose.transform_direction(offset), offset);
    }
}
