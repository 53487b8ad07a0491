//! Tank Controller
//!
//! Drivable tank hull with turret and cannon aiming. Input devices are out
//! of scope - the owner feeds normalized axis values each frame, typically
//! from whatever input layer the host application uses.
//!
//! The controller implements [`PoseProvider`], so a [`crate::camera::CameraRig`]
//! can track it directly. The rig's tick must run after
//! [`TankController::drive`] for the frame.

use glam::{Quat, Vec3};

use crate::camera::{Pose, PoseProvider};
use crate::physics::{LayerMask, SpatialQuery};

/// Hull top speed in meters per second
pub const MOVE_SPEED: f32 = 10.0;

/// Hull turn rate in radians per second (60 deg/s)
pub const TURN_SPEED: f32 = 60.0 * std::f32::consts::PI / 180.0;

/// Speed easing rate; higher reaches the target speed faster
pub const ACCELERATION: f32 = 5.0;

/// Turret traverse rate in radians per second (45 deg/s)
pub const TURRET_ROTATION_SPEED: f32 = 45.0 * std::f32::consts::PI / 180.0;

/// Cannon elevation rate in radians per second (30 deg/s)
pub const CANNON_ROTATION_SPEED: f32 = 30.0 * std::f32::consts::PI / 180.0;

/// Cannon depression limit in radians (-10 deg)
pub const CANNON_MIN_ANGLE: f32 = -10.0 * std::f32::consts::PI / 180.0;

/// Cannon elevation limit in radians (+20 deg)
pub const CANNON_MAX_ANGLE: f32 = 20.0 * std::f32::consts::PI / 180.0;

/// Range of the downward ground-follow probe
const GROUND_CHECK_DISTANCE: f32 = 1.1;

/// Drivable tank: eased hull movement, turret traverse, clamped cannon
/// elevation, and a downward-probe ground follow.
#[derive(Debug, Clone)]
pub struct TankController {
    /// Hull position in world space
    pub position: Vec3,
    /// Hull yaw in radians
    pub yaw: f32,
    /// Turret yaw relative to the hull, radians
    pub turret_yaw: f32,
    /// Cannon pitch relative to the turret, radians, clamped to
    /// `[CANNON_MIN_ANGLE, CANNON_MAX_ANGLE]`
    pub cannon_pitch: f32,
    /// Ground layers the hull follows
    pub ground_mask: LayerMask,
    /// Current eased hull speed (m/s, signed)
    current_speed: f32,
}

impl TankController {
    /// Creates a tank at the given position, facing +Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            turret_yaw: 0.0,
            cannon_pitch: 0.0,
            ground_mask: LayerMask::TERRAIN,
            current_speed: 0.0,
        }
    }

    /// Current signed hull speed in m/s.
    pub fn speed(&self) -> f32 {
        self.current_speed
    }

    /// Hull forward direction.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Quat::from_rotation_y(self.yaw) * Vec3::Z
    }

    /// World-space yaw of the turret (hull yaw plus traverse).
    pub fn turret_world_yaw(&self) -> f32 {
        self.yaw + self.turret_yaw
    }

    /// Drives the hull for one frame.
    ///
    /// `move_axis` and `turn_axis` are normalized inputs in `[-1, 1]`.
    /// Speed eases toward `move_axis * MOVE_SPEED` rather than jumping, so
    /// the tank accelerates and brakes smoothly.
    pub fn drive(&mut self, move_axis: f32, turn_axis: f32, dt: f32) {
        let dt = dt.clamp(0.0, 0.1);

        let target_speed = move_axis.clamp(-1.0, 1.0) * MOVE_SPEED;
        let blend = (ACCELERATION * dt).min(1.0);
        self.current_speed += (target_speed - self.current_speed) * blend;

        self.yaw += turn_axis.clamp(-1.0, 1.0) * TURN_SPEED * dt;
        self.position += self.forward() * self.current_speed * dt;
    }

    /// Aims turret and cannon for one frame.
    ///
    /// Axis values are normalized inputs in `[-1, 1]`. Cannon pitch is
    /// clamped to its elevation limits.
    pub fn aim(&mut self, turret_axis: f32, cannon_axis: f32, dt: f32) {
        let dt = dt.clamp(0.0, 0.1);

        self.turret_yaw += turret_axis.clamp(-1.0, 1.0) * TURRET_ROTATION_SPEED * dt;
        self.cannon_pitch = (self.cannon_pitch
            + cannon_axis.clamp(-1.0, 1.0) * CANNON_ROTATION_SPEED * dt)
            .clamp(CANNON_MIN_ANGLE, CANNON_MAX_ANGLE);
    }

    /// Keeps the hull on the ground.
    ///
    /// Probes downward from slightly above the hull origin and snaps the
    /// hull onto the first ground hit. Off a ledge with no ground in range,
    /// the position is left unchanged.
    pub fn follow_ground<Q: SpatialQuery>(&mut self, query: &Q) {
        let probe_origin = self.position + Vec3::Y * GROUND_CHECK_DISTANCE;
        if let Some(hit) = query.cast_down(probe_origin, 2.0 * GROUND_CHECK_DISTANCE, self.ground_mask)
        {
            self.position.y = hit.point.y;
        }
    }
}

impl Default for TankController {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl PoseProvider for TankController {
    fn pose(&self) -> Pose {
        Pose::new(self.position, Quat::from_rotation_y(self.yaw))
    }
}
