//! Camera Module
//!
//! Collision-avoiding follow camera for the tank. Window-system agnostic -
//! it only manages camera state and transformations.
//!
//! Per-tick data flow: target pose -> [`modes`] (desired position) ->
//! [`collision`] (safe position) -> [`smoothing`] (converged pose).

pub mod collision;
pub mod modes;
pub mod rig;
pub mod smoothing;
pub mod target;

pub use modes::{CameraMode, desired_position};
pub use rig::{CameraConfig, CameraEvent, CameraRig, CameraState, TargetHandle};
pub use smoothing::{look_rotation_level, rotate_toward, smooth_damp};
pub use target::{Pose, PoseProvider};
