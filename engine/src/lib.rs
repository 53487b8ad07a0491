//! Tank Rig Engine Library
//!
//! Core of an arcade tank game: a collision-avoiding third-person camera
//! rig plus the gameplay services around it. Rendering, input devices and
//! asset loading are deliberately absent - this library only computes
//! state, which makes every part testable headless.
//!
//! # Modules
//!
//! - [`camera`] - camera modes, collision resolution, smoothing, and the
//!   orchestrating rig
//! - [`physics`] - read-only spatial queries (`SpatialQuery`, `StaticWorld`)
//! - [`tank`] - drivable tank hull the camera tracks
//! - [`weather`] - wind service and foliage sway
//!
//! # Example
//!
//! ```ignore
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use glam::Vec3;
//! use tank_rig_engine::camera::{CameraConfig, CameraRig, PoseProvider};
//! use tank_rig_engine::physics::StaticWorld;
//! use tank_rig_engine::tank::TankController;
//!
//! let world = StaticWorld::with_ground(0.0);
//! let tank: Rc<RefCell<dyn PoseProvider>> =
//!     Rc::new(RefCell::new(TankController::new(Vec3::new(0.0, 0.5, 0.0))));
//!
//! let mut rig = CameraRig::new(CameraConfig::default());
//! rig.set_target(Rc::downgrade(&tank));
//!
//! // Each frame, after the tank's own movement update:
//! rig.tick(1.0 / 60.0, &world);
//! let pose = (rig.position(), rig.orientation());
//! ```

pub mod camera;
pub mod physics;
pub mod tank;
pub mod weather;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the core camera types at crate level for convenience
pub use camera::{CameraConfig, CameraEvent, CameraMode, CameraRig, Pose, PoseProvider};
// Re-export the spatial query surface
pub use physics::{LayerMask, ProbeHit, SpatialQuery, StaticWorld};
// Re-export the tank controller
pub use tank::TankController;
