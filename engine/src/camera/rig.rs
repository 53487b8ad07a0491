//! Camera rig orchestration
//!
//! [`CameraRig`] runs the per-frame pipeline: mode strategy -> collision
//! resolution -> smoothing, writing the result into [`CameraState`]. It also
//! owns the mode state machine and the advisory diagnostic event stream.
//!
//! # Tick ordering
//!
//! `tick` must run strictly *after* the tracked target's own movement update
//! for the frame (a post-physics pass), so the rig reads a settled pose.
//! The host loop guarantees this ordering; the rig cannot check it.
//!
//! # Threading
//!
//! Single-threaded and tick-driven. There is exactly one writer to
//! [`CameraState`]; if a renderer consumes the pose from another thread, the
//! handoff (e.g. a double-buffered pose) is the caller's concern.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::{Quat, Vec3};
use log::{debug, info, warn};

use super::collision;
use super::modes::{self, CameraMode};
use super::smoothing;
use super::target::PoseProvider;
use crate::physics::{LayerMask, SpatialQuery};

/// Range of the post-tick downward penetration probe.
const PENETRATION_PROBE_RANGE: f32 = 0.1;

/// Camera rig configuration.
///
/// Set at construction; individual fields are adjusted through
/// [`CameraRig::config_mut`] between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Follow offset in target-local space (behind and above the tank)
    pub follow_offset: Vec3,
    /// Position response rate; the smoother uses `1 / follow_speed` as its
    /// response time
    pub follow_speed: f32,
    /// Orientation slerp rate in fractions per second
    pub rotation_speed: f32,
    /// Layers that obstruct the camera
    pub obstacle_mask: LayerMask,
    /// Minimum clearance kept between camera and obstructions
    pub min_distance: f32,
    /// Maximum camera distance from the target. The stock value clears
    /// every mode's full offset; tighten it to rein the camera in
    pub max_distance: f32,
    /// Radius of the swept collision probe
    pub probe_radius: f32,
    /// Minimum camera height
    pub min_height: f32,
    /// Maximum camera height (FollowBehind soft clamp)
    pub max_height: f32,
    /// Height of the TopDown mode above the target
    pub top_down_height: f32,
    /// FirstPerson eye height above the hull origin
    pub eye_height: f32,
    /// FirstPerson forward offset from the hull origin
    pub eye_forward_offset: f32,
    /// Smoothed motion when true, snap-to-target when false
    pub smoothing: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            follow_offset: Vec3::new(0.0, 8.0, -12.0),
            follow_speed: 5.0,
            rotation_speed: 3.0,
            obstacle_mask: LayerMask::TERRAIN,
            min_distance: 2.0,
            max_distance: 25.0,
            probe_radius: 0.5,
            min_height: 2.0,
            max_height: 50.0,
            top_down_height: 20.0,
            eye_height: 2.0,
            eye_forward_offset: 1.0,
            smoothing: true,
        }
    }
}

/// Mutable camera state written once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Current world-space position
    pub position: Vec3,
    /// Current world-space orientation
    pub orientation: Quat,
    /// Position smoother scratch velocity
    pub velocity: Vec3,
    /// Current camera mode
    pub mode: CameraMode,
}

/// Advisory diagnostic events, drained by the owner via
/// [`CameraRig::take_events`]. Informational only; none of them alters the
/// computed pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraEvent {
    /// The camera mode changed
    ModeChanged(CameraMode),
    /// The post-tick probe found geometry immediately below the camera.
    /// Persistent occurrences usually indicate a misconfigured obstacle
    /// mask or scene geometry, not a rig bug.
    PenetrationDetected(Vec3),
}

/// Shared handle type the rig accepts as its tracked target.
pub type TargetHandle = Weak<RefCell<dyn PoseProvider>>;

/// Collision-avoiding follow camera for the tank.
///
/// The rig holds a weak handle to its target: it polls the pose each tick
/// but never owns the target or keeps it alive. A dropped target behaves
/// exactly like an unbound one - `tick` becomes a no-op.
pub struct CameraRig {
    config: CameraConfig,
    state: CameraState,
    target: Option<TargetHandle>,
    events: Vec<CameraEvent>,
    missing_target_logged: bool,
}

impl CameraRig {
    /// Creates a rig with the given configuration and no target bound.
    pub fn new(config: CameraConfig) -> Self {
        let mut position = config.follow_offset;
        position.y = position.y.max(config.min_height);

        Self {
            config,
            state: CameraState {
                position,
                orientation: Quat::IDENTITY,
                velocity: Vec3::ZERO,
                mode: CameraMode::FollowBehind,
            },
            target: None,
            events: Vec::new(),
            missing_target_logged: false,
        }
    }

    /// Current camera state.
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Current camera position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    /// Current camera orientation.
    #[inline]
    pub fn orientation(&self) -> Quat {
        self.state.orientation
    }

    /// Rig configuration.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Mutable access to the configuration, for adjustments between ticks.
    pub fn config_mut(&mut self) -> &mut CameraConfig {
        &mut self.config
    }

    /// Enables or disables temporal smoothing.
    pub fn set_smoothing(&mut self, enabled: bool) {
        self.config.smoothing = enabled;
    }

    /// Binds a new target and snaps the camera to its initial position
    /// behind the target, bypassing smoothing so the camera does not fly in
    /// from wherever it was before.
    pub fn set_target(&mut self, target: TargetHandle) {
        if let Some(provider) = target.upgrade() {
            let pose = provider.borrow().pose();
            let mut initial = pose.position + pose.transform_direction(self.config.follow_offset);
            initial.y = initial.y.max(self.config.min_height);

            self.state.position = initial;
            self.state.velocity = Vec3::ZERO;
            if let Some(look) = smoothing::look_rotation_level(initial, pose.position) {
                self.state.orientation = look;
            }
        }

        self.target = Some(target);
        self.missing_target_logged = false;
    }

    /// Unbinds the target; subsequent ticks are no-ops.
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Whether a live target is currently bound.
    pub fn has_target(&self) -> bool {
        self.upgrade_target().is_some()
    }

    /// Current camera mode.
    pub fn mode(&self) -> CameraMode {
        self.state.mode
    }

    /// Sets the camera mode. Setting the mode it is already in changes
    /// nothing and raises no event.
    pub fn set_mode(&mut self, mode: CameraMode) {
        if mode == self.state.mode {
            return;
        }
        self.state.mode = mode;
        info!("camera mode changed to {:?}", mode);
        self.events.push(CameraEvent::ModeChanged(mode));
    }

    /// Sets the camera mode by numeric index.
    ///
    /// Out-of-range indices are rejected: the call is a no-op and returns
    /// `false`. [`CameraRig::switch_mode`] is the safe cyclic alternative.
    pub fn set_mode_by_index(&mut self, index: usize) -> bool {
        match CameraMode::from_index(index) {
            Some(mode) => {
                self.set_mode(mode);
                true
            }
            None => {
                debug!("rejected invalid camera mode index {}", index);
                false
            }
        }
    }

    /// Advances to the next mode in cycling order.
    pub fn switch_mode(&mut self) {
        self.set_mode(self.state.mode.next());
    }

    /// Drains the accumulated diagnostic events.
    pub fn take_events(&mut self) -> Vec<CameraEvent> {
        std::mem::take(&mut self.events)
    }

    fn upgrade_target(&self) -> Option<Rc<RefCell<dyn PoseProvider>>> {
        self.target.as_ref().and_then(Weak::upgrade)
    }

    /// Runs one frame of the camera pipeline.
    ///
    /// Precondition: the tracked target's movement update for this frame has
    /// already run (see module docs). No-op when no live target is bound or
    /// the mode is [`CameraMode::Free`].
    pub fn tick<Q: SpatialQuery>(&mut self, dt: f32, query: &Q) {
        let Some(provider) = self.upgrade_target() else {
            if !self.missing_target_logged {
                debug!("camera rig ticked with no target bound");
                self.missing_target_logged = true;
            }
            return;
        };

        if self.state.mode == CameraMode::Free {
            return;
        }

        let pose = provider.borrow().pose();
        let Some(desired) = modes::desired_position(self.state.mode, &pose, &self.config) else {
            return;
        };

        let safe = collision::resolve(desired, pose.position, &self.config, query);

        if self.config.smoothing {
            self.state.position = smoothing::smooth_damp(
                self.state.position,
                safe,
                &mut self.state.velocity,
                1.0 / self.config.follow_speed,
                dt,
            );
        } else {
            self.state.position = safe;
            self.state.velocity = Vec3::ZERO;
        }

        if let Some(look) = smoothing::look_rotation_level(self.state.position, pose.position) {
            self.state.orientation = if self.config.smoothing {
                smoothing::rotate_toward(
                    self.state.orientation,
                    look,
                    self.config.rotation_speed * dt,
                )
            } else {
                look
            };
        }

        // Advisory penetration check; does not alter the computed pose
        if query
            .cast_down(
                self.state.position,
                PENETRATION_PROBE_RANGE,
                self.config.obstacle_mask,
            )
            .is_some()
        {
            warn!("camera penetrating geometry at {}", self.state.position);
            self.events
                .push(CameraEvent::PenetrationDetected(self.state.position));
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}
