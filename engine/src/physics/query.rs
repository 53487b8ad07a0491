//! Spatial query interface
//!
//! Defines the obstruction-query capability consumed by the camera rig:
//! a swept sphere cast along a ray and a simple downward ray for ground
//! detection. The rig only depends on the [`SpatialQuery`] trait; concrete
//! collision worlds (see [`crate::physics::world::StaticWorld`]) implement it.

use glam::Vec3;

/// Collision layer bitmask used to filter which geometry participates
/// in a query.
///
/// Layers combine with `|`. The default mask selects terrain only, which
/// matches the stock camera configuration (the camera must not collide
/// with the tank it follows or with foliage).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Ground and terrain geometry
    pub const TERRAIN: LayerMask = LayerMask(1 << 0);
    /// Static scene geometry (buildings, rocks, wrecks)
    pub const STRUCTURES: LayerMask = LayerMask(1 << 1);
    /// Bushes and trees - swaying, never camera-blocking
    pub const FOLIAGE: LayerMask = LayerMask(1 << 2);
    /// Everything
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    /// Nothing
    pub const NONE: LayerMask = LayerMask(0);

    /// True if this mask shares at least one layer with `other`.
    #[inline]
    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::TERRAIN
    }
}

impl std::ops::BitOr for LayerMask {
    type Output = LayerMask;

    fn bitor(self, rhs: LayerMask) -> LayerMask {
        LayerMask(self.0 | rhs.0)
    }
}

/// Result of a successful spatial query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    /// World-space position of the obstruction
    pub point: Vec3,
    /// Surface normal at the hit point (normalized)
    pub normal: Vec3,
    /// Distance from the query origin to the hit point
    pub distance: f32,
}

impl ProbeHit {
    /// Creates a new hit record.
    pub fn new(point: Vec3, normal: Vec3, distance: f32) -> Self {
        Self {
            point,
            normal,
            distance,
        }
    }
}

/// Read-only obstruction queries against the collision world.
///
/// Both queries return the nearest obstruction within `max_dist`, or `None`
/// when the path is clear. "No hit" is not an error condition.
pub trait SpatialQuery {
    /// Sweeps a sphere of `radius` from `origin` along `direction`
    /// (normalized) up to `max_dist`, testing only geometry on layers
    /// selected by `mask`.
    ///
    /// Geometry the sphere already overlaps at `origin` is not an
    /// obstruction of the sweep and must be ignored.
    fn cast_probe(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_dist: f32,
        mask: LayerMask,
    ) -> Option<ProbeHit>;

    /// Casts a zero-width ray straight down from `origin`, up to `max_dist`.
    fn cast_down(&self, origin: Vec3, max_dist: f32, mask: LayerMask) -> Option<ProbeHit>;
}
