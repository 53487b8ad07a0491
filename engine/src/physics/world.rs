//! Static collision world
//!
//! A minimal obstruction source backing [`SpatialQuery`]: axis-aligned boxes
//! on collision layers plus an optional infinite ground plane. Sphere casts
//! are approximated by expanding each box by the probe radius (Minkowski sum)
//! and running a ray test against the expanded box with the slab method.
//! Geometry the sphere already overlaps at the start of the sweep is
//! ignored, so casts from a grounded origin see past the ground under it.
//!
//! Suitable for arena-scale scenes; uses a brute-force closest-hit scan over
//! all boxes. Swap in a spatially partitioned implementation behind the same
//! trait if obstacle counts grow.

use glam::Vec3;

use super::query::{LayerMask, ProbeHit, SpatialQuery};

/// An axis-aligned box obstacle on a collision layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
    /// Collision layer this obstacle lives on
    pub layer: LayerMask,
}

impl Obstacle {
    /// Creates an obstacle from two corners.
    pub fn new(min: Vec3, max: Vec3, layer: LayerMask) -> Self {
        Self { min, max, layer }
    }

    /// Creates an obstacle from a center point and half-extents.
    pub fn from_center(center: Vec3, half_extents: Vec3, layer: LayerMask) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
            layer,
        }
    }

    /// Outward surface normal for a point on (or near) the box surface.
    ///
    /// Picks the face whose plane the point is closest to in normalized
    /// box-local coordinates.
    pub fn surface_normal(&self, point: Vec3) -> Vec3 {
        let center = (self.min + self.max) * 0.5;
        let half = ((self.max - self.min) * 0.5).max(Vec3::splat(1e-6));
        let local = (point - center) / half;
        let a = local.abs();

        if a.x >= a.y && a.x >= a.z {
            Vec3::new(local.x.signum(), 0.0, 0.0)
        } else if a.y >= a.z {
            Vec3::new(0.0, local.y.signum(), 0.0)
        } else {
            Vec3::new(0.0, 0.0, local.z.signum())
        }
    }
}

/// Ray/AABB intersection via the slab method.
///
/// Returns the distance to the nearest intersection in front of the origin,
/// or the exit distance when the ray starts inside the box.
pub fn ray_box_intersect(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];

        if d.abs() < 1e-10 {
            // Ray parallel to this slab - must already be inside it
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }

        let ta = (min[axis] - o) / d;
        let tb = (max[axis] - o) / d;
        t_enter = t_enter.max(ta.min(tb));
        t_exit = t_exit.min(ta.max(tb));
    }

    if t_exit < t_enter || t_exit < 0.0 {
        return None;
    }

    // Inside the box: report the exit face
    Some(if t_enter >= 0.0 { t_enter } else { t_exit })
}

/// Static collision world: layered box obstacles plus an optional flat ground.
#[derive(Debug, Clone, Default)]
pub struct StaticWorld {
    obstacles: Vec<Obstacle>,
    /// Ground plane height and layer, if the world has one
    ground: Option<(f32, LayerMask)>,
}

impl StaticWorld {
    /// Creates an empty world with no ground plane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a world with a flat ground plane at `height` on the
    /// terrain layer.
    pub fn with_ground(height: f32) -> Self {
        Self {
            obstacles: Vec::new(),
            ground: Some((height, LayerMask::TERRAIN)),
        }
    }

    /// Sets or replaces the ground plane.
    pub fn set_ground(&mut self, height: f32, layer: LayerMask) {
        self.ground = Some((height, layer));
    }

    /// Adds a box obstacle.
    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Number of box obstacles in the world.
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Removes all box obstacles, keeping the ground plane.
    pub fn clear_obstacles(&mut self) {
        self.obstacles.clear();
    }

    /// Sphere cast against the ground plane.
    ///
    /// The swept sphere contacts the plane when its center reaches
    /// `height + radius`, approaching from above. A sphere that already
    /// touches the plane at its start position is ignored, matching the
    /// obstacle casts.
    fn ground_probe(
        &self,
        origin: Vec3,
        dir: Vec3,
        radius: f32,
        max_dist: f32,
        mask: LayerMask,
    ) -> Option<ProbeHit> {
        let (height, layer) = self.ground?;
        if !layer.intersects(mask) {
            return None;
        }

        let contact_y = height + radius;
        if origin.y <= contact_y {
            // Initial overlap, not an obstruction along the sweep
            return None;
        }
        if dir.y >= -1e-6 {
            return None;
        }

        let t = (contact_y - origin.y) / dir.y;
        if t > max_dist {
            return None;
        }

        let center = origin + dir * t;
        let point = Vec3::new(center.x, height, center.z);
        Some(ProbeHit::new(point, Vec3::Y, t))
    }
}

impl SpatialQuery for StaticWorld {
    fn cast_probe(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_dist: f32,
        mask: LayerMask,
    ) -> Option<ProbeHit> {
        let mut closest: Option<ProbeHit> = None;
        let mut closest_dist = max_dist;

        for obstacle in &self.obstacles {
            if !obstacle.layer.intersects(mask) {
                continue;
            }

            // Minkowski expansion: sphere-vs-box becomes ray-vs-expanded-box
            let expanded_min = obstacle.min - Vec3::splat(radius);
            let expanded_max = obstacle.max + Vec3::splat(radius);

            // A sphere already overlapping the box at the start of the
            // sweep does not obstruct it (a cast from a grounded target
            // must not hit the ground the target stands on)
            if origin.cmpge(expanded_min).all() && origin.cmple(expanded_max).all() {
                continue;
            }

            if let Some(t) = ray_box_intersect(origin, direction, expanded_min, expanded_max) {
                if t <= closest_dist {
                    let point = origin + direction * t;
                    let normal = obstacle.surface_normal(point);
                    closest = Some(ProbeHit::new(point, normal, t));
                    closest_dist = t;
                }
            }
        }

        if let Some(hit) = self.ground_probe(origin, direction, radius, max_dist, mask) {
            if hit.distance <= closest_dist {
                closest = Some(hit);
            }
        }

        closest
    }

    fn cast_down(&self, origin: Vec3, max_dist: f32, mask: LayerMask) -> Option<ProbeHit> {
        let mut closest: Option<ProbeHit> = None;
        let mut closest_dist = max_dist;

        for obstacle in &self.obstacles {
            if !obstacle.layer.intersects(mask) {
                continue;
            }
            if let Some(t) = ray_box_intersect(origin, Vec3::NEG_Y, obstacle.min, obstacle.max) {
                if t <= closest_dist {
                    let point = origin + Vec3::NEG_Y * t;
                    closest = Some(ProbeHit::new(point, obstacle.surface_normal(point), t));
                    closest_dist = t;
                }
            }
        }

        if let Some((height, layer)) = self.ground {
            if layer.intersects(mask) {
                let t = origin.y - height;
                if t >= 0.0 && t <= closest_dist {
                    let point = Vec3::new(origin.x, height, origin.z);
                    closest = Some(ProbeHit::new(point, Vec3::Y, t));
                }
            }
        }

        closest
    }
}
