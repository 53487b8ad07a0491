//! Foliage wind sway
//!
//! Displaces mesh vertices to make bushes and trees sway with the wind.
//! Vertices near the base stay anchored; displacement scales with height
//! above `bottom_y`. Three phase-shifted sinusoids drive Y bobbing plus
//! wind-directional X/Z lean.
//!
//! The wind direction must be supplied in the mesh's local space - the
//! owner transforms the world wind direction by the inverse of the mesh's
//! orientation before calling [`WindSway::apply`].

use glam::Vec3;

/// Per-mesh sway animator. Owns the undeformed base vertices and a scratch
/// buffer for the displaced ones.
#[derive(Debug, Clone)]
pub struct WindSway {
    base_vertices: Vec<Vec3>,
    vertices: Vec<Vec3>,
    /// Peak displacement in meters at full height and unit wind
    pub sway_amount: f32,
    /// Spatial frequency of the sway phase across the mesh
    pub sway_frequency: f32,
    /// Height below which vertices stay anchored
    pub bottom_y: f32,
    /// Scales how fast the sway phase advances with wind speed
    pub wind_sensitivity: f32,
    /// How strongly the wind direction leans the mesh (0 = pure bobbing)
    pub direction_influence: f32,
    /// Highest base vertex, cached for the height factor
    max_y: f32,
}

impl WindSway {
    /// Creates a sway animator for a mesh's vertices.
    pub fn new(base_vertices: Vec<Vec3>) -> Self {
        let max_y = base_vertices
            .iter()
            .map(|v| v.y)
            .fold(f32::MIN, f32::max);

        Self {
            vertices: base_vertices.clone(),
            base_vertices,
            sway_amount: 0.1,
            sway_frequency: 1.0,
            bottom_y: 0.0,
            wind_sensitivity: 1.0,
            direction_influence: 0.5,
            max_y,
        }
    }

    /// The undeformed vertices.
    pub fn base_vertices(&self) -> &[Vec3] {
        &self.base_vertices
    }

    /// Displaces the mesh for the given wind sample and returns the
    /// deformed vertices.
    ///
    /// `local_wind_dir` is the wind direction in mesh-local space,
    /// `wind_speed` the sampled strength at the mesh position, and `time`
    /// the animation phase source (typically
    /// [`crate::weather::WeatherManager::elapsed`]).
    pub fn apply(&mut self, local_wind_dir: Vec3, wind_speed: f32, time: f32) -> &[Vec3] {
        let phase_speed = wind_speed * self.wind_sensitivity;
        let span = self.max_y - self.bottom_y;

        for (out, &base) in self.vertices.iter_mut().zip(&self.base_vertices) {
            let mut vertex = base;

            if vertex.y > self.bottom_y && span > 1e-6 {
                let height_factor = ((vertex.y - self.bottom_y) / span).clamp(0.0, 1.0);
                let scale = self.sway_amount * height_factor * wind_speed;

                // Main vertical bobbing
                vertex.y += (time * phase_speed + base.x * self.sway_frequency).sin() * scale;
                // Directional lean, phase-shifted per axis so the motion
                // does not look synchronized
                vertex.x += (time * phase_speed * 0.7 + base.z * self.sway_frequency).sin()
                    * scale
                    * local_wind_dir.x
                    * self.direction_influence;
                vertex.z += (time * phase_speed * 0.8 + base.x * self.sway_frequency).sin()
                    * scale
                    * local_wind_dir.z
                    * self.direction_influence;
            }

            *out = vertex;
        }

        &self.vertices
    }
}
