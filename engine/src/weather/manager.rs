//! Wind service
//!
//! Owns the global wind state: a direction and a base speed with sinusoidal
//! gust variation. Consumers (foliage sway, particles) are handed a
//! reference by their owner rather than reaching for a global instance.

use glam::Vec3;

/// Global wind direction and speed with gust variation.
#[derive(Debug, Clone)]
pub struct WeatherManager {
    /// Wind direction; normalized on read
    pub wind_direction: Vec3,
    /// Base wind speed (0-10 range in practice)
    pub wind_speed: f32,
    /// Amplitude of the gust variation added to the base speed
    pub wind_variation: f32,
    /// Rate of the gust variation in radians per second
    pub variation_speed: f32,
    /// Accumulated time driving the gust oscillation
    elapsed: f32,
}

impl Default for WeatherManager {
    fn default() -> Self {
        Self {
            wind_direction: Vec3::X,
            wind_speed: 1.0,
            wind_variation: 0.3,
            variation_speed: 0.5,
            elapsed: 0.0,
        }
    }
}

impl WeatherManager {
    /// Creates a weather service with the default gentle easterly wind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the gust oscillation.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Time accumulated by [`WeatherManager::tick`], the phase source for
    /// sway animation.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Normalized wind direction. Falls back to +X if the configured
    /// direction is zero.
    pub fn wind_direction(&self) -> Vec3 {
        let dir = self.wind_direction.normalize_or_zero();
        if dir == Vec3::ZERO { Vec3::X } else { dir }
    }

    /// Current wind speed: base speed plus the gust oscillation, never
    /// negative.
    pub fn wind_speed(&self) -> f32 {
        let variation = (self.elapsed * self.variation_speed).sin() * self.wind_variation;
        (self.wind_speed + variation).max(0.0)
    }

    /// Wind strength at a world position.
    ///
    /// The field is currently uniform; the position parameter is the hook
    /// for localized wind zones.
    pub fn wind_strength_at(&self, _position: Vec3) -> f32 {
        self.wind_speed()
    }
}
