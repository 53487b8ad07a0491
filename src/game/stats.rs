//! Modular tank stat tables
//!
//! Hulls, turrets and guns are data-driven: stat records are loaded from a
//! JSON database and combined by name. Only data lives here - combat math
//! belongs to the systems consuming the stats.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

/// Hull stat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HullStat {
    pub name: String,
    pub hit_points: f32,
    pub power: f32,
    pub mass: f32,
    pub max_speed: f32,
    pub turn_speed: f32,
    /// Mud traversal factor, 0-100 percent
    pub mud_traversal: f32,
}

/// Turret stat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurretStat {
    pub name: String,
    pub hit_points: f32,
    pub mass: f32,
    /// Traverse rate in degrees per second
    pub rotation_speed: f32,
    /// Gun elevation rate in degrees per second
    pub elevation_speed: f32,
    /// View range in meters
    pub view_range: f32,
    /// Reload multiplier: 1.0 stock, above 1.0 slower, below 1.0 faster
    #[serde(default = "default_reload_multiplier")]
    pub reload_multiplier: f32,
}

fn default_reload_multiplier() -> f32 {
    1.0
}

/// Gun stat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GunStat {
    pub name: String,
    /// Caliber in millimeters
    pub caliber: f32,
    pub damage: f32,
    /// Base reload time in seconds
    pub reload: f32,
}

/// Errors that can occur while loading a stat database.
#[derive(Debug)]
pub enum StatDbError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for StatDbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatDbError::IoError(e) => write!(f, "IO error: {e}"),
            StatDbError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for StatDbError {}

impl From<std::io::Error> for StatDbError {
    fn from(e: std::io::Error) -> Self {
        StatDbError::IoError(e)
    }
}

impl From<serde_json::Error> for StatDbError {
    fn from(e: serde_json::Error) -> Self {
        StatDbError::JsonError(e)
    }
}

/// All stat tables for the modular tank parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatDatabase {
    #[serde(default)]
    pub hulls: Vec<HullStat>,
    #[serde(default)]
    pub turrets: Vec<TurretStat>,
    #[serde(default)]
    pub guns: Vec<GunStat>,
}

impl StatDatabase {
    /// Parses a database from JSON text.
    pub fn from_json(json: &str) -> Result<Self, StatDbError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a database from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, StatDbError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Looks up a hull by name.
    pub fn hull(&self, name: &str) -> Option<&HullStat> {
        self.hulls.iter().find(|h| h.name == name)
    }

    /// Looks up a turret by name.
    pub fn turret(&self, name: &str) -> Option<&TurretStat> {
        self.turrets.iter().find(|t| t.name == name)
    }

    /// Looks up a gun by name.
    pub fn gun(&self, name: &str) -> Option<&GunStat> {
        self.guns.iter().find(|g| g.name == name)
    }

    /// Logs the full roster, mirroring the part databases' startup dump.
    pub fn log_roster(&self) {
        for hull in &self.hulls {
            info!(
                "hull {}: hp={} power={} mass={} max_speed={} turn_speed={} mud={}%",
                hull.name,
                hull.hit_points,
                hull.power,
                hull.mass,
                hull.max_speed,
                hull.turn_speed,
                hull.mud_traversal
            );
        }
        for turret in &self.turrets {
            info!(
                "turret {}: hp={} mass={} traverse={} deg/s elevation={} deg/s view={} m reload x{}",
                turret.name,
                turret.hit_points,
                turret.mass,
                turret.rotation_speed,
                turret.elevation_speed,
                turret.view_range,
                turret.reload_multiplier
            );
        }
        for gun in &self.guns {
            info!(
                "gun {}: caliber={} mm damage={} reload={} s",
                gun.name, gun.caliber, gun.damage, gun.reload
            );
        }
    }
}
