//! Game-side modules
//!
//! Match-level data holders that sit above the engine: the countdown timer
//! and the modular tank stat tables.

pub mod stats;
pub mod timer;

pub use stats::{GunStat, HullStat, StatDatabase, StatDbError, TurretStat};
pub use timer::{MatchTimer, TimerEvent, TimerPhase};
