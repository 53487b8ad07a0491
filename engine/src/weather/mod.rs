//! Weather Module
//!
//! Global wind state and the foliage sway animation driven by it.

pub mod manager;
pub mod sway;

pub use manager::WeatherManager;
pub use sway::WindSway;
