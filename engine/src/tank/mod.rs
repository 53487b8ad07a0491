//! Tank Module
//!
//! Drivable tank hull the camera rig tracks. Axis-driven; no input device
//! handling here.

pub mod controller;

pub use controller::TankController;
