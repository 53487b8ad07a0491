//! Physics module
//!
//! Read-only collision queries for the camera rig and the tank controller.
//! Built from scratch without external physics library dependencies (no
//! Rapier): ray/box slab tests and Minkowski-expanded sphere casts are all
//! this crate needs.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! # Submodules
//!
//! - [`query`] - `SpatialQuery` trait, `ProbeHit`, collision `LayerMask`
//! - [`world`] - `StaticWorld`, a layered-AABB implementation of the trait

pub mod query;
pub mod world;

pub use query::{LayerMask, ProbeHit, SpatialQuery};
pub use world::{Obstacle, StaticWorld, ray_box_intersect};
