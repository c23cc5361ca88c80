//! # Particle Random Walk
//!
//! Places a population of particles on the integer grid and pushes each of
//! them around by random unit steps.

pub mod params;
pub mod simulation;

pub use params::*;
pub use simulation::*;
