//! # Particle Physics Model
//!
//! A small object model of elementary particles: bosons, fermions and
//! composite particles built out of them. Particles can be classified,
//! compared, checked for physical consistency and walked around a 2D grid.

pub mod catalog;
pub mod constants;
pub mod error;
pub mod particle;
pub mod properties;
pub mod step;

pub use error::{ParticleError, Result};
pub use particle::*;
pub use properties::*;
pub use step::StepSource;
