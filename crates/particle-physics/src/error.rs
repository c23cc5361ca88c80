use thiserror::Error;

use crate::properties::Statistics;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParticleError {
    #[error("Not a particle: {found}")]
    TypeMismatch { found: &'static str },

    #[error("This particle cannot exist: {name} is declared a {declared} but has spin {spin}")]
    InvalidStatistics {
        name: String,
        declared: Statistics,
        spin: f64,
    },

    #[error("Particle {name} has not been placed on the grid")]
    UninitializedPosition { name: String },

    #[error("Particle {name} would step off the edge of the grid")]
    PositionOverflow { name: String },
}

pub type Result<T> = std::result::Result<T, ParticleError>;
