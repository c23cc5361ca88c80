//! Particle types and the operations shared by all of them

use std::any::{type_name, Any};

use glam::IVec2;

use crate::error::{ParticleError, Result};
use crate::properties::{Comparison, Properties, Report, Statistics};
use crate::step::StepSource;

/// What kind of particle this is, with the data specific to that kind
#[derive(Debug, Clone, PartialEq)]
pub enum ParticleKind {
    /// Unnamed particle without declared statistics
    Generic { properties: Properties },
    /// Declared to obey Bose-Einstein statistics
    Boson { name: String, properties: Properties },
    /// Declared to obey Fermi-Dirac statistics
    Fermion { name: String, properties: Properties },
    /// Bound state whose properties are the sums of its constituents'
    Composite {
        name: String,
        constituents: Vec<Particle>,
    },
}

impl ParticleKind {
    /// Statistics the particle was declared with, if any
    pub fn declared_statistics(&self) -> Option<Statistics> {
        match self {
            ParticleKind::Boson { .. } => Some(Statistics::Boson),
            ParticleKind::Fermion { .. } => Some(Statistics::Fermion),
            ParticleKind::Generic { .. } | ParticleKind::Composite { .. } => None,
        }
    }
}

/// A particle with an optional position on the integer grid
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    kind: ParticleKind,
    position: Option<IVec2>,
}

impl Particle {
    /// Create a generic particle
    pub fn new(charge: f64, mass: f64, spin: f64) -> Self {
        Self::from_kind(ParticleKind::Generic {
            properties: Properties::new(charge, mass, spin),
        })
    }

    /// Create a particle declared as a boson
    pub fn boson(name: impl Into<String>, charge: f64, mass: f64, spin: f64) -> Self {
        Self::from_kind(ParticleKind::Boson {
            name: name.into(),
            properties: Properties::new(charge, mass, spin),
        })
    }

    /// Create a particle declared as a fermion
    pub fn fermion(name: impl Into<String>, charge: f64, mass: f64, spin: f64) -> Self {
        Self::from_kind(ParticleKind::Fermion {
            name: name.into(),
            properties: Properties::new(charge, mass, spin),
        })
    }

    /// Create a composite particle out of its constituents, in order
    pub fn composite(
        name: impl Into<String>,
        constituents: impl IntoIterator<Item = Particle>,
    ) -> Self {
        Self::from_kind(ParticleKind::Composite {
            name: name.into(),
            constituents: constituents.into_iter().collect(),
        })
    }

    /// Wrap an already built kind, unplaced
    pub fn from_kind(kind: ParticleKind) -> Self {
        Self {
            kind,
            position: None,
        }
    }

    /// Get particle kind
    pub fn kind(&self) -> &ParticleKind {
        &self.kind
    }

    /// Name, `None` for generic particles
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            ParticleKind::Generic { .. } => None,
            ParticleKind::Boson { name, .. }
            | ParticleKind::Fermion { name, .. }
            | ParticleKind::Composite { name, .. } => Some(name),
        }
    }

    fn label(&self) -> String {
        self.name().unwrap_or("particle").to_string()
    }

    /// Charge, mass and spin. Composite properties are summed on every call.
    pub fn properties(&self) -> Properties {
        match &self.kind {
            ParticleKind::Generic { properties }
            | ParticleKind::Boson { properties, .. }
            | ParticleKind::Fermion { properties, .. } => *properties,
            ParticleKind::Composite { constituents, .. } => {
                constituents.iter().map(Particle::properties).sum()
            }
        }
    }

    /// Electric charge in units of e
    pub fn charge(&self) -> f64 {
        self.properties().charge
    }

    /// Rest mass in MeV
    pub fn mass(&self) -> f64 {
        self.properties().mass
    }

    /// Get spin
    pub fn spin(&self) -> f64 {
        self.properties().spin
    }

    /// Constituents of a composite particle, empty for anything else
    pub fn constituents(&self) -> &[Particle] {
        match &self.kind {
            ParticleKind::Composite { constituents, .. } => constituents,
            _ => &[],
        }
    }

    /// Mutable constituents, `None` unless composite
    pub fn constituents_mut(&mut self) -> Option<&mut Vec<Particle>> {
        match &mut self.kind {
            ParticleKind::Composite { constituents, .. } => Some(constituents),
            _ => None,
        }
    }

    /// Declared as a boson
    pub fn is_boson(&self) -> bool {
        matches!(self.kind, ParticleKind::Boson { .. })
    }

    /// Declared as a fermion
    pub fn is_fermion(&self) -> bool {
        matches!(self.kind, ParticleKind::Fermion { .. })
    }

    /// Summary of mass, charge and spin
    pub fn report(&self) -> Report {
        Report {
            name: self.name().map(str::to_string),
            properties: self.properties(),
        }
    }

    /// Grid position, `None` until placed
    pub fn position(&self) -> Option<IVec2> {
        self.position
    }

    /// Place the particle at `coord`. No bounds checking.
    pub fn place_at(&mut self, coord: impl Into<IVec2>) {
        self.position = Some(coord.into());
    }

    /// Push the particle by one random step in {-1, 0, 1} along each axis
    pub fn move_randomly<S: StepSource + ?Sized>(&mut self, steps: &mut S) -> Result<IVec2> {
        let position = self
            .position
            .ok_or_else(|| ParticleError::UninitializedPosition { name: self.label() })?;

        let dx = steps.next_step();
        let dy = steps.next_step();
        let moved = match (position.x.checked_add(dx), position.y.checked_add(dy)) {
            (Some(x), Some(y)) => IVec2::new(x, y),
            _ => return Err(ParticleError::PositionOverflow { name: self.label() }),
        };
        self.position = Some(moved);
        Ok(moved)
    }

    /// Boson if the spin is a whole number, fermion otherwise
    pub fn classify(&self) -> Statistics {
        self.properties().statistics()
    }

    /// Compare charge, mass and spin with another particle
    pub fn compare(&self, other: &Particle) -> Comparison {
        Comparison::between(&self.properties(), &other.properties())
    }

    /// Like [`Particle::compare`], for values whose type is only known at runtime
    pub fn try_compare<T: Any>(&self, other: &T) -> Result<Comparison> {
        let other: &dyn Any = other;
        other
            .downcast_ref::<Particle>()
            .map(|particle| self.compare(particle))
            .ok_or(ParticleError::TypeMismatch {
                found: type_name::<T>(),
            })
    }

    /// Check that the spin agrees with the declared statistics.
    ///
    /// Particles without declared statistics (generic and composite ones)
    /// always exist with the statistics their spin implies.
    pub fn check_existence(&self) -> Result<Statistics> {
        let actual = self.classify();
        match self.kind.declared_statistics() {
            Some(declared) if declared != actual => Err(ParticleError::InvalidStatistics {
                name: self.label(),
                declared,
                spin: self.spin(),
            }),
            _ => Ok(actual),
        }
    }

    /// True if both are fermions with opposite charge
    pub fn is_antiparticle(&self, other: &Particle) -> bool {
        self.is_fermion() && other.is_fermion() && self.charge() == -other.charge()
    }
}
