//! Physical properties and the plain result values derived from them

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Quantum statistics obeyed by a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistics {
    /// Integer spin, Bose-Einstein statistics
    Boson,
    /// Half-integer spin, Fermi-Dirac statistics
    Fermion,
}

impl Statistics {
    /// Statistics implied by a spin value
    pub fn from_spin(spin: f64) -> Self {
        if spin.fract() == 0.0 {
            Statistics::Boson
        } else {
            Statistics::Fermion
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Statistics::Boson => "boson",
            Statistics::Fermion => "fermion",
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Charge (e), rest mass (MeV) and spin of a particle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Properties {
    pub charge: f64,
    pub mass: f64,
    pub spin: f64,
}

impl Properties {
    pub fn new(charge: f64, mass: f64, spin: f64) -> Self {
        Self { charge, mass, spin }
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_spin(self.spin)
    }

    /// True if spin is a non-negative multiple of 1/2
    pub fn has_physical_spin(&self) -> bool {
        self.spin >= 0.0 && (self.spin * 2.0).fract() == 0.0
    }
}

impl Add for Properties {
    type Output = Properties;

    fn add(self, rhs: Properties) -> Properties {
        Properties {
            charge: self.charge + rhs.charge,
            mass: self.mass + rhs.mass,
            spin: self.spin + rhs.spin,
        }
    }
}

impl Sum for Properties {
    fn sum<I: Iterator<Item = Properties>>(iter: I) -> Properties {
        iter.fold(Properties::default(), Add::add)
    }
}

/// Property-by-property equality of two particles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub same_charge: bool,
    pub same_mass: bool,
    pub same_spin: bool,
}

impl Comparison {
    pub fn between(a: &Properties, b: &Properties) -> Self {
        Self {
            same_charge: a.charge == b.charge,
            same_mass: a.mass == b.mass,
            same_spin: a.spin == b.spin,
        }
    }

    /// All three properties match
    pub fn identical(&self) -> bool {
        self.same_charge && self.same_mass && self.same_spin
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The two particles have the same charge: {}", self.same_charge)?;
        writeln!(f, "The two particles have the same mass: {}", self.same_mass)?;
        write!(f, "The two particles have the same spin: {}", self.same_spin)
    }
}

/// Human-readable summary of a particle
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub name: Option<String>,
    pub properties: Properties,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "{name}:")?;
        }
        writeln!(f, "The particle has a mass of {} MeV", self.properties.mass)?;
        writeln!(f, "The particle's charge is {} e", self.properties.charge)?;
        write!(f, "The particle's spin is {}", self.properties.spin)
    }
}
