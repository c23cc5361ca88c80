//! Well-known particles

use crate::constants::*;
use crate::particle::Particle;

/// Create an electron
pub fn electron() -> Particle {
    Particle::fermion("electron", -E_CHARGE, ELECTRON_MASS, SPIN_HALF)
}

/// Create a positron, the electron's antiparticle
pub fn positron() -> Particle {
    Particle::fermion("positron", E_CHARGE, ELECTRON_MASS, SPIN_HALF)
}

/// Create a new up quark
pub fn up_quark() -> Particle {
    Particle::fermion("up", QUARK_UP_CHARGE, QUARK_UP_MASS, SPIN_HALF)
}

/// Create a new down quark
pub fn down_quark() -> Particle {
    Particle::fermion("down", QUARK_DOWN_CHARGE, QUARK_DOWN_MASS, SPIN_HALF)
}

pub fn photon() -> Particle {
    Particle::boson("photon", 0.0, PHOTON_MASS, SPIN_ONE)
}

/// Proton as a uud bound state
pub fn proton() -> Particle {
    Particle::composite("proton", [up_quark(), up_quark(), down_quark()])
}

/// Neutron as a udd bound state
pub fn neutron() -> Particle {
    Particle::composite("neutron", [up_quark(), down_quark(), down_quark()])
}
