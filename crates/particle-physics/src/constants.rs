//! Physical constants for the particle catalog
//!
//! Masses are rest masses in MeV, charges are in units of the elementary
//! charge e.

/// Elementary charge
pub const E_CHARGE: f64 = 1.0;

/// Electron mass
/// ~0.511 MeV
pub const ELECTRON_MASS: f64 = 0.511;

/// Up quark mass (current-quark mass, ~2.2 MeV)
pub const QUARK_UP_MASS: f64 = 2.2;

/// Down quark mass (current-quark mass, ~4.7 MeV)
pub const QUARK_DOWN_MASS: f64 = 4.7;

/// Up quark charge, +2/3 e
pub const QUARK_UP_CHARGE: f64 = 2.0 / 3.0;

/// Down quark charge, -1/3 e
pub const QUARK_DOWN_CHARGE: f64 = -1.0 / 3.0;

/// Photon mass (massless gauge boson)
pub const PHOTON_MASS: f64 = 0.0;

/// Spin of leptons and quarks
pub const SPIN_HALF: f64 = 0.5;

/// Spin of gauge bosons
pub const SPIN_ONE: f64 = 1.0;
