//! Standard Model toy particles
//!
//! Builds a handful of elementary and composite particles, reports on them
//! and walks them around the grid.

use std::env::VarError;

use anyhow::Context;
use particle_physics::catalog::{down_quark, electron, neutron, photon, positron, proton, up_quark};
use particle_physics::Particle;
use particle_simulation::{RandomWalk, WalkParams};

const WALK_STEPS: u32 = 10;
const SEED_VAR: &str = "PARTICLES_SEED";

fn walk_params() -> anyhow::Result<WalkParams> {
    let params = WalkParams::default().with_steps(WALK_STEPS);
    Ok(match parse_seed(std::env::var(SEED_VAR))? {
        Some(seed) => params.with_seed(seed),
        None => params,
    })
}

/// Seed from the value of `PARTICLES_SEED`, `None` when unset
fn parse_seed(var: Result<String, VarError>) -> anyhow::Result<Option<u64>> {
    match var {
        Ok(seed) => seed
            .parse()
            .map(Some)
            .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {seed:?}")),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("{SEED_VAR} is not valid unicode")),
    }
}

fn log_lines(text: &str) {
    for line in text.lines() {
        log::info!("  {}", line);
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Building particles...");
    let electron = electron();
    let positron = positron();
    let electron2 = Particle::fermion("electron2", -1.0, 0.511, 0.5);
    let photon = photon();
    let proton = proton();

    for particle in [&electron, &positron, &photon, &proton] {
        log_lines(&particle.report().to_string());
    }

    log::info!("electron vs positron:");
    log_lines(&electron.compare(&positron).to_string());
    log::info!(
        "positron is the electron's antiparticle: {}",
        electron.is_antiparticle(&positron)
    );
    log::info!(
        "electron2 is the electron's antiparticle: {}",
        electron.is_antiparticle(&electron2)
    );

    if let Err(err) = electron.try_compare(&"positron") {
        log::info!("Comparing with a name instead of a particle: {}", err);
    }

    let impostor = Particle::boson("impostor", 0.0, 1.0, 0.5);
    for particle in [&electron, &photon, &proton, &impostor] {
        match particle.check_existence() {
            Ok(statistics) => log::info!(
                "{} can exist as a {}",
                particle.name().unwrap_or("particle"),
                statistics
            ),
            Err(err) => log::warn!("{}", err),
        }
    }

    let params = walk_params()?;
    let mut walk = RandomWalk::new(
        vec![electron, positron, up_quark(), down_quark(), neutron()],
        params,
    );
    walk.place_all();
    let trajectory = walk.run()?;

    for (particle, position) in walk.particles().iter().zip(trajectory.final_positions()) {
        log::info!(
            "{} ({}) ended at {}",
            particle.name().unwrap_or("particle"),
            particle.classify(),
            position
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn test_unset_seed() {
        assert_eq!(parse_seed(Err(VarError::NotPresent)).unwrap(), None);
    }

    #[test]
    fn test_numeric_seed() {
        assert_eq!(parse_seed(Ok("42".to_string())).unwrap(), Some(42));
    }

    #[test]
    fn test_malformed_seed_is_reported() {
        let err = parse_seed(Ok("forty-two".to_string())).unwrap_err();
        assert!(err.to_string().contains("must be an unsigned integer"));

        let err = parse_seed(Err(VarError::NotUnicode(OsString::from("seed")))).unwrap_err();
        assert!(err.to_string().contains("not valid unicode"));
    }
}
