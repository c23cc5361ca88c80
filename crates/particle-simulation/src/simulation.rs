//! Random walk over a population of particles

use crate::WalkParams;
use glam::IVec2;
use particle_physics::{Particle, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Positions visited by each particle, starting position first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    pub paths: Vec<Vec<IVec2>>,
}

impl Trajectory {
    /// Positions visited by the particle at `index`
    pub fn path(&self, index: usize) -> Option<&[IVec2]> {
        self.paths.get(index).map(Vec::as_slice)
    }

    /// Last known position of each particle
    pub fn final_positions(&self) -> Vec<IVec2> {
        self.paths.iter().filter_map(|path| path.last().copied()).collect()
    }
}

/// Random walk driver owning its particles and random source
pub struct RandomWalk {
    particles: Vec<Particle>,
    params: WalkParams,
    rng: StdRng,
    step_count: u32,
}

impl RandomWalk {
    /// Seed the walk from `params.seed`, or from entropy when unset
    pub fn new(particles: Vec<Particle>, params: WalkParams) -> Self {
        log::info!("Initializing RandomWalk with {} particles...", particles.len());

        for particle in &particles {
            if !particle.properties().has_physical_spin() {
                log::warn!(
                    "{} has unphysical spin {}",
                    particle.name().unwrap_or("particle"),
                    particle.spin()
                );
            }
        }

        let rng = match params.seed {
            Some(seed) => {
                log::debug!("Seeding walk with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Self {
            particles,
            params,
            rng,
            step_count: 0,
        }
    }

    /// Get particles
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Get walk parameters
    pub fn params(&self) -> &WalkParams {
        &self.params
    }

    /// Steps taken so far
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Put every particle at the configured origin
    pub fn place_all(&mut self) {
        let origin = self.params.origin;
        for particle in &mut self.particles {
            particle.place_at(origin);
        }
        log::info!("Placed {} particles at {}", self.particles.len(), origin);
    }

    /// Move every particle by one random step
    pub fn step(&mut self) -> Result<()> {
        for particle in &mut self.particles {
            particle.move_randomly(&mut self.rng)?;
        }
        self.step_count += 1;
        Ok(())
    }

    /// Take `params.steps` steps and record where every particle went
    pub fn run(&mut self) -> Result<Trajectory> {
        let mut trajectory = Trajectory {
            paths: self
                .particles
                .iter()
                .map(|particle| particle.position().into_iter().collect())
                .collect(),
        };

        for _ in 0..self.params.steps {
            self.step()?;
            for (path, particle) in trajectory.paths.iter_mut().zip(&self.particles) {
                path.extend(particle.position());
            }
        }

        log::info!("Walk finished after {} steps", self.step_count);
        for particle in &self.particles {
            if let Some(position) = particle.position() {
                log::debug!(
                    "  {} ended at {}",
                    particle.name().unwrap_or("particle"),
                    position
                );
            }
        }

        Ok(trajectory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use particle_physics::catalog::{electron, photon, proton};
    use particle_physics::ParticleError;

    fn walk(seed: u64, steps: u32) -> RandomWalk {
        let params = WalkParams::default()
            .with_seed(seed)
            .with_steps(steps)
            .with_origin((10, 10));
        RandomWalk::new(vec![electron(), photon(), proton()], params)
    }

    #[test]
    fn test_step_before_place_fails() {
        let mut walk = walk(1, 3);
        assert!(matches!(
            walk.step(),
            Err(ParticleError::UninitializedPosition { .. })
        ));
        assert_eq!(walk.step_count(), 0);
    }

    #[test]
    fn test_place_all_uses_origin() {
        let mut walk = walk(1, 3);
        walk.place_all();
        for particle in walk.particles() {
            assert_eq!(particle.position(), Some(IVec2::new(10, 10)));
        }
    }

    #[test]
    fn test_run_records_every_step() {
        let mut walk = walk(3, 20);
        walk.place_all();
        let trajectory = walk.run().unwrap();

        assert_eq!(walk.step_count(), 20);
        assert_eq!(trajectory.paths.len(), 3);
        for path in &trajectory.paths {
            assert_eq!(path.len(), 21);
            assert_eq!(path[0], IVec2::new(10, 10));
            for pair in path.windows(2) {
                let delta = pair[1] - pair[0];
                assert!(delta.x.abs() <= 1 && delta.y.abs() <= 1);
            }
        }
    }

    #[test]
    fn test_seeded_walks_are_reproducible() {
        let mut a = walk(42, 50);
        let mut b = walk(42, 50);
        a.place_all();
        b.place_all();

        assert_eq!(a.run().unwrap(), b.run().unwrap());
    }

    #[test]
    fn test_final_positions_match_particles() {
        let mut walk = walk(9, 10);
        walk.place_all();
        let trajectory = walk.run().unwrap();

        let positions: Vec<IVec2> = walk.particles().iter().filter_map(Particle::position).collect();
        assert_eq!(trajectory.final_positions(), positions);
        assert_eq!(trajectory.path(3), None);
    }
}
