//! Sources of random-walk steps

use rand::Rng;

/// Produces grid steps in {-1, 0, 1}
pub trait StepSource {
    fn next_step(&mut self) -> i32;
}

impl<R: Rng> StepSource for R {
    fn next_step(&mut self) -> i32 {
        self.random_range(-1..=1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_steps_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 3];

        for _ in 0..1000 {
            let step = rng.next_step();
            assert!((-1..=1).contains(&step));
            seen[(step + 1) as usize] = true;
        }

        assert_eq!(seen, [true; 3]);
    }
}
