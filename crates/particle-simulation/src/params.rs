//! Random walk parameters

use glam::IVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkParams {
    /// Number of steps taken by `RandomWalk::run`
    pub steps: u32,
    /// Fixed seed for reproducible walks, entropy when `None`
    pub seed: Option<u64>,
    /// Where `RandomWalk::place_all` puts every particle
    pub origin: IVec2,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            steps: 100,
            seed: None,
            origin: IVec2::ZERO,
        }
    }
}

impl WalkParams {
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_origin(mut self, origin: impl Into<IVec2>) -> Self {
        self.origin = origin.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = WalkParams::default();
        assert_eq!(params.steps, 100);
        assert_eq!(params.seed, None);
        assert_eq!(params.origin, IVec2::ZERO);
    }

    #[test]
    fn test_builder() {
        let params = WalkParams::default()
            .with_steps(5)
            .with_seed(7)
            .with_origin((2, -3));

        assert_eq!(params.steps, 5);
        assert_eq!(params.seed, Some(7));
        assert_eq!(params.origin, IVec2::new(2, -3));
    }
}
