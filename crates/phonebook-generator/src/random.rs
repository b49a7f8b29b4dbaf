use crate::Generator;
use phonebook_core::PersonId;
use rand::Rng;

pub const DEFAULT_UPPER_BOUND: u64 = 100_000;

/// Draws ids uniformly from `0..upper_bound`.
///
/// Collisions with ids already in use are not checked.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    upper_bound: u64,
}

impl RandomGenerator {
    pub fn new() -> Self {
        Self::with_upper_bound(DEFAULT_UPPER_BOUND)
    }

    /// An upper bound of zero is treated as one.
    pub fn with_upper_bound(upper_bound: u64) -> Self {
        Self {
            upper_bound: upper_bound.max(1),
        }
    }

    pub fn upper_bound(&self) -> u64 {
        self.upper_bound
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RandomGenerator {
    type Output = PersonId;

    fn generate(&self) -> Self::Output {
        PersonId::new(rand::thread_rng().gen_range(0..self.upper_bound))
    }
}
