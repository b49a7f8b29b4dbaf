use crate::Generator;
use phonebook_core::PersonId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out monotonically increasing ids.
///
/// Unique within a single instance. Counting restarts on every process start,
/// so it only suits a store that is also rebuilt on start.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
}

impl SeqGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first id is `first`.
    ///
    /// Useful when the store is seeded with records that already use the
    /// lower ids.
    pub fn starting_at(first: u64) -> Self {
        Self {
            counter: AtomicU64::new(first),
        }
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for SeqGenerator {
    type Output = PersonId;

    fn generate(&self) -> Self::Output {
        PersonId::new(self.counter.fetch_add(1, Ordering::SeqCst))
    }
}
