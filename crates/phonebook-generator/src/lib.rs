pub mod random;
pub mod seq;

pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use phonebook_core::PersonId;

/// Trait for generating ids for the in-memory store.
///
/// Implementations are pure generators that don't interact with storage,
/// so whether a generated id is unique is up to the implementation.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<PersonId>;

    fn generate(&self) -> Self::Output;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    type Output = G::Output;

    fn generate(&self) -> Self::Output {
        (**self).generate()
    }
}
