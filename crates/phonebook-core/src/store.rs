use crate::error::{Result, StoreError};
use crate::person::{NewPerson, Person};
use async_trait::async_trait;

/// A read-only view of a person store.
///
/// Ids are passed as the raw path segment the client sent. Each backend
/// decides how to interpret one that is not well formed: the in-memory store
/// treats it as matching nothing, the persistent store rejects it with
/// [`StoreError::MalformedId`].
#[async_trait]
pub trait ReadStore: Send + Sync + 'static {
    /// Returns every record in insertion order.
    async fn list(&self) -> Result<Vec<Person>>;

    /// Returns the number of stored records.
    async fn count(&self) -> Result<usize>;

    /// Retrieves a record by id.
    /// Returns `None` if no record has that id.
    async fn get(&self, id: &str) -> Result<Option<Person>>;
}

#[async_trait]
pub trait PersonStore: ReadStore {
    /// Stores a new record and returns it with its assigned id.
    async fn create(&self, person: NewPerson) -> Result<Person>;

    /// Removes the record with the given id.
    /// Removing an id that does not exist is not an error.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Whether [`PersonStore::update`] is available on this backend.
    fn supports_update(&self) -> bool {
        false
    }

    /// Replaces name and number of an existing record and returns the
    /// updated record, or `None` if no record has that id.
    async fn update(&self, _id: &str, _person: NewPerson) -> Result<Option<Person>> {
        Err(StoreError::Unsupported("update"))
    }
}
