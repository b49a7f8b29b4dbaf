//! Core types and traits for the phonebook service.
//!
//! This crate provides the person record, the store contracts shared by
//! every storage backend, and the schema the persistent backend validates
//! records against.

pub mod error;
pub mod person;
pub mod schema;
pub mod store;

pub use error::StoreError;
pub use person::{NewPerson, Person, PersonId};
pub use schema::{PersonSchema, NAME_MAX_LENGTH, NUMBER_MAX_LENGTH};
pub use store::{PersonStore, ReadStore};
