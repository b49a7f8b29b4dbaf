pub mod memory;
pub mod mysql;

pub use memory::InMemoryStore;
pub use mysql::MySqlStore;
pub use phonebook_core::error::{Result, StoreError};
pub use phonebook_core::{PersonStore, ReadStore};
