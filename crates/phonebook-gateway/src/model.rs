mod person;

pub use person::{ErrorResponse, PersonPayload};
