use phonebook_core::NewPerson;
use serde::{Deserialize, Serialize};

/// Body of create and update requests.
///
/// Both fields are optional at the wire level so that a missing field can be
/// reported as such instead of as a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct PersonPayload {
    pub name: Option<String>,
    pub number: Option<String>,
}

impl PersonPayload {
    /// Returns the record to create, or `None` when `name` or `number` is
    /// absent or empty.
    pub fn into_complete(self) -> Option<NewPerson> {
        let name = self.name.filter(|name| !name.is_empty())?;
        let number = self.number.filter(|number| !number.is_empty())?;
        Some(NewPerson { name, number })
    }

    /// Missing fields become empty strings and are left to the store's
    /// validators.
    pub fn into_new_person(self) -> NewPerson {
        NewPerson {
            name: self.name.unwrap_or_default(),
            number: self.number.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
