use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Identifier of a phonebook record.
///
/// Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for PersonId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for PersonId {
    type Err = StoreError;

    /// Parses a path segment into an id.
    ///
    /// Anything that is not a plain unsigned integer is rejected with
    /// [`StoreError::MalformedId`]; backends decide whether that surfaces as
    /// an error or simply matches no record.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| StoreError::MalformedId(raw.to_string()))
    }
}

impl Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored phonebook entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub number: String,
}

impl Person {
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: number.into(),
        }
    }
}

/// The user-supplied part of a record, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub number: String,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    /// Attaches an id, producing the stored form of this record.
    pub fn with_id(self, id: PersonId) -> Person {
        Person {
            id,
            name: self.name,
            number: self.number,
        }
    }
}
