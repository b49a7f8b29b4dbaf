use async_trait::async_trait;
use parking_lot::RwLock;
use phonebook_core::error::{Result, StoreError};
use phonebook_core::{NewPerson, Person, PersonId, PersonStore, ReadStore};
use phonebook_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace};

/// The records a fresh phonebook starts with.
pub fn sample_persons() -> Vec<Person> {
    vec![
        Person::new(1, "Arto Hellas", "040-123456"),
        Person::new(2, "Ada Lovelace", "39-44-5323523"),
        Person::new(3, "Dan Abramov", "12-43-234345"),
        Person::new(4, "Mary Poppendieck", "39-23-6423122"),
    ]
}

/// In-memory implementation of the store contract.
///
/// Records live in an ordered list that is never mutated in place: every
/// write builds a new list and swaps it in, so readers always hold a
/// consistent snapshot. Writers are serialized by the lock, which makes the
/// name-uniqueness check and the append of `create` a single step.
///
/// Ids come from `G` and are not checked for collisions. Path ids are read
/// numerically, so `1`, `1.0`, `1e0` and `0x1` all name record 1, while a
/// path id that is not a whole number matches no record. Updates are not
/// supported.
#[derive(Debug)]
pub struct InMemoryStore<G> {
    records: RwLock<Arc<Vec<Person>>>,
    generator: G,
}

impl<G: Generator> InMemoryStore<G> {
    /// Creates an empty store.
    pub fn new(generator: G) -> Self {
        Self::with_records(generator, Vec::new())
    }

    /// Creates a store pre-filled with `records`, kept in the given order.
    pub fn with_records(generator: G, records: impl IntoIterator<Item = Person>) -> Self {
        Self {
            records: RwLock::new(Arc::new(records.into_iter().collect())),
            generator,
        }
    }

    fn snapshot(&self) -> Arc<Vec<Person>> {
        Arc::clone(&self.records.read())
    }
}

/// Reads a path id the way a loosely typed numeric comparison would: decimal
/// and exponent forms, unsigned `0x`/`0o`/`0b` literals, surrounding
/// whitespace. Anything that is not a non-negative whole number is `None`.
fn parse_id(raw: &str) -> Option<PersonId> {
    let id = numeric_value(raw.trim());
    if id.is_none() {
        trace!(raw_id = %raw, "non-numeric id matches no record");
    }
    id.map(PersonId::new)
}

fn numeric_value(text: &str) -> Option<u64> {
    if text.is_empty() {
        return Some(0);
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.starts_with('+') {
            return None;
        }
        return u64::from_str_radix(digits, radix).ok();
    }

    // `f64::from_str` also takes "inf" and "nan"; neither is a whole number.
    let value: f64 = text.parse().ok()?;
    let whole = value.is_finite() && value.fract() == 0.0;
    (whole && value >= 0.0 && value < u64::MAX as f64).then_some(value as u64)
}

#[async_trait]
impl<G: Generator> ReadStore for InMemoryStore<G> {
    async fn list(&self) -> Result<Vec<Person>> {
        Ok(self.snapshot().as_ref().clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.records.read().len())
    }

    async fn get(&self, id: &str) -> Result<Option<Person>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        Ok(self.snapshot().iter().find(|p| p.id == id).cloned())
    }
}

#[async_trait]
impl<G: Generator> PersonStore for InMemoryStore<G> {
    async fn create(&self, person: NewPerson) -> Result<Person> {
        let mut records = self.records.write();

        if records.iter().any(|p| p.name == person.name) {
            return Err(StoreError::DuplicateName(person.name));
        }

        let record = person.with_id(self.generator.generate().into());

        let mut next = Vec::with_capacity(records.len() + 1);
        next.extend(records.iter().cloned());
        next.push(record.clone());
        *records = Arc::new(next);

        debug!(id = %record.id, name = %record.name, "person created");
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let Some(id) = parse_id(id) else {
            return Ok(());
        };

        let mut records = self.records.write();
        if !records.iter().any(|p| p.id == id) {
            return Ok(());
        }

        let next: Vec<Person> = records.iter().filter(|p| p.id != id).cloned().collect();
        *records = Arc::new(next);

        debug!(id = %id, "person deleted");
        Ok(())
    }
}
