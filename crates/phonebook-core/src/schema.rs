use crate::error::{Result, StoreError};
use crate::person::NewPerson;
use typed_builder::TypedBuilder;

/// Field validators applied by the persistent store on create and update.
///
/// Both fields are required. Lengths are counted in characters. The default
/// maximums match the column widths of the MySQL `persons` table.
#[derive(Debug, Clone, TypedBuilder)]
pub struct PersonSchema {
    #[builder(default = 3)]
    name_min_length: usize,
    #[builder(default = NAME_MAX_LENGTH)]
    name_max_length: usize,
    #[builder(default = 1)]
    number_min_length: usize,
    #[builder(default = NUMBER_MAX_LENGTH)]
    number_max_length: usize,
}

pub const NAME_MAX_LENGTH: usize = 255;
pub const NUMBER_MAX_LENGTH: usize = 64;

impl Default for PersonSchema {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PersonSchema {
    pub fn name_min_length(&self) -> usize {
        self.name_min_length
    }

    pub fn number_min_length(&self) -> usize {
        self.number_min_length
    }

    pub fn name_max_length(&self) -> usize {
        self.name_max_length
    }

    pub fn number_max_length(&self) -> usize {
        self.number_max_length
    }

    /// Checks every field and reports all failures in a single
    /// [`StoreError::Validation`].
    pub fn validate(&self, person: &NewPerson) -> Result<()> {
        let failures: Vec<String> = [
            check_field(
                "name",
                &person.name,
                self.name_min_length,
                self.name_max_length,
            ),
            check_field(
                "number",
                &person.number,
                self.number_min_length,
                self.number_max_length,
            ),
        ]
        .into_iter()
        .flatten()
        .collect();

        if failures.is_empty() {
            return Ok(());
        }

        Err(StoreError::Validation(format!(
            "Person validation failed: {}",
            failures.join(", ")
        )))
    }
}

fn check_field(path: &str, value: &str, min_length: usize, max_length: usize) -> Option<String> {
    if value.is_empty() {
        return Some(format!("{path}: Path `{path}` is required."));
    }

    let length = value.chars().count();
    if length > max_length {
        return Some(format!(
            "{path}: Path `{path}` (`{value}`) is longer than the maximum allowed length ({max_length})."
        ));
    }

    if length < min_length {
        return Some(format!(
            "{path}: Path `{path}` (`{value}`) is shorter than the minimum allowed length ({min_length})."
        ));
    }

    None
}
