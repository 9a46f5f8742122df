//! Person transfer object.

use crate::{Keyed, PersonId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A person record as exposed to callers.
///
/// This is the transfer object: a plain data carrier decoupled from the
/// storage representation. Conversion to and from the persistence
/// record happens at the DAO boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Person {
    /// Unique identifier.
    pub id: PersonId,

    /// First name.
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,

    /// Last name.
    #[validate(length(min = 1, max = 64))]
    pub last_name: String,

    /// Middle initial, a single character when present.
    #[validate(length(min = 1, max = 1))]
    pub middle_initial: Option<String>,

    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Person {
    /// Creates a new person with a freshly generated ID.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        middle_initial: Option<String>,
        date_of_birth: Option<NaiveDate>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: PersonId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            middle_initial,
            date_of_birth,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the full name, including the middle initial when present.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.middle_initial {
            Some(initial) => format!("{} {}. {}", self.first_name, initial, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Changes the person's name and refreshes the update timestamp.
    pub fn rename(&mut self, first_name: impl Into<String>, last_name: impl Into<String>) {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self.updated_at = Utc::now();
    }

    /// Sets the date of birth and refreshes the update timestamp.
    pub fn set_date_of_birth(&mut self, date_of_birth: Option<NaiveDate>) {
        self.date_of_birth = date_of_birth;
        self.updated_at = Utc::now();
    }
}

impl Keyed<PersonId> for Person {
    fn key(&self) -> PersonId {
        self.id
    }
}
