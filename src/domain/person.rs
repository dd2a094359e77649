//! Person entity

use serde::{Deserialize, Serialize};

use crate::types::PersonId;
use crate::{Error, Result};

/// A person known to the scheduling engine.
///
/// Invariant: `is_senior_commissioner => is_commissioner` for any person
/// referenced as senior. This is checked by [`Person::validate`], not
/// enforced by the type itself, because the raw ingest data (outside this
/// crate's scope) may carry the inconsistent combination and the validation
/// front-end is the place that rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,
    /// Display name
    pub name: String,
    /// Eligible to staff meetings as a commissioner
    pub is_commissioner: bool,
    /// Eligible to count toward a meeting's senior-commissioner minimum
    pub is_senior_commissioner: bool,
}

impl Person {
    /// Construct a person.
    pub fn new(
        id: impl Into<PersonId>,
        name: impl Into<String>,
        is_commissioner: bool,
        is_senior_commissioner: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_commissioner,
            is_senior_commissioner,
        }
    }

    /// Check the senior-implies-commissioner invariant.
    pub fn validate(&self) -> Result<()> {
        if self.is_senior_commissioner && !self.is_commissioner {
            return Err(Error::invalid_input(format!(
                "person '{}' is flagged senior commissioner but not commissioner",
                self.id
            )));
        }
        Ok(())
    }
}
