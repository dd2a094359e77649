//! Per-person, per-date, per-slot availability cells

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{AvailabilityCode, PersonId, SlotIndex};

/// Raw availability: `person -> date -> slot -> code`.
///
/// Absence of a date entry for a person means "no data for that day", which
/// the feasibility projector treats as "skip this day for candidate
/// generation" (edge case (e) in §4.2), distinct from every slot on that day
/// being unavailable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Availability {
    cells: HashMap<PersonId, HashMap<NaiveDate, HashMap<SlotIndex, AvailabilityCode>>>,
}

impl Availability {
    /// Construct an empty availability table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single cell, normalizing the raw code per the data model.
    pub fn set_raw(&mut self, person: PersonId, date: NaiveDate, slot: SlotIndex, raw: i32) {
        self.cells
            .entry(person)
            .or_default()
            .entry(date)
            .or_default()
            .insert(slot, AvailabilityCode::normalize(raw));
    }

    /// Record a single cell with an already-normalized code.
    pub fn set(&mut self, person: PersonId, date: NaiveDate, slot: SlotIndex, code: AvailabilityCode) {
        self.cells
            .entry(person)
            .or_default()
            .entry(date)
            .or_default()
            .insert(slot, code);
    }

    /// `true` iff the person has any availability data at all for `date`.
    #[must_use]
    pub fn has_date(&self, person: &str, date: NaiveDate) -> bool {
        self.cells
            .get(person)
            .is_some_and(|by_date| by_date.contains_key(&date))
    }

    /// The code for `(person, date, slot)`. Missing cells default to
    /// `Unavailable`, matching the preprocessing reference's `slots.get(ss, 4)`.
    #[must_use]
    pub fn get(&self, person: &str, date: NaiveDate, slot: SlotIndex) -> AvailabilityCode {
        self.cells
            .get(person)
            .and_then(|by_date| by_date.get(&date))
            .and_then(|by_slot| by_slot.get(&slot))
            .copied()
            .unwrap_or(AvailabilityCode::Unavailable)
    }
}
