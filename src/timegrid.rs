//! Time Grid: conversions between calendar dates/slots and the flat,
//! monotone `dt_idx` ordering used everywhere else in the engine to compare
//! "when" without re-deriving calendar arithmetic.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::config::TimeConfig;
use crate::types::{DtIdx, SlotIndex};

/// Binds a [`TimeConfig`] to an anchor date so `dt_idx` values are
/// comparable across the whole solve.
#[derive(Debug, Clone, Copy)]
pub struct TimeGrid {
    config: TimeConfig,
    anchor: NaiveDate,
}

impl TimeGrid {
    #[must_use]
    pub fn new(config: TimeConfig, anchor: NaiveDate) -> Self {
        Self { config, anchor }
    }

    /// Wall-clock start time of `slot` on `date`.
    #[must_use]
    pub fn slot_to_time(&self, date: NaiveDate, slot: SlotIndex) -> NaiveDateTime {
        date.and_hms_opt(0, 0, 0)
            .expect("midnight is always a valid time")
            + Duration::hours(i64::from(self.config.day_start_hour))
            + Duration::minutes(30 * i64::from(slot))
    }

    /// Wall-clock end time of a meeting starting at `slot` on `date`.
    #[must_use]
    pub fn meeting_end_time(&self, date: NaiveDate, start_slot: SlotIndex) -> NaiveDateTime {
        self.slot_to_time(date, start_slot) + Duration::minutes(30 * i64::from(self.config.meeting_slots))
    }

    /// The half-open range of slot indices a meeting starting at `start_slot` occupies.
    #[must_use]
    pub fn slots_covered(&self, start_slot: SlotIndex) -> std::ops::Range<SlotIndex> {
        start_slot..(start_slot + self.config.meeting_slots)
    }

    /// Monotone `(date, slot)` key: `days_since_anchor * slots_per_day + slot`.
    /// Comparable across dates without re-deriving calendar arithmetic, and
    /// usable directly as an MILP coefficient for sequencing constraints.
    #[must_use]
    pub fn dt_idx(&self, date: NaiveDate, slot: SlotIndex) -> DtIdx {
        let days = (date - self.anchor).num_days();
        days * i64::from(self.config.slots_per_day) + i64::from(slot)
    }

    /// `true` if a meeting starting at `start_slot` fits within the working day.
    #[must_use]
    pub fn start_in_bounds(&self, start_slot: SlotIndex) -> bool {
        start_slot <= self.config.latest_start_slot
    }
}
