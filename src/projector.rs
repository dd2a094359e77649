//! Feasibility Projector: derives `can_attend`, `occupied`, and per-team
//! ordered candidate lists from raw availability and fixed meetings.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::config::TimeConfig;
use crate::domain::{InputBundle, Team};
use crate::timegrid::TimeGrid;
use crate::types::{PersonId, SlotIndex};

/// Precomputes the slots every person is tied up in by an already-committed
/// meeting, then answers feasibility queries against it and the raw
/// availability table.
pub struct Projector<'a> {
    bundle: &'a InputBundle,
    grid: &'a TimeGrid,
    time: &'a TimeConfig,
    occupied: HashSet<(PersonId, NaiveDate, SlotIndex)>,
}

impl<'a> Projector<'a> {
    #[must_use]
    pub fn new(bundle: &'a InputBundle, grid: &'a TimeGrid, time: &'a TimeConfig) -> Self {
        let mut occupied = HashSet::new();
        for fixed in &bundle.fixed_meetings {
            let Some(team) = bundle.team(&fixed.team_id) else { continue };
            let participants = std::iter::once(team.leader_id.clone()).chain(fixed.commissioners.iter().cloned());
            for person in participants {
                for slot in grid.slots_covered(fixed.start_slot) {
                    occupied.insert((person.clone(), fixed.date, slot));
                }
            }
        }
        Self { bundle, grid, time, occupied }
    }

    /// `true` iff `person` is committed to a fixed meeting covering `slot` on `date`.
    #[must_use]
    pub fn occupied(&self, person: &str, date: NaiveDate, slot: SlotIndex) -> bool {
        self.occupied.contains(&(person.to_string(), date, slot))
    }

    /// `true` iff every slot the meeting would cover starting at `start_slot`
    /// is available (codes 1-3) for `person` on `date`. Defined only for
    /// `start_slot <= latest_start_slot`.
    #[must_use]
    pub fn can_attend(&self, person: &str, date: NaiveDate, start_slot: SlotIndex) -> bool {
        if !self.grid.start_in_bounds(start_slot) {
            return false;
        }
        self.grid
            .slots_covered(start_slot)
            .all(|s| self.bundle.availability.get(person, date, s).can_attend())
    }

    /// The ordered candidate `(date, start_slot)` list for `team`, filtered
    /// by leader availability, non-occupation, the generation cutoff, and
    /// the team's deadline. Sorted by `dt_idx` ascending (a direct
    /// consequence of iterating dates then slots in order).
    #[must_use]
    pub fn candidates(&self, team: &Team) -> Vec<crate::domain::CandidateSlot> {
        let start_date = self.bundle.generation_start.date();
        let mut out = Vec::new();
        if team.deadline < start_date {
            return out;
        }

        let mut date = start_date;
        while date <= team.deadline {
            if self.bundle.availability.has_date(&team.leader_id, date) {
                for start_slot in 0..=self.time.latest_start_slot {
                    if date == start_date
                        && self.grid.slot_to_time(date, start_slot) < self.bundle.generation_start
                    {
                        continue;
                    }
                    if !self.can_attend(&team.leader_id, date, start_slot) {
                        continue;
                    }
                    if self
                        .grid
                        .slots_covered(start_slot)
                        .any(|s| self.occupied(&team.leader_id, date, s))
                    {
                        continue;
                    }
                    out.push(crate::domain::CandidateSlot {
                        date,
                        start_slot,
                        dt_idx: self.grid.dt_idx(date, start_slot),
                    });
                }
            }
            date = date.succ_opt().expect("date arithmetic within a bounded planning horizon");
        }
        out
    }
}
