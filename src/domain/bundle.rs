//! The complete input to a single solve: immutable, self-contained, no
//! reverse-lookup maps (those are built on demand by the feasibility
//! projector and the fixed meeting index, kept out of the input shape per
//! §3.1 so ingest stays a thin deserialize-and-validate step).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{Availability, FixedMeeting, Person, Team};
use crate::{Error, Result};

/// Everything the engine needs to produce a roster for one solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputBundle {
    pub persons: Vec<Person>,
    pub teams: Vec<Team>,
    pub availability: Availability,
    pub fixed_meetings: Vec<FixedMeeting>,
    /// Earliest point a new meeting may be placed. Timezone normalization is
    /// the ingest adapter's responsibility; by the time this crate sees it,
    /// it is wall-clock local time comparable directly against slot starts.
    pub generation_start: NaiveDateTime,
}

impl InputBundle {
    /// Structural integrity checks that do not require the time grid or
    /// projector: person/team invariants, and that every fixed meeting and
    /// team leader/member references a known person.
    pub fn validate(&self) -> Result<()> {
        for person in &self.persons {
            person.validate()?;
        }

        let known: std::collections::HashSet<&str> =
            self.persons.iter().map(|p| p.id.as_str()).collect();

        for team in &self.teams {
            if !known.contains(team.leader_id.as_str()) {
                return Err(Error::invalid_input(format!(
                    "team '{}' has unknown leader '{}'",
                    team.id, team.leader_id
                )));
            }
            for member in &team.member_ids {
                if !known.contains(member.as_str()) {
                    return Err(Error::invalid_input(format!(
                        "team '{}' has unknown member '{}'",
                        team.id, member
                    )));
                }
            }
        }

        let known_teams: std::collections::HashSet<&str> =
            self.teams.iter().map(|t| t.id.as_str()).collect();

        for fixed in &self.fixed_meetings {
            let Some(team) = self.team(&fixed.team_id) else {
                return Err(Error::invalid_input(format!(
                    "fixed meeting references unknown team '{}'",
                    fixed.team_id
                )));
            };
            if fixed.leader_id != team.leader_id {
                return Err(Error::invalid_input(format!(
                    "fixed meeting for team '{}' has leader '{}', expected team leader '{}'",
                    fixed.team_id, fixed.leader_id, team.leader_id
                )));
            }
            if fixed.commissioners.len() != 4 {
                return Err(Error::invalid_input(format!(
                    "fixed meeting for team '{}' has {} commissioners, expected exactly 4",
                    fixed.team_id,
                    fixed.commissioners.len()
                )));
            }
            let distinct: std::collections::HashSet<&str> =
                fixed.commissioners.iter().map(String::as_str).collect();
            if distinct.len() != fixed.commissioners.len() {
                return Err(Error::invalid_input(format!(
                    "fixed meeting for team '{}' has duplicate commissioners",
                    fixed.team_id
                )));
            }
            let forbidden = team.conflict_set();
            for commissioner in &fixed.commissioners {
                if !known.contains(commissioner.as_str()) {
                    return Err(Error::invalid_input(format!(
                        "fixed meeting for team '{}' has unknown commissioner '{}'",
                        fixed.team_id, commissioner
                    )));
                }
                if forbidden.contains(commissioner) {
                    return Err(Error::invalid_input(format!(
                        "fixed meeting for team '{}' has commissioner '{}' in the conflict set",
                        fixed.team_id, commissioner
                    )));
                }
                if !self.person(commissioner).is_some_and(|p| p.is_commissioner) {
                    return Err(Error::invalid_input(format!(
                        "fixed meeting for team '{}' has non-commissioner '{}'",
                        fixed.team_id, commissioner
                    )));
                }
            }
            let senior_count = fixed
                .commissioners
                .iter()
                .filter(|c| self.person(c).is_some_and(|p| p.is_senior_commissioner))
                .count();
            if senior_count < 2 {
                return Err(Error::invalid_input(format!(
                    "fixed meeting for team '{}' has only {} senior commissioner(s), expected at least 2",
                    fixed.team_id, senior_count
                )));
            }
        }

        Ok(())
    }

    /// The team with the given id, if any.
    #[must_use]
    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// The person with the given id, if any.
    #[must_use]
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }
}
