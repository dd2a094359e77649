//! Fixed Meeting Index: per-team chronological grouping of pre-committed
//! meetings, their tail (for the handover seam), and per-person
//! fixed-attendance counts (to seed load balancing).

use std::collections::HashMap;

use crate::domain::{FixedMeeting, InputBundle};
use crate::types::{PersonId, TeamId};

/// Precomputed view over a bundle's fixed meetings.
pub struct FixedMeetingIndex {
    by_team: HashMap<TeamId, Vec<FixedMeeting>>,
    attendance: HashMap<PersonId, u32>,
}

impl FixedMeetingIndex {
    #[must_use]
    pub fn build(bundle: &InputBundle) -> Self {
        let mut by_team: HashMap<TeamId, Vec<FixedMeeting>> = HashMap::new();
        let mut attendance: HashMap<PersonId, u32> = HashMap::new();

        for fixed in &bundle.fixed_meetings {
            by_team.entry(fixed.team_id.clone()).or_default().push(fixed.clone());
        }
        for meetings in by_team.values_mut() {
            meetings.sort_by_key(|m| (m.date, m.start_slot));
        }

        for fixed in &bundle.fixed_meetings {
            if let Some(team) = bundle.team(&fixed.team_id) {
                *attendance.entry(team.leader_id.clone()).or_insert(0) += 1;
            }
            for commissioner in &fixed.commissioners {
                *attendance.entry(commissioner.clone()).or_insert(0) += 1;
            }
        }

        Self { by_team, attendance }
    }

    /// Fixed meetings for `team`, sorted `(date, start_slot)` ascending.
    #[must_use]
    pub fn meetings(&self, team_id: &str) -> &[FixedMeeting] {
        self.by_team.get(team_id).map_or(&[], Vec::as_slice)
    }

    /// `F_t`: number of fixed meetings already committed for `team`.
    #[must_use]
    pub fn count(&self, team_id: &str) -> u32 {
        self.meetings(team_id).len() as u32
    }

    /// The last (most recent) fixed meeting of `team`, if any — the seam
    /// the first new meeting's handover constraint anchors to.
    #[must_use]
    pub fn tail(&self, team_id: &str) -> Option<&FixedMeeting> {
        self.meetings(team_id).last()
    }

    /// Fixed-attendance count for `person` (0 if never a fixed participant).
    #[must_use]
    pub fn attendance(&self, person_id: &str) -> u32 {
        self.attendance.get(person_id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Availability, Person, Team};
    use chrono::NaiveDate;

    fn bundle_with_two_fixed() -> InputBundle {
        InputBundle {
            persons: vec![
                Person::new("leader", "Leader", true, false),
                Person::new("m1", "M1", true, false),
                Person::new("m2", "M2", true, false),
            ],
            teams: vec![Team {
                id: "t1".into(),
                name: "Alpha".into(),
                leader_id: "leader".into(),
                member_ids: Default::default(),
                deadline: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                base_required: 2,
                add_required: 0,
            }],
            availability: Availability::new(),
            fixed_meetings: vec![
                FixedMeeting {
                    team_id: "t1".into(),
                    date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
                    start_slot: 0,
                    dt_idx: 10,
                    leader_id: "leader".into(),
                    commissioners: vec!["m1".into(), "m2".into()],
                    sequence: Some(2),
                },
                FixedMeeting {
                    team_id: "t1".into(),
                    date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
                    start_slot: 0,
                    dt_idx: 0,
                    leader_id: "leader".into(),
                    commissioners: vec!["m1".into()],
                    sequence: Some(1),
                },
            ],
            generation_start: NaiveDate::from_ymd_opt(2026, 8, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn meetings_sorted_chronologically_regardless_of_input_order() {
        let idx = FixedMeetingIndex::build(&bundle_with_two_fixed());
        let meetings = idx.meetings("t1");
        assert_eq!(meetings[0].date, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        assert_eq!(meetings[1].date, NaiveDate::from_ymd_opt(2026, 8, 5).unwrap());
    }

    #[test]
    fn tail_is_the_latest_meeting() {
        let idx = FixedMeetingIndex::build(&bundle_with_two_fixed());
        let tail = idx.tail("t1").unwrap();
        assert_eq!(tail.date, NaiveDate::from_ymd_opt(2026, 8, 5).unwrap());
    }

    #[test]
    fn attendance_counts_leader_and_commissioners() {
        let idx = FixedMeetingIndex::build(&bundle_with_two_fixed());
        assert_eq!(idx.attendance("leader"), 2);
        assert_eq!(idx.attendance("m1"), 2);
        assert_eq!(idx.attendance("m2"), 1);
        assert_eq!(idx.attendance("ghost"), 0);
    }

    #[test]
    fn count_matches_fixed_meeting_total() {
        let idx = FixedMeetingIndex::build(&bundle_with_two_fixed());
        assert_eq!(idx.count("t1"), 2);
        assert_eq!(idx.count("unknown-team"), 0);
    }
}
