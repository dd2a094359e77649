//! Per-team derived quantities the MILP core needs before it can create a
//! single variable: candidates, the new-meeting budget `K_t`, and the
//! commissioner pool eligible for this team.

use std::collections::BTreeSet;

use crate::domain::{CandidateSlot, InputBundle, Team};
use crate::fixed_index::FixedMeetingIndex;
use crate::projector::Projector;
use crate::types::PersonId;

pub struct TeamPlan<'a> {
    pub team: &'a Team,
    pub candidates: Vec<CandidateSlot>,
    /// `F_t`
    pub fixed_count: u32,
    /// `N_t = max(0, base_t + add_t - F_t)`
    pub new_count: u32,
    /// `K_t = N_t + (1 if base_t > 0 else 0)`
    pub k_total: u32,
    /// Commissioners eligible to staff this team's meetings: `Comm \ Forb_t`.
    pub eligible: Vec<PersonId>,
    /// The subset of `eligible` that are also senior commissioners.
    pub senior: BTreeSet<PersonId>,
}

impl<'a> TeamPlan<'a> {
    pub fn build(
        bundle: &'a InputBundle,
        team: &'a Team,
        projector: &Projector<'_>,
        fixed_index: &FixedMeetingIndex,
    ) -> Self {
        let candidates = projector.candidates(team);
        let fixed_count = fixed_index.count(&team.id);
        let required_total = team.required_total();
        let new_count = required_total.saturating_sub(fixed_count);
        let k_total = new_count + u32::from(team.base_required > 0);

        let forbidden = team.conflict_set();
        let eligible: Vec<PersonId> = bundle
            .persons
            .iter()
            .filter(|p| p.is_commissioner && !forbidden.contains(&p.id))
            .map(|p| p.id.clone())
            .collect();
        let senior: BTreeSet<PersonId> = bundle
            .persons
            .iter()
            .filter(|p| p.is_commissioner && p.is_senior_commissioner && !forbidden.contains(&p.id))
            .map(|p| p.id.clone())
            .collect();

        Self { team, candidates, fixed_count, new_count, k_total, eligible, senior }
    }

    /// `k` ranges `1..=k_total` inclusive, matching the spec's 1-based sequence indices.
    pub fn sequence_indices(&self) -> impl Iterator<Item = u32> + '_ {
        1..=self.k_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimeConfig;
    use crate::domain::{Availability, FixedMeeting, Person};
    use crate::timegrid::TimeGrid;
    use chrono::NaiveDate;

    fn bundle() -> InputBundle {
        InputBundle {
            persons: vec![
                Person::new("leader", "Leader", true, false),
                Person::new("m1", "M1", true, false),
                Person::new("c1", "C1", true, true),
                Person::new("c2", "C2", true, true),
            ],
            teams: vec![Team {
                id: "t1".into(),
                name: "Alpha".into(),
                leader_id: "leader".into(),
                member_ids: ["m1".to_string()].into_iter().collect(),
                deadline: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                base_required: 2,
                add_required: 1,
            }],
            availability: Availability::new(),
            fixed_meetings: vec![FixedMeeting {
                team_id: "t1".into(),
                date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
                start_slot: 0,
                dt_idx: 0,
                leader_id: "leader".into(),
                commissioners: vec!["c1".into(), "c2".into()],
                sequence: Some(1),
            }],
            generation_start: NaiveDate::from_ymd_opt(2026, 8, 2)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn budget_accounts_for_fixed_meetings_and_buffer_slot() {
        let b = bundle();
        let time = TimeConfig::default();
        let grid = TimeGrid::new(time, b.generation_start.date());
        let fixed_index = FixedMeetingIndex::build(&b);
        let projector = Projector::new(&b, &grid, &time);
        let plan = TeamPlan::build(&b, &b.teams[0], &projector, &fixed_index);
        assert_eq!(plan.fixed_count, 1);
        assert_eq!(plan.new_count, 2); // base(2)+add(1) - fixed(1) = 2
        assert_eq!(plan.k_total, 3); // +1 buffer slot since base_required > 0
    }

    #[test]
    fn eligible_excludes_leader_and_members() {
        let b = bundle();
        let time = TimeConfig::default();
        let grid = TimeGrid::new(time, b.generation_start.date());
        let fixed_index = FixedMeetingIndex::build(&b);
        let projector = Projector::new(&b, &grid, &time);
        let plan = TeamPlan::build(&b, &b.teams[0], &projector, &fixed_index);
        assert!(!plan.eligible.contains(&"leader".to_string()));
        assert!(!plan.eligible.contains(&"m1".to_string()));
        assert!(plan.eligible.contains(&"c1".to_string()));
    }
}
