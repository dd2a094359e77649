//! Team entity

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{PersonId, TeamId};

/// A team whose committee-led review meetings this engine schedules.
///
/// Invariant (data, not type-enforced): leader and members exist in the
/// person set — checked by [`crate::engine::validate_structural`], which is
/// this crate's internal belt-and-suspenders check even though the external
/// validation front-end owns this responsibility. `leader ∉ members` is not
/// required by the data, but the leader is always treated as a conflict
/// regardless of membership (see [`Team::conflict_set`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    pub id: TeamId,
    /// Display name
    pub name: String,
    /// The person who chairs every meeting of this team
    pub leader_id: PersonId,
    /// Members of the team; conflict-of-interest set alongside the leader
    pub member_ids: BTreeSet<PersonId>,
    /// Date by which `base_required + add_required` meetings must be held
    pub deadline: NaiveDate,
    /// Baseline number of required meetings this period
    pub base_required: u32,
    /// Additional required meetings on top of the baseline
    pub add_required: u32,
}

impl Team {
    /// `members ∪ {leader}` — excluded from commissioner roles for this team (`Forb_t`).
    #[must_use]
    pub fn conflict_set(&self) -> BTreeSet<PersonId> {
        let mut forbidden = self.member_ids.clone();
        forbidden.insert(self.leader_id.clone());
        forbidden
    }

    /// `base_required + add_required`
    #[must_use]
    pub fn required_total(&self) -> u32 {
        self.base_required + self.add_required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> Team {
        Team {
            id: "t1".into(),
            name: "Alpha".into(),
            leader_id: "leader".into(),
            member_ids: ["m1", "m2"].into_iter().map(String::from).collect(),
            deadline: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
            base_required: 2,
            add_required: 1,
        }
    }

    #[test]
    fn conflict_set_always_includes_leader() {
        let t = team();
        let forbidden = t.conflict_set();
        assert!(forbidden.contains("leader"));
        assert!(forbidden.contains("m1"));
        assert!(forbidden.contains("m2"));
    }

    #[test]
    fn conflict_set_includes_leader_even_if_also_a_member() {
        let mut t = team();
        t.member_ids.insert("leader".into());
        assert_eq!(t.conflict_set().len(), 3);
    }

    #[test]
    fn required_total_sums_base_and_add() {
        assert_eq!(team().required_total(), 3);
    }
}
