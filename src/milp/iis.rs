//! Best-effort infeasibility diagnostics (§4.6). OR-Tools CP-SAT exposes no
//! true IIS (that's an LP/MIP-specific Gurobi/CPLEX concept); instead this
//! re-checks cheap structural necessary conditions and reports the first
//! ones violated. Every entry is a genuine necessary condition for
//! feasibility, so this is sound but not complete.

use super::team_plan::TeamPlan;

/// Caps the diagnostic summary at a bounded number of entries, per §7's
/// "truncated to a bounded count of constraint names" contract.
const MAX_IIS_ENTRIES: usize = 50;

pub fn summarize(plans: &[TeamPlan<'_>]) -> Option<String> {
    let mut violations = Vec::new();

    for plan in plans {
        if plan.new_count > 0 && plan.candidates.is_empty() {
            violations.push(format!(
                "team '{}' needs {} new meeting(s) but has zero feasible candidate slots",
                plan.team.id, plan.new_count
            ));
        }
        if (plan.candidates.len() as u32) < plan.new_count {
            violations.push(format!(
                "team '{}' needs {} new meeting(s) but only {} candidate slot(s) exist",
                plan.team.id,
                plan.new_count,
                plan.candidates.len()
            ));
        }
        if plan.new_count > 0 && plan.eligible.len() < 4 {
            violations.push(format!(
                "team '{}' has only {} eligible commissioner(s), fewer than the 4 required per meeting",
                plan.team.id,
                plan.eligible.len()
            ));
        }
        if plan.new_count > 0 && plan.senior.len() < 2 {
            violations.push(format!(
                "team '{}' has only {} eligible senior commissioner(s), fewer than the 2 required per meeting",
                plan.team.id,
                plan.senior.len()
            ));
        }
        if violations.len() >= MAX_IIS_ENTRIES {
            break;
        }
    }

    violations.truncate(MAX_IIS_ENTRIES);
    if violations.is_empty() {
        None
    } else {
        Some(violations.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimeConfig;
    use crate::domain::{Availability, InputBundle, Person, Team};
    use crate::fixed_index::FixedMeetingIndex;
    use crate::projector::Projector;
    use crate::timegrid::TimeGrid;
    use chrono::NaiveDate;

    #[test]
    fn flags_empty_candidate_list() {
        let bundle = InputBundle {
            persons: vec![Person::new("leader", "Leader", true, false)],
            teams: vec![Team {
                id: "t1".into(),
                name: "Alpha".into(),
                leader_id: "leader".into(),
                member_ids: Default::default(),
                deadline: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                base_required: 1,
                add_required: 0,
            }],
            availability: Availability::new(),
            fixed_meetings: vec![],
            generation_start: NaiveDate::from_ymd_opt(2026, 8, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        };
        let time = TimeConfig::default();
        let grid = TimeGrid::new(time, bundle.generation_start.date());
        let fixed_index = FixedMeetingIndex::build(&bundle);
        let projector = Projector::new(&bundle, &grid, &time);
        let plans = vec![TeamPlan::build(&bundle, &bundle.teams[0], &projector, &fixed_index)];
        let summary = summarize(&plans).expect("expected a diagnostic");
        assert!(summary.contains("zero feasible candidate slots"));
    }
}
