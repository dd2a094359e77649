//! Solution reconstruction (§4.4, resolved in detail at SPEC_FULL §4.5):
//! read rounded variable values back off the solver response and build
//! `SolutionMeeting`s, dropping only meetings hit by numerical noise.

use roster_sys::safe::CpSolution;

use super::team_plan::TeamPlan;
use super::variables::{Variables, XKey, YKey};
use crate::domain::SolutionMeeting;
use crate::fixed_index::FixedMeetingIndex;

const TRUE_THRESHOLD: i64 = 1; // CP-SAT bool values are exact 0/1, never fractional

fn is_true(solution: &CpSolution, var: i32) -> bool {
    solution.value(var) >= TRUE_THRESHOLD
}

pub fn reconstruct_team(plan: &TeamPlan<'_>, team: usize, vars: &Variables, solution: &CpSolution, fixed_index: &FixedMeetingIndex) -> Vec<SolutionMeeting> {
    let mut out = Vec::new();
    let mut previous_commissioners: Option<Vec<String>> = fixed_index.tail(&plan.team.id).map(|tail| {
        let mut c = tail.commissioners.clone();
        c.sort();
        c
    });

    for k in plan.sequence_indices() {
        let placed_ci = (0..plan.candidates.len()).find(|&ci| {
            vars.y
                .get(&YKey { team, k, ci })
                .is_some_and(|&y| is_true(solution, y))
        });

        let Some(ci) = placed_ci else {
            continue;
        };
        let candidate = plan.candidates[ci];

        let mut commissioners: Vec<String> = plan
            .eligible
            .iter()
            .filter(|person| {
                vars.x
                    .get(&XKey { team, k, ci, person: (*person).clone() })
                    .is_some_and(|&x| is_true(solution, x))
            })
            .cloned()
            .collect();
        commissioners.sort();

        if commissioners.len() < 4 {
            // Numerical reconstruction anomaly: drop only this meeting,
            // keep the previous commissioner set intact for the next k's handover.
            continue;
        }
        commissioners.truncate(4);

        let handover_from_previous = previous_commissioners.as_ref().and_then(|prev| {
            commissioners.iter().find(|c| prev.contains(c)).cloned()
        });

        out.push(SolutionMeeting {
            team_id: plan.team.id.clone(),
            date: candidate.date,
            start_slot: candidate.start_slot,
            dt_idx: candidate.dt_idx,
            leader_id: plan.team.leader_id.clone(),
            commissioners: commissioners.clone(),
            sequence: plan.fixed_count + k,
            handover_from_previous,
        });

        previous_commissioners = Some(commissioners);
    }

    out
}
