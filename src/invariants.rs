//! Post-solve invariant auditor (§8). Independently re-verifies a feasible
//! [`EngineOutput`] against the input it was solved from, rather than
//! trusting the solver's own bookkeeping. Used by the integration tests and
//! available to callers who want the same re-check.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::InputBundle;
use crate::report::EngineOutput;
use crate::timegrid::TimeGrid;

/// One broken invariant, numbered the way §8 numbers them (1-7).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvariantViolation {
    pub invariant: u8,
    pub description: String,
}

impl InvariantViolation {
    fn new(invariant: u8, description: impl Into<String>) -> Self {
        Self { invariant, description: description.into() }
    }
}

/// Re-checks every invariant in §8 against `output`. Returns an empty
/// vector for a sound feasible solution; on `feasible = false` it only
/// checks invariant-independent shape (empty `meetings`) since the other
/// invariants are vacuous.
#[must_use]
pub fn check_invariants(bundle: &InputBundle, output: &EngineOutput, grid: &TimeGrid) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if !output.feasible {
        if !output.meetings.is_empty() {
            violations.push(InvariantViolation::new(0, "infeasible output must carry no meetings"));
        }
        return violations;
    }

    let forbidden_by_team: HashMap<&str, HashSet<String>> =
        bundle.teams.iter().map(|t| (t.id.as_str(), t.conflict_set())).collect();

    let mut by_team: HashMap<&str, Vec<&crate::domain::SolutionMeeting>> = HashMap::new();
    for m in &output.meetings {
        by_team.entry(m.team_id.as_str()).or_default().push(m);
    }

    // 1. Required count met.
    for team in &bundle.teams {
        let fixed_count = bundle.fixed_meetings.iter().filter(|f| f.team_id == team.id).count();
        let new_count = by_team.get(team.id.as_str()).map_or(0, Vec::len);
        if (fixed_count + new_count) < team.required_total() as usize {
            violations.push(InvariantViolation::new(
                1,
                format!(
                    "team '{}' has {} meeting(s), fewer than required {}",
                    team.id,
                    fixed_count + new_count,
                    team.required_total()
                ),
            ));
        }
    }

    // 2. Staffing shape.
    for m in &output.meetings {
        let Some(team) = bundle.team(&m.team_id) else {
            violations.push(InvariantViolation::new(2, format!("meeting references unknown team '{}'", m.team_id)));
            continue;
        };
        if m.leader_id != team.leader_id {
            violations.push(InvariantViolation::new(2, format!("meeting for team '{}' has wrong leader", m.team_id)));
        }
        let distinct: HashSet<&str> = m.commissioners.iter().map(String::as_str).collect();
        if distinct.len() != 4 || m.commissioners.len() != 4 {
            violations.push(InvariantViolation::new(2, format!("meeting for team '{}' lacks exactly 4 distinct commissioners", m.team_id)));
        }
        let senior_count = m
            .commissioners
            .iter()
            .filter(|c| bundle.person(c).is_some_and(|p| p.is_senior_commissioner))
            .count();
        if senior_count < 2 {
            violations.push(InvariantViolation::new(2, format!("meeting for team '{}' has fewer than 2 senior commissioners", m.team_id)));
        }
        if let Some(forbidden) = forbidden_by_team.get(m.team_id.as_str()) {
            if m.commissioners.iter().any(|c| forbidden.contains(c)) {
                violations.push(InvariantViolation::new(2, format!("meeting for team '{}' assigns a conflicted commissioner", m.team_id)));
            }
        }
        if m.commissioners.iter().any(|c| !bundle.person(c).is_some_and(|p| p.is_commissioner)) {
            violations.push(InvariantViolation::new(2, format!("meeting for team '{}' assigns a non-commissioner", m.team_id)));
        }
    }

    // 3. No overlapping double-booking for any participant.
    let mut occupied: HashMap<(String, chrono::NaiveDate, u32), Vec<String>> = HashMap::new();
    let mut mark = |person: &str, date: chrono::NaiveDate, start_slot: u32, label: String| {
        for slot in grid.slots_covered(start_slot) {
            occupied.entry((person.to_string(), date, slot)).or_default().push(label.clone());
        }
    };
    for fixed in &bundle.fixed_meetings {
        mark(&fixed.leader_id, fixed.date, fixed.start_slot, format!("fixed:{}", fixed.team_id));
        for c in &fixed.commissioners {
            mark(c, fixed.date, fixed.start_slot, format!("fixed:{}", fixed.team_id));
        }
    }
    for m in &output.meetings {
        mark(&m.leader_id, m.date, m.start_slot, format!("new:{}", m.team_id));
        for c in &m.commissioners {
            mark(c, m.date, m.start_slot, format!("new:{}", m.team_id));
        }
    }
    for ((person, date, slot), labels) in &occupied {
        let distinct: HashSet<&String> = labels.iter().collect();
        if distinct.len() > 1 {
            violations.push(InvariantViolation::new(
                3,
                format!("person '{person}' double-booked on {date} slot {slot}: {labels:?}"),
            ));
        }
    }

    // 4 & 5. Chain ordering and handover continuity per team.
    for team in &bundle.teams {
        let mut fixed: Vec<&crate::domain::FixedMeeting> =
            bundle.fixed_meetings.iter().filter(|f| f.team_id == team.id).collect();
        fixed.sort_by_key(|f| (f.date, f.start_slot));
        let mut new: Vec<&crate::domain::SolutionMeeting> = by_team.get(team.id.as_str()).cloned().unwrap_or_default();
        new.sort_by_key(|m| m.sequence);

        let mut prev_key: Option<(chrono::NaiveDate, u32)> = None;
        let mut prev_commissioners: Option<HashSet<String>> = None;
        let mut has_prev = false;

        for f in &fixed {
            let key = (f.date, f.start_slot);
            if let Some(pk) = prev_key {
                if key <= pk {
                    violations.push(InvariantViolation::new(4, format!("team '{}' fixed chain not strictly increasing", team.id)));
                }
            }
            prev_key = Some(key);
            prev_commissioners = Some(f.commissioners.iter().cloned().collect());
            has_prev = true;
        }

        for m in &new {
            let key = (m.date, m.start_slot);
            if let Some(pk) = prev_key {
                if key <= pk {
                    violations.push(InvariantViolation::new(4, format!("team '{}' chain not strictly increasing at new meeting", team.id)));
                }
            }
            if has_prev || m.sequence >= 2 {
                let shares = prev_commissioners
                    .as_ref()
                    .is_some_and(|prev| m.commissioners.iter().any(|c| prev.contains(c)));
                if !shares {
                    violations.push(InvariantViolation::new(5, format!("team '{}' meeting seq {} lacks handover overlap", team.id, m.sequence)));
                }
            }
            prev_key = Some(key);
            prev_commissioners = Some(m.commissioners.iter().cloned().collect());
            has_prev = true;
        }
    }

    // 6. Start slot bounds and generation-start cutoff.
    for m in &output.meetings {
        if !grid.start_in_bounds(m.start_slot) {
            violations.push(InvariantViolation::new(6, format!("meeting for team '{}' starts outside bounds", m.team_id)));
        }
        if m.date == bundle.generation_start.date()
            && grid.slot_to_time(m.date, m.start_slot) < bundle.generation_start
        {
            violations.push(InvariantViolation::new(6, format!("meeting for team '{}' starts before generation_start", m.team_id)));
        }
    }

    // 7. Deadline respected.
    for m in &output.meetings {
        if let Some(team) = bundle.team(&m.team_id) {
            if m.date > team.deadline {
                violations.push(InvariantViolation::new(7, format!("meeting for team '{}' scheduled after deadline", m.team_id)));
            }
        }
    }

    violations
}
