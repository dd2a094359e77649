//! Hard constraints 1-15 from §4.4, each a small function operating on the
//! variable tables built in [`super::variables`].

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use roster_sys::safe::CpModel;

use super::team_plan::TeamPlan;
use super::variables::{Variables, XKey, YKey, ZKey};
use crate::fixed_index::FixedMeetingIndex;
use crate::types::{PersonId, SlotIndex};

pub fn build_all(
    model: &mut CpModel,
    plans: &[TeamPlan<'_>],
    vars: &Variables,
    fixed_index: &FixedMeetingIndex,
    grid: &crate::timegrid::TimeGrid,
) {
    single_placement_per_k(model, plans, vars);
    required_count(model, plans, vars);
    no_same_day_repeats(model, plans, vars);
    staffing_cardinality(model, plans, vars);
    senior_minimum(model, plans, vars);
    // Eligibility (constraint 6) is enforced by construction: `x` variables
    // only exist for persons in `Comm \ Forb_t` (see `TeamPlan::eligible`).
    no_double_booking(model, plans, vars, grid);
    handover_at_seam(model, plans, vars, fixed_index);
    handover_new_to_new(model, plans, vars);
    chain_monotonicity(model, plans, vars);
    per_day_indicator(model, plans, vars);
    load_accumulator(model, plans, vars, fixed_index);
    minimax_envelope(model, vars);
    buffer_indicator(model, plans, vars);
    consecutive_day_slack(model, plans, vars);
}

fn y_ids(vars: &Variables, team: usize, k: u32, plan: &TeamPlan<'_>) -> Vec<i32> {
    (0..plan.candidates.len())
        .filter_map(|ci| vars.y.get(&YKey { team, k, ci }).copied())
        .collect()
}

/// 1. Single placement per k
fn single_placement_per_k(model: &mut CpModel, plans: &[TeamPlan<'_>], vars: &Variables) {
    for (team, plan) in plans.iter().enumerate() {
        for k in plan.sequence_indices() {
            let ids = y_ids(vars, team, k, plan);
            if ids.is_empty() {
                continue;
            }
            let coeffs = vec![1i64; ids.len()];
            model.add_linear_le(&ids, &coeffs, 1);
        }
    }
}

/// 2. Required count: `F_t + Σ y >= base_t + add_t`
fn required_count(model: &mut CpModel, plans: &[TeamPlan<'_>], vars: &Variables) {
    for (team, plan) in plans.iter().enumerate() {
        let mut ids = Vec::new();
        for k in plan.sequence_indices() {
            ids.extend(y_ids(vars, team, k, plan));
        }
        if ids.is_empty() {
            continue;
        }
        let coeffs = vec![1i64; ids.len()];
        let rhs = i64::from(plan.team.required_total()) - i64::from(plan.fixed_count);
        model.add_linear_ge(&ids, &coeffs, rhs.max(0));
    }
}

/// 3. No same-day repeats per team
fn no_same_day_repeats(model: &mut CpModel, plans: &[TeamPlan<'_>], vars: &Variables) {
    for (team, plan) in plans.iter().enumerate() {
        let mut by_date: HashMap<NaiveDate, Vec<i32>> = HashMap::new();
        for k in plan.sequence_indices() {
            for (ci, cand) in plan.candidates.iter().enumerate() {
                if let Some(&v) = vars.y.get(&YKey { team, k, ci }) {
                    by_date.entry(cand.date).or_default().push(v);
                }
            }
        }
        for ids in by_date.values() {
            if ids.len() < 2 {
                continue;
            }
            let coeffs = vec![1i64; ids.len()];
            model.add_linear_le(ids, &coeffs, 1);
        }
    }
}

/// 4. Staffing cardinality: `Σ_p x[t,k,ci,p] - 4*y[t,k,ci] = 0`
fn staffing_cardinality(model: &mut CpModel, plans: &[TeamPlan<'_>], vars: &Variables) {
    for (team, plan) in plans.iter().enumerate() {
        for k in plan.sequence_indices() {
            for ci in 0..plan.candidates.len() {
                let Some(&y) = vars.y.get(&YKey { team, k, ci }) else { continue };
                let mut ids = vec![y];
                let mut coeffs = vec![-4i64];
                for person in &plan.eligible {
                    if let Some(&x) = vars.x.get(&XKey { team, k, ci, person: person.clone() }) {
                        ids.push(x);
                        coeffs.push(1);
                    }
                }
                model.add_linear_eq(&ids, &coeffs, 0);
            }
        }
    }
}

/// 5. Senior minimum: `Σ_{p in Sen} x[t,k,ci,p] - 2*y[t,k,ci] >= 0`
fn senior_minimum(model: &mut CpModel, plans: &[TeamPlan<'_>], vars: &Variables) {
    for (team, plan) in plans.iter().enumerate() {
        for k in plan.sequence_indices() {
            for ci in 0..plan.candidates.len() {
                let Some(&y) = vars.y.get(&YKey { team, k, ci }) else { continue };
                let mut ids = vec![y];
                let mut coeffs = vec![-2i64];
                for person in &plan.senior {
                    if let Some(&x) = vars.x.get(&XKey { team, k, ci, person: person.clone() }) {
                        ids.push(x);
                        coeffs.push(1);
                    }
                }
                model.add_linear_ge(&ids, &coeffs, 0);
            }
        }
    }
}

/// 7. No double-booking among new-meeting terms sharing a (person, date, slot).
fn no_double_booking(model: &mut CpModel, plans: &[TeamPlan<'_>], vars: &Variables, grid: &crate::timegrid::TimeGrid) {
    let mut buckets: HashMap<(PersonId, NaiveDate, SlotIndex), Vec<i32>> = HashMap::new();

    for (team, plan) in plans.iter().enumerate() {
        for k in plan.sequence_indices() {
            for (ci, cand) in plan.candidates.iter().enumerate() {
                let slots: Vec<SlotIndex> = grid.slots_covered(cand.start_slot).collect();

                if let Some(&y) = vars.y.get(&YKey { team, k, ci }) {
                    for &slot in &slots {
                        buckets
                            .entry((plan.team.leader_id.clone(), cand.date, slot))
                            .or_default()
                            .push(y);
                    }
                }
                for person in &plan.eligible {
                    if let Some(&x) = vars.x.get(&XKey { team, k, ci, person: person.clone() }) {
                        for &slot in &slots {
                            buckets.entry((person.clone(), cand.date, slot)).or_default().push(x);
                        }
                    }
                }
            }
        }
    }

    for ids in buckets.values() {
        if ids.len() < 2 {
            continue;
        }
        let coeffs = vec![1i64; ids.len()];
        model.add_linear_le(ids, &coeffs, 1);
    }
}

/// 8. Handover at the fixed-to-new seam (only when `F_t > 0`)
fn handover_at_seam(model: &mut CpModel, plans: &[TeamPlan<'_>], vars: &Variables, fixed_index: &FixedMeetingIndex) {
    for (team, plan) in plans.iter().enumerate() {
        if plan.fixed_count == 0 || plan.k_total == 0 {
            continue;
        }
        let Some(tail) = fixed_index.tail(&plan.team.id) else { continue };
        let tail_set: HashSet<&str> = tail.commissioners.iter().map(String::as_str).collect();

        let mut lhs_ids = Vec::new();
        for ci in 0..plan.candidates.len() {
            for person in &plan.eligible {
                if !tail_set.contains(person.as_str()) {
                    continue;
                }
                if let Some(&x) = vars.x.get(&XKey { team, k: 1, ci, person: person.clone() }) {
                    lhs_ids.push(x);
                }
            }
        }
        let rhs_ids = y_ids(vars, team, 1, plan);
        if rhs_ids.is_empty() {
            continue;
        }

        let mut ids = lhs_ids;
        let mut coeffs = vec![1i64; ids.len()];
        for &y in &rhs_ids {
            ids.push(y);
            coeffs.push(-1);
        }
        model.add_linear_ge(&ids, &coeffs, 0);
    }
}

/// 9. Handover new-to-new via `z`
fn handover_new_to_new(model: &mut CpModel, plans: &[TeamPlan<'_>], vars: &Variables) {
    for (team, plan) in plans.iter().enumerate() {
        for k in plan.sequence_indices().filter(|&k| k >= 2) {
            let mut presence_ids = Vec::new();
            for person in &plan.eligible {
                let Some(&z) = vars.z.get(&ZKey { team, k, person: person.clone() }) else { continue };
                presence_ids.push(z);

                let cur_x: Vec<i32> = (0..plan.candidates.len())
                    .filter_map(|ci| vars.x.get(&XKey { team, k, ci, person: person.clone() }).copied())
                    .collect();
                let mut ids = vec![z];
                ids.extend(&cur_x);
                let mut coeffs = vec![1i64];
                coeffs.extend(std::iter::repeat(-1i64).take(cur_x.len()));
                model.add_linear_le(&ids, &coeffs, 0);

                let prev_x: Vec<i32> = (0..plan.candidates.len())
                    .filter_map(|ci| vars.x.get(&XKey { team, k: k - 1, ci, person: person.clone() }).copied())
                    .collect();
                let mut ids = vec![z];
                ids.extend(&prev_x);
                let mut coeffs = vec![1i64];
                coeffs.extend(std::iter::repeat(-1i64).take(prev_x.len()));
                model.add_linear_le(&ids, &coeffs, 0);
            }

            let y_here = y_ids(vars, team, k, plan);
            if y_here.is_empty() {
                continue;
            }
            let mut ids = presence_ids;
            let mut coeffs = vec![1i64; ids.len()];
            for &y in &y_here {
                ids.push(y);
                coeffs.push(-1);
            }
            model.add_linear_ge(&ids, &coeffs, 0);
        }
    }
}

/// 10. Chain monotonicity: forbid candidate-index inversion across consecutive k's.
fn chain_monotonicity(model: &mut CpModel, plans: &[TeamPlan<'_>], vars: &Variables) {
    for (team, plan) in plans.iter().enumerate() {
        for k in plan.sequence_indices().filter(|&k| k >= 2) {
            for ci_cur in 0..plan.candidates.len() {
                let Some(&y_cur) = vars.y.get(&YKey { team, k, ci: ci_cur }) else { continue };
                for ci_prev in ci_cur..plan.candidates.len() {
                    let Some(&y_prev) = vars.y.get(&YKey { team, k: k - 1, ci: ci_prev }) else { continue };
                    model.add_linear_le(&[y_cur, y_prev], &[1, 1], 1);
                }
            }
        }
    }
}

/// 11. Per-day indicator linkage
fn per_day_indicator(model: &mut CpModel, plans: &[TeamPlan<'_>], vars: &Variables) {
    for (team, plan) in plans.iter().enumerate() {
        if plan.k_total == 0 {
            continue;
        }
        let mut by_date: HashMap<NaiveDate, Vec<i32>> = HashMap::new();
        for k in plan.sequence_indices() {
            for (ci, cand) in plan.candidates.iter().enumerate() {
                if let Some(&y) = vars.y.get(&YKey { team, k, ci }) {
                    by_date.entry(cand.date).or_default().push(y);
                }
            }
        }
        for (date, y_ids) in by_date {
            let Some(&placed) = vars.placed_day.get(&(plan.team.id.clone(), date)) else { continue };

            let mut ids = vec![placed];
            let mut coeffs = vec![1i64];
            for &y in &y_ids {
                ids.push(y);
                coeffs.push(-1);
            }
            model.add_linear_le(&ids, &coeffs, 0);

            let mut ids = vec![placed];
            let mut coeffs = vec![i64::from(plan.k_total)];
            for &y in &y_ids {
                ids.push(y);
                coeffs.push(-1);
            }
            model.add_linear_ge(&ids, &coeffs, 0);
        }
    }
}

/// 12. Load accumulator: `w[p] - fixedAttend[p] - Σ(leader y) - Σ(x for p) = 0`
fn load_accumulator(model: &mut CpModel, plans: &[TeamPlan<'_>], vars: &Variables, fixed_index: &FixedMeetingIndex) {
    for (person, &w) in &vars.w {
        let mut ids = vec![w];
        let mut coeffs = vec![1i64];

        for (team, plan) in plans.iter().enumerate() {
            if &plan.team.leader_id == person {
                for k in plan.sequence_indices() {
                    for &y in &y_ids(vars, team, k, plan) {
                        ids.push(y);
                        coeffs.push(-1);
                    }
                }
            }
            for k in plan.sequence_indices() {
                for ci in 0..plan.candidates.len() {
                    if let Some(&x) = vars.x.get(&XKey { team, k, ci, person: person.clone() }) {
                        ids.push(x);
                        coeffs.push(-1);
                    }
                }
            }
        }

        let rhs = i64::from(fixed_index.attendance(person));
        model.add_linear_eq(&ids, &coeffs, rhs);
    }
}

/// 13. Minimax envelope: `Wmax >= w[p]`
fn minimax_envelope(model: &mut CpModel, vars: &Variables) {
    for &w in vars.w.values() {
        model.add_linear_ge(&[vars.wmax, w], &[1, -1], 0);
    }
}

/// 14. Buffer indicator (big-M), `M = F_t + K_t`
fn buffer_indicator(model: &mut CpModel, plans: &[TeamPlan<'_>], vars: &Variables) {
    for (team, plan) in plans.iter().enumerate() {
        let Some(&buf_ok) = vars.buf_ok.get(&plan.team.id) else { continue };
        let big_m = i64::from(plan.fixed_count) + i64::from(plan.k_total);
        let base = i64::from(plan.team.base_required);
        let fixed_count = i64::from(plan.fixed_count);

        let mut y_all = Vec::new();
        for k in plan.sequence_indices() {
            y_all.extend(y_ids(vars, team, k, plan));
        }

        // total_t - M*buf_ok >= base+1 - M - F_t
        let mut ids = y_all.clone();
        let mut coeffs = vec![1i64; ids.len()];
        ids.push(buf_ok);
        coeffs.push(-big_m);
        model.add_linear_ge(&ids, &coeffs, base + 1 - big_m - fixed_count);

        // total_t + M*buf_ok <= base - F_t + M
        let mut ids = y_all;
        let mut coeffs = vec![1i64; ids.len()];
        ids.push(buf_ok);
        coeffs.push(big_m);
        model.add_linear_le(&ids, &coeffs, base - fixed_count + big_m);
    }
}

/// 15. Consecutive-day slack
fn consecutive_day_slack(model: &mut CpModel, plans: &[TeamPlan<'_>], vars: &Variables) {
    for plan in plans {
        for (&(ref team_id, date), &v) in &vars.v {
            if team_id != &plan.team.id {
                continue;
            }
            let next = date + chrono::Duration::days(1);
            let (Some(&pd), Some(&pd_next)) = (
                vars.placed_day.get(&(plan.team.id.clone(), date)),
                vars.placed_day.get(&(plan.team.id.clone(), next)),
            ) else {
                continue;
            };
            model.add_linear_ge(&[v, pd, pd_next], &[1, -1, -1], -1);
        }
    }
}
