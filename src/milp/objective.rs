//! Objective assembly. CP-SAT's objective takes integer coefficients, so
//! the configured `f64` weights are scaled and rounded once here; every
//! term shares the same [`SCALE`], so relative weighting is preserved.

use std::collections::HashMap;

use roster_sys::safe::CpModel;

use super::team_plan::TeamPlan;
use super::variables::{Variables, XKey, YKey};
use crate::config::EngineConfig;
use crate::domain::InputBundle;
use crate::timegrid::TimeGrid;

/// Fixed-point scale applied to every `f64` objective weight before
/// truncating to the `i64` coefficients CP-SAT's minimize() call requires.
const SCALE: f64 = 1000.0;

fn scaled(weight: f64) -> i64 {
    (weight * SCALE).round() as i64
}

/// Sum of per-slot availability penalties over the `meeting_slots` slots a
/// candidate starting at `start_slot` would occupy for `person`.
fn attendance_cost(bundle: &InputBundle, grid: &TimeGrid, config: &EngineConfig, person: &str, date: chrono::NaiveDate, start_slot: u32) -> i64 {
    grid.slots_covered(start_slot)
        .map(|slot| {
            bundle
                .availability
                .get(person, date, slot)
                .penalty(config.penalty.value2, config.penalty.value3)
        })
        .sum()
}

/// Accumulates `(var -> coefficient)` pairs, merging repeats, then flattens
/// to the parallel vectors `CpModel::minimize` expects.
#[derive(Default)]
struct Accumulator(HashMap<i32, i64>);

impl Accumulator {
    fn add(&mut self, var: i32, coeff: i64) {
        if coeff == 0 {
            return;
        }
        *self.0.entry(var).or_insert(0) += coeff;
    }

    fn finish(self) -> (Vec<i32>, Vec<i64>) {
        self.0.into_iter().unzip()
    }
}

pub fn build_and_apply(model: &mut CpModel, bundle: &InputBundle, config: &EngineConfig, grid: &TimeGrid, plans: &[TeamPlan<'_>], vars: &Variables) {
    let mut acc = Accumulator::default();
    let w_avail = scaled(config.weights.w_availability);
    let w_finish = scaled(config.weights.w_finish_buffer);
    let w_gap = scaled(config.weights.w_gap_rule);
    let w_buffer = scaled(config.weights.w_normal_plus_one);
    let w_load = scaled(config.weights.w_load_balance);

    for (team, plan) in plans.iter().enumerate() {
        for k in plan.sequence_indices() {
            for (ci, cand) in plan.candidates.iter().enumerate() {
                if let Some(&y) = vars.y.get(&YKey { team, k, ci }) {
                    let mut coeff = w_avail * attendance_cost(bundle, grid, config, &plan.team.leader_id, cand.date, cand.start_slot);
                    if cand.date == plan.team.deadline {
                        coeff += w_finish;
                    }
                    acc.add(y, coeff);
                }

                for person in &plan.eligible {
                    if let Some(&x) = vars.x.get(&XKey { team, k, ci, person: person.clone() }) {
                        let coeff = w_avail * attendance_cost(bundle, grid, config, person, cand.date, cand.start_slot);
                        acc.add(x, coeff);
                    }
                }
            }
        }

        if plan.team.base_required > 0 {
            if let Some(&buf_ok) = vars.buf_ok.get(&plan.team.id) {
                acc.add(buf_ok, -w_buffer);
            }
        }
    }

    for &v in vars.v.values() {
        acc.add(v, w_gap);
    }

    acc.add(vars.wmax, w_load);

    let (ids, coeffs) = acc.finish();
    model.minimize(&ids, &coeffs);
}
