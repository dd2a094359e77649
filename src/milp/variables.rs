//! Decision variable tables: every `y`, `x`, `z`, `placed_day`, `buf_ok`,
//! `w`, `Wmax`, `v` from §4.4, keyed the same way the constraints need to
//! look them up.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::types::{PersonId, TeamId};
use roster_sys::safe::CpModel;

pub type VarIdx = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YKey {
    pub team: usize,
    pub k: u32,
    pub ci: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XKey {
    pub team: usize,
    pub k: u32,
    pub ci: usize,
    pub person: PersonId,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZKey {
    pub team: usize,
    pub k: u32,
    pub person: PersonId,
}

/// Every decision variable in the model, addressed by team *index* into the
/// plan list (not `TeamId`) to avoid repeated string hashing in the hot loops.
pub struct Variables {
    pub y: HashMap<YKey, VarIdx>,
    pub x: HashMap<XKey, VarIdx>,
    pub z: HashMap<ZKey, VarIdx>,
    pub placed_day: HashMap<(TeamId, NaiveDate), VarIdx>,
    pub buf_ok: HashMap<TeamId, VarIdx>,
    pub w: HashMap<PersonId, VarIdx>,
    pub wmax: VarIdx,
    pub v: HashMap<(TeamId, NaiveDate), VarIdx>,
}

impl Variables {
    /// Upper bound for `w[p]`/`Wmax`: nobody can attend more than one
    /// meeting per candidate across every team, so the total fixed and
    /// candidate meeting count is a safe (if loose) bound.
    pub fn build(model: &mut CpModel, plans: &[super::team_plan::TeamPlan<'_>], loadable: &[PersonId], w_upper_bound: i64) -> Self {
        let mut y = HashMap::new();
        let mut x = HashMap::new();
        let mut z = HashMap::new();
        let mut placed_day = HashMap::new();
        let mut buf_ok = HashMap::new();

        for (team_idx, plan) in plans.iter().enumerate() {
            for k in plan.sequence_indices() {
                for ci in 0..plan.candidates.len() {
                    let name = format!("y_{}_{}_{}", plan.team.id, k, ci);
                    let idx = model.new_bool_var(&name);
                    y.insert(YKey { team: team_idx, k, ci }, idx);

                    for person in &plan.eligible {
                        let name = format!("x_{}_{}_{}_{}", plan.team.id, k, ci, person);
                        let idx = model.new_bool_var(&name);
                        x.insert(XKey { team: team_idx, k, ci, person: person.clone() }, idx);
                    }
                }
                if k >= 2 {
                    for person in &plan.eligible {
                        let name = format!("z_{}_{}_{}", plan.team.id, k, person);
                        let idx = model.new_bool_var(&name);
                        z.insert(ZKey { team: team_idx, k, person: person.clone() }, idx);
                    }
                }
            }

            let mut dates: Vec<NaiveDate> = plan.candidates.iter().map(|c| c.date).collect();
            dates.sort();
            dates.dedup();
            for date in dates {
                let name = format!("placed_day_{}_{}", plan.team.id, date);
                let idx = model.new_bool_var(&name);
                placed_day.insert((plan.team.id.clone(), date), idx);
            }

            let name = format!("buf_ok_{}", plan.team.id);
            buf_ok.insert(plan.team.id.clone(), model.new_bool_var(&name));
        }

        let mut w = HashMap::new();
        for person in loadable {
            let name = format!("w_{person}");
            w.insert(person.clone(), model.new_int_var(0, w_upper_bound, &name));
        }
        let wmax = model.new_int_var(0, w_upper_bound, "wmax");

        let mut v = HashMap::new();
        for plan in plans {
            let mut dates: Vec<NaiveDate> = plan.candidates.iter().map(|c| c.date).collect();
            dates.sort();
            dates.dedup();
            let date_set: std::collections::HashSet<NaiveDate> = dates.iter().copied().collect();
            for date in &dates {
                let next = *date + chrono::Duration::days(1);
                if date_set.contains(&next) {
                    let name = format!("v_{}_{}", plan.team.id, date);
                    v.insert((plan.team.id.clone(), *date), model.new_int_var(0, 1, &name));
                }
            }
        }

        Self { y, x, z, placed_day, buf_ok, w, wmax, v }
    }
}
