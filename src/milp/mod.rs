//! MILP Core (§4.4): variables, hard constraints, objective, solver
//! control, and solution reconstruction. The CP-SAT backend is only
//! available under the `ffi` feature (which turns on `roster-sys/link`);
//! without it, [`solve`] returns [`crate::Error::FfiRequired`] while the
//! rest of the crate's preprocessing stays fully usable.

mod iis;
pub mod team_plan;

#[cfg(feature = "ffi")]
mod constraints;
#[cfg(feature = "ffi")]
mod objective;
#[cfg(feature = "ffi")]
mod reconstruct;
#[cfg(feature = "ffi")]
mod variables;

use team_plan::TeamPlan;

use crate::config::EngineConfig;
use crate::domain::InputBundle;
use crate::fixed_index::FixedMeetingIndex;
use crate::projector::Projector;
use crate::report::{EngineOutput, SolveStatus};
use crate::timegrid::TimeGrid;
use crate::Result;

fn build_plans<'a>(bundle: &'a InputBundle, projector: &Projector<'_>, fixed_index: &FixedMeetingIndex) -> Vec<TeamPlan<'a>> {
    bundle
        .teams
        .iter()
        .map(|team| TeamPlan::build(bundle, team, projector, fixed_index))
        .collect()
}

#[cfg(feature = "ffi")]
pub fn solve(bundle: &InputBundle, config: &EngineConfig, grid: &TimeGrid, projector: &Projector<'_>, fixed_index: &FixedMeetingIndex) -> Result<EngineOutput> {
    use roster_sys::safe::CpModel;
    use roster_sys::OrtoolsStatus;

    let plans = build_plans(bundle, projector, fixed_index);

    let loadable: Vec<String> = {
        let mut people: std::collections::BTreeSet<String> = std::collections::BTreeSet::new();
        for plan in &plans {
            people.insert(plan.team.leader_id.clone());
            people.extend(plan.eligible.iter().cloned());
        }
        people.into_iter().collect()
    };

    let w_upper_bound: i64 = plans
        .iter()
        .map(|p| i64::from(p.fixed_count) + i64::from(p.k_total))
        .sum::<i64>()
        .max(1);

    let mut model = CpModel::new();
    let vars = variables::Variables::build(&mut model, &plans, &loadable, w_upper_bound);
    constraints::build_all(&mut model, &plans, &vars, fixed_index, grid);
    objective::build_and_apply(&mut model, bundle, config, grid, &plans, &vars);

    let solution = model.solve(f64::from(config.solver.time_limit_sec));
    let status = solution.status();

    match status {
        OrtoolsStatus::Optimal | OrtoolsStatus::Feasible => {
            let solve_status = if status == OrtoolsStatus::Optimal {
                SolveStatus::Optimal
            } else {
                SolveStatus::Feasible
            };
            let mut meetings = Vec::new();
            for (team, plan) in plans.iter().enumerate() {
                meetings.extend(reconstruct::reconstruct_team(plan, team, &vars, &solution, fixed_index));
            }
            Ok(EngineOutput::feasible(solve_status, meetings))
        }
        OrtoolsStatus::Infeasible | OrtoolsStatus::Unbounded | OrtoolsStatus::ModelInvalid => {
            Ok(EngineOutput::infeasible(SolveStatus::Infeasible, iis::summarize(&plans)))
        }
        OrtoolsStatus::Unknown => Ok(EngineOutput::infeasible(SolveStatus::TimeLimit, iis::summarize(&plans))),
        OrtoolsStatus::Error => Err(crate::Error::internal("CP-SAT backend returned Error status")),
    }
}

#[cfg(not(feature = "ffi"))]
pub fn solve(_bundle: &InputBundle, _config: &EngineConfig, _grid: &TimeGrid, _projector: &Projector<'_>, _fixed_index: &FixedMeetingIndex) -> Result<EngineOutput> {
    Err(crate::Error::ffi_required("milp::solve"))
}

/// Best-effort structural diagnostics, exposed even without the `ffi`
/// feature so callers can sanity-check an instance before attempting to link.
pub fn preflight_summary(bundle: &InputBundle, projector: &Projector<'_>, fixed_index: &FixedMeetingIndex) -> Option<String> {
    let plans = build_plans(bundle, projector, fixed_index);
    iis::summarize(&plans)
}
