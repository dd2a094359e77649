//! Top-level entry point: wires Time Grid → Feasibility Projector → Fixed
//! Meeting Index → MILP Core into one synchronous `solve` call (§5: no
//! `async`, no state shared across calls).

use tracing::{info, instrument};

use crate::config::EngineConfig;
use crate::domain::InputBundle;
use crate::fixed_index::FixedMeetingIndex;
use crate::milp;
use crate::projector::Projector;
use crate::report::EngineOutput;
use crate::timegrid::TimeGrid;
use crate::{Error, Result};

/// Structural integrity checks the core runs defensively even though §7
/// assigns this responsibility to an external validation front-end (belt
/// and suspenders, never a substitute for that front-end).
#[instrument(skip_all)]
pub fn validate_structural(bundle: &InputBundle) -> Result<()> {
    bundle.validate()?;
    for team in &bundle.teams {
        if team.deadline < bundle.generation_start.date() {
            return Err(Error::invalid_input(format!(
                "team '{}' deadline {} precedes generation_start {}",
                team.id, team.deadline, bundle.generation_start
            )));
        }
    }
    Ok(())
}

/// Solve one roster instance. Blocks the calling thread until the backend
/// returns (§5); two calls on disjoint inputs share no state.
#[instrument(skip_all, fields(teams = bundle.teams.len(), persons = bundle.persons.len()))]
pub fn solve(bundle: &InputBundle, config: &EngineConfig) -> Result<EngineOutput> {
    validate_structural(bundle)?;

    let grid = TimeGrid::new(config.time, bundle.generation_start.date());
    info!("time grid anchored");

    let projector = Projector::new(bundle, &grid, &config.time);
    info!("feasibility projector built");

    let fixed_index = FixedMeetingIndex::build(bundle);
    info!(teams_with_fixed = bundle.teams.iter().filter(|t| fixed_index.count(&t.id) > 0).count(), "fixed meeting index built");

    let output = milp::solve(bundle, config, &grid, &projector, &fixed_index)?;
    info!(feasible = output.feasible, status = %output.status, "solve complete");
    Ok(output)
}
