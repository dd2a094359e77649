//! The engine's output shape: the terminal outcome of one solve.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::SolutionMeeting;

/// Terminal status of a solve, modeled as data rather than a `Result`
/// error — infeasibility and time-limited-feasible are expected, ordinary
/// outcomes (§7), not exceptional control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// Proven optimal within the configured MIP gap.
    Optimal,
    /// Time limit reached with a usable incumbent; reported as feasible.
    Feasible,
    /// Proven infeasible: no assignment satisfies the hard constraints.
    Infeasible,
    /// Time limit reached with no incumbent at all.
    TimeLimit,
}

impl SolveStatus {
    /// `true` for the two statuses that carry a usable solution.
    #[must_use]
    pub fn is_feasible(self) -> bool {
        matches!(self, Self::Optimal | Self::Feasible)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Optimal => "OPTIMAL",
            Self::Feasible => "FEASIBLE",
            Self::Infeasible => "INFEASIBLE",
            Self::TimeLimit => "TIME_LIMIT",
        };
        f.write_str(s)
    }
}

/// The result of one solve: either a roster with a terminal status, or (on
/// infeasibility) an empty roster with a best-effort diagnostic summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineOutput {
    pub feasible: bool,
    pub status: SolveStatus,
    /// Empty when `feasible` is `false`.
    pub meetings: Vec<SolutionMeeting>,
    /// Best-effort, truncated irreducible-infeasible-subset-style summary.
    /// `None` on a feasible outcome, or when infeasible but no structural
    /// cause could be isolated.
    pub iis_summary: Option<String>,
}

impl EngineOutput {
    #[must_use]
    pub fn infeasible(status: SolveStatus, iis_summary: Option<String>) -> Self {
        Self { feasible: false, status, meetings: Vec::new(), iis_summary }
    }

    #[must_use]
    pub fn feasible(status: SolveStatus, meetings: Vec<SolutionMeeting>) -> Self {
        Self { feasible: true, status, meetings, iis_summary: None }
    }
}
