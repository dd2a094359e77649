//! # roster-engine
//!
//! The scheduling engine for committee meeting rosters: preprocessing that
//! projects raw availability and pre-committed meetings into a tractable
//! candidate space, plus a mixed-integer optimization model that jointly
//! selects meeting slots, assigns commissioners, enforces sequencing and
//! handover continuity, and balances personal load.
//!
//! ## Modules
//!
//! - [`domain`] - the data model: persons, teams, availability, meetings
//! - [`config`] - time grid shape, penalty weights, objective weights, solver control
//! - [`timegrid`] - slot/time conversions and the monotone `dt_idx` ordering
//! - [`projector`] - feasibility projection: `can_attend`, `occupied`, per-team candidates
//! - [`fixed_index`] - per-team chronological grouping of pre-committed meetings
//! - [`milp`] - the MILP core: variables, hard constraints, objective, solve, reconstruction
//! - [`invariants`] - post-solve auditor re-verifying a solution independently of the solver
//! - [`engine`] - the top-level `solve` entry point
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roster_engine::engine;
//! use roster_engine::config::EngineConfig;
//! # use roster_engine::domain::InputBundle;
//! # fn get_bundle() -> InputBundle { unimplemented!() }
//!
//! let bundle = get_bundle();
//! let output = engine::solve(&bundle, &EngineConfig::default()).unwrap();
//! println!("feasible: {}, meetings: {}", output.feasible, output.meetings.len());
//! ```
//!
//! ## Feature Flags
//!
//! - `ffi` - link the OR-Tools CP-SAT backend (`roster-sys`) required by `milp::solve`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod domain;
pub mod engine;
pub mod fixed_index;
pub mod invariants;
pub mod milp;
pub mod projector;
pub mod report;
pub mod timegrid;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Common imports for callers driving a solve end to end.
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::domain::{Availability, CandidateSlot, FixedMeeting, InputBundle, Person, SolutionMeeting, Team};
    pub use crate::engine::solve;
    pub use crate::invariants::{check_invariants, InvariantViolation};
    pub use crate::report::{EngineOutput, SolveStatus};
    pub use crate::Error;
    pub use crate::Result;
}
