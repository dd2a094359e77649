//! The data model: persons, teams, availability, fixed and solved meetings.
//!
//! All entities here are constructed once from ingest and are immutable
//! through a solve (§3 Lifecycle). The MILP core only ever *emits*
//! [`SolutionMeeting`] values; it never rewrites a [`FixedMeeting`].

mod availability;
mod bundle;
mod meeting;
mod person;
mod team;

pub use availability::Availability;
pub use bundle::InputBundle;
pub use meeting::{CandidateSlot, FixedMeeting, SolutionMeeting};
pub use person::Person;
pub use team::Team;
