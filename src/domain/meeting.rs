//! Meeting-shaped entities: a candidate start slot, a fixed meeting already
//! on the calendar, and a solved meeting emitted by the MILP core.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{DtIdx, PersonId, SlotIndex, TeamId};

/// A start slot the projector has determined is feasible for a team: every
/// commissioner-eligible attendee assigned to it can attend every slot the
/// meeting would occupy, and it doesn't collide with a fixed meeting.
///
/// Ordering is by `dt_idx` ascending; candidate *index* within a team's list
/// (not the slot value itself) is what the sequencing constraints in the
/// MILP core forbid inverting (§4.4 Design Notes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub date: NaiveDate,
    pub start_slot: SlotIndex,
    pub dt_idx: DtIdx,
}

/// A meeting already committed to the calendar before this solve runs.
///
/// Fixed meetings are never moved or cancelled by the engine; they only
/// constrain candidate generation (occupied slots, `Forb_t` attendance) and
/// seed the per-team sequencing tail (§4.3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedMeeting {
    pub team_id: TeamId,
    pub date: NaiveDate,
    pub start_slot: SlotIndex,
    pub dt_idx: DtIdx,
    /// Must equal the team's `leader_id`; kept here too so a `FixedMeeting`
    /// is self-describing without a team lookup.
    pub leader_id: PersonId,
    /// The 4 distinct commissioners already committed to attend.
    pub commissioners: Vec<PersonId>,
    /// Position in the team's chronological chain, if known at ingest time.
    pub sequence: Option<u32>,
}

/// A meeting the MILP core decided to hold: which team, when, who chairs
/// and staffs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionMeeting {
    pub team_id: TeamId,
    pub date: NaiveDate,
    pub start_slot: SlotIndex,
    pub dt_idx: DtIdx,
    pub leader_id: PersonId,
    /// Commissioners assigned to this meeting, `|commissioners| = 4`.
    pub commissioners: Vec<PersonId>,
    /// 1-based position within the team's full meeting run (fixed prefix
    /// counted first), used to determine handover relationships.
    pub sequence: u32,
    /// The single commissioner this meeting shares with the immediately
    /// preceding meeting in the team's run, if any (handover person).
    pub handover_from_previous: Option<PersonId>,
}
