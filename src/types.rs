//! Common identifier types shared across the engine

use serde::{Deserialize, Serialize};

/// A person's unique identifier
pub type PersonId = String;

/// A team's unique identifier
pub type TeamId = String;

/// A 30-minute slot index into the working day (`0 .. slots_per_day`)
pub type SlotIndex = u32;

/// Monotone `(date, start_slot)` ordering key, see [`crate::timegrid::TimeGrid::dt_idx`]
pub type DtIdx = i64;

/// Availability cell codes from the raw input, normalized on ingest.
///
/// Any raw value outside `1..=4` (including `0`) is normalized to
/// [`AvailabilityCode::Unavailable`] per the data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AvailabilityCode {
    /// Preferred
    Preferred = 1,
    /// Tolerated (soft penalty alpha)
    Tolerated = 2,
    /// Undetermined (soft penalty beta, beta > alpha)
    Undetermined = 3,
    /// Unavailable
    Unavailable = 4,
}

impl AvailabilityCode {
    /// Normalize a raw ingest value, mapping anything outside `1..=4` to `Unavailable`.
    #[must_use]
    pub fn normalize(raw: i32) -> Self {
        match raw {
            1 => Self::Preferred,
            2 => Self::Tolerated,
            3 => Self::Undetermined,
            _ => Self::Unavailable,
        }
    }

    /// `true` for any code other than `Unavailable`
    #[must_use]
    pub fn can_attend(self) -> bool {
        !matches!(self, Self::Unavailable)
    }

    /// Soft penalty contribution for this code, given the configured alpha/beta weights.
    #[must_use]
    pub fn penalty(self, pen2: i64, pen3: i64) -> i64 {
        match self {
            Self::Preferred => 0,
            Self::Tolerated => pen2,
            Self::Undetermined => pen3,
            Self::Unavailable => 0, // never charged: excluded by the projector
        }
    }
}
