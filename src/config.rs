//! Engine configuration: time grid shape, penalty weights, objective
//! weights, and solver control. Defaults are the values resolved from
//! the original implementation's `meeting_scheduler/config.py` (see
//! `SPEC_FULL.md` §3.1).

use serde::{Deserialize, Serialize};

/// Shape of the working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Hour of day the first slot begins (24h clock)
    pub day_start_hour: u32,
    /// Number of 30-minute slots in a working day
    pub slots_per_day: u32,
    /// Number of consecutive slots a meeting occupies
    pub meeting_slots: u32,
    /// Last slot index a meeting is allowed to start on
    pub latest_start_slot: u32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            day_start_hour: 9,
            slots_per_day: 26,
            meeting_slots: 4,
            latest_start_slot: 22,
        }
    }
}

/// Soft-penalty weights for non-preferred availability codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyConfig {
    /// Penalty for assigning a "tolerated" attendee
    pub value2: i64,
    /// Penalty for assigning an "undetermined" attendee
    pub value3: i64,
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        Self { value2: 1, value3: 2 }
    }
}

/// Relative weights between objective terms. Kept as `f64` because the
/// solver's objective is a weighted sum fed straight to CP-SAT/GLOP as
/// floating coefficients, unlike the per-attendee integer penalties above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveWeights {
    pub w_availability: f64,
    pub w_gap_rule: f64,
    pub w_finish_buffer: f64,
    pub w_normal_plus_one: f64,
    pub w_load_balance: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            w_availability: 1.0,
            w_gap_rule: 0.5,
            w_finish_buffer: 0.8,
            w_normal_plus_one: 0.4,
            w_load_balance: 1.5,
        }
    }
}

/// Solver control knobs passed through to the CP-SAT backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub time_limit_sec: u32,
    pub mip_gap: f64,
    /// `0` lets the backend pick its own thread count.
    pub threads: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_sec: 60,
            mip_gap: 0.01,
            threads: 0,
        }
    }
}

/// The complete, immutable configuration for one solve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub time: TimeConfig,
    pub penalty: PenaltyConfig,
    pub weights: ObjectiveWeights,
    pub solver: SolverConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_resolved_original_source_values() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.time.day_start_hour, 9);
        assert_eq!(cfg.time.slots_per_day, 26);
        assert_eq!(cfg.time.meeting_slots, 4);
        assert_eq!(cfg.time.latest_start_slot, 22);
        assert_eq!(cfg.penalty.value2, 1);
        assert_eq!(cfg.penalty.value3, 2);
        assert_eq!(cfg.solver.time_limit_sec, 60);
        assert!((cfg.solver.mip_gap - 0.01).abs() < f64::EPSILON);
    }
}
