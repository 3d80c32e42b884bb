// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tempo Clock Simulation Suite ("Tempo") - Type Definitions

use serde::{Serialize, Deserialize};

// ─── Clock State ─────────────────────────────────────────────────────────────

/// Game clock immediately before a move is decided.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClockState {
    pub remaining_ms: f64,
    pub increment_ms: f64,
    /// Move index in full moves, 1-based.
    pub move_number: u32,
}

impl ClockState {
    /// Half-move count driving the allocation curve.
    pub fn ply(&self) -> f64 {
        2.0 * self.move_number as f64
    }
}

// ─── Time Adjustment Factor ──────────────────────────────────────────────────

/// Game-long scaling applied to the nominal optimum spend.
///
/// Derived once from the first move's projected time budget and then carried
/// unchanged for the rest of the game, whatever its sign. `Unset` marks the
/// pre-first-move state; the allocator always hands back `Locked`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum TimeAdjust {
    Unset,
    Locked(f64),
}

impl TimeAdjust {
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Locked(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Locked(v) => Some(*v),
            Self::Unset => None,
        }
    }
}

impl Default for TimeAdjust {
    fn default() -> Self { TimeAdjust::Unset }
}

// ─── Simulation Outcome ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum SimOutcome {
    /// Moves remain below the ceiling and the clock is non-negative.
    Running,
    /// TERMINAL: move ceiling reached with time to spare.
    Completed { final_clock_ms: f64 },
    /// TERMINAL: the clock went negative on this move.
    Forfeited { move_number: u32, deficit_ms: f64 },
}

impl SimOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }

    pub fn is_forfeit(&self) -> bool {
        matches!(self, Self::Forfeited { .. })
    }
}

// ─── MoveRecord ──────────────────────────────────────────────────────────────

/// One simulated move, as handed to the visualization consumer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveRecord {
    pub move_number: u32,
    /// Clock at the start of the move, in seconds.
    pub clock_before_secs: f64,
    pub spend_ms: f64,
    /// Clock after spend, overhead and (when not forfeited) increment.
    pub clock_after_ms: f64,
    pub outcome: SimOutcome,
}

// ─── ClockStats ──────────────────────────────────────────────────────────────

/// Aggregate view over a finished (or aborted) game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockStats {
    pub moves_played: u32,
    pub forfeited: bool,
    pub forfeit_move: Option<u32>,
    pub final_clock_ms: f64,
    pub total_spent_ms: f64,
    pub min_spend_ms: f64,
    pub max_spend_ms: f64,
    pub avg_spend_ms: f64,
    /// Increments credited over the game; the forfeiting move earns none.
    pub increment_income_ms: f64,
    pub lowest_clock_secs: f64,
}
