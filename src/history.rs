// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tempo Clock Simulation Suite ("Tempo") - Game History

//! Per-move history and its replay invariant.
//!
//! `GameHistory` is what the simulation hands to the visualization consumer:
//! three index-aligned, append-only sequences (move number, clock at the
//! start of the move in seconds, spend in milliseconds). `verify_replay`
//! re-runs the clock-update arithmetic over the recorded spends and demands
//! the recorded clock sequence back, exactly — any drift means the history
//! and the simulator disagree about what happened.

use serde::{Serialize, Deserialize};

use crate::config::SimConfig;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Violations detected by the replay verifier.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("history misaligned: {moves} moves, {clocks} clock samples, {spends} spends")]
    Misaligned { moves: usize, clocks: usize, spends: usize },

    #[error("replay diverged at move {move_number}: recorded {recorded_secs}s, replayed {replayed_secs}s")]
    Divergence {
        move_number: u32,
        recorded_secs: f64,
        replayed_secs: f64,
    },

    #[error("clock went negative at move {move_number} before the final record")]
    EarlyForfeit { move_number: u32 },
}

// ─── GameHistory ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameHistory {
    moves: Vec<u32>,
    clock_secs: Vec<f64>,
    spend_ms: Vec<f64>,
}

impl GameHistory {
    /// Append one completed move. Keeping the three sequences behind a single
    /// push is what makes the alignment invariant structural.
    pub fn push(&mut self, move_number: u32, clock_secs: f64, spend_ms: f64) {
        self.moves.push(move_number);
        self.clock_secs.push(clock_secs);
        self.spend_ms.push(spend_ms);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[u32] {
        &self.moves
    }

    /// Clock at the start of each move, in seconds.
    pub fn clock_secs(&self) -> &[f64] {
        &self.clock_secs
    }

    pub fn spend_ms(&self) -> &[f64] {
        &self.spend_ms
    }

    pub fn last_move(&self) -> Option<u32> {
        self.moves.last().copied()
    }

    /// Replay the recorded spends through the clock-update arithmetic and
    /// check that the recorded clock sequence reproduces exactly.
    ///
    /// The replay applies the same operations in the same order as the
    /// simulator (spend, then overhead, then — when the clock survives —
    /// increment), so exact `f64` equality is the correct comparison.
    pub fn verify_replay(&self, config: &SimConfig) -> Result<(), ReplayError> {
        if self.moves.len() != self.clock_secs.len() || self.moves.len() != self.spend_ms.len() {
            return Err(ReplayError::Misaligned {
                moves: self.moves.len(),
                clocks: self.clock_secs.len(),
                spends: self.spend_ms.len(),
            });
        }

        let mut clock_ms = config.initial_clock_ms;
        for i in 0..self.moves.len() {
            let replayed_secs = clock_ms / 1000.0;
            if replayed_secs != self.clock_secs[i] {
                return Err(ReplayError::Divergence {
                    move_number: self.moves[i],
                    recorded_secs: self.clock_secs[i],
                    replayed_secs,
                });
            }

            clock_ms -= self.spend_ms[i];
            clock_ms -= config.move_overhead_ms;
            if clock_ms < 0.0 {
                // Forfeiture is only legal on the last recorded move.
                if i + 1 != self.moves.len() {
                    return Err(ReplayError::EarlyForfeit { move_number: self.moves[i] });
                }
                break;
            }
            clock_ms += config.increment_ms;
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimConfig {
        SimConfig {
            initial_clock_ms: 1_000.0,
            increment_ms: 50.0,
            move_overhead_ms: 10.0,
            start_move: 1,
            move_ceiling: 10,
        }
    }

    fn recorded() -> GameHistory {
        // Hand-walked: 1000 -> -200 -10 +50 = 840 -> -300 -10 +50 = 580
        let mut h = GameHistory::default();
        h.push(1, 1.0, 200.0);
        h.push(2, 0.84, 300.0);
        h.push(3, 0.58, 100.0);
        h
    }

    #[test]
    fn replay_accepts_a_consistent_history() {
        assert!(recorded().verify_replay(&config()).is_ok());
    }

    #[test]
    fn replay_detects_a_tampered_spend() {
        let mut h = recorded();
        h.spend_ms[1] += 1.0;
        let err = h.verify_replay(&config()).expect_err("tampered spend must diverge");
        assert!(
            matches!(err, ReplayError::Divergence { move_number: 3, .. }),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn replay_detects_misalignment() {
        let mut h = recorded();
        h.spend_ms.pop();
        assert!(matches!(
            h.verify_replay(&config()),
            Err(ReplayError::Misaligned { moves: 3, clocks: 3, spends: 2 })
        ));
    }

    #[test]
    fn replay_allows_terminal_forfeit_only() {
        // 1000 -> -800 -10 +50 = 240 -> -300 -10 = -70: forfeit on move 2.
        let mut h = GameHistory::default();
        h.push(1, 1.0, 800.0);
        h.push(2, 0.24, 300.0);
        assert!(h.verify_replay(&config()).is_ok());

        // The same deficit with a move recorded after it is corrupt.
        h.push(3, -0.07, 100.0);
        assert!(matches!(
            h.verify_replay(&config()),
            Err(ReplayError::EarlyForfeit { move_number: 2 })
        ));
    }

    #[test]
    fn accessors_stay_aligned() {
        let h = recorded();
        assert_eq!(h.len(), 3);
        assert!(!h.is_empty());
        assert_eq!(h.moves(), &[1, 2, 3]);
        assert_eq!(h.last_move(), Some(3));
        assert_eq!(h.clock_secs().len(), h.spend_ms().len());
    }
}
