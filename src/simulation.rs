// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tempo Clock Simulation Suite ("Tempo") - Simulation Core

use wasm_bindgen::prelude::*;

use crate::allocator::{optimum_spend, AllocError};
use crate::config::{ConfigError, SimConfig};
use crate::history::GameHistory;
use crate::types::*;

// ─── ClockSimulation struct ──────────────────────────────────────────────────

#[wasm_bindgen]
pub struct ClockSimulation {
    pub(crate) config: SimConfig,
    pub(crate) clock_ms: f64,
    pub(crate) adjust: TimeAdjust,
    pub(crate) next_move: u32,
    pub(crate) outcome: SimOutcome,
    pub(crate) history: GameHistory,
}

// ─── Internal Logic (Testable, pure Rust) ────────────────────────────────────

impl ClockSimulation {
    pub fn with_config(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            clock_ms: config.initial_clock_ms,
            adjust: TimeAdjust::Unset,
            next_move: config.start_move,
            outcome: SimOutcome::Running,
            history: GameHistory::default(),
            config,
        })
    }

    /// Simulate one move.
    ///
    /// Returns `Ok(None)` once the simulation is terminal (ceiling reached or
    /// clock forfeited). The allocator's domain error propagates untouched:
    /// it means the clock was already gone when the move started, which the
    /// forfeiture bookkeeping should have caught one move earlier.
    pub fn step_core(&mut self) -> Result<Option<MoveRecord>, AllocError> {
        if self.outcome.is_terminal() {
            return Ok(None);
        }
        if self.next_move >= self.config.move_ceiling {
            self.outcome = SimOutcome::Completed { final_clock_ms: self.clock_ms };
            return Ok(None);
        }

        let move_number = self.next_move;
        let clock_before_secs = self.clock_ms / 1000.0;

        let state = ClockState {
            remaining_ms: self.clock_ms,
            increment_ms: self.config.increment_ms,
            move_number,
        };
        let allocation = optimum_spend(&state, self.adjust, self.config.move_overhead_ms)?;
        self.adjust = allocation.adjust;
        self.history.push(move_number, clock_before_secs, allocation.spend_ms);

        self.clock_ms -= allocation.spend_ms;
        self.clock_ms -= self.config.move_overhead_ms;

        if self.clock_ms < 0.0 {
            self.outcome = SimOutcome::Forfeited {
                move_number,
                deficit_ms: -self.clock_ms,
            };
        } else {
            // Increment is credited only after the move completes in time.
            self.clock_ms += self.config.increment_ms;
            self.next_move += 1;
        }

        Ok(Some(MoveRecord {
            move_number,
            clock_before_secs,
            spend_ms: allocation.spend_ms,
            clock_after_ms: self.clock_ms,
            outcome: self.outcome,
        }))
    }

    /// Run to termination, reporting a forfeiture when one occurs.
    pub fn run_core(&mut self) -> Result<SimOutcome, AllocError> {
        while let Some(record) = self.step_core()? {
            if let SimOutcome::Forfeited { move_number, deficit_ms } = record.outcome {
                println!(
                    "move {}: out of time ({:.0} ms overdrawn), game forfeited",
                    move_number, deficit_ms
                );
            }
        }
        Ok(self.outcome)
    }

    pub(crate) fn reset_core(&mut self) {
        self.clock_ms = self.config.initial_clock_ms;
        self.adjust = TimeAdjust::Unset;
        self.next_move = self.config.start_move;
        self.outcome = SimOutcome::Running;
        self.history = GameHistory::default();
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn outcome(&self) -> SimOutcome {
        self.outcome
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn adjust(&self) -> TimeAdjust {
        self.adjust
    }

    /// Aggregate the recorded game into [`ClockStats`].
    pub fn stats(&self) -> ClockStats {
        let spends = self.history.spend_ms();
        let moves_played = spends.len() as u32;
        let total_spent_ms: f64 = spends.iter().sum();
        let (min_spend_ms, max_spend_ms, avg_spend_ms) = if spends.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            (
                spends.iter().cloned().fold(f64::INFINITY, f64::min),
                spends.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
                total_spent_ms / spends.len() as f64,
            )
        };

        let (forfeited, forfeit_move) = match self.outcome {
            SimOutcome::Forfeited { move_number, .. } => (true, Some(move_number)),
            _ => (false, None),
        };
        let increments_credited = moves_played.saturating_sub(u32::from(forfeited));

        let lowest_clock_secs = self
            .history
            .clock_secs()
            .iter()
            .cloned()
            .chain(std::iter::once(self.clock_ms / 1000.0))
            .fold(f64::INFINITY, f64::min);

        ClockStats {
            moves_played,
            forfeited,
            forfeit_move,
            final_clock_ms: self.clock_ms,
            total_spent_ms,
            min_spend_ms,
            max_spend_ms,
            avg_spend_ms,
            increment_income_ms: increments_credited as f64 * self.config.increment_ms,
            lowest_clock_secs,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
