// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tempo Clock Simulation Suite ("Tempo") - Configuration

use serde::{Serialize, Deserialize};

/// Errors raised when a simulation configuration is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("initial clock must be positive, got {0} ms")]
    NonPositiveClock(f64),

    #[error("increment must be non-negative, got {0} ms")]
    NegativeIncrement(f64),

    #[error("move overhead must be non-negative, got {0} ms")]
    NegativeOverhead(f64),

    #[error("starting move must be at least 1, got {0}")]
    ZeroStartMove(u32),

    #[error("move ceiling {ceiling} leaves no moves after start move {start}")]
    EmptyMoveRange { start: u32, ceiling: u32 },
}

/// Time-control parameters for one simulated game.
///
/// Constructed once at startup and passed by reference into the simulator;
/// nothing in the engine mutates it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    pub initial_clock_ms: f64,
    pub increment_ms: f64,
    /// Fixed per-move cost (lag, bookkeeping) charged on every move on top
    /// of whatever the allocator recommends.
    pub move_overhead_ms: f64,
    /// First simulated move, 1-based.
    pub start_move: u32,
    /// Exclusive upper bound on the move range.
    pub move_ceiling: u32,
}

impl Default for SimConfig {
    /// The reference run: 60s + 0.1s, no overhead, moves 11..200.
    fn default() -> Self {
        Self {
            initial_clock_ms: 60_000.0,
            increment_ms: 100.0,
            move_overhead_ms: 0.0,
            start_move: 11,
            move_ceiling: 200,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_clock_ms <= 0.0 {
            return Err(ConfigError::NonPositiveClock(self.initial_clock_ms));
        }
        if self.increment_ms < 0.0 {
            return Err(ConfigError::NegativeIncrement(self.increment_ms));
        }
        if self.move_overhead_ms < 0.0 {
            return Err(ConfigError::NegativeOverhead(self.move_overhead_ms));
        }
        if self.start_move == 0 {
            return Err(ConfigError::ZeroStartMove(self.start_move));
        }
        if self.move_ceiling <= self.start_move {
            return Err(ConfigError::EmptyMoveRange {
                start: self.start_move,
                ceiling: self.move_ceiling,
            });
        }
        Ok(())
    }

    /// Number of moves the simulation will attempt when no forfeiture occurs.
    pub fn horizon(&self) -> u32 {
        self.move_ceiling - self.start_move
    }
}

// ===========================================================================
// Tests
// ===========================================================================
