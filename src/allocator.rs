// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tempo Clock Simulation Suite ("Tempo") - Time Allocator

//! Closed-form time allocation for a total-time-plus-increment clock.
//!
//! Maps the current [`ClockState`] and the game-long [`TimeAdjust`] factor to
//! a recommended spend for the next move. The curve constants are empirically
//! tuned values; they have no closed-form derivation.

use crate::types::{ClockState, TimeAdjust};

// ─── Tuned constants ─────────────────────────────────────────────────────────

/// Default moves-to-go estimate, in centi-moves (50.51 effective moves).
const DEFAULT_CENT_MTG: f64 = 5051.0;
/// Below this clock, moves-to-go shrinks proportionally to the clock.
const LOW_CLOCK_CUTOFF_MS: f64 = 1000.0;
/// Centi-moves assumed per millisecond of clock in the low-clock regime.
const CENT_MTG_PER_MS: f64 = 5.051;

/// Adjustment factor: gain and offset over log10 of the projected budget.
const ADJUST_LOG_GAIN: f64 = 0.3128;
const ADJUST_OFFSET: f64 = 0.4354;

/// Baseline per-second rate, its log-clock gain, and its hard cap.
const OPT_RATE_BASE: f64 = 0.0032116;
const OPT_RATE_LOG_GAIN: f64 = 0.000321123;
const OPT_RATE_CAP: f64 = 0.00508017;

/// Ply growth curve: offset, shift and exponent of the sub-linear term.
const SPEND_SCALE_BASE: f64 = 0.0121431;
const PLY_SHIFT: f64 = 2.94693;
const PLY_EXPONENT: f64 = 0.461073;
/// Ceiling on the spend scale, as a ratio of clock to projected budget.
const SPEND_SCALE_CAP_RATIO: f64 = 0.213035;

/// Never recommend thinking for less than this.
const MIN_SPEND_MS: f64 = 10.0;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Precondition violations; a clock at or below zero should have ended the
/// game before the allocator was consulted.
#[derive(Debug, thiserror::Error)]
pub enum AllocError {
    #[error("clock exhausted: {remaining_ms} ms remaining")]
    ClockExhausted { remaining_ms: f64 },
}

// ─── Allocation ──────────────────────────────────────────────────────────────

/// Recommended spend plus the factor now in effect (always `Locked`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    /// Whole milliseconds to spend on this move, never below 10.
    pub spend_ms: f64,
    pub adjust: TimeAdjust,
}

/// Compute the optimum spend for the next move.
///
/// Pure and deterministic. The caller owns persistence of the returned
/// factor: an `Unset` input computes it once from the projected budget, a
/// `Locked` input passes through untouched.
pub fn optimum_spend(
    clock: &ClockState,
    adjust: TimeAdjust,
    overhead_ms: f64,
) -> Result<Allocation, AllocError> {
    if clock.remaining_ms <= 0.0 {
        return Err(AllocError::ClockExhausted { remaining_ms: clock.remaining_ms });
    }

    let cent_mtg = if clock.remaining_ms < LOW_CLOCK_CUTOFF_MS {
        (clock.remaining_ms * CENT_MTG_PER_MS).floor()
    } else {
        DEFAULT_CENT_MTG
    };

    // Clock plus projected increment income, minus projected overhead cost,
    // floored at 1 ms so the log and the ratio below stay defined.
    let projected = (clock.increment_ms * (cent_mtg - 100.0)
        - overhead_ms * (200.0 + cent_mtg))
        / 100.0;
    let time_left = (clock.remaining_ms + projected.floor()).max(1.0);

    let factor = match adjust {
        TimeAdjust::Locked(v) => v,
        TimeAdjust::Unset => ADJUST_LOG_GAIN * time_left.log10() - ADJUST_OFFSET,
    };

    let logtime = (clock.remaining_ms / 1000.0).log10();
    let opt_rate = (OPT_RATE_BASE + OPT_RATE_LOG_GAIN * logtime).min(OPT_RATE_CAP);

    let spend_scale = (SPEND_SCALE_BASE
        + (clock.ply() + PLY_SHIFT).powf(PLY_EXPONENT) * opt_rate)
        .min(SPEND_SCALE_CAP_RATIO * clock.remaining_ms / time_left)
        * factor;

    let spend_ms = (spend_scale * time_left).floor().max(MIN_SPEND_MS);

    Ok(Allocation { spend_ms, adjust: TimeAdjust::Locked(factor) })
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(remaining_ms: f64, increment_ms: f64, move_number: u32) -> ClockState {
        ClockState { remaining_ms, increment_ms, move_number }
    }

    #[test]
    fn golden_reference_allocation() {
        let a = optimum_spend(&clock(60_000.0, 100.0, 11), TimeAdjust::Unset, 0.0)
            .expect("positive clock");
        assert_eq!(a.spend_ms, 2002.0);
        let factor = a.adjust.value().expect("factor locked after first call");
        assert!(
            (factor - 1.0699768513634227).abs() < 1e-12,
            "factor drifted: {}",
            factor
        );
    }

    #[test]
    fn first_call_factor_matches_closed_form() {
        // Projected budget for the golden input is 64_951 ms.
        let a = optimum_spend(&clock(60_000.0, 100.0, 11), TimeAdjust::Unset, 0.0)
            .expect("positive clock");
        let expected = ADJUST_LOG_GAIN * 64_951f64.log10() - ADJUST_OFFSET;
        assert_eq!(a.adjust.value(), Some(expected));
    }

    #[test]
    fn locked_factor_passes_through_unchanged() {
        let a = optimum_spend(&clock(60_000.0, 100.0, 11), TimeAdjust::Locked(0.5), 0.0)
            .expect("positive clock");
        assert_eq!(a.adjust, TimeAdjust::Locked(0.5));

        // Feeding a call's own factor back in reproduces the same spend.
        let first = optimum_spend(&clock(60_000.0, 100.0, 11), TimeAdjust::Unset, 0.0)
            .expect("positive clock");
        let second = optimum_spend(&clock(60_000.0, 100.0, 11), first.adjust, 0.0)
            .expect("positive clock");
        assert_eq!(first.spend_ms, second.spend_ms);
        assert_eq!(first.adjust, second.adjust);
    }

    #[test]
    fn spend_never_below_floor() {
        let a = optimum_spend(&clock(5.0, 0.0, 1), TimeAdjust::Unset, 0.0)
            .expect("positive clock");
        assert_eq!(a.spend_ms, 10.0);

        // A negative locked factor drives the raw optimum negative; the
        // floor still wins.
        let b = optimum_spend(&clock(2_000.0, 0.0, 5), TimeAdjust::Locked(-1.0), 0.0)
            .expect("positive clock");
        assert_eq!(b.spend_ms, 10.0);
    }

    #[test]
    fn low_clock_branch_boundary_is_strict() {
        let below = optimum_spend(&clock(999.0, 0.0, 30), TimeAdjust::Unset, 0.0)
            .expect("positive clock");
        let at = optimum_spend(&clock(1000.0, 0.0, 30), TimeAdjust::Unset, 0.0)
            .expect("positive clock");
        assert_eq!(below.spend_ms, 16.0);
        assert_eq!(at.spend_ms, 17.0);

        let f_below = below.adjust.value().expect("locked");
        let f_at = at.adjust.value().expect("locked");
        assert!((f_below - 0.5028640847170873).abs() < 1e-12, "999 ms factor: {}", f_below);
        assert!((f_at - 0.5030000000000001).abs() < 1e-12, "1000 ms factor: {}", f_at);
    }

    #[test]
    fn exhausted_clock_is_a_domain_error() {
        for ms in [0.0, -50.0] {
            let result = optimum_spend(&clock(ms, 100.0, 5), TimeAdjust::Unset, 0.0);
            assert!(
                matches!(result, Err(AllocError::ClockExhausted { .. })),
                "{} ms must be rejected",
                ms
            );
        }
    }

    #[test]
    fn spend_monotonic_in_remaining_time() {
        let mut prev = 0.0;
        let mut remaining = 1_000.0;
        while remaining <= 200_000.0 {
            let a = optimum_spend(&clock(remaining, 100.0, 20), TimeAdjust::Locked(1.0), 0.0)
                .expect("positive clock");
            assert!(
                a.spend_ms >= prev,
                "spend shrank from {} to {} at {} ms remaining",
                prev,
                a.spend_ms,
                remaining
            );
            prev = a.spend_ms;
            remaining += 157.0;
        }
    }

    #[test]
    fn overhead_shrinks_the_projected_budget() {
        let without = optimum_spend(&clock(60_000.0, 100.0, 15), TimeAdjust::Locked(1.0), 0.0)
            .expect("positive clock");
        let with = optimum_spend(&clock(60_000.0, 100.0, 15), TimeAdjust::Locked(1.0), 25.0)
            .expect("positive clock");
        assert!(
            with.spend_ms <= without.spend_ms,
            "overhead {} must not raise the spend {}",
            with.spend_ms,
            without.spend_ms
        );
    }
}
