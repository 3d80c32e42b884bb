// Scenario and Sweep Runners
// Deterministic scenario runs plus a seeded randomized-configuration sweep
// validating the engine's invariants (spend floor, replay exactness,
// allocator monotonicity, forfeiture bookkeeping)

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tempo_engine::*;

use crate::report::*;
use crate::scenarios::Scenario;
use crate::time_series::MoveSeriesRecorder;

use std::time::Instant;

// ─── Single Scenario ────────────────────────────────────────────────────────

pub fn run_single(scenario: &Scenario, time_series_dir: Option<&std::path::Path>) -> BenchResult {
    let start = Instant::now();

    let mut sim = match ClockSimulation::with_config(scenario.config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("  {}: rejected configuration: {}", scenario.name, e);
            return failed_result(scenario, start.elapsed().as_millis());
        }
    };

    let mut series = time_series_dir.map(|_| MoveSeriesRecorder::new());
    let mut alloc_error = false;

    loop {
        match sim.step_core() {
            Ok(Some(record)) => {
                if let Some(ts) = series.as_mut() {
                    ts.record(&record);
                }
            }
            Ok(None) => break,
            Err(e) => {
                eprintln!("  {}: allocator fault: {}", scenario.name, e);
                alloc_error = true;
                break;
            }
        }
    }

    if let (Some(ts), Some(dir)) = (&series, time_series_dir) {
        let path = dir.join(format!("{}.jsonl", scenario.name.to_lowercase()));
        if let Err(e) = ts.write_jsonl(&path) {
            eprintln!("  Warning: failed to write time series: {}", e);
        }
    }

    let stats = sim.stats();
    let replay_exact = sim.history().verify_replay(&scenario.config).is_ok();
    let pass = evaluate(scenario, &stats, replay_exact, alloc_error);

    BenchResult {
        scenario: scenario.label.to_string(),
        name: scenario.name.to_string(),
        category: scenario.category.to_string(),
        pass,
        moves_played: stats.moves_played,
        forfeited: stats.forfeited,
        forfeit_move: stats.forfeit_move,
        final_clock_ms: stats.final_clock_ms,
        lowest_clock_secs: stats.lowest_clock_secs,
        total_spent_ms: stats.total_spent_ms,
        min_spend_ms: stats.min_spend_ms,
        max_spend_ms: stats.max_spend_ms,
        avg_spend_ms: stats.avg_spend_ms,
        increment_income_ms: stats.increment_income_ms,
        replay_exact,
        alloc_error,
        elapsed_ms: start.elapsed().as_millis(),
    }
}

fn evaluate(scenario: &Scenario, stats: &ClockStats, replay_exact: bool, alloc_error: bool) -> bool {
    let c = &scenario.criteria;
    let mut pass = !alloc_error;

    if c.require_survival && stats.forfeited {
        pass = false;
    }
    if let Some((lo, hi)) = c.expect_forfeit {
        match stats.forfeit_move {
            Some(m) if m >= lo && m <= hi => {}
            _ => pass = false,
        }
    }
    if let Some(min) = c.min_final_clock_ms {
        if stats.final_clock_ms < min {
            pass = false;
        }
    }
    if let Some(max) = c.max_spend_ms {
        if stats.max_spend_ms > max {
            pass = false;
        }
    }
    if c.require_replay_exact && !replay_exact {
        pass = false;
    }
    // The spend floor holds unconditionally.
    if stats.moves_played > 0 && stats.min_spend_ms < 10.0 {
        pass = false;
    }

    pass
}

fn failed_result(scenario: &Scenario, elapsed_ms: u128) -> BenchResult {
    BenchResult {
        scenario: scenario.label.to_string(),
        name: scenario.name.to_string(),
        category: scenario.category.to_string(),
        pass: false,
        moves_played: 0,
        forfeited: false,
        forfeit_move: None,
        final_clock_ms: 0.0,
        lowest_clock_secs: 0.0,
        total_spent_ms: 0.0,
        min_spend_ms: 0.0,
        max_spend_ms: 0.0,
        avg_spend_ms: 0.0,
        increment_income_ms: 0.0,
        replay_exact: false,
        alloc_error: false,
        elapsed_ms,
    }
}

// ─── Randomized Sweep ───────────────────────────────────────────────────────

/// Run `n_samples` games over randomized time controls and count invariant
/// violations. The engine stays deterministic; randomness only picks the
/// configurations.
pub fn run_sweep(n_samples: usize, base_seed: u64) -> SweepReport {
    let mut rng = ChaCha8Rng::seed_from_u64(base_seed);

    let mut survived = 0usize;
    let mut forfeited = 0usize;
    let mut alloc_errors = 0usize;
    let mut replay_violations = 0usize;
    let mut spend_floor_violations = 0usize;
    let mut monotonicity_violations = 0usize;

    let mut moves_samples = Vec::with_capacity(n_samples);
    let mut spent_samples = Vec::with_capacity(n_samples);
    let mut final_samples = Vec::with_capacity(n_samples);

    for _ in 0..n_samples {
        // Clocks from 1s to ~50min, log-uniform; increments and lag in the
        // ranges real servers use.
        let initial_clock_ms = 10f64.powf(rng.gen_range(3.0..6.5)).floor();
        let increment_ms = if rng.gen_bool(0.3) {
            0.0
        } else {
            rng.gen_range(0.0..10_000.0f64).floor()
        };
        let move_overhead_ms = if rng.gen_bool(0.5) {
            0.0
        } else {
            rng.gen_range(0.0..50.0f64).floor()
        };
        let start_move = rng.gen_range(1..=30u32);
        let move_ceiling = rng.gen_range(150..=300u32);

        let config = SimConfig {
            initial_clock_ms,
            increment_ms,
            move_overhead_ms,
            start_move,
            move_ceiling,
        };
        let mut sim = match ClockSimulation::with_config(config) {
            Ok(sim) => sim,
            Err(_) => continue,
        };

        // Quiet run: forfeiture is an expected outcome here, not news.
        let mut errored = false;
        loop {
            match sim.step_core() {
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err(_) => {
                    errored = true;
                    break;
                }
            }
        }

        let stats = sim.stats();
        if errored {
            alloc_errors += 1;
        } else if stats.forfeited {
            forfeited += 1;
        } else {
            survived += 1;
        }
        if stats.moves_played > 0 && stats.min_spend_ms < 10.0 {
            spend_floor_violations += 1;
        }
        if sim.history().verify_replay(&config).is_err() {
            replay_violations += 1;
        }

        moves_samples.push(stats.moves_played as f64);
        spent_samples.push(stats.total_spent_ms);
        final_samples.push(stats.final_clock_ms);

        // Allocator monotonicity spot check: more clock, never less spend
        // (increment, move and factor held fixed).
        let lo = rng.gen_range(1_000.0..500_000.0f64).floor();
        let hi = lo + rng.gen_range(1.0..500_000.0f64).floor();
        let probe = |remaining_ms: f64| {
            let state = ClockState { remaining_ms, increment_ms, move_number: 20 };
            optimum_spend(&state, TimeAdjust::Locked(1.0), move_overhead_ms)
                .map(|a| a.spend_ms)
        };
        if let (Ok(spend_lo), Ok(spend_hi)) = (probe(lo), probe(hi)) {
            if spend_hi < spend_lo {
                monotonicity_violations += 1;
            }
        }
    }

    SweepReport {
        n_samples,
        base_seed,
        survived,
        forfeited,
        alloc_errors,
        replay_violations,
        spend_floor_violations,
        monotonicity_violations,
        moves_played: Stats::from_samples(&moves_samples),
        total_spent_ms: Stats::from_samples(&spent_samples),
        final_clock_ms: Stats::from_samples(&final_samples),
    }
}
