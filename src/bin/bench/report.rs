// Benchmark Report Types
// Structured output for offline analysis of clock-depletion runs

use serde::Serialize;

// ─── Statistics (per-metric sweep aggregation) ──────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self { mean: 0.0, std_dev: 0.0, ci_lower: 0.0, ci_upper: 0.0, min: 0.0, max: 0.0, n: 0 };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let stderr = std_dev / (n as f64).sqrt();
        let z = 1.96; // 95% CI
        Self {
            mean,
            std_dev,
            ci_lower: mean - z * stderr,
            ci_upper: mean + z * stderr,
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }
}

// ─── Single-Scenario Result ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub scenario: String,
    pub name: String,
    pub category: String,
    pub pass: bool,
    pub moves_played: u32,
    pub forfeited: bool,
    pub forfeit_move: Option<u32>,
    pub final_clock_ms: f64,
    pub lowest_clock_secs: f64,
    pub total_spent_ms: f64,
    pub min_spend_ms: f64,
    pub max_spend_ms: f64,
    pub avg_spend_ms: f64,
    pub increment_income_ms: f64,
    pub replay_exact: bool,
    pub alloc_error: bool,
    pub elapsed_ms: u128,
}

// ─── Sweep Report (randomized-configuration invariant checks) ───────────────

#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub n_samples: usize,
    pub base_seed: u64,
    pub survived: usize,
    pub forfeited: usize,
    pub alloc_errors: usize,
    pub replay_violations: usize,
    pub spend_floor_violations: usize,
    pub monotonicity_violations: usize,
    pub moves_played: Stats,
    pub total_spent_ms: Stats,
    pub final_clock_ms: Stats,
}

impl SweepReport {
    pub fn clean(&self) -> bool {
        self.replay_violations == 0
            && self.spend_floor_violations == 0
            && self.monotonicity_violations == 0
    }
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub timestamp: String,
    pub version: &'static str,
    pub prng: &'static str,
    pub summary: Summary,
    pub scenarios: Vec<BenchResult>,
    pub sweep: Option<SweepReport>,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate: f64,
}
