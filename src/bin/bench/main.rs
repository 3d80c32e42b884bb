// Tempo Bench Runner — clock-depletion validation across standard time controls
// Deterministic scenario table, seedable randomized sweep, per-move JSONL output
//
// Usage:
//   cargo run --release --bin bench                     # All scenarios + 200-game sweep
//   cargo run --release --bin bench -- BULLET           # Filter scenarios by name
//   cargo run --release --bin bench -- --sweep 1000     # Larger sweep
//   cargo run --release --bin bench -- --sweep 0        # Scenarios only
//   cargo run --release --bin bench -- --seed 42        # Custom sweep seed
//   cargo run --release --bin bench -- --time-series    # Enable JSONL output

mod report;
mod runner;
mod scenarios;
mod time_series;

use report::*;
use scenarios::scenarios;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    sweep: usize,
    seed: u64,
    time_series: bool,
    filter: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        sweep: 200,
        seed: 0,
        time_series: false,
        filter: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--sweep" => {
                i += 1;
                if i < args.len() {
                    cli.sweep = args[i].parse().unwrap_or(200);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            "--time-series" => {
                cli.time_series = true;
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    let cli = parse_args();
    let all_scenarios = scenarios();

    let to_run: Vec<_> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all_scenarios.iter()
                .filter(|s| s.name.to_lowercase().contains(&f_lower)
                          || s.label.to_lowercase().contains(&f_lower)
                          || s.category.to_lowercase().contains(&f_lower))
                .collect()
        }
        None => all_scenarios.iter().collect(),
    };

    if to_run.is_empty() {
        eprintln!("No scenarios match filter: {:?}", cli.filter);
        std::process::exit(1);
    }

    let ts_dir = if cli.time_series {
        Some(std::path::Path::new("benchmark-results/time-series").to_path_buf())
    } else {
        None
    };

    println!("\n  Tempo Bench Runner v0.2.0");
    println!("  Running {} scenario(s)...\n", to_run.len());
    println!("  {:<34} {:>5} {:>8} {:>10} {:>9} {:>6} {:>6}",
        "Scenario", "Moves", "Forfeit", "Final(s)", "MaxSpend", "Replay", "Time");
    println!("  {}", "-".repeat(88));

    let suite_start = Instant::now();
    let mut results = Vec::new();

    for scenario in &to_run {
        let result = runner::run_single(scenario, ts_dir.as_deref());

        let forfeit = match result.forfeit_move {
            Some(m) => format!("mv {}", m),
            None => "-".to_string(),
        };
        let status = if result.pass { "PASS" } else { "FAIL" };

        println!("  {:<34} {:>5} {:>8} {:>10.1} {:>9.0} {:>6} {:>4}ms  {}",
            result.scenario,
            result.moves_played,
            forfeit,
            result.final_clock_ms / 1000.0,
            result.max_spend_ms,
            if result.replay_exact { "exact" } else { "DRIFT" },
            result.elapsed_ms,
            status,
        );

        results.push(result);
    }

    // ─── Summary ────────────────────────────────────────────────────────

    let total = results.len();
    let passed = results.iter().filter(|r| r.pass).count();
    let failed = total - passed;

    println!("  {}", "-".repeat(88));
    println!("  Total: {}  Passed: {}  Failed: {}  Suite time: {:.1}s\n",
        total, passed, failed, suite_start.elapsed().as_secs_f64());

    // ─── Randomized Sweep ───────────────────────────────────────────────

    let sweep = if cli.sweep > 0 {
        println!("  Sweep: {} randomized time controls (PRNG: ChaCha8Rng, seed {})", cli.sweep, cli.seed);
        let sweep = runner::run_sweep(cli.sweep, cli.seed);
        println!("    Survived: {}  Forfeited: {}  Allocator faults: {}",
            sweep.survived, sweep.forfeited, sweep.alloc_errors);
        println!("    Violations — replay: {}  spend floor: {}  monotonicity: {}",
            sweep.replay_violations, sweep.spend_floor_violations, sweep.monotonicity_violations);
        println!("    Moves/game: {:.1} ± {:.1}  (min {:.0}, max {:.0})\n",
            sweep.moves_played.mean, sweep.moves_played.std_dev,
            sweep.moves_played.min, sweep.moves_played.max);
        Some(sweep)
    } else {
        None
    };

    let sweep_clean = sweep.as_ref().map(|s| s.clean()).unwrap_or(true);

    // ─── Write JSON Report ──────────────────────────────────────────────

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let timestamp = format!("{}", ts);

    let report = BenchReport {
        timestamp: timestamp.clone(),
        version: "0.2.0",
        prng: "ChaCha8Rng",
        summary: Summary {
            total,
            passed,
            failed,
            pass_rate: passed as f64 / total as f64,
        },
        scenarios: results,
        sweep,
    };

    let dir = std::path::Path::new("benchmark-results");
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Failed to create benchmark-results/: {}", e);
        std::process::exit(1);
    }
    let path = dir.join(format!("bench-{}.json", timestamp));
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&path, &json) {
                eprintln!("Failed to write benchmark file: {}", e);
                std::process::exit(1);
            }
            println!("  Results saved to: {}\n", path.display());
        }
        Err(e) => {
            eprintln!("Failed to serialize report: {}", e);
            std::process::exit(1);
        }
    }

    if failed > 0 || !sweep_clean {
        std::process::exit(1);
    }
}
