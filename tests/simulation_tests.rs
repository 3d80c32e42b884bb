#[cfg(test)]
mod tests {
    use tempo_engine::{ClockSimulation, SimConfig, SimOutcome};

    // ========== Reference Game (60s + 0.1s from move 11) ==========

    #[test]
    fn test_reference_game_survives_the_horizon() {
        let mut sim = ClockSimulation::with_config(SimConfig::default())
            .expect("default config is valid");
        let outcome = sim.run_core().expect("clock stays positive all game");

        match outcome {
            SimOutcome::Completed { final_clock_ms } => {
                assert!(
                    (final_clock_ms - 443.0).abs() < 1.0,
                    "final clock drifted: {} ms",
                    final_clock_ms
                );
            }
            other => panic!("reference game must complete, got {:?}", other),
        }

        let history = sim.history();
        assert_eq!(history.len(), 189, "one record per move from 11 to 199");
        assert_eq!(history.moves().first(), Some(&11));
        assert_eq!(history.moves().last(), Some(&199));
        assert_eq!(history.spend_ms()[0], 2002.0, "golden first-move spend");
        assert!(
            history.clock_secs().iter().all(|&s| s >= 0.0),
            "clock never negative at the start of a move"
        );
        // Once the clock flattens out, spend settles onto the increment.
        assert_eq!(history.spend_ms().last(), Some(&100.0));
    }

    #[test]
    fn test_reference_game_replay_is_exact() {
        let config = SimConfig::default();
        let mut sim = ClockSimulation::with_config(config).expect("default config is valid");
        sim.run_core().expect("reference game completes");

        sim.history()
            .verify_replay(&config)
            .expect("recorded spends must reproduce the recorded clocks exactly");
    }

    #[test]
    fn test_spend_floor_holds_across_the_game() {
        let mut sim = ClockSimulation::with_config(SimConfig::default())
            .expect("default config is valid");
        sim.run_core().expect("reference game completes");

        assert!(
            sim.history().spend_ms().iter().all(|&s| s >= 10.0),
            "allocator floor violated"
        );
    }

    // ========== Forfeiture ==========

    #[test]
    fn test_forfeit_keeps_history_through_the_final_move() {
        // Overhead swamps the floor-clamped spends: 500 -> 290 -> 80 -> -130.
        let config = SimConfig {
            initial_clock_ms: 500.0,
            increment_ms: 0.0,
            move_overhead_ms: 200.0,
            start_move: 1,
            move_ceiling: 50,
        };
        let mut sim = ClockSimulation::with_config(config).expect("config is valid");
        let outcome = sim.run_core().expect("positive clock until the flag falls");

        assert_eq!(
            outcome,
            SimOutcome::Forfeited { move_number: 3, deficit_ms: 130.0 }
        );
        assert_eq!(sim.history().len(), 3, "history includes the forfeiting move");
        assert_eq!(sim.history().clock_secs(), &[0.5, 0.29, 0.08]);
        sim.history()
            .verify_replay(&config)
            .expect("forfeiture replay must still be exact");

        let stats = sim.stats();
        assert!(stats.forfeited);
        assert_eq!(stats.forfeit_move, Some(3));
        assert_eq!(stats.increment_income_ms, 0.0);
    }

    #[test]
    fn test_sudden_death_bullet_forfeits_late() {
        // 1+0: no increment income, the allocator rations until the floor
        // outruns the clock deep in the game.
        let config = SimConfig {
            initial_clock_ms: 60_000.0,
            increment_ms: 0.0,
            move_overhead_ms: 0.0,
            start_move: 1,
            move_ceiling: 200,
        };
        let mut sim = ClockSimulation::with_config(config).expect("config is valid");
        let outcome = sim.run_core().expect("positive clock until the flag falls");

        match outcome {
            SimOutcome::Forfeited { move_number, .. } => {
                assert!(
                    (140..=152).contains(&move_number),
                    "forfeit at move {}",
                    move_number
                );
            }
            other => panic!("sudden death must forfeit, got {:?}", other),
        }
        sim.history().verify_replay(&config).expect("replay exact");
    }

    // ========== Adjustment Factor ==========

    #[test]
    fn test_factor_locks_on_the_first_move() {
        let mut sim = ClockSimulation::with_config(SimConfig::default())
            .expect("default config is valid");

        sim.step_core().expect("positive clock");
        let locked = sim.adjust();
        assert!(locked.is_set(), "first move must lock the factor");

        sim.run_core().expect("reference game completes");
        assert_eq!(sim.adjust(), locked, "factor recomputed mid-game");

        let factor = locked.value().expect("locked");
        assert!(
            (factor - 1.0699768513634227).abs() < 1e-12,
            "reference factor drifted: {}",
            factor
        );
    }

    // ========== Bookkeeping ==========

    #[test]
    fn test_stats_agree_with_history() {
        let mut sim = ClockSimulation::with_config(SimConfig::default())
            .expect("default config is valid");
        sim.run_core().expect("reference game completes");

        let stats = sim.stats();
        let history = sim.history();

        assert_eq!(stats.moves_played as usize, history.len());
        let total: f64 = history.spend_ms().iter().sum();
        assert_eq!(stats.total_spent_ms, total);
        assert_eq!(stats.max_spend_ms, 2002.0);
        assert_eq!(stats.min_spend_ms, 100.0);
        // Every completed move earns one increment.
        assert_eq!(stats.increment_income_ms, 189.0 * 100.0);
    }

    #[test]
    fn test_ceiling_bounds_the_move_range() {
        let config = SimConfig { move_ceiling: 50, ..SimConfig::default() };
        let mut sim = ClockSimulation::with_config(config).expect("config is valid");
        let outcome = sim.run_core().expect("short reference game completes");

        assert!(matches!(outcome, SimOutcome::Completed { .. }));
        assert_eq!(sim.history().len(), 39, "moves 11 through 49");
        assert_eq!(sim.history().last_move(), Some(49));
    }
}
