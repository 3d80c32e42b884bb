// Scenario Definitions — standard time controls plus lag and scramble cases
// All scenario logic lives in the configuration and pass criteria; the
// engine itself is untouched per scenario

use tempo_engine::SimConfig;

// ─── Scenario Configuration ─────────────────────────────────────────────────

pub struct Scenario {
    pub name: &'static str,
    pub label: &'static str,
    pub category: &'static str,
    pub config: SimConfig,
    pub criteria: PassCriteria,
}

pub struct PassCriteria {
    /// The game must reach the move ceiling without forfeiting.
    pub require_survival: bool,
    /// The game must forfeit inside this inclusive move window.
    pub expect_forfeit: Option<(u32, u32)>,
    pub min_final_clock_ms: Option<f64>,
    pub max_spend_ms: Option<f64>,
    pub require_replay_exact: bool,
}

impl Default for PassCriteria {
    fn default() -> Self {
        Self {
            require_survival: false,
            expect_forfeit: None,
            min_final_clock_ms: None,
            max_spend_ms: None,
            require_replay_exact: true,
        }
    }
}

fn control(
    initial_clock_ms: f64,
    increment_ms: f64,
    move_overhead_ms: f64,
    start_move: u32,
    move_ceiling: u32,
) -> SimConfig {
    SimConfig { initial_clock_ms, increment_ms, move_overhead_ms, start_move, move_ceiling }
}

// ─── Scenario Table ─────────────────────────────────────────────────────────

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "REFERENCE_1_01",
            label: "Reference 1min + 0.1s (move 11)",
            category: "Reference",
            config: SimConfig::default(),
            criteria: PassCriteria {
                require_survival: true,
                min_final_clock_ms: Some(400.0),
                max_spend_ms: Some(2_100.0),
                ..PassCriteria::default()
            },
        },
        Scenario {
            name: "BULLET_1_0",
            label: "Bullet 1+0",
            category: "Bullet",
            config: control(60_000.0, 0.0, 0.0, 1, 200),
            // Sudden death: the allocator stretches the clock deep into the
            // game, then flags when the 10 ms floor exceeds what is left.
            criteria: PassCriteria {
                expect_forfeit: Some((140, 152)),
                ..PassCriteria::default()
            },
        },
        Scenario {
            name: "BULLET_2_1",
            label: "Bullet 2+1",
            category: "Bullet",
            config: control(120_000.0, 1_000.0, 0.0, 1, 200),
            criteria: PassCriteria {
                require_survival: true,
                min_final_clock_ms: Some(3_500.0),
                ..PassCriteria::default()
            },
        },
        Scenario {
            name: "BLITZ_3_0",
            label: "Blitz 3+0",
            category: "Blitz",
            config: control(180_000.0, 0.0, 0.0, 1, 200),
            criteria: PassCriteria {
                expect_forfeit: Some((142, 154)),
                ..PassCriteria::default()
            },
        },
        Scenario {
            name: "BLITZ_3_2",
            label: "Blitz 3+2",
            category: "Blitz",
            config: control(180_000.0, 2_000.0, 0.0, 1, 200),
            criteria: PassCriteria {
                require_survival: true,
                min_final_clock_ms: Some(6_500.0),
                ..PassCriteria::default()
            },
        },
        Scenario {
            name: "BLITZ_5_0",
            label: "Blitz 5+0",
            category: "Blitz",
            config: control(300_000.0, 0.0, 0.0, 1, 200),
            criteria: PassCriteria {
                expect_forfeit: Some((143, 155)),
                ..PassCriteria::default()
            },
        },
        Scenario {
            name: "RAPID_10_0",
            label: "Rapid 10+0",
            category: "Rapid",
            config: control(600_000.0, 0.0, 0.0, 1, 200),
            criteria: PassCriteria {
                expect_forfeit: Some((143, 155)),
                ..PassCriteria::default()
            },
        },
        Scenario {
            name: "RAPID_15_10",
            label: "Rapid 15+10",
            category: "Rapid",
            config: control(900_000.0, 10_000.0, 0.0, 1, 200),
            criteria: PassCriteria {
                require_survival: true,
                min_final_clock_ms: Some(28_000.0),
                ..PassCriteria::default()
            },
        },
        Scenario {
            name: "CLASSICAL_90_30",
            label: "Classical 90+30",
            category: "Classical",
            config: control(5_400_000.0, 30_000.0, 0.0, 1, 200),
            criteria: PassCriteria {
                require_survival: true,
                min_final_clock_ms: Some(75_000.0),
                max_spend_ms: Some(280_000.0),
                ..PassCriteria::default()
            },
        },
        Scenario {
            name: "BLITZ_3_2_LAG50",
            label: "Blitz 3+2, 50ms lag",
            category: "Stress",
            config: control(180_000.0, 2_000.0, 50.0, 1, 200),
            criteria: PassCriteria {
                require_survival: true,
                min_final_clock_ms: Some(6_500.0),
                ..PassCriteria::default()
            },
        },
        Scenario {
            name: "BULLET_1_0_LAG10",
            label: "Bullet 1+0, 10ms lag",
            category: "Stress",
            config: control(60_000.0, 0.0, 10.0, 1, 200),
            criteria: PassCriteria {
                expect_forfeit: Some((140, 152)),
                ..PassCriteria::default()
            },
        },
        Scenario {
            name: "SCRAMBLE_500MS",
            label: "Scramble 0.5s, 30ms lag",
            category: "Stress",
            config: control(500.0, 0.0, 30.0, 1, 300),
            criteria: PassCriteria {
                expect_forfeit: Some((10, 16)),
                ..PassCriteria::default()
            },
        },
    ]
}
