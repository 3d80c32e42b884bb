// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Tempo Clock Simulation Suite ("Tempo")

pub mod allocator;
pub mod config;
pub mod history;
pub mod simulation;
pub mod types;

pub use allocator::{optimum_spend, AllocError, Allocation};
pub use config::{ConfigError, SimConfig};
pub use history::{GameHistory, ReplayError};
pub use simulation::ClockSimulation;
pub use types::*;

use wasm_bindgen::prelude::*;

// ─── WASM Interface ──────────────────────────────────────────────────────────

#[wasm_bindgen]
impl ClockSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new(
        initial_clock_ms: f64,
        increment_ms: f64,
        move_overhead_ms: f64,
        start_move: u32,
        move_ceiling: u32,
    ) -> Self {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let config = SimConfig {
            initial_clock_ms,
            increment_ms,
            move_overhead_ms,
            start_move,
            move_ceiling,
        };
        match ClockSimulation::with_config(config) {
            Ok(sim) => sim,
            Err(e) => wasm_bindgen::throw_str(&e.to_string()),
        }
    }

    /// Simulate one move; null once the run is terminal.
    pub fn step(&mut self) -> JsValue {
        match self.step_core() {
            Ok(Some(record)) => serde_wasm_bindgen::to_value(&record).unwrap_or(JsValue::NULL),
            Ok(None) => JsValue::NULL,
            Err(e) => wasm_bindgen::throw_str(&e.to_string()),
        }
    }

    /// Run to termination and hand the full history to the plotter.
    pub fn run(&mut self) -> JsValue {
        match self.run_core() {
            Ok(_) => serde_wasm_bindgen::to_value(self.history()).unwrap_or(JsValue::NULL),
            Err(e) => wasm_bindgen::throw_str(&e.to_string()),
        }
    }

    pub fn get_history(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.history()).unwrap_or(JsValue::NULL)
    }

    pub fn get_outcome(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.outcome()).unwrap_or(JsValue::NULL)
    }

    pub fn get_stats(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.stats()).unwrap_or(JsValue::NULL)
    }

    /// Reset to the initial state under the same configuration.
    pub fn reset(&mut self) {
        self.reset_core();
    }
}
