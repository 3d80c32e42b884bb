// Per-Move JSONL Time Series Recorder
// Outputs one JSON line per move for independent analysis and plotting

use serde::Serialize;
use tempo_engine::MoveRecord;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct MoveSnapshot {
    pub move_number: u32,
    pub clock_secs: f64,
    pub spend_ms: f64,
    pub clock_after_ms: f64,
    pub forfeited: bool,
}

impl MoveSnapshot {
    pub fn from_record(record: &MoveRecord) -> Self {
        Self {
            move_number: record.move_number,
            clock_secs: record.clock_before_secs,
            spend_ms: record.spend_ms,
            clock_after_ms: record.clock_after_ms,
            forfeited: record.outcome.is_forfeit(),
        }
    }
}

/// Time series recorder that accumulates snapshots and writes JSONL
pub struct MoveSeriesRecorder {
    snapshots: Vec<MoveSnapshot>,
}

impl MoveSeriesRecorder {
    pub fn new() -> Self {
        Self { snapshots: Vec::new() }
    }

    pub fn record(&mut self, record: &MoveRecord) {
        self.snapshots.push(MoveSnapshot::from_record(record));
    }

    /// Write all snapshots to a JSONL file
    pub fn write_jsonl(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(path)?;
        for snapshot in &self.snapshots {
            let line = serde_json::to_string(snapshot)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}
