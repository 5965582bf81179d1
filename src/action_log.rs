use crate::error::Result;
use crate::grid::Position;
use crate::navigation::{InputKind, MoveOutcome};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One applied input with its result
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedAction {
    /// Milliseconds since the log was started
    pub timestamp_ms: u64,
    pub input: InputKind,
    pub outcome: MoveOutcome,
    /// Agent position after the input
    pub position: Position,
}

/// Input logger for a single session
pub struct ActionLog {
    start_time: Instant,
    actions: Vec<LoggedAction>,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog {
            start_time: Instant::now(),
            actions: Vec::new(),
        }
    }

    /// Log an input with the current timestamp
    pub fn log(&mut self, input: InputKind, outcome: MoveOutcome, position: Position) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        self.actions.push(LoggedAction {
            timestamp_ms,
            input,
            outcome,
            position,
        });
    }

    pub fn get_actions(&self) -> &[LoggedAction] {
        &self.actions
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.actions)?)
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut moves = 0;
        let mut jumps = 0;
        let mut rejected = 0;
        let mut arms = 0;

        for logged in &self.actions {
            if logged.outcome.moved() {
                moves += 1;
            }
            match logged.outcome {
                MoveOutcome::Jumped => jumps += 1,
                MoveOutcome::Rejected => rejected += 1,
                MoveOutcome::Armed => arms += 1,
                _ => {}
            }
        }

        let duration = self.actions.last().map_or(0, |last| last.timestamp_ms);

        format!(
            "Session Duration: {}ms\n\
             Total Inputs: {}\n\
             Moves: {} ({} jumps), {} rejected, {} arms",
            duration,
            self.actions.len(),
            moves,
            jumps,
            rejected,
            arms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut log = ActionLog::new();
        let p = Position::new(1, 1);
        log.log(InputKind::MoveUp, MoveOutcome::Rejected, p);
        log.log(InputKind::ArmJump, MoveOutcome::Armed, p);
        log.log(InputKind::MoveRight, MoveOutcome::Jumped, Position::new(2, 1));
        log.log(InputKind::MoveRight, MoveOutcome::ReachedGoal, Position::new(3, 1));

        assert_eq!(log.get_actions().len(), 4);
        let summary = log.summary();
        assert!(summary.contains("Total Inputs: 4"));
        assert!(summary.contains("Moves: 2 (1 jumps), 1 rejected, 1 arms"));
    }

    #[test]
    fn test_json_shape() {
        let mut log = ActionLog::new();
        log.log(InputKind::MoveLeft, MoveOutcome::Stepped, Position::new(0, 2));
        let value: serde_json::Value = serde_json::from_str(&log.to_json().unwrap()).unwrap();
        assert_eq!(value[0]["input"], "MoveLeft");
        assert_eq!(value[0]["outcome"], "Stepped");
        assert_eq!(value[0]["position"]["y"], 2);
    }
}
