use serde::Serialize;
use ts_rs::TS;
use tracing::debug;

/// Result of feeding input into a [`StepTest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[ts(export)]
pub enum StepOutcome {
    Counting { count: u32, target: u32 },
    Passed,
    Failed,
}

/// Counts unaided steps toward the weight-bearing target.
///
/// Steps come from the host (a button tap, a pedometer, a typed key);
/// nothing here reads sensors.
#[derive(Debug, Clone)]
pub struct StepTest {
    target: u32,
    count: u32,
    running: bool,
    finished: Option<bool>,
}

impl StepTest {
    pub fn new(target: u32) -> Self {
        Self {
            target: target.max(1),
            count: 0,
            running: false,
            finished: None,
        }
    }

    /// Zero the counter and start counting. Restarting a finished test is
    /// allowed until its outcome has been applied to a session.
    pub fn start(&mut self) {
        self.count = 0;
        self.running = true;
        self.finished = None;
    }

    /// Count one step. Ignored unless the test is running.
    pub fn record_step(&mut self) -> StepOutcome {
        if self.running && self.count < self.target {
            self.count += 1;
            debug!(count = self.count, target = self.target, "step counted");
            if self.count == self.target {
                self.running = false;
                self.finished = Some(true);
            }
        }
        self.outcome()
    }

    /// The patient cannot complete the walk.
    pub fn give_up(&mut self) -> StepOutcome {
        if self.finished.is_none() {
            self.running = false;
            self.finished = Some(false);
        }
        self.outcome()
    }

    pub fn outcome(&self) -> StepOutcome {
        match self.finished {
            Some(true) => StepOutcome::Passed,
            Some(false) => StepOutcome::Failed,
            None => StepOutcome::Counting {
                count: self.count,
                target: self.target,
            },
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
