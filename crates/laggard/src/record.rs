// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timing records captured during a run.

use std::time::Instant;

use crate::case::TestId;

/// Monotonic-clock bracket around one test method invocation.
#[derive(Clone, Debug)]
pub struct TimingRecord {
    pub id: TestId,
    pub started: Instant,
    pub stopped: Option<Instant>,
}

impl TimingRecord {
    /// A record for a test that just started.
    pub fn started_at(id: TestId, started: Instant) -> Self {
        Self { id, started, stopped: None }
    }

    /// Elapsed seconds, or `None` while the test is still running.
    pub fn runtime(&self) -> Option<f64> {
        self.stopped.map(|stop| stop.duration_since(self.started).as_secs_f64())
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
