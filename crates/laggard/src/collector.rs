// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-test timing collection driven by harness lifecycle callbacks.

use std::io::Write;
use std::time::Instant;

use anyhow::Context;
use indexmap::IndexMap;

use crate::case::{TestCase, TestId};
use crate::error::BenchError;
use crate::record::TimingRecord;
use crate::report;

/// Collects start/stop timestamps for every test in a run and writes
/// a per-class timing table when the run finishes.
///
/// The collector owns one ordered map keyed by `module.Class.test`;
/// iteration order is the order tests started, which is the order the
/// report preserves. Construct a fresh collector per run; nothing
/// carries over between runs.
pub struct TimingCollector {
    benchmark: bool,
    records: IndexMap<String, TimingRecord>,
}

impl TimingCollector {
    /// `benchmark` gates the report: when false the collector still
    /// accepts callbacks but [`run_stopped`](Self::run_stopped)
    /// writes nothing.
    pub fn new(benchmark: bool) -> Self {
        Self { benchmark, records: IndexMap::new() }
    }

    pub fn is_benchmark(&self) -> bool {
        self.benchmark
    }

    /// Records collected so far, in start order.
    pub fn records(&self) -> &IndexMap<String, TimingRecord> {
        &self.records
    }

    /// Run-start hook. Nothing to reset; freshness comes from
    /// per-run construction.
    pub fn run_started(&mut self) {}

    /// Record the start timestamp for `case`. A duplicate identity
    /// within one run replaces the earlier record: last start wins.
    pub fn test_started(&mut self, case: &dyn TestCase) {
        let id = TestId::from_case(case);
        let key = id.unique_key();
        tracing::trace!(test = %key, "test started");
        if self.records.contains_key(&key) {
            tracing::warn!(test = %key, "duplicate test identity, replacing earlier timing record");
        }
        self.records.insert(key, TimingRecord::started_at(id, Instant::now()));
    }

    /// Record the stop timestamp for `case`. Fails if no start was
    /// recorded for the same identity.
    pub fn test_stopped(&mut self, case: &dyn TestCase) -> Result<(), BenchError> {
        let key = TestId::from_case(case).unique_key();
        tracing::trace!(test = %key, "test stopped");
        let record = self
            .records
            .get_mut(&key)
            .ok_or(BenchError::MissingStart { key })?;
        record.stopped = Some(Instant::now());
        Ok(())
    }

    /// Run-stop hook: aggregate and write the timing report to `out`.
    ///
    /// A no-op unless the collector was constructed with `benchmark`
    /// set, so ordinary runs pay no reporting cost.
    pub fn run_stopped(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        if !self.benchmark {
            tracing::debug!("benchmark disabled, skipping timing report");
            return Ok(());
        }
        let text = report::render_report(&self.records)?;
        out.write_all(text.as_bytes()).context("failed to write timing report")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "collector_tests.rs"]
mod tests;
