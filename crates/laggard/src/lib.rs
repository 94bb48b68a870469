// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-test timing instrumentation with a colorized per-class report.
//!
//! A host test harness drives a [`TimingCollector`] through its four
//! lifecycle hooks: `run_started`, then `test_started`/`test_stopped`
//! around each test body, then `run_stopped`. The collector records
//! each test's wall-clock runtime in start order; at run stop it
//! prints a table of runtimes grouped by test class, with a subtotal
//! row per class and color emphasis scaled to the slowest test in the
//! run.
//!
//! The table itself comes from the [`table`] module, a generic
//! fixed-width renderer with a catalog of output dialects; the report
//! uses its `simple` dialect but the module stands on its own.

pub mod case;
pub mod collector;
pub mod color;
pub mod error;
pub mod record;
pub mod report;
pub mod table;

pub use case::{TestCase, TestId};
pub use collector::TimingCollector;
pub use color::{Band, classify};
pub use error::BenchError;
pub use record::TimingRecord;
