// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for timing collection and reporting.

use thiserror::Error;

/// Failures raised by the timing collector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenchError {
    /// A stop notification arrived for a test that never started.
    #[error("no start record for test `{key}`")]
    MissingStart { key: String },

    /// A test started but never stopped, so its runtime is undefined.
    #[error("test `{key}` has no stop timestamp")]
    MissingStop { key: String },

    /// Every recorded runtime was zero; percentages are undefined.
    #[error("total runtime is zero, cannot compute percentages")]
    ZeroTotalRuntime,
}
