// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregation of timing records into the printed report.
//!
//! Records are walked in insertion order (the order tests started)
//! and grouped by class. Each class gets a blank separator, a colored
//! `module.Class` header row, one row per test, and a divider plus
//! subtotal row pair.

use indexmap::IndexMap;

use crate::color::{self, scheme};
use crate::error::BenchError;
use crate::record::TimingRecord;
use crate::table::{self, Align, Cell, Dialect, Headers, Record, RenderOptions, Rows};

const TEST: &str = "Test";
const RUNTIME: &str = "Runtime";
const PERCENT: &str = "Percent";

const TEST_DIVIDER: &str = "---------------------------";
const NUMERIC_DIVIDER: &str = "-------";

/// Running subtotal for the class currently being emitted.
#[derive(Default)]
struct ClassTotals {
    runtime: f64,
    percent: f64,
    members: usize,
}

/// Render the full report text: two leading blank lines, then the
/// per-class table, then a trailing newline.
pub fn render_report(records: &IndexMap<String, TimingRecord>) -> anyhow::Result<String> {
    let rows = build_rows(records)?;
    let options = RenderOptions {
        aligns: Some(vec![Align::Left, Align::Right, Align::Right]),
        ..RenderOptions::default()
    };
    let text = table::render(&Rows::Records(rows), &Headers::Keys, Dialect::Simple, &options)?;
    Ok(format!("\n\n{text}\n"))
}

/// Build the display rows in insertion order.
fn build_rows(records: &IndexMap<String, TimingRecord>) -> Result<Vec<Record>, BenchError> {
    // First pass: per-record runtimes, the run total, and the longest
    // runtime (which scales the color bands).
    let mut runtimes = Vec::with_capacity(records.len());
    let mut total = 0.0_f64;
    let mut longest = 0.0_f64;
    for (key, record) in records {
        let runtime = record
            .runtime()
            .ok_or_else(|| BenchError::MissingStop { key: key.clone() })?;
        total += runtime;
        longest = longest.max(runtime);
        runtimes.push(runtime);
    }
    if !records.is_empty() && total == 0.0 {
        return Err(BenchError::ZeroTotalRuntime);
    }

    let mut rows: Vec<Record> = Vec::new();
    let mut current_class = String::new();
    let mut totals = ClassTotals::default();

    for (record, runtime) in records.values().zip(runtimes) {
        if record.id.class_name != current_class {
            if totals.members > 0 {
                push_subtotal(&mut rows, &current_class, &totals);
                totals = ClassTotals::default();
            }
            current_class = record.id.class_name.clone();
            rows.push(Record::new());
            rows.push(group_header_row(record));
        }

        let percent = runtime / total * 100.0;
        totals.runtime += runtime;
        totals.percent += percent;
        totals.members += 1;
        rows.push(test_row(record, runtime, longest, percent));
    }

    if totals.members > 0 {
        push_subtotal(&mut rows, &current_class, &totals);
    }

    Ok(rows)
}

fn group_header_row(record: &TimingRecord) -> Record {
    let mut row = Record::new();
    row.insert(
        TEST.to_string(),
        Cell::from(color::paint(scheme::group(), &record.id.group_label())),
    );
    row
}

fn test_row(record: &TimingRecord, runtime: f64, longest: f64, percent: f64) -> Record {
    let band = color::classify(runtime, longest);
    let mut row = Record::new();
    row.insert(TEST.to_string(), Cell::from(format!(": {}", record.id.test_name)));
    row.insert(
        RUNTIME.to_string(),
        Cell::from(color::paint(band.style(), &format!("{runtime:.5}"))),
    );
    row.insert(PERCENT.to_string(), Cell::from(format!("{percent:>7.2}%")));
    row
}

fn push_subtotal(rows: &mut Vec<Record>, class_name: &str, totals: &ClassTotals) {
    let mut divider = Record::new();
    divider.insert(TEST.to_string(), Cell::from(TEST_DIVIDER));
    divider.insert(RUNTIME.to_string(), Cell::from(NUMERIC_DIVIDER));
    divider.insert(PERCENT.to_string(), Cell::from(NUMERIC_DIVIDER));
    rows.push(divider);

    let style = scheme::subtotal();
    let mut subtotal = Record::new();
    subtotal.insert(TEST.to_string(), Cell::from(color::paint(style, class_name)));
    subtotal.insert(
        RUNTIME.to_string(),
        Cell::from(color::paint(style, &format!("{:.5}", totals.runtime))),
    );
    subtotal.insert(
        PERCENT.to_string(),
        Cell::from(color::paint(style, &format!("{:>7.2}%", totals.percent))),
    );
    rows.push(subtotal);
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
