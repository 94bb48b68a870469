// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for the timing collector lifecycle.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::thread;
use std::time::Duration;

use super::*;

fn case(class: &str, test: &str) -> TestId {
    TestId {
        module: "shop.tests".to_string(),
        class_name: class.to_string(),
        test_name: test.to_string(),
    }
}

#[test]
fn new_collector_is_empty() {
    let collector = TimingCollector::new(true);
    assert!(collector.is_benchmark());
    assert!(collector.records().is_empty());
}

#[test]
fn test_started_keys_records_by_identity() {
    let mut collector = TimingCollector::new(true);
    collector.test_started(&case("CartTests", "test_add"));
    assert_eq!(collector.records().len(), 1);
    assert!(collector.records().contains_key("shop.tests.CartTests.test_add"));
}

#[test]
fn duplicate_identity_replaces_the_earlier_record() {
    let mut collector = TimingCollector::new(true);
    let id = case("CartTests", "test_add");
    collector.test_started(&id);
    collector.test_stopped(&id).unwrap();

    // Restarting the same identity discards the finished record.
    collector.test_started(&id);
    assert_eq!(collector.records().len(), 1);
    let record = &collector.records()["shop.tests.CartTests.test_add"];
    assert!(record.stopped.is_none(), "last start wins");
}

#[test]
fn stop_without_start_is_an_error() {
    let mut collector = TimingCollector::new(true);
    let err = collector.test_stopped(&case("CartTests", "test_ghost")).unwrap_err();
    assert_eq!(
        err,
        BenchError::MissingStart { key: "shop.tests.CartTests.test_ghost".to_string() }
    );
}

#[test]
fn run_started_does_not_clear_records() {
    let mut collector = TimingCollector::new(true);
    collector.test_started(&case("CartTests", "test_add"));
    collector.run_started();
    assert_eq!(collector.records().len(), 1);
}

#[test]
fn run_stopped_without_benchmark_writes_nothing() {
    let mut collector = TimingCollector::new(false);
    let id = case("CartTests", "test_add");
    collector.test_started(&id);
    collector.test_stopped(&id).unwrap();

    let mut out: Vec<u8> = Vec::new();
    collector.run_stopped(&mut out).unwrap();
    assert!(out.is_empty(), "no bytes should reach the stream");
}

#[test]
fn run_stopped_writes_the_report() {
    let mut collector = TimingCollector::new(true);
    for test in ["test_add", "test_remove"] {
        let id = case("CartTests", test);
        collector.test_started(&id);
        thread::sleep(Duration::from_millis(2));
        collector.test_stopped(&id).unwrap();
    }

    let mut out: Vec<u8> = Vec::new();
    collector.run_stopped(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("\n\n"));
    assert!(text.contains("shop.tests.CartTests"));
    assert!(text.contains(": test_add"));
    assert!(text.contains(": test_remove"));
}

#[test]
fn run_stopped_fails_on_a_hung_test() {
    let mut collector = TimingCollector::new(true);
    collector.test_started(&case("CartTests", "test_hang"));

    let mut out: Vec<u8> = Vec::new();
    let err = collector.run_stopped(&mut out).unwrap_err();
    assert!(err.to_string().contains("test_hang"));
}
