// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use stateful_tasks_core::{
    LoadConfig, LoadGenerator, MutexState, Random, StateError, StateOwner, TokioTimer,
};
use std::{collections::HashMap, time::Duration};
use tokio_util::sync::CancellationToken;

/// Always picks the start of the range
struct LowestRandom;

impl Random for LowestRandom {
    fn i64(&self, range: std::ops::Range<i64>) -> i64 {
        range.start
    }
}

fn bounded(readers: usize, writers: usize, iterations: u64) -> LoadConfig {
    LoadConfig {
        readers,
        writers,
        iterations: Some(iterations),
        ..LoadConfig::default()
    }
}

// ============================================================
// Bounded runs
// ============================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_liveness_bounded_run_counts_every_exchange() {
    let (handle, owner) = StateOwner::spawn(1, CancellationToken::new());
    let generator = LoadGenerator::with_defaults(bounded(100, 10, 50), handle);
    let counter = generator.counter();

    let report = generator.run().await.unwrap();

    assert_eq!(report.operations, 100 * 50 + 10 * 50);
    assert_eq!(report.reads, 100 * 50);
    assert_eq!(report.writes, 10 * 50);
    assert_eq!(counter.load(), report.operations);

    let state = owner.await.unwrap();
    assert!(state.keys().all(|key| (0..5).contains(key)));
    assert!(state.values().all(|value| (0..100).contains(value)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_liveness_bounded_run_against_mutex_state() {
    let state = MutexState::new();
    let generator = LoadGenerator::with_defaults(bounded(100, 10, 50), state.clone());

    let report = generator.run().await.unwrap();

    assert_eq!(report.operations, 5_500);
    assert_eq!(report.reads + report.writes, report.operations);
    assert!(state.snapshot().await.len() <= 5);
}

#[tokio::test]
async fn test_liveness_random_source_picks_keys_and_values() {
    let (handle, owner) = StateOwner::spawn(1, CancellationToken::new());
    let generator = LoadGenerator::new(bounded(2, 3, 10), handle, LowestRandom, TokioTimer);

    let report = generator.run().await.unwrap();

    assert_eq!(report.operations, 50);
    assert_eq!(owner.await.unwrap(), HashMap::from([(0, 0)]));
}

#[tokio::test]
async fn test_safety_readers_only_leave_the_map_empty() {
    let (handle, owner) = StateOwner::spawn(1, CancellationToken::new());
    let generator = LoadGenerator::with_defaults(bounded(8, 0, 25), handle);

    let report = generator.run().await.unwrap();

    assert_eq!(report.operations, 200);
    assert_eq!(report.writes, 0);
    assert!(owner.await.unwrap().is_empty());
}

// ============================================================
// Timed and cancelled runs
// ============================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_liveness_timed_run_stops_after_duration() {
    let config = LoadConfig {
        readers: 4,
        writers: 2,
        duration_ms: 50,
        ..LoadConfig::default()
    };
    let (handle, _owner) = StateOwner::spawn(1, CancellationToken::new());
    let generator = LoadGenerator::with_defaults(config, handle);

    let report = tokio::time::timeout(Duration::from_secs(5), generator.run())
        .await
        .expect("Timed run should finish shortly after its duration")
        .unwrap();

    assert!(report.operations > 0);
    assert_eq!(report.operations, report.reads + report.writes);
    assert!(report.elapsed >= Duration::from_millis(50));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_liveness_cancellation_ends_timed_run_early() {
    let config = LoadConfig {
        readers: 4,
        writers: 2,
        duration_ms: 60_000,
        ..LoadConfig::default()
    };
    let generator = LoadGenerator::with_defaults(config, MutexState::new());
    let token = generator.cancellation_token();

    let run = tokio::spawn(generator.run());
    tokio::time::sleep(Duration::from_millis(20)).await;
    token.cancel();

    let report = tokio::time::timeout(Duration::from_secs(5), run)
        .await
        .expect("Cancelled run should finish promptly")
        .unwrap()
        .unwrap();
    assert_eq!(report.operations, report.reads + report.writes);
    assert!(report.elapsed < Duration::from_secs(60));
}

#[tokio::test]
async fn test_safety_run_fails_when_owner_has_stopped() {
    let token = CancellationToken::new();
    let (handle, owner) = StateOwner::spawn(1, token.clone());
    token.cancel();
    owner.await.unwrap();

    let generator = LoadGenerator::with_defaults(bounded(2, 2, 5), handle);

    assert_eq!(generator.run().await, Err(StateError::OwnerStopped));
}
