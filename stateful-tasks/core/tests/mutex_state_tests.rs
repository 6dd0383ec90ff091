// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use stateful_tasks_core::{MutexState, StateAccess};
use std::collections::{HashMap, HashSet};

#[tokio::test]
async fn test_liveness_read_returns_written_value() {
    let state = MutexState::new();

    state.write(3, 42).await.unwrap();

    assert_eq!(state.read(3).await.unwrap(), 42);
    assert_eq!(state.read(9).await.unwrap(), 0);
}

#[tokio::test]
async fn test_safety_clones_share_one_map() {
    let state = MutexState::new();
    let other = state.clone();

    state.write(1, 1).await.unwrap();
    other.write(1, 2).await.unwrap();
    other.write(2, 3).await.unwrap();

    assert_eq!(state.snapshot().await, HashMap::from([(1, 2), (2, 3)]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_safety_contended_keys_only_hold_written_values() {
    let state = MutexState::new();

    let tasks: Vec<_> = (0..10i64)
        .map(|writer| {
            let state = state.clone();
            tokio::spawn(async move {
                for iteration in 0..100i64 {
                    state.write(iteration % 3, writer * 1_000 + iteration).await.unwrap();
                }
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    let written: HashSet<(i64, i64)> = (0..10i64)
        .flat_map(|writer| (0..100i64).map(move |i| (i % 3, writer * 1_000 + i)))
        .collect();
    let snapshot = state.snapshot().await;
    assert_eq!(snapshot.len(), 3);
    for entry in snapshot {
        assert!(written.contains(&entry), "Unexpected entry {:?}", entry);
    }
}
