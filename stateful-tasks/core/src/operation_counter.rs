// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Count of completed request/reply exchanges, shared by every worker
#[derive(Clone, Debug, Default)]
pub struct OperationCounter {
    count: Arc<AtomicU64>,
}

impl OperationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed exchange and returns the new total
    pub fn increment(&self) -> u64 {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn load(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
