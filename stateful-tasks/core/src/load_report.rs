// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::{collections::HashMap, time::Duration};

/// Outcome of a load run
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    /// Value of the shared operation counter once every worker has stopped
    pub operations: u64,
    pub reads: u64,
    pub writes: u64,
    pub elapsed: Duration,
}

impl LoadReport {
    pub fn ops_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.operations as f64 / secs
    }

    pub fn print(&self) {
        println!("ops: {}", self.operations);
        println!("  - Reads: {}", self.reads);
        println!("  - Writes: {}", self.writes);
        println!("  - Elapsed: {:.2}s", self.elapsed.as_secs_f64());
        println!("  - Throughput: {:.0} ops/s", self.ops_per_sec());
    }
}

pub fn print_state(state: &HashMap<i64, i64>) {
    println!("\n=== Final State ===");
    if state.is_empty() {
        println!("  No keys written");
    } else {
        let mut keys: Vec<_> = state.keys().copied().collect();
        keys.sort();
        for key in keys {
            println!("  {} -> {}", key, state[&key]);
        }
    }
    println!("===================\n");
}
