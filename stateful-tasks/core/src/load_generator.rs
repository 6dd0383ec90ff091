// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{
    FastrandRandom, LoadConfig, LoadReport, LoadWorker, OperationCounter, Random, StateAccess,
    StateError, Timer, TokioTimer, WorkerAssignment, WorkerRole,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Runs a bounded pool of readers and writers against any `StateAccess`.
///
/// With `iterations` set, every worker performs exactly that many exchanges.
/// Otherwise workers keep going until `duration_ms` has passed on the timer,
/// or until the cancellation token fires.
pub struct LoadGenerator<S: StateAccess, R: Random + 'static = FastrandRandom, T: Timer = TokioTimer>
{
    config: LoadConfig,
    state: S,
    random: Arc<R>,
    timer: T,
    counter: OperationCounter,
    cancellation_token: CancellationToken,
}

impl<S: StateAccess> LoadGenerator<S> {
    pub fn with_defaults(config: LoadConfig, state: S) -> Self {
        Self::new(config, state, FastrandRandom, TokioTimer)
    }
}

impl<S: StateAccess, R: Random + 'static, T: Timer> LoadGenerator<S, R, T> {
    pub fn new(config: LoadConfig, state: S, random: R, timer: T) -> Self {
        Self {
            config,
            state,
            random: Arc::new(random),
            timer,
            counter: OperationCounter::new(),
            cancellation_token: CancellationToken::new(),
        }
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.clone()
    }

    /// Live view of the shared operation count
    pub fn counter(&self) -> OperationCounter {
        self.counter.clone()
    }

    pub async fn run(self) -> Result<LoadReport, StateError> {
        let started = self.timer.now();
        println!(
            "[load] Starting {} readers and {} writers",
            self.config.readers, self.config.writers
        );

        let assignment = WorkerAssignment {
            iterations: self.config.iterations,
            key_space: self.config.key_space,
            value_space: self.config.value_space,
        };

        let roles = std::iter::repeat_n(WorkerRole::Reader, self.config.readers)
            .chain(std::iter::repeat_n(WorkerRole::Writer, self.config.writers));

        let mut workers = Vec::with_capacity(self.config.readers + self.config.writers);
        for (id, role) in roles.enumerate() {
            let mut worker = LoadWorker::new(
                id,
                role,
                self.state.clone(),
                self.random.clone(),
                self.counter.clone(),
                self.cancellation_token.clone(),
            );
            worker.start(assignment);
            workers.push(worker);
        }

        if self.config.iterations.is_none() {
            tokio::select! {
                _ = self.timer.sleep(self.config.duration()) => {
                    println!("[load] {}ms elapsed, stopping workers", self.config.duration_ms);
                }
                _ = self.cancellation_token.cancelled() => {
                    println!("[load] Cancelled, stopping workers");
                }
            }
            self.cancellation_token.cancel();
        }

        let mut reads = 0;
        let mut writes = 0;
        let mut first_error = None;

        for worker in workers {
            let role = worker.role();
            match worker.wait().await {
                Ok(completed) => match role {
                    WorkerRole::Reader => reads += completed,
                    WorkerRole::Writer => writes += completed,
                },
                Err(e) => {
                    eprintln!("[load] A {} failed: {}", role, e);
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        Ok(LoadReport {
            operations: self.counter.load(),
            reads,
            writes,
            elapsed: self.timer.now().saturating_duration_since(started),
        })
    }
}
