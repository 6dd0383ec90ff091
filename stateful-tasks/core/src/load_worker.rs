// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{OperationCounter, Random, StateAccess, StateError};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerRole {
    Reader,
    Writer,
}

impl std::fmt::Display for WorkerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkerRole::Reader => write!(f, "reader"),
            WorkerRole::Writer => write!(f, "writer"),
        }
    }
}

/// What a worker does once started
#[derive(Debug, Clone, Copy)]
pub struct WorkerAssignment {
    /// `None` keeps the worker going until cancelled
    pub iterations: Option<u64>,
    pub key_space: i64,
    pub value_space: i64,
}

/// Reader or writer task that repeatedly exchanges requests with a state backend
pub struct LoadWorker<S: StateAccess, R: Random + 'static> {
    id: usize,
    role: WorkerRole,
    state: S,
    random: Arc<R>,
    counter: OperationCounter,
    cancel_token: CancellationToken,
    task_handle: Option<JoinHandle<Result<u64, StateError>>>,
}

impl<S: StateAccess, R: Random + 'static> LoadWorker<S, R> {
    pub fn new(
        id: usize,
        role: WorkerRole,
        state: S,
        random: Arc<R>,
        counter: OperationCounter,
        cancel_token: CancellationToken,
    ) -> Self {
        Self {
            id,
            role,
            state,
            random,
            counter,
            cancel_token,
            task_handle: None,
        }
    }

    pub fn role(&self) -> WorkerRole {
        self.role
    }

    pub fn start(&mut self, assignment: WorkerAssignment) {
        let id = self.id;
        let role = self.role;
        let state = self.state.clone();
        let random = self.random.clone();
        let counter = self.counter.clone();
        let cancel_token = self.cancel_token.clone();

        let handle = tokio::spawn(async move {
            let result =
                exchange_loop(role, &state, &*random, &counter, &cancel_token, assignment).await;

            if id.is_multiple_of(10) {
                match &result {
                    Ok(completed) => {
                        println!("[{} {}] Finished after {} exchanges", role, id, completed)
                    }
                    Err(e) => println!("[{} {}] Stopped: {}", role, id, e),
                }
            }
            result
        });

        self.task_handle = Some(handle);
    }

    /// Waits for the task and returns how many exchanges it completed
    pub async fn wait(self) -> Result<u64, StateError> {
        match self.task_handle {
            Some(handle) => handle
                .await
                .map_err(|e| StateError::TaskFailed(e.to_string()))?,
            None => Ok(0),
        }
    }
}

async fn exchange_loop<S: StateAccess, R: Random>(
    role: WorkerRole,
    state: &S,
    random: &R,
    counter: &OperationCounter,
    cancel_token: &CancellationToken,
    assignment: WorkerAssignment,
) -> Result<u64, StateError> {
    let mut completed = 0;

    while assignment.iterations.is_none_or(|limit| completed < limit) {
        if cancel_token.is_cancelled() {
            break;
        }

        let key = random.i64(0..assignment.key_space);
        let exchange = async {
            match role {
                WorkerRole::Reader => state.read(key).await.map(|_| ()),
                WorkerRole::Writer => {
                    let value = random.i64(0..assignment.value_space);
                    state.write(key, value).await
                }
            }
        };

        // An exchange still in flight at cancellation is abandoned and not counted
        tokio::select! {
            _ = cancel_token.cancelled() => break,
            result = exchange => result?,
        }

        counter.increment();
        completed += 1;
    }

    Ok(completed)
}
