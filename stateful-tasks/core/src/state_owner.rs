// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ReadRequest, StateHandle, WriteRequest};
use std::collections::HashMap;
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;

/// Task that exclusively owns the integer map.
///
/// Requests arrive on two bounded queues, one for reads and one for writes,
/// and are served one at a time. When both queues have work ready the pick
/// between them is random. Nothing outside this task ever holds a reference
/// to the map; callers go through `StateHandle`.
///
/// The owner stops when its cancellation token fires or when every handle has
/// been dropped and both queues are drained. It then hands back the final map.
pub struct StateOwner {
    state: HashMap<i64, i64>,
    reads: mpsc::Receiver<ReadRequest>,
    writes: mpsc::Receiver<WriteRequest>,
    cancellation_token: CancellationToken,
    served: u64,
}

impl StateOwner {
    /// Builds an owner together with the handle that reaches it.
    /// `request_buffer` bounds each queue; a capacity of 1 keeps senders
    /// waiting on the owner almost as a rendezvous channel would.
    pub fn new(request_buffer: usize, cancellation_token: CancellationToken) -> (Self, StateHandle) {
        let (reads_tx, reads) = mpsc::channel(request_buffer.max(1));
        let (writes_tx, writes) = mpsc::channel(request_buffer.max(1));

        let owner = Self {
            state: HashMap::new(),
            reads,
            writes,
            cancellation_token,
            served: 0,
        };
        (owner, StateHandle::new(reads_tx, writes_tx))
    }

    /// Starts the owner on the tokio runtime
    pub fn spawn(
        request_buffer: usize,
        cancellation_token: CancellationToken,
    ) -> (StateHandle, JoinHandle<HashMap<i64, i64>>) {
        let (owner, handle) = Self::new(request_buffer, cancellation_token);
        (handle, tokio::spawn(owner.run()))
    }

    pub async fn run(mut self) -> HashMap<i64, i64> {
        println!("[owner] Serving reads and writes");

        let mut reads_open = true;
        let mut writes_open = true;

        while reads_open || writes_open {
            tokio::select! {
                _ = self.cancellation_token.cancelled() => {
                    println!("[owner] Cancelled");
                    break;
                }
                read = self.reads.recv(), if reads_open => match read {
                    Some(request) => self.serve_read(request),
                    None => reads_open = false,
                },
                write = self.writes.recv(), if writes_open => match write {
                    Some(request) => self.serve_write(request),
                    None => writes_open = false,
                },
            }
        }

        println!(
            "[owner] Stopped after {} requests, {} keys held",
            self.served,
            self.state.len()
        );
        self.state
    }

    fn serve_read(&mut self, request: ReadRequest) {
        let value = self.state.get(&request.key).copied().unwrap_or_default();
        self.served += 1;
        // The requester may have given up waiting
        let _ = request.reply.send(value);
    }

    fn serve_write(&mut self, request: WriteRequest) {
        self.state.insert(request.key, request.value);
        self.served += 1;
        let _ = request.reply.send(true);
    }
}
