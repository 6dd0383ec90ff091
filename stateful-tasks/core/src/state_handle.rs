// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ReadRequest, StateAccess, StateError, WriteRequest};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Cloneable entry point to a running `StateOwner`.
///
/// Every call builds a fresh one-shot reply channel, queues the request and
/// waits for the owner's answer. The map itself is never reachable from here.
#[derive(Clone)]
pub struct StateHandle {
    reads: mpsc::Sender<ReadRequest>,
    writes: mpsc::Sender<WriteRequest>,
}

impl StateHandle {
    pub(crate) fn new(
        reads: mpsc::Sender<ReadRequest>,
        writes: mpsc::Sender<WriteRequest>,
    ) -> Self {
        Self { reads, writes }
    }

    /// True once the owner has dropped its inbound queues
    pub fn is_closed(&self) -> bool {
        self.reads.is_closed() && self.writes.is_closed()
    }
}

#[async_trait]
impl StateAccess for StateHandle {
    async fn read(&self, key: i64) -> Result<i64, StateError> {
        let (request, response) = ReadRequest::new(key);
        self.reads
            .send(request)
            .await
            .map_err(|_| StateError::OwnerStopped)?;
        response.await.map_err(|_| StateError::ReplyDropped)
    }

    async fn write(&self, key: i64, value: i64) -> Result<(), StateError> {
        let (request, response) = WriteRequest::new(key, value);
        self.writes
            .send(request)
            .await
            .map_err(|_| StateError::OwnerStopped)?;
        response
            .await
            .map(|_acknowledged| ())
            .map_err(|_| StateError::ReplyDropped)
    }
}
