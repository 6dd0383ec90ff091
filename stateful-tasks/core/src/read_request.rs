// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tokio::sync::oneshot;

/// Asks the owner for the value stored under `key`.
/// The owner answers exactly once on `reply`; unknown keys answer 0.
#[derive(Debug)]
pub struct ReadRequest {
    pub key: i64,
    pub reply: oneshot::Sender<i64>,
}

impl ReadRequest {
    pub fn new(key: i64) -> (Self, oneshot::Receiver<i64>) {
        let (reply, response) = oneshot::channel();
        (Self { key, reply }, response)
    }
}
