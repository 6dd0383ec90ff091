// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tokio::sync::oneshot;

/// Asks the owner to store `value` under `key`, acknowledged on `reply`
#[derive(Debug)]
pub struct WriteRequest {
    pub key: i64,
    pub value: i64,
    pub reply: oneshot::Sender<bool>,
}

impl WriteRequest {
    pub fn new(key: i64, value: i64) -> (Self, oneshot::Receiver<bool>) {
        let (reply, response) = oneshot::channel();
        (Self { key, value, reply }, response)
    }
}
