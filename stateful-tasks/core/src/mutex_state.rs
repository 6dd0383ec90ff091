// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{StateAccess, StateError};
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

/// Integer map shared behind a mutex.
/// Every read and write takes the lock for the duration of one map operation.
#[derive(Clone, Default)]
pub struct MutexState {
    state: Arc<Mutex<HashMap<i64, i64>>>,
}

impl MutexState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the map as it stands right now
    pub async fn snapshot(&self) -> HashMap<i64, i64> {
        self.state.lock().await.clone()
    }
}

#[async_trait]
impl StateAccess for MutexState {
    async fn read(&self, key: i64) -> Result<i64, StateError> {
        let state = self.state.lock().await;
        Ok(state.get(&key).copied().unwrap_or_default())
    }

    async fn write(&self, key: i64, value: i64) -> Result<(), StateError> {
        let mut state = self.state.lock().await;
        state.insert(key, value);
        Ok(())
    }
}
