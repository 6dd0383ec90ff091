// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::StateError;
use async_trait::async_trait;

/// Trait for abstracting access to the shared integer map
/// Implementations decide how concurrent access is serialized
#[async_trait]
pub trait StateAccess: Clone + Send + Sync + 'static {
    /// Read the value stored under `key`
    /// Keys that were never written read as 0
    async fn read(&self, key: i64) -> Result<i64, StateError>;

    /// Store `value` under `key`, returning once the write has been applied
    async fn write(&self, key: i64, value: i64) -> Result<(), StateError>;
}
