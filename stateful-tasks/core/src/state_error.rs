// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Errors surfaced while talking to a state backend or driving load against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The owner task has terminated and no longer accepts requests
    OwnerStopped,

    /// The owner accepted the request but terminated before replying
    ReplyDropped,

    /// A reader or writer task panicked or was aborted
    TaskFailed(String),
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::OwnerStopped => write!(f, "State owner has stopped"),
            StateError::ReplyDropped => {
                write!(f, "State owner stopped before replying to the request")
            }
            StateError::TaskFailed(msg) => write!(f, "Worker task failed: {}", msg),
        }
    }
}

impl std::error::Error for StateError {}
