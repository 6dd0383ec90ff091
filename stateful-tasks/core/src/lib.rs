// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod state_error;
pub use state_error::StateError;

mod read_request;
pub use read_request::ReadRequest;

mod write_request;
pub use write_request::WriteRequest;

mod state_access;
pub use state_access::StateAccess;

mod state_handle;
pub use state_handle::StateHandle;

mod state_owner;
pub use state_owner::StateOwner;

mod mutex_state;
pub use mutex_state::MutexState;

mod operation_counter;
pub use operation_counter::OperationCounter;

pub mod random;
pub use random::Random;

pub mod fastrand_random;
pub use fastrand_random::FastrandRandom;

pub mod timer;
pub use timer::Timer;

pub mod tokio_timer;
pub use tokio_timer::TokioTimer;

mod load_config;
pub use load_config::{ConfigError, LoadConfig};

mod demo_args;
pub use demo_args::DemoArgs;

mod load_worker;
pub use load_worker::{LoadWorker, WorkerAssignment, WorkerRole};

mod load_generator;
pub use load_generator::LoadGenerator;

mod load_report;
pub use load_report::{print_state, LoadReport};
