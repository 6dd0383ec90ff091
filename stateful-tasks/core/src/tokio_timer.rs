// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Timer;
use std::time::Duration;
use tokio::time::{sleep, Instant};

pub struct TokioTimer;

#[async_trait::async_trait]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        sleep(duration).await;
    }

    // tokio's clock so paused-time tests see the same elapsed time as `sleep`
    fn now(&self) -> std::time::Instant {
        Instant::now().into_std()
    }
}
