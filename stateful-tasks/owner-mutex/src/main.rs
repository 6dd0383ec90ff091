// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use stateful_tasks_core::{print_state, DemoArgs, LoadGenerator, MutexState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoArgs::parse().resolve()?;

    println!("=== STATE GUARDED BY A MUTEX ===");
    config.print_summary();

    let state = MutexState::new();
    let generator = LoadGenerator::with_defaults(config, state.clone());
    let cancel_token = generator.cancellation_token();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\n=== Ctrl+C received, stopping workers ===");
            cancel_token.cancel();
        }
    });

    println!("Press Ctrl+C to stop early\n");
    let report = generator.run().await?;

    println!("\n=== RESULTS ===");
    report.print();
    print_state(&state.snapshot().await);

    Ok(())
}
