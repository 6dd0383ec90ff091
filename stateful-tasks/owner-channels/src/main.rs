// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use stateful_tasks_core::{print_state, DemoArgs, LoadGenerator, StateOwner};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoArgs::parse().resolve()?;

    println!("=== STATE OWNED BY A SINGLE TASK ===");
    config.print_summary();

    // Separate token: Ctrl+C stops the workers and the owner drains on its own
    let owner_token = CancellationToken::new();
    let (handle, owner) = StateOwner::spawn(config.request_buffer, owner_token);

    let generator = LoadGenerator::with_defaults(config, handle);
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

    // Every handle went away with the generator, so the owner drains and returns
    let state = owner.await?;
    print_state(&state);

    Ok(())
}
