//! Wizard duel client binary.
//!
//! Runs one battle between two wizards and prints the battle log.
//!
//! # Examples
//!
//! ```bash
//! # Two bundled wizards, reproducible
//! cargo run -p duel-client -- ignis nerissa --seed 7
//!
//! # A custom wizard against a passive opponent
//! cargo run -p duel-client -- ./my_wizard.json morvane --second-policy pass
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use duel_client::{Args, ClientConfig, report, resolve_wizard};
use duel_content::builtin_names;
use duel_core::Seat;
use duel_runtime::Duel;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.list {
        for name in builtin_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut config = ClientConfig::from_env();
    args.apply(&mut config);

    let (Some(first), Some(second)) = (args.first.as_deref(), args.second.as_deref()) else {
        anyhow::bail!("two wizards are required");
    };
    let first = resolve_wizard(first)?;
    let second = resolve_wizard(second)?;

    if let Some(seed) = config.seed {
        info!("Seed: {seed}");
    }
    let mut builder = Duel::builder().config(config.duel_config());
    builder = args.first_policy.install(builder, Seat::First);
    builder = args.second_policy.install(builder, Seat::Second);

    let duel = builder.build();
    let printer = report::spawn_printer(duel.subscribe());

    duel.start(first, second).await?;
    let winner = duel.run().await?;
    let view = duel.handle().query_state().await?;

    duel.shutdown().await?;
    printer.await?;

    println!("\n{}", report::summary(&view.state, args.snapshot));
    match winner {
        Some(seat) => info!("{} won as {seat}", view.state.wizard(seat).name),
        None => info!("No winner after {} steps", config.max_steps),
    }

    Ok(())
}
