//! Multi-call entry point: `jobs <fixture>` behaves exactly like the
//! standalone binary of the same name.

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cgroup_jobs::{counter, echo, fork_stress, stress, telemetry};

#[derive(Parser)]
#[command(name = "jobs")]
#[command(version, about = "Fixtures for exercising cgroup resource limits")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an increasing integer once per second
    Counter,
    /// Reverse each line read from stdin until an empty line or "exit"
    Echo,
    /// Fork without bound (only run under a pids limit)
    Forkbomb,
    /// Load CPU, memory and disk concurrently, forever
    Stress,
}

fn main() -> Result<()> {
    telemetry::init();

    match Cli::parse().command {
        Commands::Counter => counter::run(&mut io::stdout().lock(), counter::TICK)?,
        Commands::Echo => echo::run(&mut io::stdin().lock(), &mut io::stdout().lock())?,
        Commands::Forkbomb => fork_stress::run(&mut io::stdout().lock())?,
        Commands::Stress => stress::run()?,
    }

    Ok(())
}
