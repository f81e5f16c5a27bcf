//! Run only inside a pids-limited cgroup: growth is exponential and never
//! stops on its own.

use std::io;

use cgroup_jobs::{fork_stress, telemetry};

fn main() -> anyhow::Result<()> {
    telemetry::init();
    fork_stress::run(&mut io::stdout().lock())?;
    Ok(())
}
