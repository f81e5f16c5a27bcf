use std::io;

use cgroup_jobs::{counter, telemetry};

fn main() -> anyhow::Result<()> {
    telemetry::init();
    counter::run(&mut io::stdout().lock(), counter::TICK)?;
    Ok(())
}
