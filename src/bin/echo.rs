use std::io;

use cgroup_jobs::{echo, telemetry};

fn main() -> anyhow::Result<()> {
    telemetry::init();
    echo::run(&mut io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(())
}
