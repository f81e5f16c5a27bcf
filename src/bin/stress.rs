use cgroup_jobs::{stress, telemetry};

fn main() -> anyhow::Result<()> {
    telemetry::init();
    stress::run()?;
    Ok(())
}
