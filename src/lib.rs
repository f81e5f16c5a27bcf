//! Test fixtures for exercising a process/resource-limited job runner.
//!
//! Each fixture is a standalone, long-running process whose only purpose
//! is to produce a recognisable load or output pattern:
//!
//! - [`counter`] prints an increasing integer once per second.
//! - [`echo`] reverses lines read from stdin.
//! - [`fork_stress`] duplicates itself until a pids limit stops it.
//! - [`stress`] pins a CPU, grows memory and churns disk concurrently.

pub mod counter;
pub mod cpu_stress;
pub mod disk_stress;
pub mod echo;
pub mod error;
pub mod fork_stress;
pub mod memory_stress;
pub mod stress;
pub mod telemetry;

pub use error::{Error, Result};
