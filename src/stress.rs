//! Concurrent CPU, memory and disk load.
//!
//! Three unsynchronised threads each own their data outright; the main
//! thread launches them and then parks for good.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Condvar, Mutex};
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::cpu_stress::stress_cpu;
use crate::disk_stress::{stress_disk, IoChurn};
use crate::memory_stress::{resident_memory, stress_memory};
use crate::{Error, Result};

/// Allocation and write granularity for the memory and IO workers.
pub const BLOCK_SIZE: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Worker {
    Cpu,
    Memory,
    Io,
}

impl Worker {
    pub const ALL: [Worker; 3] = [Worker::Cpu, Worker::Memory, Worker::Io];

    pub fn name(self) -> &'static str {
        match self {
            Worker::Cpu => "cpu",
            Worker::Memory => "memory",
            Worker::Io => "io",
        }
    }

    /// Line printed once when the worker starts.
    pub fn announcement(self) -> String {
        format!("stressing {}", self.name())
    }
}

impl fmt::Display for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn announce(worker: Worker) {
    let mut stdout = io::stdout().lock();
    // Nowhere to report a closed stdout; the load matters, not the line.
    let _ = writeln!(stdout, "{}", worker.announcement());
    let _ = stdout.flush();
}

fn spawn(worker: Worker, dir: PathBuf) -> Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(format!("stress-{}", worker))
        .spawn(move || {
            announce(worker);
            match worker {
                Worker::Cpu => stress_cpu(),
                Worker::Memory => stress_memory(),
                Worker::Io => {
                    stress_disk(&IoChurn::new(dir));
                }
            }
        })
        .map_err(|source| Error::Spawn {
            worker: worker.name(),
            source,
        })
}

/// Start all three workers, writing temporary files under `dir`.
pub fn launch(dir: PathBuf) -> Result<Vec<JoinHandle<()>>> {
    debug!(dir = %dir.display(), rss = ?resident_memory(), "launching workers");

    Worker::ALL
        .into_iter()
        .map(|worker| spawn(worker, dir.clone()))
        .collect()
}

/// Block the calling thread forever without burning CPU.
pub fn park_forever() -> ! {
    let lock = Mutex::new(());
    let never = Condvar::new();
    let mut guard = lock.lock().unwrap_or_else(|e| e.into_inner());
    loop {
        // Nothing ever notifies; this only wakes spuriously.
        guard = never.wait(guard).unwrap_or_else(|e| e.into_inner());
    }
}

/// Launch the workers in the default temp directory and never return.
pub fn run() -> Result<()> {
    let _workers = launch(std::env::temp_dir())?;
    park_forever()
}
