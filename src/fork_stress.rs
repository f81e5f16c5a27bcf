//! Unbounded self-duplication, used to check that a pids limit holds.
//!
//! Every process, parent or child, keeps forking for as long as the kernel
//! lets it. Nobody waits on children; the harness is torn down externally.

use std::io::{self, Write};
use std::process;

use libc::pid_t;
use tracing::warn;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fork {
    Parent(pid_t),
    Child,
}

/// Duplicate the calling process.
pub fn duplicate() -> io::Result<Fork> {
    // SAFETY: callers are single-threaded; the child only touches stdout and
    // loops back into fork().
    let pid = unsafe { libc::fork() };
    match pid {
        -1 => Err(io::Error::last_os_error()),
        0 => Ok(Fork::Child),
        child => Ok(Fork::Parent(child)),
    }
}

pub fn identification(pid: u32) -> String {
    format!("forked (pid={})", pid)
}

/// Fork forever. Returns only when `fork(2)` fails, which is the signal the
/// limiter is doing its job.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    run_with(duplicate, out)
}

fn run_with<D, W>(mut dup: D, out: &mut W) -> Result<()>
where
    D: FnMut() -> io::Result<Fork>,
    W: Write,
{
    loop {
        match dup() {
            Ok(Fork::Child) => {
                writeln!(out, "{}", identification(process::id()))?;
                out.flush()?;
            }
            Ok(Fork::Parent(_)) => {}
            Err(e) => {
                warn!(pid = process::id(), error = %e, "fork refused");
                return Err(Error::Fork(e));
            }
        }
    }
}
