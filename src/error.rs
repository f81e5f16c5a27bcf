use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Writing to stdout or reading stdin failed (usually a closed pipe).
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// `fork(2)` refused to duplicate the process.
    #[error("fork failed: {0}")]
    Fork(#[source] io::Error),

    #[error("failed to spawn {worker} worker: {source}")]
    Spawn {
        worker: &'static str,
        #[source]
        source: io::Error,
    },
}
