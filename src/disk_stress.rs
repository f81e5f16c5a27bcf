use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{trace, warn};

use crate::stress::BLOCK_SIZE;

const PREFIX: &str = "stress-io-";

/// Outcome of filling one temporary file.
#[derive(Debug)]
pub struct Rotation {
    pub written: u64,
    /// The write failure that ended this file.
    pub error: io::Error,
}

/// Writes into a temporary file until the disk (or quota) says no, then
/// throws the file away and starts over.
#[derive(Debug)]
pub struct IoChurn {
    dir: PathBuf,
    buf: Vec<u8>,
}

impl IoChurn {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            buf: vec![b'x'; BLOCK_SIZE],
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Fill, close and delete one temporary file.
    ///
    /// `Err` means the file could not be created or removed; a failed write
    /// is the normal end of a rotation and is reported in [`Rotation`].
    pub fn rotate(&self) -> io::Result<Rotation> {
        self.rotate_through(|file| file)
    }

    fn rotate_through<W, F>(&self, wrap: F) -> io::Result<Rotation>
    where
        W: Write,
        F: FnOnce(File) -> W,
    {
        let (file, path) = tempfile::Builder::new()
            .prefix(PREFIX)
            .tempfile_in(&self.dir)?
            .into_parts();
        let mut sink = wrap(file);

        let mut written = 0u64;
        let error = loop {
            match sink.write(&self.buf) {
                Ok(0) => break io::Error::from(io::ErrorKind::WriteZero),
                Ok(n) => written += n as u64,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => break e,
            }
        };

        // Close before unlinking.
        drop(sink);
        path.close()?;

        Ok(Rotation { written, error })
    }
}

/// Rotate forever. Returns only if a temporary file can't be created or
/// deleted at all.
pub fn stress_disk(churn: &IoChurn) -> io::Error {
    loop {
        match churn.rotate() {
            Ok(rotation) => {
                trace!(written = rotation.written, error = %rotation.error, "rotated");
            }
            Err(e) => {
                warn!(dir = %churn.dir().display(), error = %e, "io worker stopped");
                return e;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn entries(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    /// Accepts `blocks` writes, then fails like a full disk. Checks on every
    /// write that no other temp file is lying around.
    struct Quota<'a> {
        file: File,
        blocks: usize,
        dir: &'a Path,
    }

    impl Write for Quota<'_> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            assert_eq!(entries(self.dir), 1);
            if self.blocks == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "no space left"));
            }
            self.blocks -= 1;
            self.file.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.file.flush()
        }
    }

    #[test]
    fn rotation_writes_until_failure_then_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let churn = IoChurn::new(dir.path());

        for _ in 0..3 {
            let rotation = churn
                .rotate_through(|file| Quota {
                    file,
                    blocks: 2,
                    dir: dir.path(),
                })
                .unwrap();

            assert_eq!(rotation.written, 2 * BLOCK_SIZE as u64);
            assert_eq!(rotation.error.to_string(), "no space left");
            assert_eq!(entries(dir.path()), 0);
        }
    }

    #[test]
    fn zero_length_write_ends_rotation() {
        struct Stuck;

        impl Write for Stuck {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Ok(0)
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let churn = IoChurn::new(dir.path());
        let rotation = churn.rotate_through(|_file| Stuck).unwrap();

        assert_eq!(rotation.written, 0);
        assert_eq!(rotation.error.kind(), io::ErrorKind::WriteZero);
        assert_eq!(entries(dir.path()), 0);
    }

    #[test]
    fn missing_directory_stops_the_worker() {
        let dir = tempfile::tempdir().unwrap();
        let churn = IoChurn::new(dir.path().join("gone"));

        assert!(churn.rotate().is_err());
        assert_eq!(stress_disk(&churn).kind(), io::ErrorKind::NotFound);
    }
}
