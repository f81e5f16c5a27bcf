use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::Result;

/// Delay between two emitted values.
pub const TICK: Duration = Duration::from_secs(1);

/// Unbounded sequence 0, 1, 2, ... that is never reset.
#[derive(Debug, Default)]
pub struct Counter {
    next: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for Counter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = self.next;
        self.next = self.next.wrapping_add(1);
        Some(value)
    }
}

/// Write one value on its own line and flush, so a reader on the other end
/// of a pipe sees it immediately.
pub fn emit<W: Write>(out: &mut W, value: u64) -> Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()?;
    Ok(())
}

/// Emit the counter forever, sleeping `interval` after each value.
///
/// Only returns when the output can no longer be written.
pub fn run<W: Write>(out: &mut W, interval: Duration) -> Result<()> {
    debug!(?interval, "counter started");
    Counter::new().try_for_each(|value| {
        emit(out, value)?;
        thread::sleep(interval);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn starts_at_zero_and_increments() {
        let values: Vec<u64> = Counter::new().take(5).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn emit_writes_one_line_per_value() {
        let mut out = Vec::new();
        for value in Counter::new().take(3) {
            emit(&mut out, value).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "0\n1\n2\n");
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn run_stops_on_broken_pipe() {
        let err = run(&mut Closed, Duration::ZERO).unwrap_err();
        assert!(matches!(err, crate::Error::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
