use sysinfo::{ProcessesToUpdate, System};
use tracing::debug;

use crate::stress::BLOCK_SIZE;

const FILL: u8 = b'x';

/// Log the process footprint every this many blocks (256 MiB).
const REPORT_EVERY: usize = 256;

/// Ever-growing heap footprint. Blocks are never released.
#[derive(Debug, Default)]
pub struct MemoryHog {
    blocks: Vec<Vec<u8>>,
}

impl MemoryHog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one filled block. Filling touches every page, so the block
    /// counts against resident memory right away.
    pub fn grow(&mut self) {
        self.blocks.push(vec![FILL; BLOCK_SIZE]);
    }

    pub fn blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Bytes currently held.
    pub fn footprint(&self) -> usize {
        self.blocks.iter().map(Vec::len).sum()
    }
}

/// Grow until the allocator or the OOM killer ends the process.
pub fn stress_memory() -> ! {
    let mut hog = MemoryHog::new();
    loop {
        hog.grow();
        if hog.blocks() % REPORT_EVERY == 0 {
            debug!(
                held_mb = hog.footprint() / (1024 * 1024),
                rss_mb = resident_memory().map(|bytes| bytes / (1024 * 1024)),
                "memory grown"
            );
        }
    }
}

/// Resident set size of this process in bytes.
pub fn resident_memory() -> Option<u64> {
    let pid = sysinfo::get_current_pid().ok()?;
    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
    sys.process(pid).map(|process| process.memory())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_never_shrinks() {
        let mut hog = MemoryHog::new();
        let mut last = hog.footprint();
        assert_eq!(last, 0);

        for n in 1..=8 {
            hog.grow();
            let now = hog.footprint();
            assert!(now > last);
            assert_eq!(now, n * BLOCK_SIZE);
            last = now;
        }
        assert_eq!(hog.blocks(), 8);
    }

    #[test]
    fn resident_memory_covers_held_blocks() {
        let mut hog = MemoryHog::new();
        for _ in 0..32 {
            hog.grow();
        }

        let rss = resident_memory().expect("current process is visible");
        assert!(rss >= hog.footprint() as u64, "rss {} below {}", rss, hog.footprint());
    }
}
