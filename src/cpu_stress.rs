use std::hint::black_box;

/// One round of busy work. Pure computation, no blocking calls.
pub fn spin() -> u64 {
    black_box((0..1_000_000u64).fold(0u64, |acc, x| acc.wrapping_add(black_box(x))))
}

/// Pin the calling thread at full utilisation forever.
pub fn stress_cpu() -> ! {
    loop {
        spin();
    }
}
