//! Shared helpers used by multiple signal implementations.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

// ---------------------------------------------------------------------------
// High-resolution timing
// ---------------------------------------------------------------------------

/// Monotonic timestamp in nanoseconds.
///
/// On Unix this reads `CLOCK_MONOTONIC`, whose base is shared by every
/// process on the machine (usually boot), so the reading is already large on
/// the first call. Elsewhere it falls back to `std::time::Instant` relative
/// to a process-local epoch.
#[cfg(unix)]
pub fn monotonic_nanos() -> u64 {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // SAFETY: `ts` is a valid, writable timespec and CLOCK_MONOTONIC exists
    // on every Unix target.
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) };
    if rc != 0 {
        return process_nanos();
    }
    (ts.tv_sec as u64)
        .wrapping_mul(1_000_000_000)
        .wrapping_add(ts.tv_nsec as u64)
}

#[cfg(not(unix))]
pub fn monotonic_nanos() -> u64 {
    process_nanos()
}

/// Nanoseconds since this process first asked for the time.
fn process_nanos() -> u64 {
    use std::sync::OnceLock;
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    let epoch = EPOCH.get_or_init(Instant::now);
    epoch.elapsed().as_nanos() as u64
}

/// Wall-clock nanoseconds since the Unix epoch, truncated to 64 bits.
///
/// A clock set before 1970 reads as zero.
pub fn unix_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

// ---------------------------------------------------------------------------
// OS randomness
// ---------------------------------------------------------------------------

/// Fill buffer with OS random bytes via the `getrandom` crate.
///
/// # Panics
/// Panics if the OS random source fails. That is a fatal platform issue, not
/// a per-draw condition.
pub fn getrandom(buf: &mut [u8]) {
    getrandom::fill(buf).expect("OS random source failed");
}

// ---------------------------------------------------------------------------
// Bit mixing
// ---------------------------------------------------------------------------

/// Map a signed value onto `u64` by two's complement, the way a negative
/// integer XORs into an unbounded one once masked to 64 bits.
pub fn signed_bits(v: i64) -> u64 {
    v as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_nanos_does_not_go_backwards() {
        let a = monotonic_nanos();
        let b = monotonic_nanos();
        assert!(b >= a);
    }

    #[test]
    #[cfg(unix)]
    fn monotonic_nanos_uses_system_wide_base() {
        let local = process_nanos();
        let system = monotonic_nanos();
        // The machine has been up for longer than this process.
        assert!(system >= local);
        // At least a millisecond since boot, so the first timer reading of
        // a fresh process is not stuck near zero.
        assert!(system > 1_000_000, "monotonic clock read {system}");
    }

    #[test]
    fn unix_nanos_is_after_2020() {
        // 2020-01-01T00:00:00Z in nanoseconds.
        assert!(unix_nanos() > 1_577_836_800_000_000_000);
    }

    #[test]
    fn getrandom_fills_whole_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        getrandom(&mut a);
        getrandom(&mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn signed_bits_wraps_negatives() {
        assert_eq!(signed_bits(-1), u64::MAX);
        assert_eq!(signed_bits(42), 42);
    }
}
