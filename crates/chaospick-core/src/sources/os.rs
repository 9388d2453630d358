//! Operating system random signals.
//!
//! Three independent reads of OS-provided randomness. Each is merged by XOR,
//! so a degraded read weakens the draw instead of breaking it.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::source::{SignalInfo, SignalKind, SignalSource};
use crate::state::EntropyState;

use super::helpers::getrandom;

// ---------------------------------------------------------------------------
// OsRandomSignal
// ---------------------------------------------------------------------------

static OS_RANDOM_INFO: SignalInfo = SignalInfo {
    name: "os_random",
    description: "64 bits from the OS random source",
    kind: SignalKind::OsRandom,
    optional: false,
};

/// A full 64-bit word from `getrandom`.
pub struct OsRandomSignal;

impl SignalSource for OsRandomSignal {
    fn info(&self) -> &SignalInfo {
        &OS_RANDOM_INFO
    }

    fn sample(&self) -> u64 {
        let mut buf = [0u8; 8];
        getrandom(&mut buf);
        u64::from_le_bytes(buf)
    }
}

// ---------------------------------------------------------------------------
// OsBytesSignal
// ---------------------------------------------------------------------------

static OS_BYTES_INFO: SignalInfo = SignalInfo {
    name: "os_bytes",
    description: "Second independent 8-byte OS random read, big-endian",
    kind: SignalKind::OsRandom,
    optional: false,
};

/// A separate 8-byte OS read, interpreted big-endian.
pub struct OsBytesSignal;

impl SignalSource for OsBytesSignal {
    fn info(&self) -> &SignalInfo {
        &OS_BYTES_INFO
    }

    fn sample(&self) -> u64 {
        let mut buf = [0u8; 8];
        getrandom(&mut buf);
        u64::from_be_bytes(buf)
    }
}

// ---------------------------------------------------------------------------
// SysRngSignal
// ---------------------------------------------------------------------------

static SYS_RNG_INFO: SignalInfo = SignalInfo {
    name: "sys_rng",
    description: "32-bit draw from the cryptographically-backed OsRng",
    kind: SignalKind::Crypto,
    optional: true,
};

/// 32 bits from [`OsRng`], present only when the process-wide probe
/// succeeded.
pub struct SysRngSignal;

impl SignalSource for SysRngSignal {
    fn info(&self) -> &SignalInfo {
        &SYS_RNG_INFO
    }

    fn is_available(&self) -> bool {
        EntropyState::get().has_sys_random
    }

    fn sample(&self) -> u64 {
        OsRng.try_next_u32().map(u64::from).unwrap_or(0)
    }
}
