//! Heap layout and allocation activity signals.
//!
//! The address of a fresh heap block depends on allocator state, ASLR and
//! everything else the process has allocated so far. The pressure counter
//! stands in for a garbage collector's generation counts. It only counts the
//! collector's own throwaway blocks, so in practice it tracks how many draws
//! the process has made.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::source::{SignalInfo, SignalKind, SignalSource};

/// Throwaway allocations made by [`AllocAddressSignal`] since process start.
static ALLOCATIONS: AtomicU64 = AtomicU64::new(0);

/// Current value of the process-wide throwaway allocation counter.
pub fn allocation_count() -> u64 {
    ALLOCATIONS.load(Ordering::Relaxed)
}

// ---------------------------------------------------------------------------
// AllocAddressSignal
// ---------------------------------------------------------------------------

static ALLOC_ADDRESS_INFO: SignalInfo = SignalInfo {
    name: "alloc_address",
    description: "Address of a freshly heap-allocated throwaway value",
    kind: SignalKind::Allocation,
    optional: false,
};

/// Allocates one small block per sample and reports where it landed.
pub struct AllocAddressSignal;

impl SignalSource for AllocAddressSignal {
    fn info(&self) -> &SignalInfo {
        &ALLOC_ADDRESS_INFO
    }

    fn sample(&self) -> u64 {
        let probe = std::hint::black_box(Box::new(0u64));
        ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        &*probe as *const u64 as usize as u64
    }
}

// ---------------------------------------------------------------------------
// AllocPressureSignal
// ---------------------------------------------------------------------------

static ALLOC_PRESSURE_INFO: SignalInfo = SignalInfo {
    name: "alloc_pressure",
    description: "Count of throwaway allocations made by the collector, one per draw",
    kind: SignalKind::Allocation,
    optional: false,
};

/// Reads the throwaway allocation counter. It moves only when
/// [`AllocAddressSignal`] runs, once per draw in a default collector, so it
/// is a process-wide draw count rather than a measure of heap activity.
pub struct AllocPressureSignal;

impl SignalSource for AllocPressureSignal {
    fn info(&self) -> &SignalInfo {
        &ALLOC_PRESSURE_INFO
    }

    fn sample(&self) -> u64 {
        allocation_count()
    }
}
