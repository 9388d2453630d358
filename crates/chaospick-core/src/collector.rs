//! Entropy collector: XOR accumulation over ambient signals.
//!
//! Architecture:
//! 1. Auto-discover the signals this machine can read
//! 2. Read one sample from every registered signal
//! 3. XOR the samples together
//! 4. Scramble the accumulator with a multiplicative avalanche step
//!
//! No signal dominates: a constant or missing one only removes its own
//! contribution. There is no seed and no replay; the public constructor
//! always wires in the live OS and timing signals.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::source::{SignalInfoSnapshot, SignalSource};
use crate::state::EntropyState;

/// Fibonacci hashing multiplier, `2^64 / phi` rounded to odd.
pub const AVALANCHE: u64 = 0x9e37_79b9_7f4a_7c15;

/// Scramble an XOR accumulator into a finished draw.
#[inline]
pub fn avalanche(acc: u64) -> u64 {
    acc.wrapping_mul(AVALANCHE)
}

/// Produces 64-bit draws from every registered signal.
pub struct EntropyCollector {
    signals: Vec<Box<dyn SignalSource>>,
    draws: AtomicU64,
}

impl EntropyCollector {
    /// Create a collector with no signals.
    pub(crate) fn empty() -> Self {
        Self {
            signals: Vec::new(),
            draws: AtomicU64::new(0),
        }
    }

    /// Create a collector with all signals available on this machine.
    ///
    /// # Panics
    /// Panics if the OS random source cannot be read.
    pub fn auto() -> Self {
        let state = EntropyState::get();
        let mut collector = Self::empty();
        for signal in crate::sources::detect_available_signals() {
            collector.add_signal(signal);
        }
        log::debug!(
            "collector assembled: {} signals, sys_random={}",
            collector.signal_count(),
            state.has_sys_random
        );
        collector
    }

    /// Register a signal. Crate-private so callers cannot seed the collector.
    pub(crate) fn add_signal(&mut self, signal: Box<dyn SignalSource>) {
        log::trace!("registering signal {}", signal.name());
        self.signals.push(signal);
    }

    /// Number of registered signals.
    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> u64 {
        self.draws.load(Ordering::Relaxed)
    }

    /// Metadata for each registered signal, in mixing order.
    pub fn signal_infos(&self) -> Vec<SignalInfoSnapshot> {
        self.signals
            .iter()
            .map(|s| SignalInfoSnapshot::from(s.info()))
            .collect()
    }

    /// One 64-bit draw.
    ///
    /// Reads every signal once, XORs the samples, and multiplies by
    /// [`AVALANCHE`] modulo 2^64. Allocates one throwaway heap block per call
    /// when the allocation signal is registered.
    pub fn collect(&self) -> u64 {
        let acc = self
            .signals
            .iter()
            .fold(0u64, |acc, signal| acc ^ signal.sample());
        self.draws.fetch_add(1, Ordering::Relaxed);
        avalanche(acc)
    }
}

impl Default for EntropyCollector {
    fn default() -> Self {
        Self::auto()
    }
}

impl std::fmt::Debug for EntropyCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.signals.iter().map(|s| s.name()).collect();
        f.debug_struct("EntropyCollector")
            .field("signals", &names)
            .field("draws", &self.draws())
            .finish()
    }
}
