//! Deterministic signals for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::collector::{AVALANCHE, EntropyCollector};
use crate::source::{SignalInfo, SignalKind, SignalSource};

/// Multiplicative inverse of [`AVALANCHE`] modulo 2^64, by Newton iteration.
/// Each round doubles the number of correct low bits, starting from 3.
pub fn avalanche_inverse() -> u64 {
    let mut inv = AVALANCHE;
    for _ in 0..5 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(AVALANCHE.wrapping_mul(inv)));
    }
    inv
}

static CONSTANT_INFO: SignalInfo = SignalInfo {
    name: "constant",
    description: "fixed test value",
    kind: SignalKind::Process,
    optional: false,
};

/// Always samples the same value.
pub struct ConstantSignal(pub u64);

impl SignalSource for ConstantSignal {
    fn info(&self) -> &SignalInfo {
        &CONSTANT_INFO
    }
    fn sample(&self) -> u64 {
        self.0
    }
}

static UNAVAILABLE_INFO: SignalInfo = SignalInfo {
    name: "unavailable",
    description: "optional signal that never comes up",
    kind: SignalKind::Crypto,
    optional: true,
};

/// An optional signal that reports itself unavailable.
pub struct UnavailableSignal;

impl SignalSource for UnavailableSignal {
    fn info(&self) -> &SignalInfo {
        &UNAVAILABLE_INFO
    }
    fn is_available(&self) -> bool {
        false
    }
    fn sample(&self) -> u64 {
        panic!("sampled a signal that reported itself unavailable")
    }
}

static SCRIPTED_INFO: SignalInfo = SignalInfo {
    name: "scripted",
    description: "pre-images of a scripted draw sequence",
    kind: SignalKind::Process,
    optional: false,
};

/// Samples chosen so that a collector holding only this signal returns the
/// scripted draws in order. The last draw repeats once the script runs out.
pub struct ScriptedSignal {
    queue: Mutex<VecDeque<u64>>,
    last: Mutex<u64>,
}

impl ScriptedSignal {
    pub fn new(draws: &[u64]) -> Self {
        let inv = avalanche_inverse();
        Self {
            queue: Mutex::new(draws.iter().map(|d| d.wrapping_mul(inv)).collect()),
            last: Mutex::new(0),
        }
    }
}

impl SignalSource for ScriptedSignal {
    fn info(&self) -> &SignalInfo {
        &SCRIPTED_INFO
    }
    fn sample(&self) -> u64 {
        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.queue.lock().unwrap().pop_front() {
            *last = next;
        }
        *last
    }
}

/// A collector whose draws are exactly `draws`.
pub fn scripted_collector(draws: &[u64]) -> EntropyCollector {
    let mut c = EntropyCollector::empty();
    c.add_signal(Box::new(ScriptedSignal::new(draws)));
    c
}

#[test]
fn inverse_round_trips() {
    let inv = avalanche_inverse();
    assert_eq!(AVALANCHE.wrapping_mul(inv), 1);
    assert_eq!(inv, 0xf1de_83e1_9937_733d);
}
