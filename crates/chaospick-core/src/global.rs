//! Module-scope convenience functions over one process-wide engine.
//!
//! Each function forwards to the matching [`ChaosEngine`] method on
//! [`engine()`], which is built on first use.

use std::ops::Range;
use std::sync::OnceLock;

use crate::collection::Collection;
use crate::engine::ChaosEngine;
use crate::error::Result;

static ENGINE: OnceLock<ChaosEngine> = OnceLock::new();

/// The shared engine.
pub fn engine() -> &'static ChaosEngine {
    ENGINE.get_or_init(ChaosEngine::new)
}

/// One raw 64-bit draw from the shared engine.
pub fn collect_entropy() -> u64 {
    engine().collect_entropy()
}

/// Pick one element. Rows of a `Vec<Vec<T>>` are picked whole unless the
/// input is wrapped in [`Collection::nested`].
pub fn pick<'a, T>(data: impl Into<Collection<'a, T>>) -> Option<&'a T> {
    engine().pick(data)
}

pub fn pick_char(text: &str) -> Option<char> {
    engine().pick_char(text)
}

pub fn pick_range(range: Range<i64>) -> Option<i64> {
    engine().pick_range(range)
}

pub fn shuffle<T>(items: &mut [T]) {
    engine().shuffle(items)
}

pub fn randint(a: i64, b: i64) -> Result<i64> {
    engine().randint(a, b)
}

pub fn coin() -> bool {
    engine().coin()
}

pub fn sample<T: Clone>(population: &[T], k: usize) -> Result<Vec<T>> {
    engine().sample(population, k)
}

pub fn token_bytes(nbytes: usize) -> Vec<u8> {
    engine().token_bytes(nbytes)
}

pub fn token_hex(nbytes: usize) -> String {
    engine().token_hex(nbytes)
}
