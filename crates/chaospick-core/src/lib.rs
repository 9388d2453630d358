//! # chaospick-core
//!
//! **Pick from anything, with entropy blended from everything.**
//!
//! `chaospick-core` picks elements, shuffles, samples and mints tokens from a
//! single primitive: a 64-bit draw that XORs together OS randomness, clock
//! jitter, heap layout, a process salt, a UUID, a nonlinear timer reading
//! and, when present, a cryptographic generator, then scrambles the result
//! with a Fibonacci-hashing multiply.
//!
//! ## Quick Start
//!
//! ```no_run
//! use chaospick_core::{ChaosEngine, Collection};
//!
//! let engine = ChaosEngine::new();
//!
//! let colours = vec!["red", "green", "blue"];
//! let colour = engine.pick(&colours);
//! assert!(colour.is_some());
//!
//! // Ragged rows never fail: cells past a short row fall back to a flat pool.
//! let grid = vec![vec![1, 2, 3], vec![4, 5]];
//! let cell = engine.pick(Collection::nested(&grid));
//! assert!(cell.is_some());
//!
//! let die = engine.randint(1, 6).unwrap();
//! assert!((1..=6).contains(&die));
//!
//! let token = engine.token_hex(16);
//! assert_eq!(token.len(), 32);
//! ```
//!
//! Module-level functions ([`pick`], [`shuffle`], [`randint`], ...) forward
//! to one lazily built process-wide engine.
//!
//! ## Not a CSPRNG
//!
//! Draws are best-effort: good enough for games, sampling and jitter, not for
//! keys. There is no seed and no way to replay a sequence.

pub mod collection;
pub mod collector;
pub mod engine;
pub mod error;
pub mod global;
pub mod source;
pub mod sources;
pub mod state;

#[cfg(test)]
mod testing;

pub use collection::{Collection, Pool};
pub use collector::{AVALANCHE, EntropyCollector, avalanche};
pub use engine::{ChaosEngine, DEFAULT_TOKEN_BYTES};
pub use error::{ChaosError, Result};
pub use global::{
    coin, collect_entropy, engine, pick, pick_char, pick_range, randint, sample, shuffle,
    token_bytes, token_hex,
};
pub use source::{SignalInfo, SignalInfoSnapshot, SignalKind, SignalSource};
pub use sources::detect_available_signals;
pub use state::EntropyState;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
