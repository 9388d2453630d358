//! Selection dispatcher.
//!
//! Every operation asks the collector for one or more draws and reduces each
//! draw modulo the size of the index space it is choosing from.

use std::fmt::Write;
use std::ops::Range;

use crate::collection::Collection;
use crate::collector::EntropyCollector;
use crate::error::{ChaosError, Result};

/// Bytes in a token when the caller does not say.
pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// Picks, shuffles and samples using draws from an [`EntropyCollector`].
#[derive(Debug, Default)]
pub struct ChaosEngine {
    collector: EntropyCollector,
}

impl ChaosEngine {
    /// Create an engine over every signal available on this machine.
    pub fn new() -> Self {
        Self::with_collector(EntropyCollector::auto())
    }

    /// Create an engine over an existing collector.
    pub fn with_collector(collector: EntropyCollector) -> Self {
        Self { collector }
    }

    /// The underlying collector.
    pub fn collector(&self) -> &EntropyCollector {
        &self.collector
    }

    /// One raw 64-bit draw.
    pub fn collect_entropy(&self) -> u64 {
        self.collector.collect()
    }

    /// A draw reduced into `0..n`. `n` must be non-zero.
    fn index(&self, n: usize) -> usize {
        (self.collector.collect() % n as u64) as usize
    }

    // -----------------------------------------------------------------------
    // Picking
    // -----------------------------------------------------------------------

    /// Pick one element.
    ///
    /// Returns `None` for absent or empty input. Scalars pick themselves.
    /// Mapping values and set members are drawn in the container's iteration
    /// order. Nested rows go through [matrix selection](Self::pick_matrix).
    ///
    /// A plain `&Vec<Vec<T>>` is a sequence of rows and yields a whole row;
    /// wrap it in [`Collection::nested`] to pick a single cell.
    pub fn pick<'a, T>(&self, data: impl Into<Collection<'a, T>>) -> Option<&'a T> {
        let data = data.into();
        log::trace!("pick from {}", data.kind());
        match data {
            Collection::Absent => None,
            Collection::Scalar(value) => Some(value),
            Collection::Sequence(items) => {
                if items.is_empty() {
                    return None;
                }
                items.get(self.index(items.len()))
            }
            Collection::Nested(rows) => self.pick_matrix(&rows),
            Collection::Mapping(mut pool) | Collection::Set(mut pool) => {
                let n = pool.len();
                if n == 0 {
                    return None;
                }
                pool.nth(self.index(n))
            }
        }
    }

    /// Pick one element from rows treated as a virtual matrix.
    ///
    /// The grid is `rows.len()` by `rows[0].len()`. One draw selects a flat
    /// cell; if that cell falls past the end of a shorter row, every element
    /// of every row is pooled and a second draw picks from the pool.
    pub fn pick_matrix<'a, T>(&self, rows: &[&'a [T]]) -> Option<&'a T> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |row| row.len());
        if n_rows == 0 || n_cols == 0 {
            return None;
        }

        let cells = n_rows as u128 * n_cols as u128;
        let flat = u128::from(self.collector.collect()) % cells;
        let row = (flat / n_cols as u128) as usize;
        let col = (flat % n_cols as u128) as usize;

        match rows.get(row).and_then(|&r| r.get(col)) {
            Some(value) => Some(value),
            None => {
                log::trace!("cell ({row}, {col}) outside ragged row; flattening {n_rows} rows");
                self.pick_flattened(rows)
            }
        }
    }

    fn pick_flattened<'a, T>(&self, rows: &[&'a [T]]) -> Option<&'a T> {
        let pool: Vec<&'a T> = rows.iter().flat_map(|&row| row.iter()).collect();
        if pool.is_empty() {
            return None;
        }
        pool.get(self.index(pool.len())).copied()
    }

    /// Pick one `char` of `text`.
    pub fn pick_char(&self, text: &str) -> Option<char> {
        let n = text.chars().count();
        if n == 0 {
            return None;
        }
        text.chars().nth(self.index(n))
    }

    /// Pick one integer of a half-open range. Empty ranges give `None`.
    pub fn pick_range(&self, range: Range<i64>) -> Option<i64> {
        if range.is_empty() {
            return None;
        }
        let span = (i128::from(range.end) - i128::from(range.start)) as u128;
        Some(self.offset_from(range.start, span))
    }

    /// `start + draw % span`, in wide arithmetic so spans up to 2^64 fit.
    fn offset_from(&self, start: i64, span: u128) -> i64 {
        let offset = u128::from(self.collector.collect()) % span;
        (i128::from(start) + offset as i128) as i64
    }

    // -----------------------------------------------------------------------
    // Permutation and sampling
    // -----------------------------------------------------------------------

    /// Shuffle in place with Fisher-Yates, from the last index down to 1.
    pub fn shuffle<T>(&self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }

    /// `k` elements of `population` with no index used twice, in draw order.
    ///
    /// Runs a partial Fisher-Yates over a copy, so every k-subset is
    /// reachable. `k == population.len()` returns a full permutation.
    pub fn sample<T: Clone>(&self, population: &[T], k: usize) -> Result<Vec<T>> {
        let n = population.len();
        if k > n {
            return Err(ChaosError::invalid_argument(
                "sample",
                format!("sample size {k} exceeds population of {n}"),
            ));
        }

        let mut pool = population.to_vec();
        for i in 0..k {
            let j = i + self.index(n - i);
            pool.swap(i, j);
        }
        pool.truncate(k);
        Ok(pool)
    }

    // -----------------------------------------------------------------------
    // Scalars
    // -----------------------------------------------------------------------

    /// Integer in `a..=b`. Fails when `b < a`.
    pub fn randint(&self, a: i64, b: i64) -> Result<i64> {
        if b < a {
            return Err(ChaosError::invalid_argument(
                "randint",
                format!("upper bound {b} is below lower bound {a}"),
            ));
        }
        let span = (i128::from(b) - i128::from(a) + 1) as u128;
        Ok(self.offset_from(a, span))
    }

    /// Low bit of one draw.
    pub fn coin(&self) -> bool {
        self.collector.collect() & 1 == 1
    }

    // -----------------------------------------------------------------------
    // Tokens
    // -----------------------------------------------------------------------

    /// `nbytes` bytes, one draw each, keeping the low 8 bits.
    pub fn token_bytes(&self, nbytes: usize) -> Vec<u8> {
        (0..nbytes)
            .map(|_| (self.collector.collect() & 0xFF) as u8)
            .collect()
    }

    /// Lowercase hex of [`token_bytes`](Self::token_bytes), two digits per
    /// byte in draw order.
    pub fn token_hex(&self, nbytes: usize) -> String {
        let mut s = String::with_capacity(nbytes * 2);
        for b in self.token_bytes(nbytes) {
            // Writing into a String cannot fail.
            let _ = write!(s, "{b:02x}");
        }
        s
    }

    /// [`token_hex`](Self::token_hex) of [`DEFAULT_TOKEN_BYTES`] bytes.
    pub fn token_hex_default(&self) -> String {
        self.token_hex(DEFAULT_TOKEN_BYTES)
    }
}
