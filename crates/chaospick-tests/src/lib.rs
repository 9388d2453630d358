//! Statistical smoke tests for chaospick draws.
//!
//! A small battery in the NIST SP 800-22 style: bit frequency, byte
//! frequency, runs, and a chi-squared check over category counts for
//! index-selection output. Each test returns a [`TestResult`] with a p-value,
//! a pass/fail determination, and a letter grade (A through F).
//!
//! These are smoke tests. Passing says the output is not grossly broken, not
//! that it is uniform.

use statrs::distribution::{ChiSquared, ContinuousCDF};
use statrs::function::erf::erfc;

// ═══════════════════════════════════════════════════════════════════════════════
// Core types
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of a single randomness test.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub p_value: Option<f64>,
    pub statistic: f64,
    pub details: String,
    pub grade: char,
}

/// Lowest p-value that still earns each grade, best grade first.
static GRADE_FLOORS: [(f64, char); 4] = [(0.1, 'A'), (0.01, 'B'), (0.001, 'C'), (0.0001, 'D')];

/// Significance level a p-value must reach for a test to pass.
pub const ALPHA: f64 = 0.01;

impl TestResult {
    /// Letter grade for a p-value: the first floor it reaches, else `F`.
    pub fn grade_for(p: Option<f64>) -> char {
        p.and_then(|p| GRADE_FLOORS.iter().find(|(floor, _)| p >= *floor))
            .map_or('F', |&(_, grade)| grade)
    }

    /// Whether a p-value reaches `alpha`. A missing p-value never passes.
    pub fn passes(p: Option<f64>, alpha: f64) -> bool {
        p.is_some_and(|p| p >= alpha)
    }

    fn from_p(name: &str, p: f64, statistic: f64, details: String) -> Self {
        Self {
            name: name.to_string(),
            passed: Self::passes(Some(p), ALPHA),
            p_value: Some(p),
            statistic,
            details,
            grade: Self::grade_for(Some(p)),
        }
    }

    /// A result with no usable p-value.
    fn unscored(name: &str, details: String) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            p_value: None,
            statistic: 0.0,
            details,
            grade: 'F',
        }
    }

    /// Not enough input to compute a statistic.
    fn too_short(name: &str, needed: usize, got: usize) -> Self {
        Self::unscored(name, format!("Insufficient data: need {needed}, got {got}"))
    }

    /// Rejected outright before the statistic was computed.
    fn rejected(name: &str, details: String) -> Self {
        Self {
            p_value: Some(0.0),
            ..Self::unscored(name, details)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════════════

/// Total number of bits in `data`.
fn bit_len(data: &[u8]) -> usize {
    data.len() * 8
}

/// Number of set bits in `data`.
fn ones(data: &[u8]) -> usize {
    data.iter().map(|b| b.count_ones() as usize).sum()
}

/// Bit `i` of `data`, counting from the most significant bit of byte 0.
fn bit_at(data: &[u8], i: usize) -> bool {
    data[i / 8] & (0x80 >> (i % 8)) != 0
}

/// Chi-squared survival function, or `None` for degenerate degrees of freedom.
fn chi2_sf(statistic: f64, dof: f64) -> Option<f64> {
    ChiSquared::new(dof).ok().map(|d| d.sf(statistic))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Frequency tests
// ═══════════════════════════════════════════════════════════════════════════════

/// Monobit frequency: proportion of 1s vs 0s should be ~50%.
pub fn monobit_frequency(data: &[u8]) -> TestResult {
    let name = "Monobit Frequency";
    let n = bit_len(data);
    if n < 100 {
        return TestResult::too_short(name, 100, n);
    }
    // +1 per set bit, -1 per clear bit.
    let s = 2 * ones(data) as i64 - n as i64;
    let s_obs = (s as f64).abs() / (n as f64).sqrt();
    let p = erfc(s_obs / 2.0_f64.sqrt());
    TestResult::from_p(name, p, s_obs, format!("S={s}, n={n}"))
}

/// Byte frequency: chi-squared on byte value distribution (256 bins).
pub fn byte_frequency(data: &[u8]) -> TestResult {
    let name = "Byte Frequency";
    let n = data.len();
    if n < 256 {
        return TestResult::too_short(name, 256, n);
    }
    let mut hist = [0u64; 256];
    for &b in data {
        hist[b as usize] += 1;
    }
    let mut result = category_uniformity(&hist);
    result.name = name.to_string();
    result
}

/// Category uniformity: chi-squared of observed counts against an equal split.
///
/// Feed it the per-index hit counts of repeated picks, the face counts of
/// `randint`, and so on. Needs at least two categories and an expected count
/// of 5 per category.
pub fn category_uniformity(counts: &[u64]) -> TestResult {
    let name = "Category Uniformity";
    let k = counts.len();
    if k < 2 {
        return TestResult::too_short(name, 2, k);
    }
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / k as f64;
    if expected < 5.0 {
        return TestResult::unscored(
            name,
            format!("Expected count {expected:.2} per category is below 5"),
        );
    }
    let chi2: f64 = counts
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum();
    match chi2_sf(chi2, (k - 1) as f64) {
        Some(p) => TestResult::from_p(
            name,
            p,
            chi2,
            format!("categories={k}, expected_per_category={expected:.1}"),
        ),
        None => TestResult::unscored(name, "Invalid degrees of freedom".to_string()),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runs
// ═══════════════════════════════════════════════════════════════════════════════

/// Runs test: number of uninterrupted runs of 0s or 1s.
pub fn runs_test(data: &[u8]) -> TestResult {
    let name = "Runs Test";
    let n = bit_len(data);
    if n < 100 {
        return TestResult::too_short(name, 100, n);
    }
    let nf = n as f64;
    let prop = ones(data) as f64 / nf;
    // The runs statistic is only meaningful once monobit would pass.
    if (prop - 0.5).abs() >= 2.0 / nf.sqrt() {
        return TestResult::rejected(name, format!("Pre-test failed: proportion={prop:.4}"));
    }
    let spread = prop * (1.0 - prop);
    let std = 2.0 * (2.0 * nf).sqrt() * spread;
    if std < 1e-10 {
        return TestResult::rejected(name, "Zero variance".to_string());
    }
    let transitions = (1..n)
        .filter(|&i| bit_at(data, i) != bit_at(data, i - 1))
        .count();
    let runs = (transitions + 1) as f64;
    let expected = 2.0 * nf * spread + 1.0;
    let z = (runs - expected).abs() / std;
    let p = erfc(z / 2.0_f64.sqrt());
    TestResult::from_p(name, p, z, format!("runs={runs}, expected={expected:.0}"))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Entropy
// ═══════════════════════════════════════════════════════════════════════════════

/// Shannon entropy in bits per byte (max 8.0).
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut counts = [0u64; 256];
    for &b in data {
        counts[b as usize] += 1;
    }
    let n = data.len() as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / n;
            -p * p.log2()
        })
        .sum()
}

// ═══════════════════════════════════════════════════════════════════════════════
// Battery
// ═══════════════════════════════════════════════════════════════════════════════

/// Run every byte-stream test.
pub fn run_byte_battery(data: &[u8]) -> Vec<TestResult> {
    let tests: Vec<fn(&[u8]) -> TestResult> = vec![monobit_frequency, byte_frequency, runs_test];
    tests.iter().map(|t| t(data)).collect()
}

/// Mean grade of a set of results on a 0-100 scale.
pub fn calculate_quality_score(results: &[TestResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let total: f64 = results
        .iter()
        .map(|r| match r.grade {
            'A' => 100.0,
            'B' => 75.0,
            'C' => 50.0,
            'D' => 25.0,
            _ => 0.0,
        })
        .sum();
    total / results.len() as f64
}
