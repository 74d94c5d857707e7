//! Shared input builders for csum benchmark suites.

/// Sequence sizes exercised by the micro benchmarks.
pub const SIZES: &[usize] = &[5, 1_000, 10_000, 1_000_000];

/// `n` copies of `1.0`.
#[must_use]
pub fn ones(n: usize) -> Vec<f64> {
    vec![1.0; n]
}

/// `n` values whose partial sums need rounding (`0.1, 0.2, ...`).
#[must_use]
pub fn tenths(n: usize) -> Vec<f64> {
    #[allow(clippy::cast_precision_loss)]
    (1..=n).map(|i| i as f64 * 0.1).collect()
}
