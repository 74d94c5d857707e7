//! The summation kernel.
//!
//! # Order
//!
//! Accumulation is strictly left to right, starting from `0.0`:
//!
//! ```text
//! s = ((((0.0 + x[0]) + x[1]) + x[2]) + ... + x[n-1])
//! ```
//!
//! Floating-point addition is not associative, so the order is part of the
//! contract. No pairwise reduction, no SIMD lane splitting.
//!
//! # Special values
//!
//! NaN and infinities pass through ordinary IEEE-754 addition: any NaN
//! yields NaN, `+inf` alone yields `+inf`, `+inf` with `-inf` yields NaN.

use crate::error::SumError;

/// Sum `values` in order.
///
/// Returns exactly `0.0` for an empty slice. The slice is only read;
/// no reference to it outlives the call.
#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    let mut acc = 0.0_f64;
    for &x in values {
        acc += x;
    }
    acc
}

/// Sum `values` after checking that `count` matches `values.len()`.
///
/// This is the counted entry point: callers that carry the element count
/// separately from the storage get their mismatch reported instead of
/// silently summing a different number of elements.
///
/// # Errors
///
/// Returns [`SumError::CountMismatch`] if `count != values.len()`.
pub fn sum_counted(count: usize, values: &[f64]) -> Result<f64, SumError> {
    if count != values.len() {
        return Err(SumError::CountMismatch {
            count,
            len: values.len(),
        });
    }
    Ok(sum(values))
}
