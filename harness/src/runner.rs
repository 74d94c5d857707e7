//! Runner: feeds a sequence through the kernel and packages the outcome.

use csum_kernel::digest::{result_digest, ContentHash};
use csum_kernel::error::SumError;
use csum_kernel::sum::sum_counted;

/// The literal sequence the `csum` program sums.
pub const FIXED_INPUT: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

/// Result of one kernel run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// The summed values, in order.
    pub values: Vec<f64>,
    /// Kernel result.
    pub sum: f64,
    /// Digest of the result's bit pattern.
    pub digest: ContentHash,
}

impl RunOutcome {
    /// Number of summed elements.
    #[must_use]
    pub fn n(&self) -> usize {
        self.values.len()
    }
}

/// Sum `values` through the counted kernel entry point.
///
/// # Errors
///
/// Returns [`SumError`] if the kernel rejects the input.
pub fn run(values: &[f64]) -> Result<RunOutcome, SumError> {
    let sum = sum_counted(values.len(), values)?;
    let digest = result_digest(sum);
    tracing::debug!(n = values.len(), sum, digest = %digest, "kernel run complete");
    Ok(RunOutcome {
        values: values.to_vec(),
        sum,
        digest,
    })
}

/// Run the kernel over [`FIXED_INPUT`].
///
/// # Errors
///
/// See [`run`].
pub fn run_fixed() -> Result<RunOutcome, SumError> {
    run(&FIXED_INPUT)
}
