//! Typed kernel errors.
//!
//! Floating-point anomalies (NaN, infinities) are results, not errors.
//! The only failure the kernel reports is a caller-supplied count that
//! disagrees with the sequence it describes.

/// Typed failure for [`crate::sum::sum_counted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SumError {
    /// The declared element count does not match the slice length.
    CountMismatch { count: usize, len: usize },
}

impl std::fmt::Display for SumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CountMismatch { count, len } => {
                write!(f, "declared count {count} does not match sequence length {len}")
            }
        }
    }
}

impl std::error::Error for SumError {}
