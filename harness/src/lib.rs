//! csum harness: program-level glue around the kernel.
//!
//! The harness owns the fixed input, the report format, and the `csum`
//! binary. It does NOT implement summation; it delegates to
//! `csum_kernel::sum`. Formatting never leaks into the kernel.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod report;
pub mod runner;
