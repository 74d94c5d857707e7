//! csum kernel: ordered summation of `f64` sequences.
//!
//! # API Surface
//!
//! - [`sum::sum`] -- reduce a borrowed `&[f64]` to its left-to-right total
//! - [`sum::sum_counted`] -- the same, with an explicit element count checked
//!   against the slice length
//! - [`digest::result_digest`] -- content hash of a result's bit pattern
//!
//! # Module Dependency Direction
//!
//! `error` ← `sum`, `digest` stands alone.
//!
//! The kernel performs no I/O, holds no state, and never logs.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digest;
pub mod error;
pub mod sum;
