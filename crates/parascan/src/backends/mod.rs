//! Scan backends
//!
//! The sequential backend always compiles and is the fallback for inputs too
//! small to be worth splitting. The parallel backend is feature-gated on
//! Rayon and falls back to the sequential path below the chunking cutoff.

pub mod sequential;

#[cfg(feature = "parallel")]
pub mod parallel;
