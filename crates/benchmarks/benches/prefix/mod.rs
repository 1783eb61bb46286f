//! # Prefix Scan Benchmark Modules
//!
//! One module per execution shape:
//! - `ordered` - parallel scan preserving encounter order
//! - `unordered` - parallel scan with relaxed encounter order
//! - `baseline` - sequential single-pass scan for speedup comparison

pub mod ordered;

/// Benchmarked input sizes. 100000 is the reference size.
pub const SIZES: [i64; 3] = [1_000, 100_000, 1_000_000];
