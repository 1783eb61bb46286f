//! # ParaScan Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── pipeline.rs   # End-to-end stream pipeline across modes and sizes
//!     └── unordered.rs  # Structural contract of the unordered mode
//! ```
//!
//! Engine-internal unit tests (algorithms, config validation, backend
//! selection) live in `#[cfg(test)]` modules next to the code in
//! `crates/parascan`.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p parascan-tests
//! cargo test -p parascan-tests integration::unordered::
//! ```

pub mod integration;
