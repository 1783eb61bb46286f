//! Scan algorithms
//!
//! Pure building blocks shared by the backends. The three-phase ordered scan
//! composes `local_scan` (phase 1), `chunk_offsets` (phase 2) and
//! `apply_offset` (phase 3).

pub mod chunked;

pub use chunked::{apply_offset, chunk_len, chunk_offsets, local_scan};
