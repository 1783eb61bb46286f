//! # ParaScan: Parallel Prefix-Scan Engine
//!
//! This crate computes running totals (prefix scans) over `i64` streams. It
//! selects the best available backend at **runtime**:
//!
//! 1. **Parallel/Rayon** - chunked multi-core scan, used when more than one
//!    worker is available
//! 2. **Sequential** - fallback, always works, zero external scheduling
//!
//! ## Execution Modes
//!
//! | Mode | Guarantee | Cost |
//! |------|-----------|------|
//! | Ordered | `out[i] = op(in[0], .., in[i])` in encounter order | three-phase scan |
//! | Unordered | scan of a chunk-level permutation of the input | single pass per chunk |
//!
//! Ordered mode is deterministic across runs and thread counts. Unordered mode
//! emits chunks in completion order and is cheaper when callers do not need
//! encounter order (e.g. aggregate-only consumers).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use parascan::IntStream;
//!
//! // Running total of 0..100000, computed on all cores
//! let sums = IntStream::range(0, 100_000).parallel().prefix_sum().to_vec()?;
//! ```

pub mod algorithms;
pub mod backends;
pub mod config;
pub mod stream;
pub mod telemetry;

use std::sync::Arc;
use thiserror::Error;

pub use config::EngineConfig;
pub use stream::IntStream;

/// Scan backend capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Single-threaded fold scan
    Sequential,
    /// Chunked multi-core scan with Rayon
    Parallel,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Sequential => write!(f, "Sequential"),
            Backend::Parallel => write!(f, "Parallel (Rayon)"),
        }
    }
}

/// Scan engine errors
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("No scan backend available")]
    NoBackendAvailable,

    #[error("Backend initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Worker information for a backend
#[derive(Debug, Clone)]
pub struct WorkerInfo {
    pub name: String,
    pub backend: Backend,
    pub workers: usize,
}

/// Associative combiner over stream elements.
///
/// The engine only assumes associativity; commutativity is not required.
pub type Combiner<'a> = &'a (dyn Fn(i64, i64) -> i64 + Sync);

/// Scan executor trait - implemented by all backends
pub trait ScanExecutor: Send + Sync {
    /// Get backend type
    fn backend(&self) -> Backend;

    /// Get worker info
    fn worker_info(&self) -> &WorkerInfo;

    /// Inclusive prefix scan preserving encounter order.
    ///
    /// `out[i]` equals the fold of `input[0..=i]` under `op`.
    fn prefix_ordered(&self, input: Vec<i64>, op: Combiner<'_>) -> Result<Vec<i64>, ScanError>;

    /// Inclusive prefix scan with relaxed encounter order.
    ///
    /// The output is an inclusive scan of a chunk-level permutation of the
    /// input; chunks are emitted in completion order.
    fn prefix_unordered(&self, input: Vec<i64>, op: Combiner<'_>) -> Result<Vec<i64>, ScanError>;
}

/// Auto-detect and create the best available scan executor
pub fn auto_detect(config: &EngineConfig) -> Result<Arc<dyn ScanExecutor>, ScanError> {
    config.validate()?;

    // Prefer the parallel backend when it can actually fan out
    #[cfg(feature = "parallel")]
    {
        let workers = config.worker_threads.unwrap_or_else(num_cpus::get);
        if workers > 1 {
            let engine = backends::parallel::ParallelBackend::new(config.clone())?;
            tracing::info!(
                workers = engine.worker_info().workers,
                "Using parallel scan backend (Rayon)"
            );
            return Ok(Arc::new(engine));
        }
    }

    let engine = backends::sequential::SequentialBackend::new();
    tracing::info!("Using sequential scan backend");
    Ok(Arc::new(engine))
}

/// Create a specific backend
pub fn create_backend(
    backend: Backend,
    config: &EngineConfig,
) -> Result<Arc<dyn ScanExecutor>, ScanError> {
    config.validate()?;
    match backend {
        Backend::Sequential => Ok(Arc::new(backends::sequential::SequentialBackend::new())),
        Backend::Parallel => {
            #[cfg(feature = "parallel")]
            {
                let engine = backends::parallel::ParallelBackend::new(config.clone())?;
                Ok(Arc::new(engine) as Arc<dyn ScanExecutor>)
            }
            #[cfg(not(feature = "parallel"))]
            {
                Err(ScanError::NoBackendAvailable)
            }
        }
    }
}
