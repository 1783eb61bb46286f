//! Sequential scan backend
//!
//! Single-pass fold scan. Ordered and unordered modes coincide here: with one
//! worker there is no encounter-order relaxation to exploit.

use crate::algorithms::local_scan;
use crate::{Backend, Combiner, ScanError, ScanExecutor, WorkerInfo};

/// Single-threaded scan executor
pub struct SequentialBackend {
    worker_info: WorkerInfo,
}

impl SequentialBackend {
    pub fn new() -> Self {
        Self {
            worker_info: WorkerInfo {
                name: "Sequential fold".to_string(),
                backend: Backend::Sequential,
                workers: 1,
            },
        }
    }
}

impl Default for SequentialBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanExecutor for SequentialBackend {
    fn backend(&self) -> Backend {
        Backend::Sequential
    }

    fn worker_info(&self) -> &WorkerInfo {
        &self.worker_info
    }

    fn prefix_ordered(&self, mut input: Vec<i64>, op: Combiner<'_>) -> Result<Vec<i64>, ScanError> {
        local_scan(&mut input, op);
        Ok(input)
    }

    fn prefix_unordered(&self, input: Vec<i64>, op: Combiner<'_>) -> Result<Vec<i64>, ScanError> {
        self.prefix_ordered(input, op)
    }
}
