//! Configuration for the scan engine

use crate::ScanError;
use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Worker threads for the parallel backend (None = Rayon global pool size)
    pub worker_threads: Option<usize>,
    /// Inputs shorter than this are scanned sequentially even on the
    /// parallel backend (chunking overhead dominates below it)
    pub min_chunk_len: usize,
    /// Over-partitioning factor: target chunk count is workers * this
    pub chunks_per_worker: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            worker_threads: None,
            min_chunk_len: 4096,
            chunks_per_worker: 4,
        }
    }
}

impl EngineConfig {
    /// Validate configuration bounds
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.min_chunk_len == 0 {
            return Err(ScanError::InvalidConfig(
                "min_chunk_len must be at least 1".to_string(),
            ));
        }
        if self.chunks_per_worker == 0 {
            return Err(ScanError::InvalidConfig(
                "chunks_per_worker must be at least 1".to_string(),
            ));
        }
        if self.worker_threads == Some(0) {
            return Err(ScanError::InvalidConfig(
                "worker_threads must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
