//! Parallel scan backend using Rayon
//!
//! Ordered mode runs the three-phase chunked scan from `algorithms::chunked`.
//! Unordered mode scans chunks in parallel and concatenates them in
//! completion order, carrying a running offset across chunks as they land.

use crate::algorithms::{apply_offset, chunk_len, chunk_offsets, local_scan};
use crate::config::EngineConfig;
use crate::{Backend, Combiner, ScanError, ScanExecutor, WorkerInfo};
use rayon::prelude::*;
use std::sync::mpsc;

/// Multi-core scan executor backed by Rayon
pub struct ParallelBackend {
    worker_info: WorkerInfo,
    config: EngineConfig,
    // Dedicated pool only when worker_threads is pinned; otherwise the
    // Rayon global pool is used.
    pool: Option<rayon::ThreadPool>,
}

impl ParallelBackend {
    pub fn new(config: EngineConfig) -> Result<Self, ScanError> {
        config.validate()?;

        let workers = config.worker_threads.unwrap_or_else(num_cpus::get).max(1);
        let pool = match config.worker_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| ScanError::InitializationFailed(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            worker_info: WorkerInfo {
                name: format!("CPU ({} workers)", workers),
                backend: Backend::Parallel,
                workers,
            },
            config,
            pool,
        })
    }

    /// Run `f` on the pinned pool if one exists, else on the global pool.
    fn run<R: Send>(&self, f: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }

    fn scan_ordered_chunked(&self, mut data: Vec<i64>, op: Combiner<'_>) -> Vec<i64> {
        let clen = chunk_len(data.len(), self.worker_info.workers, &self.config);
        tracing::debug!(
            input_len = data.len(),
            chunk_len = clen,
            workers = self.worker_info.workers,
            "ordered chunked scan"
        );

        // Phase 1: local scans, totals collected in encounter order.
        // Chunks from par_chunks_mut are never empty.
        let totals: Vec<i64> = data
            .par_chunks_mut(clen)
            .map(|chunk| local_scan(chunk, op).unwrap_or(0))
            .collect();

        // Phase 2: running-fold of totals into per-chunk offsets.
        let offsets = chunk_offsets(&totals, op);

        // Phase 3: combine offsets back in.
        data.par_chunks_mut(clen)
            .zip(offsets.par_iter())
            .for_each(|(chunk, offset)| {
                if let Some(off) = offset {
                    apply_offset(chunk, *off, op);
                }
            });

        data
    }

    fn scan_unordered_chunked(&self, data: Vec<i64>, op: Combiner<'_>) -> Vec<i64> {
        let clen = chunk_len(data.len(), self.worker_info.workers, &self.config);
        tracing::debug!(
            input_len = data.len(),
            chunk_len = clen,
            workers = self.worker_info.workers,
            "unordered chunked scan"
        );

        let (tx, rx) = mpsc::channel::<Vec<i64>>();
        rayon::scope(|s| {
            for chunk in data.chunks(clen) {
                let tx = tx.clone();
                s.spawn(move |_| {
                    let mut local = chunk.to_vec();
                    local_scan(&mut local, op);
                    // Receiver outlives the scope; a send failure would mean
                    // the channel was torn down early, which cannot happen.
                    let _ = tx.send(local);
                });
            }
        });
        drop(tx);

        // Stitch chunks together in completion order, threading the running
        // total through as each chunk lands.
        let mut out = Vec::with_capacity(data.len());
        let mut running: Option<i64> = None;
        for mut local in rx {
            if let Some(off) = running {
                apply_offset(&mut local, off, op);
            }
            if let Some(&last) = local.last() {
                running = Some(last);
            }
            out.append(&mut local);
        }
        out
    }
}

impl ScanExecutor for ParallelBackend {
    fn backend(&self) -> Backend {
        Backend::Parallel
    }

    fn worker_info(&self) -> &WorkerInfo {
        &self.worker_info
    }

    fn prefix_ordered(&self, mut input: Vec<i64>, op: Combiner<'_>) -> Result<Vec<i64>, ScanError> {
        if input.len() < self.config.min_chunk_len {
            local_scan(&mut input, op);
            return Ok(input);
        }
        Ok(self.run(|| self.scan_ordered_chunked(input, op)))
    }

    fn prefix_unordered(
        &self,
        mut input: Vec<i64>,
        op: Combiner<'_>,
    ) -> Result<Vec<i64>, ScanError> {
        if input.len() < self.config.min_chunk_len {
            local_scan(&mut input, op);
            return Ok(input);
        }
        Ok(self.run(|| self.scan_unordered_chunked(input, op)))
    }
}
