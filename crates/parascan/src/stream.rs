//! Integer stream pipeline
//!
//! The user-facing surface: a source (`range` or `from_vec`), mode toggles
//! (`parallel`/`sequential`, `ordered`/`unordered`), an optional `prefix`
//! combinator, and terminal operations that hand the work to a backend.
//!
//! ```rust,ignore
//! let sums = IntStream::range(0, 100_000)
//!     .parallel()
//!     .unordered()
//!     .prefix_sum()
//!     .to_vec()?;
//! ```

use crate::config::EngineConfig;
use crate::{create_backend, Backend, ScanError, ScanExecutor};
use std::sync::Arc;

enum Source {
    Range(i64, i64),
    Values(Vec<i64>),
}

type BoxedCombiner = Box<dyn Fn(i64, i64) -> i64 + Send + Sync>;

/// A lazily-evaluated integer stream with an optional prefix-scan stage.
///
/// Nothing runs until a terminal operation (`to_vec`, `sum`, `count`) is
/// called; mode toggles only record how the terminal should execute.
pub struct IntStream {
    source: Source,
    parallel: bool,
    ordered: bool,
    config: EngineConfig,
    executor: Option<Arc<dyn ScanExecutor>>,
    prefix_op: Option<BoxedCombiner>,
}

impl IntStream {
    /// Stream over the half-open range `[start, end)`.
    ///
    /// An empty range (`start >= end`) yields an empty stream.
    pub fn range(start: i64, end: i64) -> Self {
        Self::from_source(Source::Range(start, end))
    }

    /// Stream over explicit values.
    pub fn from_vec(values: Vec<i64>) -> Self {
        Self::from_source(Source::Values(values))
    }

    fn from_source(source: Source) -> Self {
        Self {
            source,
            parallel: false,
            ordered: true,
            config: EngineConfig::default(),
            executor: None,
            prefix_op: None,
        }
    }

    /// Execute terminal operations on the parallel backend.
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Execute terminal operations on the sequential backend (the default).
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Relax encounter order: the engine may emit scan chunks in completion
    /// order. Has no observable effect on the sequential backend.
    pub fn unordered(mut self) -> Self {
        self.ordered = false;
        self
    }

    /// Require encounter order (the default).
    pub fn ordered(mut self) -> Self {
        self.ordered = true;
        self
    }

    /// Override engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject a pre-built executor. Test seam; also lets callers reuse one
    /// pinned thread pool across many streams.
    pub fn with_executor(mut self, executor: Arc<dyn ScanExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Replace the stream with its inclusive prefix scan under `op`.
    ///
    /// `op` must be associative; the parallel backends re-associate freely.
    pub fn prefix(mut self, op: impl Fn(i64, i64) -> i64 + Send + Sync + 'static) -> Self {
        self.prefix_op = Some(Box::new(op));
        self
    }

    /// Inclusive running total with wrapping addition.
    pub fn prefix_sum(self) -> Self {
        self.prefix(|a, b| a.wrapping_add(b))
    }

    /// Materialize the stream.
    pub fn to_vec(self) -> Result<Vec<i64>, ScanError> {
        let ordered = self.ordered;
        let prefix_op = self.prefix_op;
        let executor = match self.executor {
            Some(executor) => executor,
            None => {
                let backend = if self.parallel {
                    Backend::Parallel
                } else {
                    Backend::Sequential
                };
                create_backend(backend, &self.config)?
            }
        };

        let values = Self::materialize(self.source)?;
        let Some(op) = prefix_op else {
            return Ok(values);
        };

        tracing::debug!(
            backend = %executor.backend(),
            ordered,
            len = values.len(),
            "executing prefix scan"
        );
        let op: crate::Combiner<'_> = &*op;
        if ordered {
            executor.prefix_ordered(values, op)
        } else {
            executor.prefix_unordered(values, op)
        }
    }

    /// Wrapping sum of the materialized stream.
    pub fn sum(self) -> Result<i64, ScanError> {
        let values = self.to_vec()?;
        Ok(values.iter().fold(0i64, |acc, &v| acc.wrapping_add(v)))
    }

    /// Number of elements the stream would produce.
    ///
    /// The prefix stage preserves length, so this never runs the scan.
    pub fn count(self) -> Result<usize, ScanError> {
        match self.source {
            Source::Range(start, end) => Ok(Self::range_len(start, end)?),
            Source::Values(values) => Ok(values.len()),
        }
    }

    fn range_len(start: i64, end: i64) -> Result<usize, ScanError> {
        if start >= end {
            return Ok(0);
        }
        let span = end
            .checked_sub(start)
            .ok_or_else(|| ScanError::InvalidInput("range span overflows i64".to_string()))?;
        usize::try_from(span)
            .map_err(|_| ScanError::InvalidInput("range span exceeds addressable memory".to_string()))
    }

    fn materialize(source: Source) -> Result<Vec<i64>, ScanError> {
        match source {
            Source::Range(start, end) => {
                let len = Self::range_len(start, end)?;
                let mut values = Vec::with_capacity(len);
                values.extend(start..end);
                Ok(values)
            }
            Source::Values(values) => Ok(values),
        }
    }
}
