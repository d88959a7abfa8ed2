//! Rayon-based scenario execution.
//!
//! This module provides:
//! - [`ScenarioAccumulator`]: per-worker running sums of discounted payoffs
//! - [`WorkerPool`]: a fixed-size rayon thread pool
//! - [`ScenarioExecutor`]: evaluates every seed of a [`ScenarioSeedSet`]
//!   sequentially or on a pool and reduces the results
//!
//! Parallel runs never share a mutable accumulator: every rayon split folds
//! into its own [`ScenarioAccumulator`] and the partials are merged by an
//! associative reduction after the join. Only the summation order differs
//! from a sequential run.

use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::trace;

use crate::mc::{ConfigError, ScenarioSeedSet};

/// Running sum, sum of squares and count of scenario values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScenarioAccumulator {
    /// Σ x
    pub sum: f64,
    /// Σ x²
    pub sum_sq: f64,
    /// Number of values.
    pub count: usize,
}

impl ScenarioAccumulator {
    /// Adds one value.
    #[inline]
    pub fn push(mut self, value: f64) -> Self {
        self.sum += value;
        self.sum_sq += value * value;
        self.count += 1;
        self
    }

    /// Combines two partial accumulators.
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self {
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
            count: self.count + other.count,
        }
    }

    /// Sample mean; NaN when empty.
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        self.sum / self.count as f64
    }

    /// Standard error of the mean, `s / √n` with the unbiased sample
    /// variance. Zero for fewer than two values.
    pub fn std_error(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let n = self.count as f64;
        let variance = (self.sum_sq - self.sum * self.sum / n) / (n - 1.0);
        (variance.max(0.0) / n).sqrt()
    }
}

/// Fixed-size rayon thread pool for scenario evaluation.
pub struct WorkerPool {
    pool: ThreadPool,
}

impl WorkerPool {
    /// Builds a pool with `n_workers` threads, or one per logical CPU.
    ///
    /// # Errors
    ///
    /// `ConfigError::WorkerPool` if the threads cannot be spawned.
    pub fn new(n_workers: Option<usize>) -> Result<Self, ConfigError> {
        let n_threads = n_workers.unwrap_or_else(num_cpus::get).max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .thread_name(|i| format!("mc-worker-{}", i))
            .build()
            .map_err(|e| ConfigError::WorkerPool(e.to_string()))?;
        trace!(n_threads, "built Monte Carlo worker pool");
        Ok(Self { pool })
    }

    /// Number of worker threads.
    #[inline]
    pub fn n_threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerPool")
            .field("n_threads", &self.n_threads())
            .finish()
    }
}

/// How the scenarios of a run are evaluated.
///
/// Cloning shares the pool.
#[derive(Clone, Debug)]
pub enum ScenarioExecutor {
    /// One scenario at a time, in seed order, on the calling thread.
    Sequential,
    /// Data-parallel fan-out on a worker pool with a deterministic join.
    Pool(Arc<WorkerPool>),
}

impl ScenarioExecutor {
    /// Executor for the given mode.
    ///
    /// # Errors
    ///
    /// `ConfigError::WorkerPool` if a parallel pool cannot be built.
    pub fn new(parallel: bool, n_workers: Option<usize>) -> Result<Self, ConfigError> {
        if parallel {
            Ok(Self::Pool(Arc::new(WorkerPool::new(n_workers)?)))
        } else {
            Ok(Self::Sequential)
        }
    }

    /// Returns `true` for the pooled executor.
    #[inline]
    pub fn is_parallel(&self) -> bool {
        matches!(self, Self::Pool(_))
    }

    /// Evaluates `evaluate(seed)` for every seed and accumulates the values.
    ///
    /// Blocks until all scenarios have finished.
    pub fn run<F>(&self, seeds: &ScenarioSeedSet, evaluate: F) -> ScenarioAccumulator
    where
        F: Fn(u64) -> f64 + Sync + Send,
    {
        match self {
            Self::Sequential => seeds
                .iter()
                .fold(ScenarioAccumulator::default(), |acc, seed| {
                    acc.push(evaluate(seed))
                }),
            Self::Pool(pool) => pool.pool.install(|| {
                (0..seeds.len())
                    .into_par_iter()
                    .fold(ScenarioAccumulator::default, |acc, i| {
                        acc.push(evaluate(seeds.seed(i)))
                    })
                    .reduce(ScenarioAccumulator::default, ScenarioAccumulator::merge)
            }),
        }
    }
}
