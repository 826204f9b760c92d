//! Benchmark run settings read from the environment.

use std::time::Duration;

use crate::constants::{
    DEFAULT_MEASUREMENT_SECS, DEFAULT_SAMPLE_SIZE, DEFAULT_WARMUP_SECS, ENV_MEASUREMENT_SECS,
    ENV_QUICK, ENV_SAMPLE_SIZE, ENV_WARMUP_SECS, MIN_SAMPLE_SIZE,
};
use crate::env;

/// Settings the benches hand to criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Samples per benchmark (never below criterion's minimum of 10).
    pub sample_size: usize,
    /// Measurement time per benchmark.
    pub measurement_time: Duration,
    /// Warm-up time per benchmark.
    pub warm_up_time: Duration,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            measurement_time: Duration::from_secs(DEFAULT_MEASUREMENT_SECS),
            warm_up_time: Duration::from_secs(DEFAULT_WARMUP_SECS),
        }
    }
}

impl BenchConfig {
    /// Fast settings for smoke runs.
    pub const fn quick() -> Self {
        Self {
            sample_size: MIN_SAMPLE_SIZE,
            measurement_time: Duration::from_millis(500),
            warm_up_time: Duration::from_millis(100),
        }
    }

    /// Build from environment variables.
    ///
    /// `REFLECT_BENCH_QUICK` selects [`BenchConfig::quick`] as the base;
    /// the other variables override individual settings on top of it.
    pub fn from_env(vars: &[(String, String)]) -> Self {
        let base = if env::bool(vars, ENV_QUICK, false) {
            Self::quick()
        } else {
            Self::default()
        };

        let sample_size = env::parse_or(vars, ENV_SAMPLE_SIZE, base.sample_size);
        let measurement_time = env::parse(vars, ENV_MEASUREMENT_SECS)
            .map_or(base.measurement_time, Duration::from_secs);
        let warm_up_time =
            env::parse(vars, ENV_WARMUP_SECS).map_or(base.warm_up_time, Duration::from_secs);

        Self {
            sample_size: sample_size.max(MIN_SAMPLE_SIZE),
            measurement_time,
            warm_up_time,
        }
    }
}
