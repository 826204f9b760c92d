//! Criterion settings shared by every bench target.

use criterion::Criterion;
use reflect_bench::config::BenchConfig;
use reflect_bench::env;

/// Criterion configured from `REFLECT_BENCH_*` variables.
///
/// Also installs the logger, so `RUST_LOG=reflect_bench=debug` shows what the
/// library does during setup.
pub fn criterion() -> Criterion {
    let _ = env_logger::try_init();
    let config = BenchConfig::from_env(&env::vars());
    log::debug!("bench settings: {config:?}");
    Criterion::default()
        .sample_size(config.sample_size)
        .measurement_time(config.measurement_time)
        .warm_up_time(config.warm_up_time)
}
