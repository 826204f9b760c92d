//! Centralized constants for the reflect-bench crate.
//!
//! Constraint vocabulary and benchmark configuration defaults live here so
//! the reflective and direct paths cannot drift apart.

// ============================================================================
// CONSTRAINT VOCABULARY
// ============================================================================

/// Characters rejected by `allow-symbol=false`.
pub const FORBIDDEN_SYMBOLS: &str = "!@#$%^&*()";

/// Key for the maximum string length rule.
pub const MAX_LEN_KEY: &str = "max-len";

/// Key for the symbol gate rule.
pub const ALLOW_SYMBOL_KEY: &str = "allow-symbol";

/// Separates rule tokens within a constraint string.
pub const RULE_SEPARATOR: char = ',';

/// Separates key from value within a rule token.
pub const KEY_VALUE_SEPARATOR: char = '=';

// ============================================================================
// BENCHMARK CONFIGURATION
// ============================================================================

/// Env var: criterion sample size.
pub const ENV_SAMPLE_SIZE: &str = "REFLECT_BENCH_SAMPLE_SIZE";

/// Env var: measurement time per benchmark, in seconds.
pub const ENV_MEASUREMENT_SECS: &str = "REFLECT_BENCH_MEASUREMENT_SECS";

/// Env var: warm-up time per benchmark, in seconds.
pub const ENV_WARMUP_SECS: &str = "REFLECT_BENCH_WARMUP_SECS";

/// Env var: shrink every setting for a fast smoke run.
pub const ENV_QUICK: &str = "REFLECT_BENCH_QUICK";

/// Default criterion sample size.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Criterion refuses sample sizes below 10.
pub const MIN_SAMPLE_SIZE: usize = 10;

/// Default measurement time in seconds.
pub const DEFAULT_MEASUREMENT_SECS: u64 = 5;

/// Default warm-up time in seconds.
pub const DEFAULT_WARMUP_SECS: u64 = 1;
