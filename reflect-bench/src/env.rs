//! Environment variable lookups over an explicit variable list.
//!
//! Functions take `&[(String, String)]` rather than reading the process
//! environment, so configuration can be built from a fixed list in tests:
//!
//! ```
//! use reflect_bench::env;
//!
//! let vars = vec![("REFLECT_BENCH_SAMPLE_SIZE".to_string(), "20".to_string())];
//! assert_eq!(env::parse_or(&vars, "REFLECT_BENCH_SAMPLE_SIZE", 100usize), 20);
//! assert_eq!(env::parse_or(&vars, "MISSING", 100usize), 100);
//! ```

use std::str::FromStr;

use log::warn;

/// Snapshot of the process environment.
#[must_use]
pub fn vars() -> Vec<(String, String)> {
    std::env::vars().collect()
}

/// Get an environment variable by name.
#[must_use]
pub fn get<'a>(env: &'a [(String, String)], name: &str) -> Option<&'a str> {
    env.iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

/// Get an environment variable as a boolean.
///
/// Returns `true` if the value is "true", "1", or "yes" (case-insensitive),
/// `false` for any other value, and `default` when the variable is not set.
#[must_use]
pub fn bool(env: &[(String, String)], name: &str, default: bool) -> bool {
    get(env, name).map_or(default, |v| {
        let v_lower = v.to_lowercase();
        v_lower == "true" || v_lower == "1" || v_lower == "yes"
    })
}

/// Parse an environment variable.
///
/// Returns `None` when the variable is unset or does not parse; a value that
/// is set but unparseable is logged.
#[must_use]
pub fn parse<T: FromStr>(env: &[(String, String)], name: &str) -> Option<T> {
    let raw = get(env, name)?;
    let parsed = raw.trim().parse::<T>().ok();
    if parsed.is_none() {
        warn!("ignoring {name}={raw:?}: not a valid value");
    }
    parsed
}

/// Parse an environment variable, falling back to `default` when it is
/// unset or does not parse.
#[must_use]
pub fn parse_or<T: FromStr>(env: &[(String, String)], name: &str, default: T) -> T {
    parse(env, name).unwrap_or(default)
}
