//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BUBBLE_WARS_TICK_MS` | 16 | Tick interval in milliseconds (min 1) |
//! | `BUBBLE_WARS_SEED` | clock-derived | Seed of the stats random source |
//! | `BUBBLE_WARS_LOG_PATH` | unset | Log file for the interactive mode |
//!
//! Unparsable values fall back to the default.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tick_ms: u32,
    pub seed: u32,
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            seed: clock_seed(),
            log_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = get("BUBBLE_WARS_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|ms| ms.max(1))
            .unwrap_or(TICK_MS);

        let seed = get("BUBBLE_WARS_SEED")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or_else(clock_seed);

        let log_path = get("BUBBLE_WARS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            tick_ms,
            seed,
            log_path,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn reads_all_variables() {
        let c = Config::from_lookup(lookup(&[
            ("BUBBLE_WARS_TICK_MS", "33"),
            ("BUBBLE_WARS_SEED", "4242"),
            ("BUBBLE_WARS_LOG_PATH", " /tmp/bw.log "),
        ]));
        assert_eq!(c.tick_ms, 33);
        assert_eq!(c.seed, 4242);
        assert_eq!(c.log_path.as_deref(), Some("/tmp/bw.log"));
        assert_eq!(c.tick_interval(), Duration::from_millis(33));
    }

    #[test]
    fn falls_back_on_missing_or_bad_values() {
        let c = Config::from_lookup(lookup(&[
            ("BUBBLE_WARS_TICK_MS", "fast"),
            ("BUBBLE_WARS_LOG_PATH", "   "),
        ]));
        assert_eq!(c.tick_ms, TICK_MS);
        assert_eq!(c.log_path, None);
    }

    #[test]
    fn tick_interval_is_never_zero() {
        let c = Config::from_lookup(lookup(&[("BUBBLE_WARS_TICK_MS", "0")]));
        assert_eq!(c.tick_ms, 1);
    }
}
