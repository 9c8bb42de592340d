//! Runner configuration read from the environment.

use std::time::Duration;

use crate::types::{DEFAULT_SEED, TICK_MS};

/// Settings shared by the interactive runner and the replay tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Seed of the piece sequence (`PIXEL_TETRIS_SEED`)
    pub seed: u32,
    /// Tick interval in milliseconds (`PIXEL_TETRIS_TICK_MS`)
    pub tick_ms: u64,
    /// Where to record the action stream (`PIXEL_TETRIS_RECORD`)
    pub record_path: Option<String>,
    /// Verbose stderr logging (`PIXEL_TETRIS_LOG`)
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            tick_ms: TICK_MS,
            record_path: None,
            verbose: false,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("PIXEL_TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);
        let tick_ms = lookup("PIXEL_TETRIS_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.tick_ms);
        let record_path = lookup("PIXEL_TETRIS_RECORD")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });
        let verbose = lookup("PIXEL_TETRIS_LOG")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            seed,
            tick_ms,
            record_path,
            verbose,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RunConfig::from_lookup(lookup(&[]));
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.seed, 17);
        assert_eq!(config.tick_interval(), Duration::from_millis(10));
    }

    #[test]
    fn test_overrides() {
        let config = RunConfig::from_lookup(lookup(&[
            ("PIXEL_TETRIS_SEED", "42"),
            ("PIXEL_TETRIS_TICK_MS", "25"),
            ("PIXEL_TETRIS_RECORD", " /tmp/run.jsonl "),
            ("PIXEL_TETRIS_LOG", "TRUE"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.tick_ms, 25);
        assert_eq!(config.record_path.as_deref(), Some("/tmp/run.jsonl"));
        assert!(config.verbose);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = RunConfig::from_lookup(lookup(&[
            ("PIXEL_TETRIS_SEED", "-3"),
            ("PIXEL_TETRIS_TICK_MS", "0"),
            ("PIXEL_TETRIS_RECORD", "  "),
            ("PIXEL_TETRIS_LOG", "nope"),
        ]));
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = RunConfig::from_env();
    }
}
