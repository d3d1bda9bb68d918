//! Runtime configuration: command-line flag, then environment, then default.

use std::path::PathBuf;

use anyhow::Context;
use stockroom_inventory::{DEFAULT_INVENTORY_FILE, DEFAULT_LOW_THRESHOLD};

pub const FILE_ENV: &str = "STOCKROOM_FILE";
pub const LOW_THRESHOLD_ENV: &str = "STOCKROOM_LOW_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file: PathBuf,
    pub low_threshold: i64,
}

impl Config {
    /// Resolve against the process environment.
    pub fn resolve(file_flag: Option<PathBuf>) -> anyhow::Result<Self> {
        Self::resolve_with(file_flag, |key| std::env::var(key).ok())
    }

    /// Resolve against an arbitrary variable lookup.
    pub fn resolve_with(
        file_flag: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let file = file_flag
            .or_else(|| lookup(FILE_ENV).filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INVENTORY_FILE));

        let low_threshold = match lookup(LOW_THRESHOLD_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("{LOW_THRESHOLD_ENV} must be an integer, got {raw:?}"))?,
            None => DEFAULT_LOW_THRESHOLD,
        };

        Ok(Self {
            file,
            low_threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_flags_or_env() {
        let config = Config::resolve_with(None, env(&[])).unwrap();
        assert_eq!(config.file, PathBuf::from("inventory.json"));
        assert_eq!(config.low_threshold, 5);
    }

    #[test]
    fn env_overrides_defaults() {
        let config = Config::resolve_with(
            None,
            env(&[(FILE_ENV, "/tmp/stock.json"), (LOW_THRESHOLD_ENV, " 12 ")]),
        )
        .unwrap();
        assert_eq!(config.file, PathBuf::from("/tmp/stock.json"));
        assert_eq!(config.low_threshold, 12);
    }

    #[test]
    fn flag_overrides_env() {
        let config = Config::resolve_with(
            Some(PathBuf::from("flag.json")),
            env(&[(FILE_ENV, "env.json")]),
        )
        .unwrap();
        assert_eq!(config.file, PathBuf::from("flag.json"));
    }

    #[test]
    fn blank_file_env_falls_back_to_default() {
        let config = Config::resolve_with(None, env(&[(FILE_ENV, "  ")])).unwrap();
        assert_eq!(config.file, PathBuf::from(DEFAULT_INVENTORY_FILE));
    }

    #[test]
    fn bad_threshold_env_is_an_error() {
        let err = Config::resolve_with(None, env(&[(LOW_THRESHOLD_ENV, "few")])).unwrap_err();
        assert!(err.to_string().contains(LOW_THRESHOLD_ENV));
    }
}
