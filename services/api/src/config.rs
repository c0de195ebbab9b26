use std::net::SocketAddr;

use anyhow::{Context, Result};

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_level: String,
    /// Human-readable logs instead of JSON lines.
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_addr =
            lookup("CHECKLIST_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr
            .parse()
            .with_context(|| format!("invalid CHECKLIST_LISTEN_ADDR '{raw_addr}'"))?;

        let debug = lookup("CHECKLIST_DEBUG")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "on" | "yes"))
            .unwrap_or(false);

        let log_level = lookup("CHECKLIST_LOG_LEVEL")
            .unwrap_or_else(|| if debug { "debug" } else { "info" }.to_string());

        Ok(Self {
            listen_addr,
            log_level,
            debug,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:8000".parse().unwrap());
        assert_eq!(config.log_level, "info");
        assert!(!config.debug);
    }

    #[rstest]
    #[case("1", true)]
    #[case("TRUE", true)]
    #[case("on", true)]
    #[case("yes", true)]
    #[case("0", false)]
    #[case("off", false)]
    fn test_debug_flag(#[case] raw: &str, #[case] expected: bool) {
        let config = config_from(&[("CHECKLIST_DEBUG", raw)]).unwrap();
        assert_eq!(config.debug, expected);
    }

    #[test]
    fn test_debug_lowers_default_level_only() {
        let config = config_from(&[("CHECKLIST_DEBUG", "1")]).unwrap();
        assert_eq!(config.log_level, "debug");

        let vars = [("CHECKLIST_DEBUG", "1"), ("CHECKLIST_LOG_LEVEL", "warn")];
        let config = config_from(&vars).unwrap();
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_invalid_listen_addr_fails() {
        let err = config_from(&[("CHECKLIST_LISTEN_ADDR", "not-an-addr")]).unwrap_err();
        assert!(err.to_string().contains("CHECKLIST_LISTEN_ADDR"));
    }
}
