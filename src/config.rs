//! Process Configuration
//!
//! Settings come from the environment (`PORT`, `REVIEWS_CSV`) and can be
//! overridden on the command line with `--port` and `--data`.

use anyhow::{Context, Result};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATA_PATH: &str = "data/reviews.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
}

impl Config {
    /// Loads the configuration from the process environment and arguments.
    pub fn load() -> Result<Self> {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::from_lookup(|key| env::var(key).ok())?.with_args(&args)
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: try_load(&lookup, "PORT", DEFAULT_PORT)?,
            data_path: try_load(&lookup, "REVIEWS_CSV", DEFAULT_DATA_PATH.to_string())?.into(),
        })
    }

    /// Applies `--port <n>` and `--data <path>` overrides.
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--port" => {
                    let value = flag_value(args, i)?;
                    self.port = value
                        .parse()
                        .with_context(|| format!("Invalid --port value: {}", value))?;
                    i += 2;
                }
                "--data" => {
                    self.data_path = PathBuf::from(flag_value(args, i)?);
                    i += 2;
                }
                other => {
                    tracing::warn!("Ignoring unknown argument: {}", other);
                    i += 1;
                }
            }
        }
        Ok(self)
    }
}

fn flag_value(args: &[String], i: usize) -> Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("{} requires a value", args[i]))
}

fn try_load<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {} value: {}", key, raw)),
        None => {
            tracing::info!("{} not set, using default: {}", key, default);
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn test_reads_environment_values() {
        let config =
            Config::from_lookup(lookup_from(&[("PORT", "9090"), ("REVIEWS_CSV", "/tmp/r.csv")]))
                .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.data_path, PathBuf::from("/tmp/r.csv"));
    }

    #[test]
    fn test_invalid_port_fails() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_args_override_environment() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "9090")]))
            .unwrap()
            .with_args(&[
                "--port".to_string(),
                "7000".to_string(),
                "--data".to_string(),
                "other.csv".to_string(),
            ])
            .unwrap();
        assert_eq!(config.port, 7000);
        assert_eq!(config.data_path, PathBuf::from("other.csv"));
    }

    #[test]
    fn test_flag_without_value_fails() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.with_args(&["--port".to_string()]).is_err());
    }
}
