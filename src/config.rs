//! Runtime settings from the environment.
//!
//! `main` loads `.env` with dotenv first, so values there act as defaults that
//! real environment variables override.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const ENV_MAX_ATTEMPTS: &str = "SUBNET_CALC_MAX_ATTEMPTS";
pub const ENV_OUTPUT: &str = "SUBNET_CALC_OUTPUT";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_OUTPUT,
                value: s.to_string(),
                reason: "expected text or json",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Attempts per field before the session fails. `None` asks forever.
    pub max_attempts: Option<u32>,
    pub output: OutputFormat,
    /// Explicit log4rs file; `None` means the default path, which may be absent.
    pub log_config: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let max_attempts = match get(ENV_MAX_ATTEMPTS) {
            Some(value) => Some(parse_max_attempts(&value)?),
            None => None,
        };
        let output = match get(ENV_OUTPUT) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };
        let log_config = get(ENV_LOG_CONFIG).map(PathBuf::from);

        Ok(Config {
            max_attempts,
            output,
            log_config,
        })
    }

    pub fn log_config_path(&self) -> &Path {
        self.log_config
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_LOG_CONFIG))
    }
}

fn parse_max_attempts(value: &str) -> Result<u32, ConfigError> {
    let invalid = |reason| ConfigError::InvalidValue {
        key: ENV_MAX_ATTEMPTS,
        value: value.to_string(),
        reason,
    };
    match value.trim().parse::<u32>() {
        Ok(0) => Err(invalid("must be at least 1")),
        Ok(n) => Ok(n),
        Err(_) => Err(invalid("expected a positive integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_attempts, None);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_config_path(), Path::new("log4rs.yml"));
    }

    #[test]
    fn test_all_set() {
        let config = config(&[
            (ENV_MAX_ATTEMPTS, "3"),
            (ENV_OUTPUT, "JSON"),
            (ENV_LOG_CONFIG, "/etc/subnet-calc/log4rs.yml"),
        ])
        .unwrap();
        assert_eq!(config.max_attempts, Some(3));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(
            config.log_config_path(),
            Path::new("/etc/subnet-calc/log4rs.yml")
        );
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = config(&[(ENV_MAX_ATTEMPTS, ""), (ENV_OUTPUT, "  ")]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config(&[(ENV_MAX_ATTEMPTS, "0")]).unwrap_err().to_string(),
            r#"invalid value "0" for SUBNET_CALC_MAX_ATTEMPTS: must be at least 1"#
        );
        assert!(config(&[(ENV_MAX_ATTEMPTS, "-2")]).is_err());
        assert!(config(&[(ENV_MAX_ATTEMPTS, "many")]).is_err());
        assert!(config(&[(ENV_OUTPUT, "csv")]).is_err());
    }
}
