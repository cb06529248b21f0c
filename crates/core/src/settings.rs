// Layered settings: defaults < config file < LINEUP_* environment

use crate::domain::DEFAULT_SERVICE_MAX_SIZE;
use crate::error::Result;
use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory when no path is given
/// (any extension the config crate understands, e.g. `lineup.toml`)
pub const DEFAULT_CONFIG_FILE: &str = "lineup";

/// Environment variable prefix (`LINEUP_SERVICE__MAX_SIZE=5`)
pub const ENV_PREFIX: &str = "LINEUP";

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "lineup=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Development: human readable, colored
    #[default]
    Pretty,
    /// Production: one JSON object per line
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Non-positive values fall back to the queue default
    pub max_size: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    pub filter: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub service: ServiceSettings,
    pub log: LogSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service: ServiceSettings {
                max_size: DEFAULT_SERVICE_MAX_SIZE as i64,
            },
            log: LogSettings {
                filter: DEFAULT_LOG_FILTER.to_string(),
                format: LogFormat::Pretty,
            },
        }
    }
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit `path` must exist; otherwise `lineup.*` in the working
    /// directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`Settings::load`], but reads `LINEUP_*` variables from `env`
    /// instead of the process environment when given.
    pub fn load_with_env(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<Self> {
        let defaults = Settings::default();

        let builder = Config::builder()
            .set_default("service.max_size", defaults.service.max_size)?
            .set_default("log.filter", defaults.log.filter)?
            .set_default("log.format", "pretty")?;

        let builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.service.max_size, 10);
        assert_eq!(settings.log.filter, "lineup=info");
        assert_eq!(settings.log.format, LogFormat::Pretty);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lineup.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[service]\nmax_size = 3\n\n[log]\nformat = \"json\"").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.service.max_size, 3);
        assert_eq!(settings.log.format, LogFormat::Json);
        // Untouched keys keep their defaults
        assert_eq!(settings.log.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lineup.toml");
        std::fs::write(&path, "[service]\nmax_size = 3\n\n[log]\nformat = \"pretty\"\n").unwrap();

        let env: Map<String, String> = [
            ("LINEUP_SERVICE__MAX_SIZE", "4"),
            ("LINEUP_LOG__FORMAT", "json"),
            ("LINEUP_CONFIG", "/ignored/lineup.toml"),
            ("OTHER_SERVICE__MAX_SIZE", "99"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let settings = Settings::load_with_env(Some(&path), Some(env)).unwrap();
        assert_eq!(settings.service.max_size, 4);
        assert_eq!(settings.log.format, LogFormat::Json);
        assert_eq!(settings.log.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_file_applies_without_matching_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lineup.toml");
        std::fs::write(&path, "[service]\nmax_size = 3\n").unwrap();

        let settings = Settings::load_with_env(Some(&path), Some(Map::new())).unwrap();
        assert_eq!(settings.service.max_size, 3);
        assert_eq!(settings.log.format, LogFormat::Pretty);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = Settings::load(Some(&path));
        assert!(matches!(result, Err(crate::AppError::Config(_))));
    }

    #[test]
    fn test_load_rejects_unknown_log_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lineup.toml");
        std::fs::write(&path, "[log]\nformat = \"xml\"\n").unwrap();

        assert!(Settings::load(Some(&path)).is_err());
    }
}
