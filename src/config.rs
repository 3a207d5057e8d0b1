//! Runtime configuration: API location and request timeout.
//!
//! Values come from, in increasing precedence: built-in defaults, the optional
//! JSON file at `$XDG_CONFIG_HOME/planner/config.json`, and `PLANNER_*`
//! environment variables.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// API root used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";
/// Request timeout used when nothing else is configured.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const ENV_API_URL: &str = "PLANNER_API_URL";
const ENV_REQUEST_TIMEOUT: &str = "PLANNER_REQUEST_TIMEOUT_SECS";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON of the expected shape.
    #[error("JSON error in config file: {0}")]
    Json(#[from] serde_json::Error),

    /// The API base URL does not parse.
    #[error("invalid API URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The API base URL is not http or https.
    #[error("API URL must use http or https: {0}")]
    UnsupportedScheme(String),

    /// The timeout is not a positive whole number of seconds.
    #[error("invalid request timeout: {0}")]
    InvalidTimeout(String),
}

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the trip API; endpoints are resolved relative to it.
    pub api_base_url: Url,
    /// Upper bound on a single API request.
    pub request_timeout: Duration,
}

impl Config {
    /// Loads configuration from the XDG config file and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match config_path() {
            Some(path) => read_config_file(&path)?,
            None => ConfigFile::default(),
        };
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merges defaults, file values and environment values.
    fn resolve(
        file: ConfigFile,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let url = env(ENV_API_URL)
            .or(file.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = parse_base_url(&url)?;

        let timeout_secs = match env(ENV_REQUEST_TIMEOUT) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            None => file
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        };
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(timeout_secs.to_string()));
        }

        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("valid hardcoded URL"),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Returns `$XDG_CONFIG_HOME/planner/config.json`, if the platform has a config dir.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("planner").join("config.json"))
}

/// Reads the config file. A missing file yields all-default values.
fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tempfile::tempdir;

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn no_env() -> impl Fn(&str) -> Option<String> {
        env_from(&[])
    }

    mod precedence {
        use super::*;

        #[test]
        fn defaults_when_nothing_set() {
            let config = Config::resolve(ConfigFile::default(), no_env()).unwrap();
            assert_eq!(config, Config::default());
            assert_eq!(config.api_base_url.as_str(), "http://localhost:3333/");
            assert_eq!(config.request_timeout, Duration::from_secs(30));
        }

        #[test]
        fn file_overrides_defaults() {
            let file = ConfigFile {
                api_base_url: Some("https://trips.example.com".into()),
                request_timeout_secs: Some(5),
            };
            let config = Config::resolve(file, no_env()).unwrap();
            assert_eq!(config.api_base_url.host_str(), Some("trips.example.com"));
            assert_eq!(config.request_timeout, Duration::from_secs(5));
        }

        #[test]
        fn env_overrides_file() {
            let file = ConfigFile {
                api_base_url: Some("https://trips.example.com".into()),
                request_timeout_secs: Some(5),
            };
            let env = env_from(&[
                (ENV_API_URL, "http://127.0.0.1:8080"),
                (ENV_REQUEST_TIMEOUT, "12"),
            ]);
            let config = Config::resolve(file, env).unwrap();
            assert_eq!(config.api_base_url.as_str(), "http://127.0.0.1:8080/");
            assert_eq!(config.request_timeout, Duration::from_secs(12));
        }
    }

    mod invalid_values {
        use super::*;

        #[test]
        fn unparsable_url() {
            let env = env_from(&[(ENV_API_URL, "not a url")]);
            let err = Config::resolve(ConfigFile::default(), env).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidUrl { .. }));
        }

        #[test]
        fn non_http_scheme() {
            let env = env_from(&[(ENV_API_URL, "ftp://example.com")]);
            let err = Config::resolve(ConfigFile::default(), env).unwrap_err();
            assert!(matches!(err, ConfigError::UnsupportedScheme(_)));
        }

        #[test]
        fn non_numeric_timeout() {
            let env = env_from(&[(ENV_REQUEST_TIMEOUT, "soon")]);
            let err = Config::resolve(ConfigFile::default(), env).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTimeout(_)));
        }

        #[test]
        fn zero_timeout() {
            let file = ConfigFile {
                request_timeout_secs: Some(0),
                ..ConfigFile::default()
            };
            let err = Config::resolve(file, no_env()).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTimeout(_)));
        }
    }

    mod config_file {
        use super::*;

        #[test]
        fn missing_file_is_default() {
            let dir = tempdir().unwrap();
            let file = read_config_file(&dir.path().join("config.json")).unwrap();
            assert_eq!(file, ConfigFile::default());
        }

        #[test]
        fn reads_partial_file() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("config.json");
            fs::write(&path, r#"{"api_base_url":"https://trips.example.com"}"#).unwrap();
            let file = read_config_file(&path).unwrap();
            assert_eq!(
                file.api_base_url.as_deref(),
                Some("https://trips.example.com")
            );
            assert_eq!(file.request_timeout_secs, None);
        }

        #[test]
        fn unknown_key_is_rejected() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("config.json");
            fs::write(&path, r#"{"api_url":"https://trips.example.com"}"#).unwrap();
            let err = read_config_file(&path).unwrap_err();
            assert!(matches!(err, ConfigError::Json(_)));
        }

        #[test]
        fn malformed_file_is_json_error() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("config.json");
            fs::write(&path, "{").unwrap();
            assert!(matches!(
                read_config_file(&path).unwrap_err(),
                ConfigError::Json(_)
            ));
        }
    }
}
