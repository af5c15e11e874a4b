use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use crate::error::{ClientError, Result};
use crate::i18n::Locale;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub storage_path: String,
    pub default_locale: String,
    pub request_timeout_secs: u64,
    pub log_dir: Option<String>,
}

// Partial config for layering. Aliases carry the short `EXAMDESK_LOCALE` and
// `EXAMDESK_TIMEOUT_SECS` environment names.
#[derive(Deserialize, Default, Debug)]
struct PartialClientConfig {
    api_url: Option<String>,
    storage_path: Option<String>,
    #[serde(alias = "locale")]
    default_locale: Option<String>,
    #[serde(alias = "timeout_secs")]
    request_timeout_secs: Option<u64>,
    log_dir: Option<String>,
}

fn default_api_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_storage_path() -> String {
    ".examdesk/storage.json".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const ENV_PREFIX: &str = "EXAMDESK_";

impl ClientConfig {
    /// File values first, then `EXAMDESK_*` environment variables on top.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        dotenv::dotenv().ok();

        let file_config = match config_path {
            Some(path_str) => {
                let path = Path::new(path_str);
                if path.exists() {
                    let contents = fs::read_to_string(path).map_err(|e| {
                        ClientError::Config(format!("Failed to read config file at {path:?}: {e}"))
                    })?;
                    toml::from_str(&contents).map_err(|e| {
                        ClientError::Config(format!("Failed to parse TOML from config file at {path:?}: {e}"))
                    })?
                } else {
                    warn!(path = %path_str, "Config file not found, using defaults.");
                    PartialClientConfig::default()
                }
            }
            None => PartialClientConfig::default(),
        };

        Self::merge(file_config, Self::partial_from_env()?)
    }

    fn partial_from_env() -> Result<PartialClientConfig> {
        envy::prefixed(ENV_PREFIX)
            .from_env::<PartialClientConfig>()
            .map_err(|e| ClientError::Config(format!("Failed to load config from environment: {e}")))
    }

    fn merge(file: PartialClientConfig, env: PartialClientConfig) -> Result<Self> {
        let config = ClientConfig {
            api_url: env.api_url.or(file.api_url).unwrap_or_else(default_api_url),
            storage_path: env
                .storage_path
                .or(file.storage_path)
                .unwrap_or_else(default_storage_path),
            default_locale: env
                .default_locale
                .or(file.default_locale)
                .unwrap_or_else(default_locale),
            request_timeout_secs: env
                .request_timeout_secs
                .or(file.request_timeout_secs)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            log_dir: env.log_dir.or(file.log_dir),
        };

        if config.request_timeout_secs == 0 {
            return Err(ClientError::Config("request_timeout_secs must be positive".to_string()));
        }
        if config.default_locale.parse::<Locale>().is_err() {
            return Err(ClientError::Config(format!(
                "Unsupported locale '{}'",
                config.default_locale
            )));
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn locale(&self) -> Locale {
        self.default_locale.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_defaults() {
        let config =
            ClientConfig::merge(PartialClientConfig::default(), PartialClientConfig::default()).unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/api");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.locale(), Locale::En);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn test_env_overrides_file() {
        let file: PartialClientConfig = toml::from_str(
            r#"
            api_url = "https://exams.example.com/api"
            default_locale = "ar"
            request_timeout_secs = 10
            "#,
        )
        .unwrap();
        let env = PartialClientConfig {
            api_url: Some("http://127.0.0.1:9000".to_string()),
            ..Default::default()
        };

        let config = ClientConfig::merge(file, env).unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:9000");
        assert_eq!(config.locale(), Locale::Ar);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.storage_path, ".examdesk/storage.json");
    }

    fn env_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_env_layer_reads_prefixed_variables() {
        let env: PartialClientConfig = envy::prefixed(ENV_PREFIX)
            .from_iter(env_pairs(&[
                ("EXAMDESK_API_URL", "http://10.0.0.2/api"),
                ("EXAMDESK_LOCALE", "ar"),
                ("EXAMDESK_TIMEOUT_SECS", "5"),
                ("EXAMDESK_LOG_DIR", "/var/log/examdesk"),
                ("API_URL", "http://ignored"),
            ]))
            .unwrap();

        let config = ClientConfig::merge(PartialClientConfig::default(), env).unwrap();
        assert_eq!(config.api_url, "http://10.0.0.2/api");
        assert_eq!(config.locale(), Locale::Ar);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/examdesk"));
        assert_eq!(config.storage_path, ".examdesk/storage.json");

        let bad = envy::prefixed(ENV_PREFIX)
            .from_iter::<_, PartialClientConfig>(env_pairs(&[("EXAMDESK_TIMEOUT_SECS", "soon")]));
        assert!(bad.is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero = PartialClientConfig {
            request_timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(ClientConfig::merge(zero, PartialClientConfig::default()).is_err());

        let klingon = PartialClientConfig {
            default_locale: Some("tlh".to_string()),
            ..Default::default()
        };
        assert!(ClientConfig::merge(klingon, PartialClientConfig::default()).is_err());
    }

    #[test]
    fn test_load_reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("examdesk.toml");
        fs::write(&path, "storage_path = \"/tmp/examdesk-test.json\"\n").unwrap();

        let config = ClientConfig::load(path.to_str()).unwrap();
        if env::var("EXAMDESK_STORAGE_PATH").is_err() {
            assert_eq!(config.storage_path, "/tmp/examdesk-test.json");
        }
    }
}
