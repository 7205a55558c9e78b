use std::path::Path;
use std::time::Duration;

use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use tick_http::HttpClientConfig;
use tick_http::coinmarketcap::COINMARKETCAP_BASE_URL;
use tracing::Level;

use crate::pipeline::PipelineSettings;
use crate::resolver::DEFAULT_SYMBOLS;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TickConfig {
    pub api_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    /// Pause after warning about unknown symbols
    pub not_found_pause_ms: u64,
    /// Used when no `-t` flag is given
    pub default_symbols: Vec<String>,
    pub log_level: String,
    /// Write an hourly rolling log file here as well as to stderr
    pub log_dir: Option<String>,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            api_url: COINMARKETCAP_BASE_URL.to_string(),
            connect_timeout_secs: 5,
            request_timeout_secs: 10,
            not_found_pause_ms: 3_000,
            default_symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            log_level: "warn".to_string(),
            log_dir: None,
        }
    }
}

impl TickConfig {
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::with_timeouts(Duration::from_secs(self.connect_timeout_secs), Duration::from_secs(self.request_timeout_secs))
    }

    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings { not_found_pause: Duration::from_millis(self.not_found_pause_ms) }
    }

    /// Unrecognised levels fall back to WARN
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::WARN)
    }
}

/// Load configuration from an optional file, then `TICK_*` environment variables
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TickConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path.as_ref()).required(false))
        .add_source(
            Environment::with_prefix("TICK").try_parsing(true).list_separator(",").with_list_parse_key("default_symbols"),
        )
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("tick_{}_{name}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = TickConfig::default();

        assert_eq!(config.api_url, "https://api.coinmarketcap.com/v2");
        assert_eq!(config.default_symbols, vec!["BTC", "ETH", "BCH"]);
        assert_eq!(config.pipeline_settings().not_found_pause, Duration::from_secs(3));
        assert_eq!(config.http_config().request_timeout, Duration::from_secs(10));
        assert_eq!(config.level(), Level::WARN);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let config = load_config("/nonexistent/tick.toml").unwrap();
        assert_eq!(config.connect_timeout_secs, TickConfig::default().connect_timeout_secs);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = write_temp_config(
            "overrides",
            r#"
request_timeout_secs = 3
not_found_pause_ms = 0
default_symbols = ["LTC", "XMR"]
log_level = "debug"
"#,
        );

        let config = load_config(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.connect_timeout_secs, 5);
        assert_eq!(config.default_symbols, vec!["LTC", "XMR"]);
        assert_eq!(config.pipeline_settings().not_found_pause, Duration::ZERO);
        assert_eq!(config.level(), Level::DEBUG);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let path = write_temp_config("invalid", "request_timeout_secs = \"soon\"\n");

        let result = load_config(&path);
        let _ = std::fs::remove_file(&path);

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = TickConfig { log_level: "chatty".to_string(), ..Default::default() };
        assert_eq!(config.level(), Level::WARN);
    }
}
