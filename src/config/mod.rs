use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Base URL of the attendance REST API (trailing slash optional)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Where the access/refresh tokens and user descriptor are persisted
    #[serde(default = "default_session_file")]
    pub session_file: String,
    /// Company used by HR views when `--company` is not given
    #[serde(default)]
    pub default_company: Option<u64>,
    /// Countdown tick period in milliseconds
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
fn default_session_file() -> String {
    Config::session_path().to_string_lossy().to_string()
}
fn default_tick_millis() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            session_file: default_session_file(),
            default_company: None,
            tick_millis: default_tick_millis(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("kivo")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".kivo")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("kivo.conf")
    }

    /// Return the default path of the persisted session
    pub fn session_path() -> PathBuf {
        Self::config_dir().join("session.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    /// Write a fresh configuration file (optionally pointing at a custom API)
    pub fn init_all(api_url: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Config::default();
        if let Some(url) = api_url {
            config.api_url = url;
        }

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }

    /// API base URL normalized with a trailing slash so relative joins keep the prefix.
    pub fn api_base(&self) -> AppResult<url::Url> {
        let mut raw = self.api_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Ok(url::Url::parse(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = Config::from_yaml("api_url: http://10.0.0.5:8000/api\n").unwrap();
        assert_eq!(cfg.api_url, "http://10.0.0.5:8000/api");
        assert_eq!(cfg.tick_millis, 1000);
        assert_eq!(cfg.default_company, None);
    }

    #[test]
    fn api_base_gets_trailing_slash() {
        let cfg = Config {
            api_url: "http://10.0.0.5:8000/api".into(),
            ..Config::default()
        };
        let base = cfg.api_base().unwrap();
        assert_eq!(base.as_str(), "http://10.0.0.5:8000/api/");
        assert_eq!(
            base.join("asistencias/marcar/").unwrap().as_str(),
            "http://10.0.0.5:8000/api/asistencias/marcar/"
        );
    }

    #[test]
    fn yaml_roundtrip_keeps_company() {
        let cfg = Config {
            default_company: Some(3),
            ..Config::default()
        };
        let back = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }
}
