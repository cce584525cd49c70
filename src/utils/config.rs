//! Application configuration

use crate::utils::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Desktop Chrome user agent passed to yt-dlp for metadata lookups
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Interface to bind
    pub host: String,

    /// TCP port to listen on
    pub port: u16,

    /// Netscape cookie file handed to yt-dlp (read-only)
    pub cookie_file: PathBuf,

    /// User agent sent by yt-dlp on metadata requests
    pub user_agent: String,

    /// Explicit yt-dlp binary; discovered automatically when unset
    pub ytdlp_path: Option<PathBuf>,

    /// Upper bound for a single yt-dlp invocation (seconds)
    pub extract_timeout_secs: u64,

    /// Default tracing filter, overridden by RUST_LOG
    pub log_filter: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5001,
            cookie_file: PathBuf::from("cookies.txt"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            ytdlp_path: None,
            extract_timeout_secs: 120,
            log_filter: "tubemeta=debug,tower_http=info".to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        let settings: AppSettings = serde_json::from_str(&raw)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Settings file in the platform config directory, if one exists
    pub fn default_file() -> Option<PathBuf> {
        let path = dirs::config_dir()?.join("tubemeta").join("settings.json");
        path.is_file().then_some(path)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.port == 0 {
            return Err(AppError::Validation("port must be non-zero".to_string()));
        }
        if self.extract_timeout_secs == 0 {
            return Err(AppError::Validation(
                "extract_timeout_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppSettings::default();
        assert_eq!(config.port, 5001);
        assert_eq!(config.cookie_file, PathBuf::from("cookies.txt"));
        assert!(config.ytdlp_path.is_none());
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr(), "127.0.0.1:5001");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"port": 8080, "cookie_file": "/etc/tubemeta/cookies.txt"}}"#).unwrap();

        let config = AppSettings::from_file(file.path()).expect("load settings");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cookie_file, PathBuf::from("/etc/tubemeta/cookies.txt"));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.extract_timeout_secs, 120);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"extract_timeout_secs": 0}}"#).unwrap();

        let err = AppSettings::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "port = 80").unwrap();

        let err = AppSettings::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
