//! Centralized configuration management for dse_search

use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Result, Context};

const DEFAULT_BASE_URL: &str = "https://dse2025.mahacet.org.in/dse25/";
const INDEX_PATH: &str = "index.php/hp_controller/instwiseallotment";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory for downloaded allotment PDFs
    pub pdf_dir: PathBuf,
    /// Portal root; always ends with '/'
    pub base_url: String,
    /// Page holding the institute-wise allotment table
    pub index_url: String,
    /// Number of downloads allowed in flight at once
    pub max_workers: usize,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl Config {
    /// Defaults pointed at another portal root. The index URL follows the root.
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = normalize_base_url(base_url);
        Self {
            pdf_dir: PathBuf::from("dse_pdfs"),
            index_url: format!("{}{}", base_url, INDEX_PATH),
            base_url,
            max_workers: 5,
            http: HttpConfig::default(),
        }
    }

    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("DSE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut config = Self::with_base_url(&base_url);

        if let Ok(dir) = std::env::var("DSE_PDF_DIR") {
            config.pdf_dir = dir.into();
        }
        if let Ok(url) = std::env::var("DSE_INDEX_URL") {
            config.index_url = url;
        }

        config.max_workers = parse_env_var("DSE_MAX_WORKERS")?.unwrap_or(config.max_workers);
        config.http = HttpConfig {
            timeout_seconds: parse_env_var("DSE_HTTP_TIMEOUT_SECONDS")?.unwrap_or(30),
            user_agent: std::env::var("DSE_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        };

        Ok(config)
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_workers == 0 {
            return Err(anyhow::anyhow!("DSE_MAX_WORKERS must be at least 1"));
        }
        if self.http.timeout_seconds == 0 {
            return Err(anyhow::anyhow!("DSE_HTTP_TIMEOUT_SECONDS must be at least 1"));
        }
        Ok(())
    }
}

fn normalize_base_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.pdf_dir, PathBuf::from("dse_pdfs"));
        assert_eq!(config.base_url, "https://dse2025.mahacet.org.in/dse25/");
        assert_eq!(
            config.index_url,
            "https://dse2025.mahacet.org.in/dse25/index.php/hp_controller/instwiseallotment"
        );
        assert_eq!(config.max_workers, 5);
        assert_eq!(config.http.timeout_seconds, 30);
        assert_eq!(config.http_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = Config::with_base_url("http://127.0.0.1:8080/dse25");
        assert_eq!(config.base_url, "http://127.0.0.1:8080/dse25/");
        assert!(config.index_url.starts_with("http://127.0.0.1:8080/dse25/index.php"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.validate().unwrap();

        config.max_workers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_env_var_rejects_garbage() {
        std::env::set_var("DSE_TEST_PARSE_WORKERS", "five");
        let parsed: Result<Option<usize>> = parse_env_var("DSE_TEST_PARSE_WORKERS");
        assert!(parsed.is_err());

        let missing: Option<usize> = parse_env_var("DSE_TEST_PARSE_MISSING").unwrap();
        assert!(missing.is_none());
    }
}
