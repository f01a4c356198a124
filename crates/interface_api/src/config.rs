//! API configuration

use config::ConfigError;
use domain_scanline::CenturyWindow;
use serde::Deserialize;

/// API configuration
///
/// Every field falls back to its default when the matching `API_` variable
/// is unset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// First year of the 100-year window two-digit years resolve into
    pub century_start: i32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            century_start: CenturyWindow::default().start(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    ///
    /// Fails if `API_CENTURY_START` does not describe a representable window.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Self = config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()?;
        config.century_window()?;
        Ok(config)
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Century window used when encoding dates
    pub fn century_window(&self) -> Result<CenturyWindow, ConfigError> {
        CenturyWindow::new(self.century_start)
            .map_err(|e| ConfigError::Message(format!("century_start: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.century_window().unwrap(), CenturyWindow::default());
    }

    #[test]
    fn test_rejects_unrepresentable_century_start() {
        let config = ApiConfig {
            century_start: i32::MAX - 10,
            ..ApiConfig::default()
        };
        let err = config.century_window().unwrap_err();
        assert!(err.to_string().contains("century_start"));
    }
}
