//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use super::lead::DEFAULT_LEAD_ENDPOINT;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Email endpoint that receives lead submissions
    /// Example: https://mailer.internal/v1/send-email
    pub lead_endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            lead_endpoint_url: std::env::var("LEAD_ENDPOINT_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        }
    }

    /// Check if a custom lead endpoint is configured
    pub fn has_lead_endpoint(&self) -> bool {
        self.lead_endpoint_url.is_some()
    }

    /// Lead endpoint, falling back to the public default
    pub fn lead_endpoint(&self) -> &str {
        self.lead_endpoint_url
            .as_deref()
            .unwrap_or(DEFAULT_LEAD_ENDPOINT)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_custom_endpoint() {
        let config = Config {
            lead_endpoint_url: Some("https://mailer.local/send".to_string()),
        };

        assert!(config.has_lead_endpoint());
        assert_eq!(config.lead_endpoint(), "https://mailer.local/send");
    }

    #[test]
    fn test_config_falls_back_to_default_endpoint() {
        let config = Config {
            lead_endpoint_url: None,
        };

        assert!(!config.has_lead_endpoint());
        assert_eq!(config.lead_endpoint(), DEFAULT_LEAD_ENDPOINT);
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, only check it loads
        let config = Config::from_env();

        assert!(!config.lead_endpoint().is_empty());
    }

    #[test]
    fn test_config_debug() {
        let config = Config {
            lead_endpoint_url: Some("https://mailer.local/send".to_string()),
        };

        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("lead_endpoint_url"));
    }
}
