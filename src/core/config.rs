//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address, asset paths and the reload port come from
//! `[package.metadata.leptos]` instead.

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive (`RUST_LOG`)
    /// Example: info,tower_http=debug
    pub log_filter: Option<String>,

    /// Whether responses are compressed (`NUKE_COMPRESSION`)
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("NUKE_COMPRESSION").ok(),
        )
    }

    fn from_vars(log_filter: Option<String>, compression: Option<String>) -> Self {
        Self {
            log_filter: log_filter.filter(|f| !f.trim().is_empty()),
            compression: compression.as_deref().map(parse_flag).unwrap_or(true),
        }
    }

    /// Filter directive to hand to the tracing subscriber
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: None,
            compression: true,
        }
    }
}

/// Anything other than an explicit "off" spelling counts as enabled
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.compression);
        assert!(config.log_filter.is_none());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_from_vars_unset() {
        assert_eq!(Config::from_vars(None, None), Config::default());
    }

    #[test]
    fn test_log_filter_passthrough() {
        let config = Config::from_vars(Some("debug,tower_http=trace".to_string()), None);
        assert_eq!(config.log_filter(), "debug,tower_http=trace");
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = Config::from_vars(Some("   ".to_string()), None);
        assert!(config.log_filter.is_none());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_compression_off_spellings() {
        for value in ["0", "false", "off", "no", "FALSE", " Off "] {
            let config = Config::from_vars(None, Some(value.to_string()));
            assert!(!config.compression, "{value:?} should disable compression");
        }
    }

    #[test]
    fn test_compression_on_spellings() {
        for value in ["1", "true", "on", "yes", ""] {
            let config = Config::from_vars(None, Some(value.to_string()));
            assert!(config.compression, "{value:?} should keep compression on");
        }
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();
        assert!(!config.log_filter().is_empty());
    }
}
