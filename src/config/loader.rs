//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::GatewayConfig;

/// Environment variable supplying the provider API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from an optional TOML file, then overlay the
/// environment. A missing path means defaults.
///
/// The provider API key is only ever taken from `GEMINI_API_KEY`; an
/// empty value counts as absent.
pub fn load(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    let config = match path {
        Some(path) => load_file(path)?,
        None => GatewayConfig::default(),
    };

    Ok(overlay_env(config, std::env::var(API_KEY_ENV).ok()))
}

/// Apply the environment overlay. An empty key counts as absent.
fn overlay_env(mut config: GatewayConfig, api_key: Option<String>) -> GatewayConfig {
    config.upstream.api_key = api_key.filter(|key| !key.is_empty());
    config
}

/// Load and parse configuration from a TOML file.
pub fn load_file(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GatewayConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_env_fills_api_key() {
        let config = overlay_env(GatewayConfig::default(), Some("from-env".to_string()));
        assert_eq!(config.upstream.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_overlay_env_empty_key_counts_as_absent() {
        let config = overlay_env(GatewayConfig::default(), Some(String::new()));
        assert!(config.upstream.api_key.is_none());
    }

    #[test]
    fn test_overlay_env_without_key() {
        let config = overlay_env(GatewayConfig::default(), None);
        assert!(config.upstream.api_key.is_none());
    }

    // The only test touching the process environment; nothing else
    // reads GEMINI_API_KEY, so parallel execution is safe.
    #[test]
    fn test_load_without_file_uses_defaults_and_env() {
        std::env::set_var(API_KEY_ENV, "env-key");
        let config = load(None).unwrap();
        std::env::remove_var(API_KEY_ENV);

        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(
            config.upstream.base_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(config.upstream.api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_load_file_missing() {
        let err = load_file(Path::new("/nonexistent/gateway.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_file_roundtrip() {
        let path = std::env::temp_dir().join("gemini-gateway-loader-test.toml");
        fs::write(
            &path,
            r#"
            [listener]
            bind_address = "127.0.0.1:8181"
            "#,
        )
        .unwrap();

        let config = load_file(&path).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8181");

        let _ = fs::remove_file(&path);
    }
}
