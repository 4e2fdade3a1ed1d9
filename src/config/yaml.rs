//! YAML configuration file loading.
//!
//! The YAML file mirrors the environment variables and overrides them.
//! All fields are optional; missing values fall back to the environment.
//!
//! # Example
//! ```yaml
//! server:
//!   host: "0.0.0.0"
//!   port: 5000
//!   static_index: "static/index.html"
//! provider:
//!   chat_endpoint: "https://example.openai.azure.com"
//!   chat_deployment: "gpt-4o-mini"
//!   realtime_deployment: "gpt-4o-realtime-preview"
//!   webrtc_endpoint: "https://eastus2.realtimeapi-preview.ai.azure.com/v1/realtimertc"
//!   voice: "alloy"
//!   noise_reduction: "near_field"
//!   upstream_timeout_seconds: 30
//! security:
//!   cors_allowed_origins: "*"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct YamlConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub provider: ProviderSection,
    #[serde(default)]
    pub security: SecuritySection,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub tls: Option<TlsSection>,
    pub static_index: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TlsSection {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProviderSection {
    pub api_key: Option<String>,
    pub chat_endpoint: Option<String>,
    pub chat_deployment: Option<String>,
    pub realtime_endpoint: Option<String>,
    pub realtime_deployment: Option<String>,
    pub webrtc_endpoint: Option<String>,
    pub voice: Option<String>,
    pub noise_reduction: Option<String>,
    pub upstream_timeout_seconds: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SecuritySection {
    pub cors_allowed_origins: Option<String>,
}

impl YamlConfig {
    /// Load and parse a YAML configuration file.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read config file {}: {e}", path.display()))?;
        let config: YamlConfig = serde_yaml::from_str(&contents)
            .map_err(|e| format!("failed to parse config file {}: {e}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 8080
provider:
  api_key: "yaml-key"
  chat_endpoint: "https://example.openai.azure.com"
  voice: "verse"
security:
  cors_allowed_origins: "*"
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = YamlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(config.server.port, Some(8080));
        assert_eq!(config.provider.api_key.as_deref(), Some("yaml-key"));
        assert_eq!(config.provider.voice.as_deref(), Some("verse"));
        assert_eq!(config.security.cors_allowed_origins.as_deref(), Some("*"));
    }

    #[test]
    fn test_parse_empty_sections() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"server:\n  port: 9000\n").unwrap();

        let config = YamlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.port, Some(9000));
        assert!(config.provider.api_key.is_none());
    }

    #[test]
    fn test_missing_file_errors() {
        let result = YamlConfig::from_file(Path::new("/nonexistent/config.yaml"));
        assert!(result.is_err());
    }
}
