//! Configuration module for the Voz Relay server
//!
//! Configuration is loaded once at process start and never reloaded.
//! Sources, in priority order: YAML file > environment variables > .env
//! values > defaults. Missing or malformed required values fail startup
//! instead of surfacing as a runtime 500 on first use.

use std::path::{Path, PathBuf};

use url::Url;

use crate::provider::config::{NoiseReductionMode, RealtimeVoice};

mod yaml;

/// Default listen port, matching the original deployment.
const DEFAULT_PORT: u16 = 5000;

/// Default outbound HTTP timeout in seconds.
const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 30;

/// Default location of the client entry page.
const DEFAULT_STATIC_INDEX: &str = "static/index.html";

/// TLS configuration for HTTPS
#[derive(Debug, Clone)]
pub struct TlsConfig {
    /// Path to the TLS certificate file (PEM format)
    pub cert_path: PathBuf,
    /// Path to the TLS private key file (PEM format)
    pub key_path: PathBuf,
}

/// Relay configuration
///
/// Immutable after startup; shared read-only across all request handlers.
#[derive(Clone)]
pub struct RelayConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // TLS configuration (optional)
    pub tls: Option<TlsConfig>,

    /// Azure OpenAI API key, used for session minting and chat completion.
    pub api_key: String,
    /// Base URL of the Azure OpenAI chat resource.
    pub chat_endpoint: String,
    /// Chat deployment name.
    pub chat_deployment: String,
    /// Optional base URL for realtime session minting. Falls back to the
    /// chat endpoint when unset.
    pub realtime_endpoint: Option<String>,
    /// Realtime deployment name.
    pub realtime_deployment: String,
    /// Public WebRTC negotiation endpoint, also returned to callers alongside
    /// the minted credential.
    pub webrtc_endpoint: String,

    /// Voice used for realtime audio responses.
    pub realtime_voice: RealtimeVoice,
    /// Input audio noise reduction mode for realtime sessions.
    pub noise_reduction: NoiseReductionMode,

    /// CORS allowed origins (comma-separated list or "*" for all)
    /// Default: None (CORS disabled, same-origin only)
    pub cors_allowed_origins: Option<String>,

    /// Timeout applied to every outbound provider call.
    pub upstream_timeout_seconds: u64,

    /// Client entry page served at `/`.
    pub static_index: PathBuf,
}

/// Zeroize the API key when the configuration is dropped.
impl Drop for RelayConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        self.api_key.zeroize();
    }
}

/// Manual impl so the API key never reaches debug output.
impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("tls", &self.tls)
            .field("api_key", &"[REDACTED]")
            .field("chat_endpoint", &self.chat_endpoint)
            .field("chat_deployment", &self.chat_deployment)
            .field("realtime_endpoint", &self.realtime_endpoint)
            .field("realtime_deployment", &self.realtime_deployment)
            .field("webrtc_endpoint", &self.webrtc_endpoint)
            .field("realtime_voice", &self.realtime_voice)
            .field("noise_reduction", &self.noise_reduction)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("upstream_timeout_seconds", &self.upstream_timeout_seconds)
            .field("static_index", &self.static_index)
            .finish()
    }
}

impl RelayConfig {
    /// Load configuration from environment variables.
    ///
    /// `.env` values count as environment variables when loaded by the caller
    /// (done in `main` at startup). Validates the result before returning.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = RawConfig::from_env()?.finalize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file with environment variable base.
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. Default values
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;
        let config = RawConfig::from_env()?.merge_yaml(yaml_config).finalize()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the server address as a string in "host:port" format.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if TLS is enabled
    pub fn is_tls_enabled(&self) -> bool {
        self.tls.is_some()
    }

    /// Base URL for realtime session minting.
    ///
    /// The original deployment mints session credentials against the chat
    /// resource; a dedicated realtime endpoint takes precedence when set.
    pub fn realtime_session_base(&self) -> &str {
        self.realtime_endpoint
            .as_deref()
            .unwrap_or(&self.chat_endpoint)
    }

    /// Validate required values and endpoint URLs.
    ///
    /// Fails fast at startup so a misconfigured relay never answers requests.
    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.api_key.trim().is_empty() {
            return Err("AZURE_OPENAI_API_KEY must not be empty".into());
        }
        if self.chat_deployment.trim().is_empty() {
            return Err("AZURE_OPENAI_CHAT_DEPLOYMENT_NAME must not be empty".into());
        }
        if self.realtime_deployment.trim().is_empty() {
            return Err("AZURE_OPENAI_REALTIME_DEPLOYMENT_NAME must not be empty".into());
        }

        validate_endpoint("AZURE_OPENAI_CHAT_ENDPOINT", &self.chat_endpoint)?;
        validate_endpoint("AZURE_OPENAI_REALTIME_WEBRTC_ENDPOINT", &self.webrtc_endpoint)?;
        if let Some(ref endpoint) = self.realtime_endpoint {
            validate_endpoint("AZURE_OPENAI_REALTIME_ENDPOINT", endpoint)?;
        }

        if self.upstream_timeout_seconds == 0 {
            return Err("UPSTREAM_TIMEOUT_SECONDS must be greater than zero".into());
        }

        Ok(())
    }
}

/// Check that an endpoint is an absolute http(s) URL with a host.
fn validate_endpoint(name: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let url = Url::parse(value).map_err(|e| format!("{name} is not a valid URL: {e}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("{name} must use http or https, got: {}", url.scheme()).into());
    }
    if url.host_str().is_none() {
        return Err(format!("{name} must have a host").into());
    }
    Ok(())
}

/// Read an environment variable, treating empty/whitespace values as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Partially-loaded configuration before required-field checks.
#[derive(Debug, Default)]
struct RawConfig {
    host: Option<String>,
    port: Option<u16>,
    tls_cert_path: Option<PathBuf>,
    tls_key_path: Option<PathBuf>,
    api_key: Option<String>,
    chat_endpoint: Option<String>,
    chat_deployment: Option<String>,
    realtime_endpoint: Option<String>,
    realtime_deployment: Option<String>,
    webrtc_endpoint: Option<String>,
    realtime_voice: Option<String>,
    noise_reduction: Option<String>,
    cors_allowed_origins: Option<String>,
    upstream_timeout_seconds: Option<u64>,
    static_index: Option<PathBuf>,
}

impl RawConfig {
    fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let port = match env_var("PORT") {
            Some(raw) => Some(raw.parse::<u16>().map_err(|e| format!("invalid PORT: {e}"))?),
            None => None,
        };
        let upstream_timeout_seconds = match env_var("UPSTREAM_TIMEOUT_SECONDS") {
            Some(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|e| format!("invalid UPSTREAM_TIMEOUT_SECONDS: {e}"))?,
            ),
            None => None,
        };

        Ok(Self {
            host: env_var("HOST"),
            port,
            tls_cert_path: env_var("TLS_CERT_PATH").map(PathBuf::from),
            tls_key_path: env_var("TLS_KEY_PATH").map(PathBuf::from),
            api_key: env_var("AZURE_OPENAI_API_KEY"),
            chat_endpoint: env_var("AZURE_OPENAI_CHAT_ENDPOINT"),
            chat_deployment: env_var("AZURE_OPENAI_CHAT_DEPLOYMENT_NAME"),
            realtime_endpoint: env_var("AZURE_OPENAI_REALTIME_ENDPOINT"),
            realtime_deployment: env_var("AZURE_OPENAI_REALTIME_DEPLOYMENT_NAME"),
            webrtc_endpoint: env_var("AZURE_OPENAI_REALTIME_WEBRTC_ENDPOINT"),
            realtime_voice: env_var("REALTIME_VOICE"),
            noise_reduction: env_var("REALTIME_NOISE_REDUCTION"),
            cors_allowed_origins: env_var("CORS_ALLOWED_ORIGINS"),
            upstream_timeout_seconds,
            static_index: env_var("STATIC_INDEX_PATH").map(PathBuf::from),
        })
    }

    /// Apply YAML overrides on top of the environment base.
    fn merge_yaml(mut self, yaml: yaml::YamlConfig) -> Self {
        self.host = yaml.server.host.or(self.host);
        self.port = yaml.server.port.or(self.port);
        if let Some(tls) = yaml.server.tls {
            self.tls_cert_path = Some(tls.cert_path);
            self.tls_key_path = Some(tls.key_path);
        }
        self.static_index = yaml.server.static_index.or(self.static_index);

        self.api_key = yaml.provider.api_key.or(self.api_key);
        self.chat_endpoint = yaml.provider.chat_endpoint.or(self.chat_endpoint);
        self.chat_deployment = yaml.provider.chat_deployment.or(self.chat_deployment);
        self.realtime_endpoint = yaml.provider.realtime_endpoint.or(self.realtime_endpoint);
        self.realtime_deployment = yaml
            .provider
            .realtime_deployment
            .or(self.realtime_deployment);
        self.webrtc_endpoint = yaml.provider.webrtc_endpoint.or(self.webrtc_endpoint);
        self.realtime_voice = yaml.provider.voice.or(self.realtime_voice);
        self.noise_reduction = yaml.provider.noise_reduction.or(self.noise_reduction);
        self.upstream_timeout_seconds = yaml
            .provider
            .upstream_timeout_seconds
            .or(self.upstream_timeout_seconds);

        self.cors_allowed_origins = yaml
            .security
            .cors_allowed_origins
            .or(self.cors_allowed_origins);

        self
    }

    fn finalize(self) -> Result<RelayConfig, Box<dyn std::error::Error>> {
        let tls = match (self.tls_cert_path, self.tls_key_path) {
            (Some(cert_path), Some(key_path)) => Some(TlsConfig {
                cert_path,
                key_path,
            }),
            (None, None) => None,
            _ => {
                return Err(
                    "TLS_CERT_PATH and TLS_KEY_PATH must be set together or not at all".into(),
                );
            }
        };

        Ok(RelayConfig {
            host: self.host.unwrap_or_else(|| "0.0.0.0".to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            tls,
            api_key: self
                .api_key
                .ok_or("AZURE_OPENAI_API_KEY is not set")?,
            chat_endpoint: self
                .chat_endpoint
                .ok_or("AZURE_OPENAI_CHAT_ENDPOINT is not set")?,
            chat_deployment: self
                .chat_deployment
                .ok_or("AZURE_OPENAI_CHAT_DEPLOYMENT_NAME is not set")?,
            realtime_endpoint: self.realtime_endpoint,
            realtime_deployment: self
                .realtime_deployment
                .ok_or("AZURE_OPENAI_REALTIME_DEPLOYMENT_NAME is not set")?,
            webrtc_endpoint: self
                .webrtc_endpoint
                .ok_or("AZURE_OPENAI_REALTIME_WEBRTC_ENDPOINT is not set")?,
            realtime_voice: self
                .realtime_voice
                .as_deref()
                .map(RealtimeVoice::from_str_or_default)
                .unwrap_or_default(),
            noise_reduction: self
                .noise_reduction
                .as_deref()
                .map(NoiseReductionMode::from_str_or_default)
                .unwrap_or_default(),
            cors_allowed_origins: self.cors_allowed_origins,
            upstream_timeout_seconds: self
                .upstream_timeout_seconds
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECONDS),
            static_index: self
                .static_index
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_INDEX)),
        })
    }
}
