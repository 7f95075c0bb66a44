use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Name of the variable the hosting platform exposes the Resend credential under.
pub const API_KEY_ENV_VAR: &str = "RESEND_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub email: EmailConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub from: String,
    pub to: String,
    pub timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            email: EmailConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8788,
            request_timeout_seconds: 30,
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: "https://api.resend.com".to_string(),
            from: "SummitPeak AI <onboarding@resend.dev>".to_string(),
            to: "contact@summitpeak.ai".to_string(),
            timeout_seconds: 5,
        }
    }
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl EmailConfig {
    /// The configured key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        // e.g. `APP_EMAIL__TO=ops@example.com` sets `email.to`
        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        let app_config = app_config.with_api_key_fallback(std::env::var(API_KEY_ENV_VAR).ok());

        app_config.validate()?;

        Ok(app_config)
    }

    /// Fills `email.api_key` from `fallback` unless a non-blank key is already set.
    pub fn with_api_key_fallback(mut self, fallback: Option<String>) -> Self {
        if !self.email.is_enabled() {
            self.email.api_key = fallback;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.server.request_timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        if self.email.api_url.trim().is_empty() {
            return Err(ConfigError::Message(
                "Email API URL cannot be empty".to_string(),
            ));
        }

        if self.email.from.trim().is_empty() {
            return Err(ConfigError::Message(
                "Email sender cannot be empty".to_string(),
            ));
        }

        if self.email.to.trim().is_empty() {
            return Err(ConfigError::Message(
                "Email recipient cannot be empty".to_string(),
            ));
        }

        if self.email.timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "Email timeout must be greater than 0".to_string(),
            ));
        }

        if self.email.timeout_seconds >= self.server.request_timeout_seconds {
            return Err(ConfigError::Message(
                "Email timeout must be shorter than the request timeout".to_string(),
            ));
        }

        if !self.email.is_enabled() {
            tracing::warn!("{} not configured - contact submissions will only be logged", API_KEY_ENV_VAR);
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_seconds)
    }
}
