//! Application configuration

pub mod settings;

pub use settings::{AppConfig, EmailConfig, ServerConfig, API_KEY_ENV_VAR};
