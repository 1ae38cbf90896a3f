use std::env;
use secrecy::{ExposeSecret, SecretString};

/// Credential baked in at build time, overridable at runtime by the same variable.
const BUILD_TIME_API_KEY: Option<&str> = option_env!("GEMINI_API_KEY");

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "quiz_notes.pdf";

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: SecretString,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub export_file_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: SecretString::from(
                env::var("GEMINI_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty())
                    .or_else(|| BUILD_TIME_API_KEY.map(str::to_string))
                    .unwrap_or_default(),
            ),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            export_file_name: env::var("EXPORT_FILE_NAME")
                .unwrap_or_else(|_| DEFAULT_EXPORT_FILE_NAME.to_string()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.gemini_api_key.expose_secret().trim().is_empty()
    }

    /// Logs a warning when no credential is configured. Requests still go out and
    /// the provider's rejection is reported through the result pane.
    pub fn warn_if_unconfigured(&self) {
        if !self.has_api_key() {
            log::warn!(
                "GEMINI_API_KEY is not set (neither at build time nor at runtime); generation requests will be rejected by the provider"
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: SecretString::from("test_api_key".to_string()),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}
