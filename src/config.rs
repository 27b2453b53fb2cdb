use std::env;
use secrecy::SecretString;

pub const DEFAULT_MODEL_BASE_URL: &str = "https://models.inference.ai.azure.com";
pub const DEFAULT_MODEL_NAME: &str = "gpt-4o";

/// Reads a boolean switch: `true`/`1`/`yes`/`on` and `false`/`0`/`no`/`off`,
/// in any case. Anything else is `None`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub model_token: Option<SecretString>,
    pub model_base_url: String,
    pub model_name: String,
    pub model_timeout_secs: u64,
    pub strict_validation: bool,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            model_token: env::var("GITHUB_PAT")
                .ok()
                .filter(|token| !token.trim().is_empty())
                .map(SecretString::from),
            model_base_url: env::var("MODEL_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_MODEL_BASE_URL.to_string()),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL_NAME.to_string()),
            model_timeout_secs: env::var("MODEL_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            strict_validation: env::var("STRICT_VALIDATION")
                .ok()
                .map(|v| {
                    parse_flag(&v).unwrap_or_else(|| {
                        log::warn!(
                            "STRICT_VALIDATION={:?} is not a recognised boolean; strict validation stays off",
                            v
                        );
                        false
                    })
                })
                .unwrap_or(false),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }

    pub fn has_model_token(&self) -> bool {
        self.model_token.is_some()
    }

    /// Logs the settings that will make generation requests fail at runtime.
    /// The server still starts so the health and export endpoints stay usable.
    pub fn warn_if_incomplete(&self) {
        if !self.has_model_token() {
            log::warn!(
                "GITHUB_PAT is not set; /api/generate will reject every request until it is configured"
            );
        }
        if self.model_timeout_secs == 0 {
            log::warn!("MODEL_TIMEOUT_SECS is 0; every model call will time out immediately");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            model_token: Some(SecretString::from("test-model-token".to_string())),
            model_base_url: "http://127.0.0.1:9".to_string(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            model_timeout_secs: 5,
            strict_validation: false,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}
