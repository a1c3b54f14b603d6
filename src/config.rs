//! Gateway configuration.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_MODEL: &str = "gemini-1.0-pro";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Persona applied once to the provider session.
pub const SYSTEM_INSTRUCTION: &str = "Kamu adalah KrisAI.
Asisten AI penulisan kreatif berbahasa Indonesia.
Ramah, jelas, dan membantu.";

#[derive(Clone)]
pub struct GatewayConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub bind_addr: String,
}

// Keep the key out of logs.
impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("bind_addr", &self.bind_addr)
            .finish_non_exhaustive()
    }
}

impl GatewayConfig {
    /// Reads configuration from the process environment.
    ///
    /// | Variable              | Default                                             |
    /// |-----------------------|-----------------------------------------------------|
    /// | `GEMINI_API_KEY`      | required (`GOOGLE_API_KEY` is accepted as fallback) |
    /// | `GEMINI_MODEL`        | `gemini-1.0-pro`                                    |
    /// | `GEMINI_BASE_URL`     | `https://generativelanguage.googleapis.com/v1beta`  |
    /// | `GEMINI_TIMEOUT_SECS` | `60`                                                |
    /// | `BIND_ADDR`           | `0.0.0.0:3000`                                      |
    ///
    /// Call `dotenvy::dotenv()` first to pick up a local `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_blank("GEMINI_API_KEY")
            .or_else(|| non_blank("GOOGLE_API_KEY"))
            .ok_or(ConfigError::MissingApiKey)?;

        let model = non_blank("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let model = model
            .trim()
            .strip_prefix("models/")
            .unwrap_or(model.trim())
            .to_string();

        let base_url = non_blank("GEMINI_BASE_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match non_blank("GEMINI_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_TIMEOUT,
        };

        let bind_addr = non_blank("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            api_key: api_key.trim().to_string(),
            model,
            base_url,
            timeout,
            bind_addr,
        })
    }
}
