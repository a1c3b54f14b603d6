// src/services/gemini.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GatewayConfig;
use crate::error::ProviderError;
use crate::services::provider::ChatProvider;
use crate::services::session_manager::{Message, MessageRole};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn role_name(role: &MessageRole) -> &'static str {
    match role {
        MessageRole::User => "user",
        MessageRole::Model => "model",
    }
}

fn build_request<'a>(system: &'a str, history: &'a [Message], message: &'a str) -> GenerateRequest<'a> {
    let mut contents: Vec<Content<'a>> = history
        .iter()
        .map(|m| Content {
            role: Some(role_name(&m.role)),
            parts: vec![Part { text: &m.content }],
        })
        .collect();
    contents.push(Content {
        role: Some("user"),
        parts: vec![Part { text: message }],
    });

    GenerateRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part { text: system }],
        },
        contents,
    }
}

// Text of the first candidate, parts joined in order.
fn extract_text(response: GenerateResponse) -> Result<String, ProviderError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    Ok(text)
}

/// Google Gemini `generateContent` client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            http: Client::builder().timeout(config.timeout).build()?,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl ChatProvider for GeminiClient {
    async fn generate(
        &self,
        system: &str,
        history: &[Message],
        message: &str,
    ) -> Result<String, ProviderError> {
        let body = build_request(system, history, message);

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            tracing::warn!(status = status.as_u16(), model = %self.model, "gemini returned an error status");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await?;
        let parsed: GenerateResponse =
            serde_json::from_str(&raw).map_err(|e| ProviderError::Decode(e.to_string()))?;
        extract_text(parsed)
    }
}
