// src/services/session_manager.rs
use std::{
    fmt::Debug,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

use crate::config::DEFAULT_TIMEOUT;
use crate::error::ProviderError;
use crate::services::provider::ChatProvider;

#[derive(Clone, Debug)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: Instant,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Instant::now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Model,
}

/// The conversation shared by every caller of the gateway.
///
/// The history lock is held for the whole provider call, so concurrent
/// messages are answered one at a time and each user/model pair lands in the
/// log next to each other. Each call is bounded by `timeout`, so a provider
/// that never answers holds the lock for at most that long. A failed call
/// leaves the history untouched.
pub struct ChatSession {
    provider: Arc<dyn ChatProvider>,
    system_instruction: String,
    history: Mutex<Vec<Message>>,
    timeout: Duration,
}

impl Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("system_instruction", &self.system_instruction)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ChatSession {
    pub fn new(provider: Arc<dyn ChatProvider>, system_instruction: impl Into<String>) -> Self {
        Self {
            provider,
            system_instruction: system_instruction.into(),
            history: Mutex::new(Vec::new()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ask the provider for a reply to `text` in the context of the history
    /// so far, and record both turns on success.
    pub async fn send_message(&self, text: &str) -> Result<String, ProviderError> {
        let mut history = self.history.lock().await;
        tracing::debug!(message_len = text.len(), turns = history.len(), "sending message to provider");

        let call = self
            .provider
            .generate(&self.system_instruction, &history, text);
        let reply = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| ProviderError::Timeout(self.timeout))??;

        history.push(Message::new(MessageRole::User, text));
        history.push(Message::new(MessageRole::Model, reply.clone()));
        Ok(reply)
    }

    /// Copy of the recorded turns, oldest first.
    pub async fn history(&self) -> Vec<Message> {
        self.history.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.history.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.history.lock().await.is_empty()
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }
}
