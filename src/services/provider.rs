use async_trait::async_trait;

use crate::error::ProviderError;
use crate::services::session_manager::Message;

/// A hosted model that turns a system instruction, prior turns and a new
/// user message into reply text.
///
/// Implementors own transport and vendor wire format; the session only sees
/// text in and text out.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn generate(
        &self,
        system: &str,
        history: &[Message],
        message: &str,
    ) -> Result<String, ProviderError>;
}
