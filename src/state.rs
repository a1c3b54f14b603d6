// src/state.rs
use std::sync::Arc;

use crate::services::provider::ChatProvider;
use crate::services::session_manager::ChatSession;

pub type SharedState = Arc<AppState>;

#[derive(Debug)]
pub struct AppState {
    pub session: ChatSession,
}

impl AppState {
    pub fn new(provider: Arc<dyn ChatProvider>, system_instruction: impl Into<String>) -> Self {
        Self {
            session: ChatSession::new(provider, system_instruction),
        }
    }

    pub fn with_session(session: ChatSession) -> Self {
        Self { session }
    }
}
