use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::Validation {
        status: rejection.status(),
        message: rejection.body_text(),
    })?;

    let reply = state.session.send_message(&payload.message).await?;

    Ok(Json(ChatResponse { reply }))
}
