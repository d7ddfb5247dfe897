//! Chat handlers - free-text queries, quick actions, transcript

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{resolve_user_id, ApiJson, AppError, AppState, SuccessResponse};
use budgetbite_core::{ChatMessage, Intent, QuickAction};

/// Maximum accepted message length (characters)
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Optional session user id (falls back to header, then default user)
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Agent reply to a chat message
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub user_id: String,
    pub intent: Intent,
    pub response: String,
}

/// Request to classify a message without dispatching it
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub intent: Intent,
}

/// Query parameters selecting a user
#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub user_id: Option<String>,
}

/// A shortcut button
#[derive(Debug, Serialize)]
pub struct QuickActionInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub prompt: &'static str,
}

fn validate_message(message: &str) -> Result<(), AppError> {
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::bad_request(&format!(
            "Message too long (max {} characters)",
            MAX_MESSAGE_CHARS
        )));
    }
    Ok(())
}

async fn send_message(state: &AppState, user_id: String, message: &str) -> ChatResponse {
    let reply = {
        let mut chat = state.chat.lock().await;
        chat.send(&state.agent, &user_id, message)
    };

    debug!(user = %user_id, intent = %reply.intent, "Chat message handled");

    ChatResponse {
        user_id,
        intent: reply.intent,
        response: reply.text,
    }
}

/// POST /api/chat - Send a message to the agent
pub async fn chat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    validate_message(&payload.message)?;
    let user_id = resolve_user_id(payload.user_id.as_deref(), &headers);

    Ok(Json(send_message(&state, user_id, &payload.message).await))
}

/// POST /api/classify - Classify a message without touching any session
pub async fn classify(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    validate_message(&payload.message)?;

    Ok(Json(ClassifyResponse {
        intent: state.agent.classify_intent(&payload.message),
    }))
}

/// GET /api/actions - List shortcut buttons
pub async fn list_actions() -> Json<Vec<QuickActionInfo>> {
    Json(
        QuickAction::all()
            .iter()
            .map(|a| QuickActionInfo {
                id: a.as_str(),
                label: a.label(),
                prompt: a.prompt(),
            })
            .collect(),
    )
}

/// POST /api/actions/:action - Send a shortcut's canned message
pub async fn run_action(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(action): Path<String>,
    Query(params): Query<UserQuery>,
) -> Result<Json<ChatResponse>, AppError> {
    let action = action
        .parse::<QuickAction>()
        .map_err(|e| AppError::not_found(&e))?;
    let user_id = resolve_user_id(params.user_id.as_deref(), &headers);

    Ok(Json(send_message(&state, user_id, action.prompt()).await))
}

/// GET /api/transcript - Chat history for a user
pub async fn get_transcript(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<UserQuery>,
) -> Json<Vec<ChatMessage>> {
    let user_id = resolve_user_id(params.user_id.as_deref(), &headers);
    let chat = state.chat.lock().await;
    Json(chat.messages(&user_id))
}

/// DELETE /api/transcript - Clear a user's chat history (session is kept)
pub async fn clear_transcript(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<UserQuery>,
) -> Json<SuccessResponse> {
    let user_id = resolve_user_id(params.user_id.as_deref(), &headers);
    state.chat.lock().await.clear_transcript(&user_id);
    Json(SuccessResponse { success: true })
}
