//! Session handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;
use tracing::debug;

use super::chat::UserQuery;
use crate::{resolve_user_id, AppState};
use budgetbite_core::{MealPlan, UserProfile};

/// A user's session as seen by the UI
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub user_id: String,
    pub profile: UserProfile,
    pub current_plan: Option<MealPlan>,
}

/// GET /api/session - Get (or lazily create) a user's session
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<UserQuery>,
) -> Json<SessionView> {
    let user_id = resolve_user_id(params.user_id.as_deref(), &headers);
    let mut chat = state.chat.lock().await;
    let session = chat.sessions.get_session(&user_id);

    Json(SessionView {
        profile: session.profile.clone(),
        current_plan: session.current_plan.clone(),
        user_id,
    })
}

/// DELETE /api/session - Drop a user's session and transcript
pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<UserQuery>,
) -> Json<serde_json::Value> {
    let user_id = resolve_user_id(params.user_id.as_deref(), &headers);
    let deleted = state.chat.lock().await.reset(&user_id);

    debug!(user = %user_id, deleted = deleted, "Reset session");

    Json(serde_json::json!({ "deleted": deleted }))
}
