//! BudgetBite Web Server
//!
//! Axum-based chat API plus an embedded single-page chat UI.
//!
//! Security features:
//! - Optional API key authentication on `/api` (use --no-auth for local dev)
//! - Restrictive CORS policy
//! - Security headers (CSP, nosniff, frame denial)
//! - JSON error responses, including rejected request bodies

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::sync::Mutex;
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::{debug, info, warn};

use budgetbite_core::{AppConfig, BudgetBiteAgent};

mod chat_state;
mod handlers;

pub use chat_state::ChatState;

/// User id for requests that don't identify themselves
pub const DEFAULT_USER_ID: &str = "user";

/// Header a client can use to pick its session
pub const USER_HEADER: &str = "x-budgetbite-user";

/// Authorization header for API key auth
const AUTHORIZATION_HEADER: &str = "authorization";

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Whether authentication is required (secure by default)
    pub require_auth: bool,
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// API keys accepted as "Bearer <key>" in the Authorization header
    pub api_keys: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            require_auth: true,
            allowed_origins: vec![],
            api_keys: vec![],
        }
    }
}

/// Shared application state
pub struct AppState {
    pub agent: BudgetBiteAgent,
    pub config: ServerConfig,
    /// Sessions and transcripts, locked per request
    pub chat: Mutex<ChatState>,
}

impl AppState {
    pub fn new(app_config: &AppConfig, config: ServerConfig) -> Self {
        Self {
            agent: app_config.agent(),
            config,
            chat: Mutex::new(ChatState::new(app_config.session_service())),
        }
    }
}

/// Authentication middleware - validates API keys
///
/// Keys are compared in constant time to prevent timing attacks.
async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if !state.config.require_auth {
        return next.run(request).await;
    }

    let api_key_valid = request
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(|key| validate_api_key(key, &state.config.api_keys))
        .unwrap_or(false);

    if api_key_valid {
        return next.run(request).await;
    }

    warn!(path = %request.uri().path(), "Unauthorized request - no valid API key");
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({
            "error": "Authentication required"
        })),
    )
        .into_response()
}

/// Validate an API key against the configured keys using constant-time comparison
fn validate_api_key(provided: &str, valid_keys: &[String]) -> bool {
    use subtle::ConstantTimeEq;

    let provided_bytes = provided.as_bytes();

    valid_keys.iter().any(|key| {
        let key_bytes = key.as_bytes();
        // Only compare if lengths match (constant-time for same-length keys)
        provided_bytes.len() == key_bytes.len() && bool::from(provided_bytes.ct_eq(key_bytes))
    })
}

/// Parse a comma-separated list of API keys
pub fn parse_api_keys(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Resolve the session user id for a request
///
/// Priority: explicit id (body or query) > `X-BudgetBite-User` header > [`DEFAULT_USER_ID`]
pub fn resolve_user_id(explicit: Option<&str>, headers: &axum::http::HeaderMap) -> String {
    if let Some(id) = explicit.map(str::trim).filter(|s| !s.is_empty()) {
        return id.to_string();
    }

    headers
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_USER_ID)
        .to_string()
}

/// Success response
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Create the application router
pub fn create_router(
    app_config: &AppConfig,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> Router {
    let state = Arc::new(AppState::new(app_config, config.clone()));

    info!(
        rules = app_config.rules.len(),
        budget = app_config.profile.budget_weekly,
        source = %app_config.source,
        "Agent configured"
    );

    let api_routes = Router::new()
        // Chat
        .route("/chat", post(handlers::chat))
        .route("/classify", post(handlers::classify))
        // Quick actions
        .route("/actions", get(handlers::list_actions))
        .route("/actions/:action", post(handlers::run_action))
        // Transcript
        .route(
            "/transcript",
            get(handlers::get_transcript).delete(handlers::clear_transcript),
        )
        // Session
        .route(
            "/session",
            get(handlers::get_session).delete(handlers::reset_session),
        );

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    };

    // CSP: scripts from same origin only, inline styles allowed for the chat page
    let csp_value = HeaderValue::from_static(
        "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; connect-src 'self'; frame-ancestors 'none'"
    );

    let mut app = Router::new()
        .nest("/api", api_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        // Page and health check stay public
        .route("/", get(handlers::index))
        .route("/app.js", get(handlers::app_js))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            csp_value,
        ));

    // Serve additional static files if directory provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    app_config: &AppConfig,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if !config.require_auth {
        warn!("⚠️  Authentication disabled - do not expose to network!");
    } else if config.api_keys.is_empty() {
        warn!("Authentication enabled but no API keys configured - all /api requests will be rejected");
    }

    let app = create_router(app_config, static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(status = %rejection.status(), "Rejected request body");
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// JSON body extractor whose rejections use the `{"error": ..}` shape
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
