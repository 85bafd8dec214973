use crate::types::{ChatRequest, ClassifyRequest, ClassifyResponse};
use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use solace_core::{lock_session, Reply, Session};
use solace_reasoning::ReplyEngine;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// The gateway HTTP server.
///
/// Exposes the reply engine over JSON:
/// - `POST /chat`: one conversational turn
/// - `POST /classify`: emotion and intent only, no session update
/// - `GET /session/:user_id`: session snapshot, 404 if unknown
/// - `DELETE /session/:user_id`: forget a user
/// - `GET /health`: health check
pub struct GatewayServer {
    engine: Arc<ReplyEngine>,
    host: String,
    port: u16,
}

impl GatewayServer {
    pub fn new(engine: Arc<ReplyEngine>, host: &str, port: u16) -> Self {
        Self {
            engine,
            host: host.to_string(),
            port,
        }
    }

    /// Start the server. This spawns a background task and returns the join handle.
    ///
    /// The task resolves to an error if the address cannot be bound or the
    /// server stops with an error.
    pub fn start(self) -> tokio::task::JoinHandle<anyhow::Result<()>> {
        let app = router(self.engine);
        let addr = format!("{}:{}", self.host, self.port);

        tokio::spawn(async move {
            let listener = match tokio::net::TcpListener::bind(&addr).await {
                Ok(l) => l,
                Err(e) => {
                    tracing::error!("Gateway failed to bind {}: {}", addr, e);
                    return Err(anyhow::Error::new(e)
                        .context(format!("Failed to bind gateway to {}", addr)));
                }
            };
            tracing::info!("Gateway listening on {}", addr);
            axum::serve(listener, app)
                .await
                .with_context(|| format!("Gateway server error on {}", addr))
        })
    }
}

/// All routes with the engine as shared state.
pub fn router(engine: Arc<ReplyEngine>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/chat", post(chat))
        .route("/classify", post(classify))
        .route("/session/:user_id", get(get_session).delete(delete_session))
        .layer(CorsLayer::permissive())
        .with_state(engine)
}

// ============================================================================
// Route handlers
// ============================================================================

async fn health() -> &'static str {
    "ok"
}

/// POST /chat
async fn chat(
    State(engine): State<Arc<ReplyEngine>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<Reply>, StatusCode> {
    if req.user_id.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let reply = engine.generate_reply(&req.message, &req.user_id);
    tracing::debug!(user_id = %req.user_id, emotion = %reply.emotion, "chat reply");
    Ok(Json(reply))
}

/// POST /classify
async fn classify(
    State(engine): State<Arc<ReplyEngine>>,
    Json(req): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    Json(ClassifyResponse {
        emotion: engine.detect_emotion(&req.message),
        intent: engine.detect_intent(&req.message),
    })
}

/// GET /session/:user_id
///
/// Read-only: an unknown user gets 404 and no session is created.
async fn get_session(
    State(engine): State<Arc<ReplyEngine>>,
    Path(user_id): Path<String>,
) -> Result<Json<Session>, StatusCode> {
    let handle = engine.find_session(&user_id).ok_or(StatusCode::NOT_FOUND)?;
    let snapshot = lock_session(&handle).clone();
    Ok(Json(snapshot))
}

/// DELETE /session/:user_id
async fn delete_session(
    State(engine): State<Arc<ReplyEngine>>,
    Path(user_id): Path<String>,
) -> StatusCode {
    engine.clear_session(&user_id);
    tracing::info!(user_id = %user_id, "session cleared");
    StatusCode::NO_CONTENT
}
