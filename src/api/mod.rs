use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    TourismAgent,
    history::{ConversationHistory, Exchange},
};

#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<TourismAgent>,
    pub history: Arc<ConversationHistory>,
}

impl AppState {
    pub fn new(agent: TourismAgent, history_size: usize) -> Self {
        Self {
            agent: Arc::new(agent),
            history: Arc::new(ConversationHistory::new(history_size)),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

#[derive(Serialize, Deserialize)]
pub struct AskResponse {
    pub query: String,
    pub response: String,
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(ask))
        .route("/history", get(get_history).delete(clear_history))
        .route("/health", get(health))
        .with_state(state)
}

async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, StatusCode> {
    let query = payload.query.trim();
    if query.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let response = state.agent.process(query).await;
    let exchange = state.history.record(query, response).await;

    Ok(Json(AskResponse {
        query: exchange.query,
        response: exchange.response,
    }))
}

async fn get_history(State(state): State<AppState>) -> Json<Vec<Exchange>> {
    Json(state.history.recent().await)
}

async fn clear_history(State(state): State<AppState>) -> StatusCode {
    state.history.clear().await;
    StatusCode::NO_CONTENT
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}
