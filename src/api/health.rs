use axum::{Json, extract::State, response::IntoResponse};

use crate::AppState;

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "upstream": state.client.base_url(),
    }))
}
