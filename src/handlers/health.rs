use axum::{Json, extract::State};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::auth::services::AccountService;

/// GET /health
/// Indique si une base est configurée, sans jamais s'y connecter
pub async fn health(State(service): State<Arc<AccountService>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "database": if service.is_configured() { "configured" } else { "missing" },
    }))
}
