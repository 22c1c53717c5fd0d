// src/app.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::password::PasswordManager;
use crate::auth::services::AccountService;
use crate::config::Config;
use crate::db::connection::PgConnector;
use crate::db::store::Connector;
use crate::handlers::auth::{login, method_not_allowed, signup};
use crate::handlers::health::health;

/// Construit le service de comptes à partir de la configuration
pub fn build_service(config: &Config) -> Arc<AccountService> {
    let connector = config.database_url.as_deref().map(|url| {
        Arc::new(PgConnector::new(
            url,
            config.db_pool_max_size,
            config.db_connection_timeout,
        )) as Arc<dyn Connector>
    });

    Arc::new(AccountService::new(
        connector,
        PasswordManager::new(config.bcrypt_cost),
    ))
}

/// Configure les routes d'authentification
///
/// Seul POST atteint un handler, toute autre méthode reçoit le 405 JSON
pub fn auth_routes(service: Arc<AccountService>) -> Router {
    Router::new()
        .route("/signup", post(signup).fallback(method_not_allowed))
        .route("/login", post(login).fallback(method_not_allowed))
        .with_state(service)
}

fn cors_layer(frontend_url: &str) -> Option<CorsLayer> {
    match frontend_url.parse::<HeaderValue>() {
        Ok(origin) => Some(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        ),
        Err(e) => {
            tracing::warn!(frontend_url, error = %e, "Invalid FRONTEND_URL, CORS disabled");
            None
        }
    }
}

/// Construit l'application complète
pub fn build_router(service: Arc<AccountService>, frontend_url: Option<&str>) -> Router {
    let router = Router::new()
        .route("/health", get(health).with_state(Arc::clone(&service)))
        .nest("/auth", auth_routes(service))
        // Middleware global de tracing
        .layer(TraceLayer::new_for_http());

    match frontend_url.and_then(cors_layer) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}
