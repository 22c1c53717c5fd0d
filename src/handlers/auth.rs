// src/handlers/auth.rs

use account_service_api::{AuthResponse, LoginRequest, SignupRequest};
use axum::body::Bytes;
use axum::extract::State;
use std::sync::Arc;

use crate::api::{AppResponse, AppResult};
use crate::auth::services::AccountService;
use crate::error::AppError;

/// POST /auth/signup
/// Création d'un compte
pub async fn signup(
    State(service): State<Arc<AccountService>>,
    body: Bytes,
) -> AppResult<AuthResponse> {
    let request: SignupRequest = serde_json::from_slice(&body)?;

    // Diesel et bcrypt sont bloquants
    let user = tokio::task::spawn_blocking(move || service.signup(request)).await??;

    Ok(AppResponse::ok(AuthResponse::new(
        "Account created successfully!",
        user,
    )))
}

/// POST /auth/login
/// Connexion d'un utilisateur
pub async fn login(
    State(service): State<Arc<AccountService>>,
    body: Bytes,
) -> AppResult<AuthResponse> {
    let request: LoginRequest = serde_json::from_slice(&body)?;

    let user = tokio::task::spawn_blocking(move || service.login(request)).await??;

    Ok(AppResponse::ok(AuthResponse::new("Login successful!", user)))
}

/// Toute méthode autre que POST sur une route d'auth; le body n'est pas lu
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
