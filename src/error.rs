// src/error.rs

use account_service_api::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::auth::password::PasswordError;
use crate::auth::validation::WeakPassword;
use crate::db::error::RepositoryError;

const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    // === Erreurs de requête ===
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    MissingFields(&'static str),
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password too weak: {0}")]
    WeakPassword(#[from] WeakPassword),

    // === Erreurs d'Authentification ===
    #[error("Email not found")]
    EmailNotFound,
    #[error("Invalid password")]
    InvalidPassword,

    // === Conflits ===
    #[error("Email already registered")]
    EmailAlreadyRegistered,
    #[error("Already exists: {0}")]
    Duplicate(String),

    // === Erreurs internes ===
    #[error("Database not configured")]
    DatabaseNotConfigured,
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Password hashing failed: {0}")]
    PasswordHashingFailed(String),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, message, internal_detail) = self.get_error_info();

        if status.is_server_error() {
            tracing::error!(
                error_code,
                %status,
                detail = internal_detail.as_deref().unwrap_or_default(),
                "Server error"
            );
        }

        let mut body = ErrorResponse::new(message);
        if let Some(detail) = internal_detail {
            body = body.with_error(detail);
        }

        (status, Json(body)).into_response()
    }
}

impl AppError {
    /// Récupère les informations d'erreur formatées pour la réponse HTTP
    fn get_error_info(&self) -> (StatusCode, &'static str, String, Option<String>) {
        match self {
            // 405 Method Not Allowed
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                "Method Not Allowed".to_string(),
                None,
            ),

            // 400 Bad Request
            AppError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone(), None)
            }
            AppError::MissingFields(msg) => (
                StatusCode::BAD_REQUEST,
                "MISSING_FIELDS",
                (*msg).to_string(),
                None,
            ),
            AppError::InvalidEmail => (
                StatusCode::BAD_REQUEST,
                "INVALID_EMAIL",
                "Invalid email format".to_string(),
                None,
            ),
            AppError::WeakPassword(rule) => (
                StatusCode::BAD_REQUEST,
                "WEAK_PASSWORD",
                rule.to_string(),
                None,
            ),

            // 401 Unauthorized
            AppError::EmailNotFound => (
                StatusCode::UNAUTHORIZED,
                "EMAIL_NOT_FOUND",
                "Email not found. Please sign up first.".to_string(),
                None,
            ),
            AppError::InvalidPassword => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid password. Please try again.".to_string(),
                None,
            ),

            // 409 Conflict
            AppError::EmailAlreadyRegistered => (
                StatusCode::CONFLICT,
                "USER_EXISTS",
                "Email already registered. Please login or use a different email.".to_string(),
                None,
            ),
            AppError::Duplicate(_) => (
                StatusCode::CONFLICT,
                "DUPLICATE_ENTRY",
                "Email already registered. Please use a different email.".to_string(),
                None,
            ),

            // 500 Internal Server Error
            AppError::DatabaseNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_NOT_CONFIGURED",
                "Database not configured".to_string(),
                None,
            ),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                SERVER_ERROR_MESSAGE.to_string(),
                Some(msg.clone()),
            ),
            AppError::PasswordHashingFailed(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "HASHING_ERROR",
                SERVER_ERROR_MESSAGE.to_string(),
                Some(msg.clone()),
            ),
            AppError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                SERVER_ERROR_MESSAGE.to_string(),
                Some(msg.clone()),
            ),
        }
    }

    // === Constructeurs helpers ===
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::InternalServerError(msg.into())
    }

    /// Retourne le code de statut HTTP
    #[cfg(test)]
    pub fn status_code(&self) -> StatusCode {
        self.get_error_info().0
    }
}

// === Conversions automatiques depuis d'autres types d'erreurs ===

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UniqueViolation(msg) => AppError::Duplicate(msg),
            RepositoryError::PoolError(msg) | RepositoryError::DatabaseError(msg) => {
                AppError::DatabaseError(msg)
            }
        }
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        AppError::PasswordHashingFailed(err.to_string())
    }
}

// Corps de requête illisible ou mal typé
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("Invalid JSON body: {err}"))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::internal(format!("Handler task failed: {err}"))
    }
}
