use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Type générique pour les réponses des handlers
///
/// # Exemples
///
/// ```rust,ignore
/// // Réponse JSON simple
/// AppResponse::ok(AuthResponse::new("Login successful!", user))
/// ```
pub struct AppResponse<T> {
    status: StatusCode,
    body: T,
}

impl<T> AppResponse<T>
where
    T: Serialize,
{
    /// Crée une nouvelle réponse avec un status code et des données
    pub fn new(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }

    /// 200 OK avec des données
    pub fn ok(body: T) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

/// Implémentation du trait IntoResponse pour Axum
impl<T> IntoResponse for AppResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Type alias pour les résultats des handlers
/// Utilise AppResponse pour les succès et AppError pour les erreurs
pub type AppResult<T> = Result<AppResponse<T>, crate::error::AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct TestData {
        message: String,
    }

    #[test]
    fn ok_response_has_200_status() {
        let response = AppResponse::ok(TestData {
            message: "success".to_string(),
        });
        assert_eq!(response.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn into_response_serializes_body_as_json() {
        let response = AppResponse::new(
            StatusCode::OK,
            TestData {
                message: "hello".to_string(),
            },
        )
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], br#"{"message":"hello"}"#);
    }
}
