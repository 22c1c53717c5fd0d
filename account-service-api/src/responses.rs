use serde::{Deserialize, Serialize};

/// Public view of an account. Never carries the password.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub fullname: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Success body shared by signup and login.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(message: impl Into<String>, user: UserResponse) -> Self {
        Self {
            message: message.into(),
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_serializes_missing_phone_as_null() {
        let body = AuthResponse::new(
            "Login successful!",
            UserResponse {
                fullname: "Ann Lee".to_string(),
                email: "ann@example.com".to_string(),
                phone: None,
            },
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Login successful!");
        assert_eq!(json["user"]["fullname"], "Ann Lee");
        assert!(json["user"]["phone"].is_null());
        assert!(json["user"].get("password").is_none());
    }
}
