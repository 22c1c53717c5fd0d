use serde::{Deserialize, Serialize};

// -------- REQUEST DTOs --------
// Every field is optional on the wire: presence is checked by the handler so a
// missing field yields a 400 with the handler's own message instead of a
// deserialization failure.

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SignupRequest {
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>, // Plain text
    #[serde(default)]
    pub phone: Option<String>,
    /// Client-side submission time. Accepted and ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LoginRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>, // Plain text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_request_tolerates_missing_and_unknown_fields() {
        let req: SignupRequest =
            serde_json::from_str(r#"{"email":"ann@example.com","extra":1}"#).unwrap();
        assert_eq!(req.email.as_deref(), Some("ann@example.com"));
        assert!(req.fullname.is_none());
        assert!(req.password.is_none());
    }

    #[test]
    fn timestamp_accepts_any_json_value() {
        let req: LoginRequest = serde_json::from_str(
            r#"{"email":"a@b.c","password":"x","timestamp":1717171717000}"#,
        )
        .unwrap();
        assert!(req.timestamp.is_some());

        let req: LoginRequest = serde_json::from_str(
            r#"{"email":"a@b.c","password":"x","timestamp":"2024-05-31T12:00:00Z"}"#,
        )
        .unwrap();
        assert!(req.timestamp.is_some());
    }
}
