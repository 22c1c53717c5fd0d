//! # account-service-api
//!
//! Shared API types for the account-service signup and login handlers.
//! This crate only depends on serde so it stays usable from a WASM frontend.
//!
//! ## Example
//!
//! ```rust
//! use account_service_api::SignupRequest;
//!
//! let request = SignupRequest {
//!     fullname: Some("Ann Lee".to_string()),
//!     email: Some("ann@example.com".to_string()),
//!     password: Some("Secret1x".to_string()),
//!     phone: Some("555-1234".to_string()),
//!     timestamp: None,
//! };
//! assert!(request.password.is_some());
//! ```

pub mod error;
pub mod requests;
pub mod responses;

// Re-exports for convenient access
pub use error::ErrorResponse;
pub use requests::*;
pub use responses::*;
