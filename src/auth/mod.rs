pub mod password;
pub mod services;
pub mod validation;
