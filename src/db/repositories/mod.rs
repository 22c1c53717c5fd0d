pub mod account_repository;
pub mod login_attempt_repository;
