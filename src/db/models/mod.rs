pub mod account;
pub mod login_attempt;
