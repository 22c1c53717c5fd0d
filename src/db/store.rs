//! Accès aux données partagé par les handlers d'inscription et de connexion.
//!
//! Un [`Connector`] ouvre une session [`AccountStore`] par invocation. La
//! session possède sa connexion et la rend au drop: elle est donc libérée sur
//! tous les chemins de sortie du handler.

use crate::db::error::RepositoryError;
use crate::db::models::account::{Account, NewAccount};
use crate::db::models::login_attempt::LoginAttempt;
use crate::db::schema::Table;

pub trait AccountStore: Send {
    /// Crée les tables demandées si elles n'existent pas encore
    fn ensure_schema(&mut self, tables: &[Table]) -> Result<(), RepositoryError>;

    fn find_account_by_email(&mut self, email: &str) -> Result<Option<Account>, RepositoryError>;

    /// Échoue avec [`RepositoryError::UniqueViolation`] si l'email est déjà pris
    fn insert_account(&mut self, account: &NewAccount) -> Result<Account, RepositoryError>;

    fn record_login_attempt(
        &mut self,
        email: &str,
        success: bool,
    ) -> Result<LoginAttempt, RepositoryError>;
}

pub trait Connector: Send + Sync {
    fn connect(&self) -> Result<Box<dyn AccountStore>, RepositoryError>;
}
