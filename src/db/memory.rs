//! Connecteur en mémoire pour les tests des handlers.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use crate::db::error::RepositoryError;
use crate::db::models::account::{Account, NewAccount};
use crate::db::models::login_attempt::LoginAttempt;
use crate::db::schema::Table;
use crate::db::store::{AccountStore, Connector};

#[derive(Default)]
pub struct MemoryState {
    pub tables: HashSet<Table>,
    pub accounts: Vec<Account>,
    pub attempts: Vec<LoginAttempt>,
    pub connections_opened: usize,
    pub open_connections: usize,
    pub fail_connect: Option<RepositoryError>,
    pub fail_schema: Option<RepositoryError>,
    pub fail_insert: Option<RepositoryError>,
    /// Masque les comptes à la recherche, comme si une autre requête avait
    /// inséré le même email entre la vérification et l'insertion.
    pub hide_accounts_from_lookup: bool,
}

#[derive(Clone, Default)]
pub struct MemoryConnector {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap()
    }

    pub fn attempts_for(&self, email: &str) -> Vec<LoginAttempt> {
        self.state()
            .attempts
            .iter()
            .filter(|a| a.email == email)
            .cloned()
            .collect()
    }
}

impl Connector for MemoryConnector {
    fn connect(&self) -> Result<Box<dyn AccountStore>, RepositoryError> {
        let mut state = self.state();
        if let Some(err) = state.fail_connect.clone() {
            return Err(err);
        }
        state.connections_opened += 1;
        state.open_connections += 1;
        Ok(Box::new(MemorySession {
            state: Arc::clone(&self.state),
        }))
    }
}

struct MemorySession {
    state: Arc<Mutex<MemoryState>>,
}

impl MemorySession {
    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap()
    }

    fn require(state: &MemoryState, table: Table) -> Result<(), RepositoryError> {
        if state.tables.contains(&table) {
            Ok(())
        } else {
            let name = table.name();
            Err(RepositoryError::DatabaseError(format!(
                "relation \"{name}\" does not exist"
            )))
        }
    }
}

impl AccountStore for MemorySession {
    fn ensure_schema(&mut self, tables: &[Table]) -> Result<(), RepositoryError> {
        let mut state = self.state();
        if let Some(err) = state.fail_schema.clone() {
            return Err(err);
        }
        state.tables.extend(tables.iter().copied());
        Ok(())
    }

    fn find_account_by_email(&mut self, email: &str) -> Result<Option<Account>, RepositoryError> {
        let state = self.state();
        Self::require(&state, Table::Accounts)?;
        if state.hide_accounts_from_lookup {
            return Ok(None);
        }
        Ok(state.accounts.iter().find(|a| a.email == email).cloned())
    }

    fn insert_account(&mut self, account: &NewAccount) -> Result<Account, RepositoryError> {
        let mut state = self.state();
        Self::require(&state, Table::Accounts)?;
        if let Some(err) = state.fail_insert.clone() {
            return Err(err);
        }
        if state.accounts.iter().any(|a| a.email == account.email) {
            return Err(RepositoryError::UniqueViolation(
                "duplicate key value violates unique constraint \"signup_users_email_key\""
                    .to_string(),
            ));
        }
        let created = Account {
            id: i32::try_from(state.accounts.len() + 1).unwrap(),
            fullname: account.fullname.clone(),
            email: account.email.clone(),
            password_hash: account.password_hash.clone(),
            phone: account.phone.clone(),
            created_at: Some(Utc::now().naive_utc()),
            is_active: Some(true),
        };
        state.accounts.push(created.clone());
        Ok(created)
    }

    fn record_login_attempt(
        &mut self,
        email: &str,
        success: bool,
    ) -> Result<LoginAttempt, RepositoryError> {
        let mut state = self.state();
        Self::require(&state, Table::LoginAttempts)?;
        let attempt = LoginAttempt {
            id: i32::try_from(state.attempts.len() + 1).unwrap(),
            email: email.to_string(),
            login_time: Some(Utc::now().naive_utc()),
            success: Some(success),
        };
        state.attempts.push(attempt.clone());
        Ok(attempt)
    }
}

impl Drop for MemorySession {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.open_connections -= 1;
        }
    }
}
