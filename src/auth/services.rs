// src/auth/services.rs

use std::sync::Arc;

use account_service_api::{LoginRequest, SignupRequest, UserResponse};

use super::password::PasswordManager;
use super::validation::{check_password_strength, is_valid_email, present};
use crate::db::models::account::NewAccount;
use crate::db::schema::Table;
use crate::db::store::{AccountStore, Connector};
use crate::error::AppError;

/// Inscription et connexion au-dessus du [`Connector`] fourni à l'application.
///
/// Chaque appel ouvre sa propre session et la relâche avant de rendre la main,
/// en cas de succès comme d'erreur.
pub struct AccountService {
    connector: Option<Arc<dyn Connector>>,
    passwords: PasswordManager,
}

impl AccountService {
    /// `connector` vaut `None` sans base configurée: toute requête valide
    /// échoue alors avec [`AppError::DatabaseNotConfigured`].
    pub fn new(connector: Option<Arc<dyn Connector>>, passwords: PasswordManager) -> Self {
        Self {
            connector,
            passwords,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.connector.is_some()
    }

    fn open_store(&self) -> Result<Box<dyn AccountStore>, AppError> {
        let connector = self
            .connector
            .as_ref()
            .ok_or(AppError::DatabaseNotConfigured)?;
        Ok(connector.connect()?)
    }

    /// Inscription d'un nouveau compte
    pub fn signup(&self, request: SignupRequest) -> Result<UserResponse, AppError> {
        let (Some(fullname), Some(email), Some(password)) = (
            present(request.fullname),
            present(request.email),
            present(request.password),
        ) else {
            return Err(AppError::MissingFields("Missing required fields"));
        };

        if !is_valid_email(&email) {
            return Err(AppError::InvalidEmail);
        }
        check_password_strength(&password)?;

        let mut store = self.open_store()?;
        store.ensure_schema(&[Table::Accounts])?;

        // Pré-vérification pour un message plus clair, la contrainte unique fait foi
        if store.find_account_by_email(&email)?.is_some() {
            tracing::warn!(%email, "Signup rejected: email already registered");
            return Err(AppError::EmailAlreadyRegistered);
        }

        let password_hash = self.passwords.hash(&password)?;
        let new_account = NewAccount {
            fullname,
            email,
            password_hash,
            phone: request.phone,
        };

        let account = store.insert_account(&new_account).inspect_err(|e| {
            tracing::warn!(email = %new_account.email, error = %e, "Account insert failed");
        })?;

        tracing::info!(account_id = account.id, email = %account.email, "Account created");
        Ok(account.into())
    }

    /// Connexion: authentifie contre le compte existant et journalise la tentative
    pub fn login(&self, request: LoginRequest) -> Result<UserResponse, AppError> {
        let (Some(email), Some(password)) = (present(request.email), present(request.password))
        else {
            return Err(AppError::MissingFields("Email and password are required"));
        };

        if !is_valid_email(&email) {
            return Err(AppError::InvalidEmail);
        }

        let mut store = self.open_store()?;
        store.ensure_schema(&[Table::Accounts, Table::LoginAttempts])?;

        let Some(account) = store.find_account_by_email(&email)? else {
            tracing::warn!(%email, "Login rejected: email not found");
            return Err(AppError::EmailNotFound);
        };

        let matches = PasswordManager::verify(&password, &account.password_hash)?;
        store.record_login_attempt(&email, matches)?;

        if !matches {
            tracing::warn!(%email, "Login rejected: invalid password");
            return Err(AppError::InvalidPassword);
        }

        tracing::info!(account_id = account.id, %email, "Login successful");
        Ok(account.into())
    }
}
