use super::{DbConnection, DbPool};
use crate::db::error::RepositoryError;
use crate::db::models::account::{Account, NewAccount};
use crate::db::models::login_attempt::LoginAttempt;
use crate::db::repositories::account_repository::AccountRepository;
use crate::db::repositories::login_attempt_repository::LoginAttemptRepository;
use crate::db::schema::Table;
use crate::db::store::{AccountStore, Connector};
use diesel::PgConnection;
use diesel::RunQueryDsl;
use diesel::r2d2::ConnectionManager;
use std::time::Duration;

/// Connecteur Postgres adossé à un pool r2d2
///
/// Le pool est construit sans ouvrir de connexion: une base indisponible au
/// démarrage ne se manifeste qu'à la première invocation.
pub struct PgConnector {
    pool: DbPool,
}

impl PgConnector {
    pub fn new(database_url: &str, max_size: u32, connection_timeout: Duration) -> Self {
        let manager = ConnectionManager::<PgConnection>::new(database_url);

        let pool = diesel::r2d2::Pool::builder()
            .max_size(max_size)
            .min_idle(Some(0))
            .connection_timeout(connection_timeout)
            .build_unchecked(manager);

        Self { pool }
    }
}

impl Connector for PgConnector {
    fn connect(&self) -> Result<Box<dyn AccountStore>, RepositoryError> {
        let conn = self.pool.get()?;
        tracing::debug!("database connection acquired");
        Ok(Box::new(PgSession { conn }))
    }
}

/// Connexion du pool tenue pendant une invocation, relâchée au drop
pub struct PgSession {
    conn: DbConnection,
}

impl AccountStore for PgSession {
    fn ensure_schema(&mut self, tables: &[Table]) -> Result<(), RepositoryError> {
        create_tables(&mut self.conn, tables)
    }

    fn find_account_by_email(&mut self, email: &str) -> Result<Option<Account>, RepositoryError> {
        AccountRepository::find_by_email(&mut self.conn, email)
    }

    fn insert_account(&mut self, account: &NewAccount) -> Result<Account, RepositoryError> {
        AccountRepository::create(&mut self.conn, account)
    }

    fn record_login_attempt(
        &mut self,
        email: &str,
        success: bool,
    ) -> Result<LoginAttempt, RepositoryError> {
        LoginAttemptRepository::create(&mut self.conn, email, success)
    }
}

impl Drop for PgSession {
    fn drop(&mut self) {
        tracing::debug!("database connection released");
    }
}

pub fn create_tables(conn: &mut PgConnection, tables: &[Table]) -> Result<(), RepositoryError> {
    for table in tables {
        tracing::debug!(table = table.name(), "Ensuring table exists");
        diesel::sql_query(table.create_statement()).execute(conn)?;
    }
    Ok(())
}

/// Connexion de test isolée: tout est annulé à la fin du test.
#[cfg(test)]
pub fn establish_test_connection(tables: &[Table]) -> PgConnection {
    use diesel::Connection;

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let mut conn = PgConnection::establish(&database_url).expect("Failed to connect to Postgres");
    conn.begin_test_transaction()
        .expect("Failed to begin test transaction");
    create_tables(&mut conn, tables).expect("Failed to create tables");
    conn
}
