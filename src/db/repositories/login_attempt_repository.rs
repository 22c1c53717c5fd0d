use crate::db::error::RepositoryError;
use crate::db::models::login_attempt::{LoginAttempt, NewLoginAttempt};
use crate::db::schema::login_users;
use diesel::prelude::*;

pub struct LoginAttemptRepository;

impl LoginAttemptRepository {
    /// Ajoute une tentative de login au journal
    pub fn create(
        conn: &mut PgConnection,
        email: &str,
        success: bool,
    ) -> Result<LoginAttempt, RepositoryError> {
        diesel::insert_into(login_users::table)
            .values(NewLoginAttempt { email, success })
            .returning(LoginAttempt::as_returning())
            .get_result(conn)
            .map_err(Into::into)
    }

    /// Récupère les tentatives pour un email, les plus récentes d'abord
    #[cfg(test)]
    pub fn find_by_email(
        conn: &mut PgConnection,
        email: &str,
    ) -> Result<Vec<LoginAttempt>, RepositoryError> {
        login_users::table
            .filter(login_users::email.eq(email))
            .order_by(login_users::id.desc())
            .select(LoginAttempt::as_select())
            .load(conn)
            .map_err(Into::into)
    }
}
