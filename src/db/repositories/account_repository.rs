use crate::db::error::RepositoryError;
use crate::db::models::account::{Account, NewAccount};
use crate::db::schema::signup_users;
use diesel::prelude::*;

pub struct AccountRepository;

impl AccountRepository {
    pub fn find_by_email(
        conn: &mut PgConnection,
        email: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        signup_users::table
            .filter(signup_users::email.eq(email))
            .select(Account::as_select())
            .first(conn)
            .optional()
            .map_err(Into::into)
    }

    /// Insère un compte; le doublon d'email remonte en `UniqueViolation`.
    pub fn create(
        conn: &mut PgConnection,
        new_account: &NewAccount,
    ) -> Result<Account, RepositoryError> {
        diesel::insert_into(signup_users::table)
            .values(new_account)
            .returning(Account::as_returning())
            .get_result(conn)
            .map_err(Into::into)
    }
}
