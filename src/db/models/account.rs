use crate::db::schema::signup_users;
use account_service_api::UserResponse;
use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable, Selectable};

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = signup_users)]
pub struct NewAccount {
    pub fullname: String,
    pub email: String,
    #[diesel(column_name = password)]
    pub password_hash: String,
    pub phone: Option<String>,
}

// All fields are required for Diesel Selectable deserialization (schema alignment).
#[allow(dead_code)]
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = signup_users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Account {
    pub id: i32,
    pub fullname: String,
    pub email: String,
    #[diesel(column_name = password)]
    pub password_hash: String,
    pub phone: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub is_active: Option<bool>,
}

impl From<Account> for UserResponse {
    fn from(account: Account) -> Self {
        UserResponse {
            fullname: account.fullname,
            email: account.email,
            phone: account.phone,
        }
    }
}
