use crate::db::schema::login_users;
use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable, Selectable};

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = login_users)]
pub struct NewLoginAttempt<'a> {
    pub email: &'a str,
    pub success: bool,
}

// Journal en ajout seul: les handlers ne modifient ni ne suppriment de lignes
#[allow(dead_code)]
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = login_users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LoginAttempt {
    pub id: i32,
    pub email: String,
    pub login_time: Option<NaiveDateTime>,
    pub success: Option<bool>,
}
