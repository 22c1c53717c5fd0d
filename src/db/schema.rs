// Doit rester aligné sur le DDL de `Table::create_statement`

diesel::table! {
    signup_users (id) {
        id -> Int4,
        #[max_length = 255]
        fullname -> Varchar,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 255]
        password -> Varchar,
        #[max_length = 20]
        phone -> Nullable<Varchar>,
        created_at -> Nullable<Timestamp>,
        is_active -> Nullable<Bool>,
    }
}

diesel::table! {
    login_users (id) {
        id -> Int4,
        #[max_length = 255]
        email -> Varchar,
        login_time -> Nullable<Timestamp>,
        success -> Nullable<Bool>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(login_users, signup_users);

/// Tables qu'un handler peut exiger avant d'accéder aux données
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Accounts,
    LoginAttempts,
}

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Table::Accounts => "signup_users",
            Table::LoginAttempts => "login_users",
        }
    }

    /// DDL idempotent, exécuté à chaque invocation
    pub fn create_statement(self) -> &'static str {
        match self {
            Table::Accounts => {
                "CREATE TABLE IF NOT EXISTS signup_users (
                    id SERIAL PRIMARY KEY,
                    fullname VARCHAR(255) NOT NULL,
                    email VARCHAR(255) NOT NULL UNIQUE,
                    password VARCHAR(255) NOT NULL,
                    phone VARCHAR(20),
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    is_active BOOLEAN DEFAULT true
                )"
            }
            Table::LoginAttempts => {
                "CREATE TABLE IF NOT EXISTS login_users (
                    id SERIAL PRIMARY KEY,
                    email VARCHAR(255) NOT NULL,
                    login_time TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    success BOOLEAN DEFAULT true
                )"
            }
        }
    }
}
