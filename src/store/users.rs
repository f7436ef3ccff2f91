use crate::auth::{hash_password, verify_password};
use crate::error::AppError;
use crate::models::User;
use sqlx::PgPool;

/// Credential row as stored; never leaves this module.
#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: i32,
    email: String,
    password_hash: String,
}

/// Registers a new user.
///
/// The password is stored as a one-way bcrypt hash, never as plaintext.
/// Email uniqueness is enforced by the UNIQUE constraint on `users.email`;
/// a violation surfaces as `AppError::DuplicateEmail`. Returns the new
/// user's public identity, never the hash.
pub async fn register(pool: &PgPool, email: &str, password: &str) -> Result<User, AppError> {
    let password_hash = hash_password(password)?;

    let result = sqlx::query_as::<_, User>(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id, email",
    )
    .bind(email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await;

    match result {
        Ok(user) => Ok(user),
        Err(err) if is_unique_violation(&err) => Err(AppError::DuplicateEmail),
        Err(err) => Err(err.into()),
    }
}

/// Validates a login attempt.
///
/// An unknown email and a wrong password both fail with the same
/// `AppError::InvalidCredentials`, so the caller cannot probe which emails
/// are registered.
pub async fn verify(pool: &PgPool, email: &str, password: &str) -> Result<User, AppError> {
    let row = sqlx::query_as::<_, CredentialRow>(
        "SELECT id, email, password_hash FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    let row = match row {
        Some(row) => row,
        None => return Err(AppError::InvalidCredentials),
    };

    if verify_password(password, &row.password_hash)? {
        Ok(User {
            id: row.id,
            email: row.email,
        })
    } else {
        Err(AppError::InvalidCredentials)
    }
}

// Postgres unique_violation
fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}
