//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. It centralizes error management, providing a consistent way to
//! represent everything from credential failures to database errors.
//!
//! `AppError` implements `actix_web::error::ResponseError` so that handlers
//! returning `Result<_, AppError>` produce the right HTTP status and JSON body
//! automatically. `From` implementations for `sqlx::Error`,
//! `validator::ValidationErrors`, `jsonwebtoken::errors::Error`, and
//! `bcrypt::BcryptError` make the `?` operator work at every layer.
//!
//! Server-side failures (`DatabaseError`, `InternalServerError`) are logged
//! with their detail and returned to the client as a generic message; the
//! client-facing variants carry a short description.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Failed input validation, e.g. a blank task title (HTTP 422).
    ValidationError(String),
    /// Registration attempted with an email that already has an account (HTTP 400).
    DuplicateEmail,
    /// Login failed. Deliberately carries no detail: a wrong password and an
    /// unknown email are indistinguishable to the client (HTTP 400).
    InvalidCredentials,
    /// A bearer token was missing, malformed, expired, or had a bad signature (HTTP 401).
    TokenInvalid(String),
    /// A requested resource does not exist (HTTP 404).
    NotFound(String),
    /// An error from the storage layer; wraps `sqlx` errors (HTTP 500).
    DatabaseError(String),
    /// Any other unexpected server-side failure (HTTP 500).
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::DuplicateEmail => write!(f, "Email already in use"),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::TokenInvalid(msg) => write!(f, "Token Invalid: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::ValidationError(msg) => HttpResponse::UnprocessableEntity().json(json!({
                "error": msg
            })),
            AppError::DuplicateEmail => HttpResponse::BadRequest().json(json!({
                "error": "Email already in use"
            })),
            AppError::InvalidCredentials => HttpResponse::BadRequest().json(json!({
                "error": "Invalid credentials"
            })),
            AppError::TokenInvalid(msg) => HttpResponse::Unauthorized().json(json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            // Storage and internal errors are logged with detail server-side
            // and presented to the client as a generic failure.
            AppError::DatabaseError(msg) => {
                log::error!("database error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error"
                }))
            }
            AppError::InternalServerError(msg) => {
                log::error!("internal error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `sqlx::Error::RowNotFound` maps to `AppError::NotFound`; everything else
/// becomes `AppError::DatabaseError`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::TokenInvalid(format!("Invalid token: {}", error))
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}
