use crate::{
    auth::{generate_token, AuthResponse, LoginRequest, RegisterRequest},
    config::Config,
    error::AppError,
    store,
};
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account. The response carries only a confirmation
/// message; logging in is a separate step.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    let user = store::users::register(&pool, &register_data.email, &register_data.password).await?;

    log::info!("registered user {}", user.id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "User registered successfully"
    })))
}

/// Login user
///
/// Authenticates a user and returns a session token valid for one hour.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    let user = store::users::verify(&pool, &login_data.email, &login_data.password).await?;
    let token = generate_token(user.id, &config.jwt_secret)?;

    Ok(HttpResponse::Ok().json(AuthResponse { token }))
}
