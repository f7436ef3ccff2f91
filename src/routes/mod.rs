pub mod auth;
pub mod health;
pub mod tasks;

use crate::auth::AuthMiddleware;
use actix_web::web;

/// Builds the routing configuration.
///
/// Registration, login, and the health check are open; everything under
/// `/tasks` requires a valid bearer token, enforced by `AuthMiddleware`
/// constructed with the signing secret from `Config`.
pub fn config(jwt_secret: String) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(auth::register)
            .service(auth::login)
            .service(health::health)
            .service(
                web::scope("/tasks")
                    .wrap(AuthMiddleware::new(jwt_secret))
                    .service(tasks::get_tasks)
                    .service(tasks::create_task)
                    .service(tasks::complete_task)
                    .service(tasks::update_task)
                    .service(tasks::delete_task),
            );
    }
}
