use std::env;

/// Placeholder signing secret used when `JWT_SECRET` is not set.
/// Fine for local development, unsafe for any real deployment; startup logs
/// a warning when it is in effect.
pub const DEFAULT_JWT_SECRET: &str = "defaultsecret";

/// Runtime configuration, loaded once at startup and handed to the
/// components that need it. Nothing below this layer reads environment
/// variables directly.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub jwt_secret: String,
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!(
                "JWT_SECRET is not set; falling back to the built-in development secret"
            );
            DEFAULT_JWT_SECRET.to_string()
        });

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "5001".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            jwt_secret,
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
