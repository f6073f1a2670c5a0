use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expires_in_secs: i64,
    pub stripe_secret_key: String,
    /// When set, a caller with no identity record passes the role check,
    /// matching the historical behavior of the service.
    pub legacy_role_gate: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);
        let jwt_secret = env::var("JWT_SECRET")?;
        let jwt_expires_in_secs = env::var("JWT_EXPIRES_IN")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(3600);
        let stripe_secret_key = env::var("STRIPE_SECRET_KEY")?;
        let legacy_role_gate = env::var("LEGACY_ROLE_GATE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            host,
            port,
            jwt_secret,
            jwt_expires_in_secs,
            stripe_secret_key,
            legacy_role_gate,
        })
    }
}
