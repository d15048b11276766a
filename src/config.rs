use std::env;
use tracing::Level;

pub const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;
/// Longest token lifetime accepted from the environment (one year)
pub const MAX_TOKEN_TTL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub jwt_secret: String,
    /// Lifetime of issued bearer tokens, in seconds
    pub token_ttl_secs: u64,
    pub log_level: Level,
}

fn parse_token_ttl(raw: Option<&str>) -> u64 {
    raw.and_then(|ttl| ttl.trim().parse::<u64>().ok())
        .map(|ttl| ttl.min(MAX_TOKEN_TTL_SECS))
        .unwrap_or(DEFAULT_TOKEN_TTL_SECS)
}

impl AppConfig {
    pub fn from_env() -> Self {
        let log_level = env::var("LOG_LEVEL")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("PORT")
                .or_else(|_| env::var("SERVER_PORT"))
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-in-production".to_string()),
            token_ttl_secs: parse_token_ttl(env::var("TOKEN_TTL_SECS").ok().as_deref()),
            log_level,
        }
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 5000,
            jwt_secret: "dev-secret-change-in-production".to_string(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            log_level: Level::INFO,
        }
    }
}
