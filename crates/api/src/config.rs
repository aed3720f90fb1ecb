use crate::auth::jwt::JwtConfig;

/// Deployment environment. Controls whether the provisioning endpoint
/// (`POST /auth/register`) is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse the `APP_ENV` environment variable.
    ///
    /// # Panics
    ///
    /// Panics on any value other than `development` or `production`; a
    /// typo here must not silently leave registration open.
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".into())
            .as_str()
        {
            "development" => Environment::Development,
            "production" => Environment::Production,
            other => panic!("APP_ENV must be 'development' or 'production', got '{other}'"),
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Connection settings for the external assistant service.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Base HTTP URL of the assistant, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    /// Upper bound on each relay call in seconds (default: `30`).
    pub timeout_secs: u64,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Deployment environment (gates registration).
    pub environment: Environment,
    /// Maximum number of records `GET /api/user/recent-chats` returns.
    /// Storage itself is append-only and unbounded.
    pub recent_chats_limit: i64,
    /// JWT token configuration (secret, lifetime).
    pub jwt: JwtConfig,
    /// Assistant relay configuration.
    pub assistant: AssistantConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                  |
    /// |--------------------------|--------------------------|
    /// | `HOST`                   | `0.0.0.0`                |
    /// | `PORT`                   | `4000`                   |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`  |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                     |
    /// | `APP_ENV`                | `development`            |
    /// | `RECENT_CHATS_LIMIT`     | `50`                     |
    /// | `ASSISTANT_URL`          | `http://127.0.0.1:8000`  |
    /// | `ASSISTANT_TIMEOUT_SECS` | `30`                     |
    ///
    /// JWT settings are documented on [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let environment = Environment::from_env();

        let recent_chats_limit: i64 = std::env::var("RECENT_CHATS_LIMIT")
            .unwrap_or_else(|_| "50".into())
            .parse()
            .expect("RECENT_CHATS_LIMIT must be a valid i64");
        assert!(
            recent_chats_limit > 0,
            "RECENT_CHATS_LIMIT must be positive"
        );

        let assistant_base_url =
            std::env::var("ASSISTANT_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".into());

        let assistant_timeout_secs: u64 = std::env::var("ASSISTANT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("ASSISTANT_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            environment,
            recent_chats_limit,
            jwt,
            assistant: AssistantConfig {
                base_url: assistant_base_url,
                timeout_secs: assistant_timeout_secs,
            },
        }
    }
}
