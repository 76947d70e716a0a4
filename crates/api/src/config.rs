/// Server configuration loaded from environment variables.
///
/// All fields except the upstream API keys have sensible defaults suitable
/// for local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on draining the database pool after the server stops (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Timeout applied to every outbound call to RAWG or the completion API (default: `15`).
    pub upstream_timeout_secs: u64,
    /// RAWG game catalog settings.
    pub rawg: RawgConfig,
    /// Text-completion service settings.
    pub completion: CompletionConfig,
}

/// Connection settings for the RAWG catalog API.
#[derive(Clone)]
pub struct RawgConfig {
    pub api_url: String,
    pub api_key: String,
}

/// Connection settings for the OpenAI-compatible completion API.
#[derive(Clone)]
pub struct CompletionConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

// Keys stay out of logs and panic messages.
impl std::fmt::Debug for RawgConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawgConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                     |
    /// |-------------------------|-----------------------------|
    /// | `HOST`                  | `0.0.0.0`                   |
    /// | `PORT`                  | `3000`                      |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`     |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                        |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                        |
    /// | `UPSTREAM_TIMEOUT_SECS` | `15`                        |
    /// | `RAWG_API_URL`          | `https://api.rawg.io/api`   |
    /// | `RAWG_API_KEY`          | required                    |
    /// | `OPENAI_API_URL`        | `https://api.openai.com/v1` |
    /// | `OPENAI_API_KEY`        | required                    |
    /// | `OPENAI_MODEL`          | `gpt-4o-mini`               |
    ///
    /// Panics on a missing key or an unparseable number, so a misconfigured
    /// server never starts.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs = secs_from_env("REQUEST_TIMEOUT_SECS", 30);
        let shutdown_timeout_secs = secs_from_env("SHUTDOWN_TIMEOUT_SECS", 30);
        let upstream_timeout_secs = secs_from_env("UPSTREAM_TIMEOUT_SECS", 15);

        let rawg = RawgConfig {
            api_url: std::env::var("RAWG_API_URL")
                .unwrap_or_else(|_| "https://api.rawg.io/api".into()),
            api_key: std::env::var("RAWG_API_KEY").expect("RAWG_API_KEY must be set"),
        };

        let completion = CompletionConfig {
            api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),
            api_key: std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set"),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            upstream_timeout_secs,
            rawg,
            completion,
        }
    }
}

fn secs_from_env(var: &str, default: u64) -> u64 {
    match std::env::var(var) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{var} must be a valid u64, got '{raw}'")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
