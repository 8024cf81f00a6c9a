/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Env var | Default | Description |
/// |---------|---------|-------------|
/// | HTTP_PORT | 8080 | HTTP API port |
/// | EMPLOYEE_SERVER_BASE_URL | http://localhost:8112 | Upstream directory base URL |
/// | MAX_IN_FLIGHT_REQUESTS | 10 | Concurrent upstream request ceiling |
/// | REQUEST_TIMEOUT_SECS | (unset) | Upstream request timeout; unset = none |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_LEVEL | info | Default log level when RUST_LOG is unset |
/// | LOG_DIR | (unset) | Directory for rotating file logs; unset = console only |
///
/// # Examples
///
/// ```ignore
/// EMPLOYEE_SERVER_BASE_URL=http://directory:8112 HTTP_PORT=9090 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Base URL of the upstream employee directory
    pub employee_server_base_url: String,
    /// Ceiling on concurrent in-flight upstream requests
    pub max_in_flight_requests: usize,
    /// Upstream request timeout in seconds; `None` means no timeout
    pub request_timeout_secs: Option<u64>,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Fallback log level when RUST_LOG is not set
    pub log_level: String,
    /// Directory for rotating file logs
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            employee_server_base_url: std::env::var("EMPLOYEE_SERVER_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8112".into()),
            max_in_flight_requests: std::env::var("MAX_IN_FLIGHT_REQUESTS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|p| p.parse().ok()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
