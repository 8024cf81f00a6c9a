//! Client configuration

/// Default ceiling on concurrent in-flight upstream requests.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 10;

/// Configuration for connecting to the upstream directory service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upstream base URL (e.g., "http://localhost:8112")
    pub base_url: String,

    /// Request timeout in seconds. `None` leaves the transport without a
    /// timeout: a hung upstream call hangs the calling operation.
    pub timeout: Option<u64>,

    /// Maximum number of concurrent in-flight requests; excess callers queue.
    pub max_in_flight: usize,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set the in-flight request ceiling
    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight;
        self
    }

    /// Create a directory client from this configuration
    pub fn build_client(&self) -> super::DirectoryClient {
        super::DirectoryClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8112")
    }
}
