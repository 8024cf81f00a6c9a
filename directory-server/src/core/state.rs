//! Server state

use directory_client::ClientConfig;

use crate::core::Config;
use crate::service::EmployeeService;

/// Shared application state
///
/// Constructed once at startup and injected into the router. Holds the
/// single long-lived directory client (wrapped by the employee service);
/// cloning is shallow.
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Employee query service over the upstream directory
    pub employees: EmployeeService,
}

impl ServerState {
    /// Build the state from configuration: one directory client, shared
    /// read-only for the life of the process.
    pub fn initialize(config: &Config) -> Self {
        let mut client_config = ClientConfig::new(config.employee_server_base_url.clone())
            .with_max_in_flight(config.max_in_flight_requests);
        if let Some(seconds) = config.request_timeout_secs {
            client_config = client_config.with_timeout(seconds);
        }

        Self {
            config: config.clone(),
            employees: EmployeeService::new(client_config.build_client()),
        }
    }
}
