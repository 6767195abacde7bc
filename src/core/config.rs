//! Simulation endpoint configuration
//!
//! The consuming simulation listens for one UDP JSON datagram per command.
//! Host and port default to the production deployment and can be overridden
//! through the environment.

/// Where command datagrams are delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Host the simulation listens on
    pub host: String,

    /// UDP port the simulation listens on
    pub port: u16,
}

/// Default simulation host (the simulation runs on the same machine)
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default simulation port
pub const DEFAULT_PORT: u16 = 12345;

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl EndpointConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the endpoint from `WARCRY_SIM_HOST` / `WARCRY_SIM_PORT`
    ///
    /// Missing or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let host =
            std::env::var("WARCRY_SIM_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = std::env::var("WARCRY_SIM_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { host, port }
    }

    /// The `host:port` string handed to the socket layer
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("endpoint host must not be empty".into());
        }
        if self.port == 0 {
            return Err("endpoint port must not be 0".into());
        }
        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<EndpointConfig> = OnceLock::new();

/// Get the global endpoint config (initializes from the environment if not set)
pub fn config() -> &'static EndpointConfig {
    CONFIG.get_or_init(EndpointConfig::from_env)
}

/// Set the global endpoint config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: EndpointConfig) -> Result<(), EndpointConfig> {
    CONFIG.set(config)
}
