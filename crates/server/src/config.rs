//! Server configuration.

use serde::Deserialize;

/// Push API configuration loaded from environment variables.
///
/// - `AUTH_USERNAME`: Expected Basic-auth username (required)
/// - `AUTH_PASSWORD`: Expected Basic-auth password (required)
/// - `HOST`: Bind address (default: "0.0.0.0")
/// - `PORT`: Bind port (default: 8000)
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Expected Basic-auth username
    pub auth_username: String,

    /// Expected Basic-auth password
    pub auth_password: String,

    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<ServerConfig>()
    }

    /// Get the bind address string.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
