//! Poller configuration.

use serde::Deserialize;

/// n8n connection settings loaded from environment variables.
///
/// Environment variables are prefixed with `N8N_`:
/// - `N8N_HOST`: Instance host including scheme (default: "http://localhost")
/// - `N8N_PORT`: Instance port (default: "5678")
/// - `N8N_PATH`: Path prefix for reverse-proxied instances (default: empty)
/// - `N8N_API_KEY`: Public API key (required)
/// - `N8N_API_VERSION`: Public API version (default: "1")
#[derive(Debug, Clone, Deserialize)]
pub struct N8nConfig {
    /// Instance host including scheme
    #[serde(default = "default_host")]
    pub host: String,

    /// Instance port
    #[serde(default = "default_port")]
    pub port: String,

    /// Path prefix for reverse-proxied instances
    #[serde(default)]
    pub path: String,

    /// Public API key
    pub api_key: String,

    /// Public API version
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_host() -> String {
    "http://localhost".to_string()
}

fn default_port() -> String {
    "5678".to_string()
}

fn default_api_version() -> String {
    "1".to_string()
}

impl N8nConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `N8N_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("N8N_").from_env::<N8nConfig>()
    }

    /// Base URL of the public API.
    ///
    /// Joins `{host}:{port}/{path}`, trims any trailing slash (empty path
    /// included), then appends `/api/v{version}`.
    pub fn api_url(&self) -> String {
        let base = format!("{}:{}/{}", self.host, self.port, self.path);
        format!("{}/api/v{}", base.trim_end_matches('/'), self.api_version)
    }
}

/// Poll-cycle settings loaded from unprefixed environment variables.
///
/// - `TOOL_NAME`: Tool identifier recorded on every derived row (default: "n8n")
#[derive(Debug, Clone, Deserialize)]
pub struct PollerConfig {
    /// Tool identifier recorded on every derived row
    #[serde(default = "default_tool_name")]
    pub tool_name: String,
}

fn default_tool_name() -> String {
    "n8n".to_string()
}

impl PollerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<PollerConfig>()
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            tool_name: default_tool_name(),
        }
    }
}
