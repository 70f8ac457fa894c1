//! Supabase connection configuration.

use serde::Deserialize;

/// Supabase configuration loaded from environment variables.
///
/// Environment variables are prefixed with `SUPABASE_`:
/// - `SUPABASE_URL`: Project base URL (required)
/// - `SUPABASE_KEY`: API key, sent as both `apikey` header and bearer token (required)
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseConfig {
    /// Project base URL
    pub url: String,

    /// API key
    pub key: String,
}

impl SupabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `SUPABASE_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("SUPABASE_").from_env::<SupabaseConfig>()
    }

    /// Base URL of the PostgREST endpoint.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_url() {
        let config = SupabaseConfig {
            url: "https://abc.supabase.co".to_string(),
            key: "secret".to_string(),
        };
        assert_eq!(config.rest_url(), "https://abc.supabase.co/rest/v1");
    }

    #[test]
    fn test_rest_url_trims_trailing_slash() {
        let config = SupabaseConfig {
            url: "https://abc.supabase.co/".to_string(),
            key: "secret".to_string(),
        };
        assert_eq!(config.rest_url(), "https://abc.supabase.co/rest/v1");
    }
}
