//! Client configuration.
//!
//! A wasm bundle has no process environment at runtime, so overrides are
//! baked in at build time through `STANZA_API_URL`, `STANZA_TOKEN_KEY` and
//! `STANZA_AUTH_SCHEME`.

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api/v1";
pub const DEFAULT_TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to.
    pub api_url: String,
    /// Local storage key holding the session token.
    pub token_key: String,
    /// Prefix for the `Authorization` header, e.g. `Bearer`. `None` sends the
    /// raw token.
    pub auth_scheme: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            auth_scheme: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by whatever was set at compile time.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("STANZA_API_URL"),
            option_env!("STANZA_TOKEN_KEY"),
            option_env!("STANZA_AUTH_SCHEME"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        token_key: Option<&str>,
        auth_scheme: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let non_empty = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            api_url: non_empty(api_url)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            token_key: non_empty(token_key).unwrap_or(defaults.token_key),
            auth_scheme: non_empty(auth_scheme),
        }
    }

    /// The `Authorization` header value for `token`.
    pub fn authorization(&self, token: &str) -> String {
        match &self.auth_scheme {
            Some(scheme) => format!("{scheme} {token}"),
            None => token.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_values(None, None, None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_url, "http://localhost:3001/api/v1");
        assert_eq!(config.token_key, "token");
    }

    #[test]
    fn test_overrides() {
        let config =
            ClientConfig::from_values(Some("https://poems.example/api/v1/"), Some(""), Some("Bearer"));
        assert_eq!(config.api_url, "https://poems.example/api/v1");
        assert_eq!(config.token_key, "token");
        assert_eq!(config.authorization("abc"), "Bearer abc");
    }

    #[test]
    fn test_raw_token_without_scheme() {
        assert_eq!(ClientConfig::default().authorization("abc"), "abc");
    }
}
