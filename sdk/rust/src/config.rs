//! Client configuration.

use std::collections::HashMap;
use std::time::Duration;

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("notifi-sdk-rs/", env!("CARGO_PKG_VERSION"));

/// Client configuration.
///
/// The endpoint is an opaque string supplied by the caller; the SDK does not
/// map environments to URLs.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL of the GraphQL endpoint.
    pub url: String,
    /// Whole-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    /// Connection timeout.
    pub connect_timeout: Option<Duration>,
    /// Headers sent with every request.
    pub headers: HashMap<String, String>,
    pub user_agent: String,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout: None,
            connect_timeout: None,
            headers: HashMap::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            system_proxy: true,
        }
    }
}

impl ClientConfig {
    /// Creates a new config with a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Adds a default header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Connects directly, ignoring proxy settings from the environment.
    pub fn no_proxy(mut self) -> Self {
        self.system_proxy = false;
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config() {
        let config = ClientConfig::new("https://api.notifi.network/gql")
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(2))
            .header("X-Client", "dashboard")
            .user_agent("dashboard/1.0")
            .no_proxy();

        assert_eq!(config.url, "https://api.notifi.network/gql");
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(2)));
        assert_eq!(config.headers.get("X-Client").map(String::as_str), Some("dashboard"));
        assert_eq!(config.user_agent, "dashboard/1.0");
        assert!(!config.system_proxy);
    }

    #[test]
    fn test_defaults_do_not_bound_requests() {
        let config = ClientConfig::new("http://localhost:4000/gql");
        assert!(config.timeout.is_none());
        assert!(config.connect_timeout.is_none());
        assert!(config.user_agent.starts_with("notifi-sdk-rs/"));
    }
}
