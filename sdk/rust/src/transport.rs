//! HTTP transport bound to a single GraphQL endpoint.

use crate::config::ClientConfig;
use crate::error::{NotifiError, NotifiResult};
use notifi_core::Envelope;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;
use serde::Serialize;
use tracing::{debug, warn};

/// Request body: exactly `query` and `variables`.
#[derive(Debug, Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: &'a V,
}

/// An HTTP client bound to the Notifi GraphQL endpoint.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    endpoint: Url,
}

impl Transport {
    /// Builds a transport from configuration.
    pub fn new(config: &ClientConfig) -> NotifiResult<Self> {
        let endpoint = parse_endpoint(&config.url)?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let invalid = || NotifiError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(header_name, header_value);
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    /// Binds an existing client to `url`.
    pub fn with_client(http: reqwest::Client, url: &str) -> NotifiResult<Self> {
        Ok(Self {
            http,
            endpoint: parse_endpoint(url)?,
        })
    }

    /// The endpoint every request is posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts one GraphQL document and parses the response envelope.
    ///
    /// The bearer header is attached only when `token` is `Some`. Non-2xx
    /// statuses and network failures are returned as
    /// [`NotifiError::Transport`] without retrying.
    pub async fn post_graphql<V: Serialize>(
        &self,
        query: &str,
        variables: &V,
        token: Option<&str>,
    ) -> NotifiResult<Envelope> {
        let body = GraphQlRequest { query, variables };

        let mut request = self.http.post(self.endpoint.clone()).json(&body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        debug!(
            endpoint = %self.endpoint,
            authenticated = token.is_some(),
            "Posting notifi request"
        );

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, %status, "Notifi request failed");
        }

        let bytes = response.error_for_status()?.bytes().await?;
        serde_json::from_slice(&bytes).map_err(NotifiError::InvalidResponse)
    }
}

/// Parses and checks the endpoint URL.
fn parse_endpoint(url: &str) -> NotifiResult<Url> {
    let parsed = Url::parse(url.trim()).map_err(|e| NotifiError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(NotifiError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme `{}`", scheme),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_endpoint() {
        let url = parse_endpoint("https://api.notifi.network/gql").unwrap();
        assert_eq!(url.host_str(), Some("api.notifi.network"));
        assert_eq!(url.path(), "/gql");

        let url = parse_endpoint(" http://localhost:4000/gql ").unwrap();
        assert_eq!(url.port(), Some(4000));
    }

    #[test]
    fn test_rejects_bad_endpoints() {
        let err = parse_endpoint("not a url").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidUrl);

        let err = parse_endpoint("ftp://example.com/gql").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme `ftp`"));
    }

    #[test]
    fn test_rejects_invalid_default_header() {
        let config = ClientConfig::new("http://localhost:4000/gql").header("bad header", "v");
        let err = Transport::new(&config).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidHeader);
    }

    #[test]
    fn test_request_body_shape() {
        let variables = serde_json::json!({ "id": "1" });
        let body = GraphQlRequest {
            query: "query { hello }",
            variables: &variables,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "query": "query { hello }", "variables": { "id": "1" } })
        );
    }

    #[test]
    fn test_transport_creation() {
        let transport = Transport::new(&ClientConfig::new("http://localhost:4000/gql")).unwrap();
        assert_eq!(transport.endpoint().as_str(), "http://localhost:4000/gql");
    }
}
