use http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::InvalidHeaderValue};
use url::Url;

use crate::{
    auth::Authentication,
    concepts::RpcTransport,
    config::NodeConfig,
    types::{AnyJson, RpcRequest},
};

/// Sends requests to the node's RPC endpoint as JSON `POST`s.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    pub node_url: Url,
    pub client: reqwest::Client,
    pub headers: HeaderMap,
}

#[derive(Debug, thiserror::Error)]
pub enum HttpTransportError {
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
    #[error("HTTP request error: {0}")]
    HttpRequestError(#[from] reqwest::Error),
    #[error("HTTP error! status: {status}, body: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

impl HttpTransport {
    pub fn new(node_url: Url) -> Self {
        HttpTransport {
            node_url,
            client: reqwest::Client::new(),
            headers: HeaderMap::new(),
        }
    }

    pub fn from_url(node_url: &str) -> Result<Self, HttpTransportError> {
        Ok(Self::new(Url::parse(node_url)?))
    }

    /// Builds a transport with the timeout, user agent and authentication
    /// of `config`.
    pub fn from_config(config: &NodeConfig) -> Result<Self, HttpTransportError> {
        let mut client = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            client = client.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            client = client.user_agent(user_agent);
        }

        Self::new(config.url.clone())
            .client(client.build()?)
            .auth(&config.auth)
    }

    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn auth(mut self, auth: &Authentication) -> Result<Self, HttpTransportError> {
        self.headers.extend(auth.headers()?);
        Ok(self)
    }

    pub fn header(mut self, key: &HeaderName, value: &HeaderValue) -> Self {
        self.headers.insert(key, value.to_owned());
        self
    }
}

impl RpcTransport for HttpTransport {
    type Error = HttpTransportError;

    async fn send(&self, request: &RpcRequest) -> Result<AnyJson, Self::Error> {
        let response = self
            .client
            .post(self.node_url.clone())
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(HttpTransportError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use http::header::AUTHORIZATION;

    use super::*;

    #[test]
    fn test_from_config_applies_auth() {
        let config = NodeConfig::builder()
            .url(Url::parse("http://localhost:7076").unwrap())
            .auth(Authentication::bearer("token"))
            .timeout_secs(5)
            .user_agent("xnopay-test")
            .build();

        let transport = HttpTransport::from_config(&config).unwrap();
        assert_eq!(transport.node_url.as_str(), "http://localhost:7076/");
        assert_eq!(transport.headers[AUTHORIZATION], "Bearer token");
    }

    #[test]
    fn test_custom_headers() {
        let transport = HttpTransport::from_url("http://localhost:7076")
            .unwrap()
            .header(
                &HeaderName::from_static("x-request-source"),
                &HeaderValue::from_static("tests"),
            );
        assert_eq!(transport.headers["x-request-source"], "tests");
    }

    #[test]
    fn test_reject_bad_url() {
        assert!(matches!(
            HttpTransport::from_url("not a url"),
            Err(HttpTransportError::UrlParseError(_))
        ));
    }
}
