//! One-shot client: connect, send one GET, read one response.
//!
//! # Design Decisions
//! - No retries and no timeouts; a silent server blocks the call
//! - The response is returned as decoded; undoing the content-coding and
//!   parsing the body is left to the caller (see `payload`)

use thiserror::Error;
use url::Url;

use crate::config::ClientConfig;
use crate::http::{Request, Response};
use crate::net::{Connection, ConnectionError};

/// Errors from building or performing a client exchange.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("URL '{0}' has no host")]
    MissingHost(String),

    #[error("URL '{0}' has no port")]
    MissingPort(String),

    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

/// Where a request goes: server authority plus request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// `host:port`, used both to dial and as the `Host` header.
    pub authority: String,
    /// Path plus optional query.
    pub target: String,
}

impl Endpoint {
    /// Parse an absolute URL such as `http://127.0.0.1:6636/greet/1?name=Ada`.
    pub fn parse(input: &str) -> Result<Self, ClientError> {
        let url = Url::parse(input.trim())?;
        let host = url
            .host_str()
            .ok_or_else(|| ClientError::MissingHost(input.to_string()))?;
        let port = url
            .port_or_known_default()
            .ok_or_else(|| ClientError::MissingPort(input.to_string()))?;

        let mut target = url.path().to_string();
        if let Some(query) = url.query() {
            target.push('?');
            target.push_str(query);
        }

        Ok(Self {
            authority: format!("{}:{}", host, port),
            target,
        })
    }

    /// Build the GET request for this endpoint.
    pub fn request(&self, accept: &str, accept_encoding: &str) -> Request {
        Request::get(&self.target, &self.authority, accept, accept_encoding)
    }
}

/// Performs single request/response exchanges.
#[derive(Debug, Clone)]
pub struct Client {
    read_buffer_size: usize,
}

impl Client {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            read_buffer_size: config.read_buffer_size,
        }
    }

    /// Send `request` to `addr` and decode the response.
    pub async fn fetch(&self, addr: &str, request: &Request) -> Result<Response, ConnectionError> {
        let mut connection = Connection::connect(addr, self.read_buffer_size).await?;
        connection.send(&request.encode()).await?;
        let bytes = connection.read_message().await?;
        connection.close().await;

        let response = Response::decode(&bytes);
        tracing::debug!(
            status = %response.status,
            content_length = response.content_length,
            received = response.data.len(),
            "Response received"
        );
        Ok(response)
    }

    /// Fetch `endpoint` with the given preference headers.
    pub async fn get(
        &self,
        endpoint: &Endpoint,
        accept: &str,
        accept_encoding: &str,
    ) -> Result<Response, ClientError> {
        let request = endpoint.request(accept, accept_encoding);
        Ok(self.fetch(&endpoint.authority, &request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_splits_authority_and_target() {
        let endpoint = Endpoint::parse("http://127.0.0.1:6636/greet/42?name=Ada").unwrap();
        assert_eq!(endpoint.authority, "127.0.0.1:6636");
        assert_eq!(endpoint.target, "/greet/42?name=Ada");
    }

    #[test]
    fn endpoint_defaults_path_and_port() {
        let endpoint = Endpoint::parse("  http://localhost  ").unwrap();
        assert_eq!(endpoint.authority, "localhost:80");
        assert_eq!(endpoint.target, "/");
    }

    #[test]
    fn endpoint_rejects_bad_urls() {
        assert!(matches!(Endpoint::parse("not a url"), Err(ClientError::InvalidUrl(_))));
        assert!(matches!(
            Endpoint::parse("unix:/tmp/sock"),
            Err(ClientError::MissingHost(_))
        ));
        assert!(matches!(
            Endpoint::parse("foo://host/x"),
            Err(ClientError::MissingPort(_))
        ));
    }

    #[test]
    fn request_carries_endpoint() {
        let endpoint = Endpoint::parse("http://127.0.0.1:6636/").unwrap();
        let request = endpoint.request("application/xml", "none");
        assert_eq!(request.method, "GET");
        assert_eq!(request.version, "HTTP/1.1");
        assert_eq!(request.host, "127.0.0.1:6636");
        assert_eq!(request.target, "/");
    }
}
