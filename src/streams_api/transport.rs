use crate::streams_api::requests::HttpMethod;
use crate::streams_api::types::ApiError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Fully built, signed HTTP request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: url::Url,
    pub headers: Vec<(String, String)>,
    /// `None` for GET, the (possibly empty) body string otherwise
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header with the given name, compared case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw HTTP response: status plus body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport trait
///
/// Abstracts the network so the signing and dispatch core can be exercised
/// without real I/O. Implementations must map failures that prevent a
/// response from arriving to [`ApiError::Network`]; any response, whatever
/// its status, is returned as `Ok`.
pub trait Transport: Send + Sync + fmt::Debug {
    /// Send a request and read the whole response body
    fn send(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, ApiError>> + Send + '_>>;
}

/// Transport backed by a `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing client (proxy settings, TLS roots, ...)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, ApiError>> + Send + '_>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method.into(), request.url.clone());

            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(ApiError::from)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| {
                ApiError::Network(format!("Failed to read response body: {}", e))
            })?;

            Ok(HttpResponse { status, body })
        })
    }
}
