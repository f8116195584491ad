//! Shared API client
//!
//! Wraps a `reqwest::Client` with the base URL, timeout, and optional bearer
//! token, and maps transport and HTTP failures into `DomainError`.

use feed_common::{ApiConfig, AppError};
use feed_core::{DomainError, DomainResult};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::models::ErrorBody;

/// HTTP client bound to one API base URL
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(AppError::http_client)?;

        Ok(Self::with_http(http, config))
    }

    /// Reuse an existing `reqwest::Client`
    pub fn with_http(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            base_url: config.base_url().to_string(),
            access_token: config.access_token.clone(),
        }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// `GET` with query parameters, decoding a JSON body
    pub async fn get_json<T, Q>(&self, path: &str, query: &Q) -> DomainResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .request(Method::GET, path)
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(check_status(response).await?).await
    }

    /// Send a JSON body, decoding a JSON response
    pub async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> DomainResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .request(method, path)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(check_status(response).await?).await
    }

    /// `DELETE`, ignoring any response body
    pub async fn delete(&self, path: &str) -> DomainResult<()> {
        let response = self
            .request(Method::DELETE, path)
            .send()
            .await
            .map_err(map_transport_error)?;
        check_status(response).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> DomainResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| DomainError::Decode(e.to_string()))
}

/// Pass 2xx responses through, turn everything else into a domain error
async fn check_status(response: Response) -> DomainResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // A missing or malformed error body still maps by status alone
    let body = response.json::<ErrorBody>().await.unwrap_or_default();
    debug!(status = status.as_u16(), code = %body.code, "API returned an error");

    Err(map_status(status, body))
}

/// Map a non-2xx status and its error body to a domain error
pub(crate) fn map_status(status: StatusCode, body: ErrorBody) -> DomainError {
    match status {
        StatusCode::UNAUTHORIZED => DomainError::Unauthenticated,
        StatusCode::NOT_FOUND => DomainError::NotFound(if body.message.is_empty() {
            "resource".to_string()
        } else {
            body.message
        }),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => DomainError::Timeout,
        s if s.is_server_error() => DomainError::Server {
            status: s.as_u16(),
            message: body.message,
        },
        s => DomainError::Rejected {
            status: s.as_u16(),
            message: body.message,
        },
    }
}

/// Map a reqwest failure that happened before a status was received
pub(crate) fn map_transport_error(e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::Timeout
    } else if e.is_decode() {
        DomainError::Decode(e.to_string())
    } else {
        DomainError::Network(e.to_string())
    }
}
