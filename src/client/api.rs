//! HTTP helpers for the dashboard JSON API with a shared cookie jar, a fixed
//! timeout policy and consistent error mapping. Feature clients use these
//! helpers instead of building requests themselves. Bodies are never logged.

use super::{
    config::{build_url_with_base, ClientConfig},
    errors::AppError,
};
use crate::APP_USER_AGENT;
use reqwest::{
    cookie::{CookieStore, Jar},
    header::CONTENT_TYPE,
    Client, Method, RequestBuilder, Response,
};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, info_span, Instrument};
use url::Url;

/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

/// Cookie-carrying client bound to one API base URL (origin + `/api/v1`).
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    jar: Arc<Jar>,
    base_url: String,
    cookie_url: Url,
}

impl ApiClient {
    /// # Errors
    /// Returns [`AppError::Config`] if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        Self::with_cookies(config, None)
    }

    /// Builds a client whose jar is pre-seeded from a saved `Cookie` header value.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] if the base URL is invalid or the HTTP client cannot be built.
    pub fn with_cookies(config: &ClientConfig, cookies: Option<&str>) -> Result<Self, AppError> {
        let base_url = config.api_base_url();
        let cookie_url = Url::parse(&base_url)
            .map_err(|err| AppError::Config(format!("Invalid API base URL {base_url}: {err}")))?;

        let jar = Arc::new(Jar::default());
        if let Some(header) = cookies {
            restore_cookies(&jar, &cookie_url, header);
        }

        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .cookie_provider(Arc::clone(&jar))
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            jar,
            base_url,
            cookie_url,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/auth/me`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        build_url_with_base(&self.base_url, path)
    }

    /// Current cookies for the API, formatted as a `Cookie` header value.
    #[must_use]
    pub fn cookie_header(&self) -> Option<String> {
        self.jar
            .cookies(&self.cookie_url)
            .and_then(|value| value.to_str().ok().map(ToString::to_string))
    }

    /// # Errors
    /// Returns transport, HTTP or decode errors unchanged.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.send(Method::GET, path, |builder| builder).await?;
        handle_json_response(response).await
    }

    /// Fetches JSON with `query` encoded as URL parameters.
    ///
    /// # Errors
    /// Returns transport, HTTP or decode errors unchanged.
    pub async fn get_json_with_query<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, AppError> {
        let response = self
            .send(Method::GET, path, |builder| builder.query(query))
            .await?;
        handle_json_response(response).await
    }

    /// # Errors
    /// Returns serialization, transport, HTTP or decode errors unchanged.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.send_json(Method::POST, path, body).await
    }

    /// Posts without a body, used for session and key-rotation endpoints.
    ///
    /// # Errors
    /// Returns transport, HTTP or decode errors unchanged.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.send(Method::POST, path, |builder| builder).await?;
        handle_json_response(response).await
    }

    /// # Errors
    /// Returns serialization, transport, HTTP or decode errors unchanged.
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.send_json(Method::PUT, path, body).await
    }

    /// # Errors
    /// Returns transport, HTTP or decode errors unchanged.
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.send(Method::DELETE, path, |builder| builder).await?;
        handle_json_response(response).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let payload = serde_json::to_vec(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        let response = self
            .send(method, path, move |builder| {
                builder
                    .header(CONTENT_TYPE, "application/json")
                    .body(payload)
            })
            .await?;
        handle_json_response(response).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        build_request: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Response, AppError> {
        let url = self.url(path);
        let span = info_span!("api.request", http.method = %method, url = %url);

        let response = build_request(self.http.request(method, &url))
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)?;

        debug!(status = response.status().as_u16(), url = %url, "api response");

        Ok(response)
    }
}

/// Seeds the jar from `name=value; name2=value2`, scoping every cookie to `/`.
fn restore_cookies(jar: &Jar, url: &Url, header: &str) {
    for pair in header.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
        jar.add_cookie_str(&format!("{pair}; Path=/"), url);
    }
}

/// Maps reqwest failures into `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else if err.is_decode() {
        AppError::Parse(format!("Failed to decode response: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    if status.is_success() {
        let bytes = response.bytes().await.map_err(map_request_error)?;
        serde_json::from_slice::<T>(&bytes)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status: status.as_u16(),
            message: sanitize_body(&body),
        })
    }
}

/// Trims and truncates HTTP error bodies for display.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
