//! Development proxy. While the dashboard is served locally, API prefixes are
//! forwarded to backend origins with the `Host` header rewritten to the
//! target. Paths without a matching rule get 404. Not meant for production.

pub mod rules;

use crate::{APP_USER_AGENT, GIT_COMMIT_HASH};
use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use rules::ProxyRule;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub const DEFAULT_PROXY_HOST: &str = "0.0.0.0";
pub const DEFAULT_PROXY_PORT: u16 = 5173;
/// Largest request body forwarded upstream.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
    pub rules: Vec<ProxyRule>,
    /// Skip TLS verification of upstream origins.
    pub insecure: bool,
}

#[derive(Debug)]
pub struct ProxyState {
    rules: Vec<ProxyRule>,
    client: reqwest::Client,
    app_header: HeaderValue,
}

impl ProxyState {
    /// # Errors
    /// Returns an error if the upstream HTTP client cannot be built.
    pub fn new(rules: Vec<ProxyRule>, insecure: bool) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .redirect(reqwest::redirect::Policy::none())
            .danger_accept_invalid_certs(insecure)
            .build()
            .context("failed to build proxy client")?;
        let app_header = HeaderValue::from_str(&format!("{APP_USER_AGENT} ({GIT_COMMIT_HASH})"))
            .context("invalid build metadata for X-App header")?;
        Ok(Self {
            rules,
            client,
            app_header,
        })
    }
}

pub fn router(state: Arc<ProxyState>) -> Router {
    Router::new()
        .fallback(forward)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Binds and serves until Ctrl-C.
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(config: ProxyConfig) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", config.host, config.port))?;

    for rule in &config.rules {
        info!("proxy {} -> {}", rule.prefix, rule.target);
    }

    let state = Arc::new(ProxyState::new(config.rules, config.insecure)?);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("dev proxy listening on {addr}");

    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
    }
}

async fn forward(State(state): State<Arc<ProxyState>>, request: Request) -> Response {
    let path_and_query = request
        .uri()
        .path_and_query()
        .map_or_else(|| request.uri().path().to_string(), ToString::to_string);

    let Some(rule) = rules::select(&state.rules, request.uri().path()) else {
        return (StatusCode::NOT_FOUND, "no proxy rule for path").into_response();
    };
    let url = rule.upstream_url(&path_and_query);

    let (parts, body) = request.into_parts();
    let body = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("failed to read request body: {err}");
            return (StatusCode::PAYLOAD_TOO_LARGE, "request body too large").into_response();
        }
    };

    let mut headers = strip_hop_by_hop(&parts.headers);
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);

    let upstream = match state
        .client
        .request(parts.method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            warn!("upstream {url} failed: {err}");
            return (StatusCode::BAD_GATEWAY, "upstream unavailable").into_response();
        }
    };

    let status = upstream.status();
    let headers = strip_hop_by_hop(upstream.headers());
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("upstream {url} body failed: {err}");
            return (StatusCode::BAD_GATEWAY, "upstream body unavailable").into_response();
        }
    };

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
        .headers_mut()
        .insert(HeaderName::from_static("x-app"), state.app_header.clone());
    response
}

fn strip_hop_by_hop(headers: &HeaderMap) -> HeaderMap {
    const HOP_BY_HOP: [&str; 8] = [
        "connection",
        "keep-alive",
        "proxy-authenticate",
        "proxy-authorization",
        "te",
        "trailer",
        "transfer-encoding",
        "upgrade",
    ];

    headers
        .iter()
        .filter(|(name, _)| !HOP_BY_HOP.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
