//! HTTP transport client implementation
//!
//! Implements the Transport trait on top of a shared reqwest connection pool.

use crate::error::{Result, TransportError};
use crate::traits::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;
use tracing::{debug, info};

/// HTTP transport implementation
///
/// Handles one physical round-trip per call with:
/// - Connection pooling shared by all concurrent calls
/// - Per-request timeout
/// - Optional proxy
/// - Deterministic close: the pool is dropped exactly once
#[derive(Debug)]
pub struct HttpTransport {
    client: RwLock<Option<ReqwestClient>>,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a new HTTP transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpTransportConfig::default())
    }

    /// Create a new HTTP transport with custom configuration
    pub fn with_config(config: HttpTransportConfig) -> Result<Self> {
        let mut builder = ReqwestClient::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(config.pool_idle_timeout)
            .tcp_keepalive(config.tcp_keepalive);

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy.as_str())
                .map_err(|e| TransportError::InvalidRequest(format!("Invalid proxy: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        Ok(Self {
            client: RwLock::new(Some(client)),
            timeout: config.timeout,
        })
    }

    /// Wrap an existing reqwest client, sharing its connection pool
    pub fn from_client(client: ReqwestClient, timeout: Duration) -> Self {
        Self {
            client: RwLock::new(Some(client)),
            timeout,
        }
    }

    /// Get the configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn current_client(&self) -> Result<ReqwestClient> {
        self.client
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
            .ok_or(TransportError::Closed)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse> {
        let client = self.current_client()?;

        let mut req = client
            .request(request.method.clone(), request.url.as_str())
            .timeout(self.timeout);

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req.send().await?;

        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        let body = response.bytes().await?;
        debug!(status, body_size = body.len(), "Received HTTP response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    fn is_closed(&self) -> bool {
        self.client
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_none()
    }

    async fn close(&self) -> Result<()> {
        let released = self
            .client
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();

        if released.is_some() {
            info!("HTTP transport closed");
        }
        Ok(())
    }
}

/// HTTP transport configuration
#[derive(Clone, Debug)]
pub struct HttpTransportConfig {
    /// Request timeout
    pub timeout: Duration,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// How long an idle pooled connection is kept
    pub pool_idle_timeout: Option<Duration>,

    /// TCP keep-alive interval
    pub tcp_keepalive: Option<Duration>,

    /// Proxy URL applied to all schemes
    pub proxy: Option<String>,

    /// Default `User-Agent` header
    pub user_agent: Option<String>,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(30),
            pool_max_idle_per_host: 10,
            pool_idle_timeout: Some(Duration::from_secs(90)),
            tcp_keepalive: Some(Duration::from_secs(60)),
            proxy: None,
            user_agent: None,
        }
    }
}
