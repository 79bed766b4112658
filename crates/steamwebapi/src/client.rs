//! Main client implementation for the SteamWebAPI

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use secrecy::SecretString;
use steamwebapi_core::sleep::{Sleeper, TokioSleeper};
use steamwebapi_transport::{HttpTransport, Transport};
use tracing::info;

use crate::{
    config::{AuthLocation, ClientConfig, ConnectionPoolConfig},
    error::{Error, Result},
    http::{RequestBuilder, RetryConfig, Route, SteamWebApiProvider},
    resources::{Account, Currency, Steam},
};

/// Main client for interacting with the SteamWebAPI.
///
/// Cheap to clone: clones share one connection pool, so a single client can
/// serve any number of concurrent calls. Resource handles are built per call
/// and hold their own clone.
///
/// # Example
///
/// ```rust,no_run
/// use steamwebapi::Client;
///
/// # async fn example() -> steamwebapi::Result<()> {
/// let client = Client::try_new("your-api-key")?;
/// let account = client.account().me().await?;
/// println!("{} requests today", account.today);
/// client.close().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    /// Builds authenticated requests and owns the retry engine
    provider: SteamWebApiProvider,

    closed: AtomicBool,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url().as_str())
            .field("production", &self.inner.provider.production())
            .field("auth_location", &self.inner.provider.auth_location())
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl Client {
    /// Create a new client with an API key.
    ///
    /// # Panics
    ///
    /// This convenience method panics if the client cannot be built with the default
    /// configuration. For fallible construction with explicit error handling, use
    /// [`Client::try_new()`] instead.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder()
            .api_key(api_key)
            .build()
            .expect("Failed to build client with provided API key")
    }

    /// Create a new client with an API key (fallible version).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base URL is invalid (e.g., from environment variable)
    /// - HTTP client configuration fails
    pub fn try_new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from a configuration object, backed by a reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is incomplete or invalid, or the
    /// HTTP client cannot be built (for example, a malformed proxy URL).
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::with_config(config.transport_config())?;
        Self::from_transport(config, Arc::new(transport))
    }

    /// Create a client that sends through a custom transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is incomplete or invalid.
    pub fn from_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let provider = SteamWebApiProvider::new(&config, transport, Arc::new(TokioSleeper))?;
        Ok(Self::from_provider(provider))
    }

    fn from_provider(provider: SteamWebApiProvider) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                provider,
                closed: AtomicBool::new(false),
            }),
        }
    }

    /// A client that shares this one's transport but waits on another clock.
    pub fn with_sleeper(&self, sleeper: Arc<dyn Sleeper>) -> Self {
        Self::from_provider(self.inner.provider.with_sleeper(sleeper))
    }

    /// Access the account endpoints.
    pub fn account(&self) -> Account {
        Account::new(self.clone())
    }

    /// Access the Steam profile, inventory and market endpoints.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use steamwebapi::{Client, ItemRequest};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("api-key");
    /// let request = ItemRequest::builder()
    ///     .market_hash_name("AK-47 | Redline (Field-Tested)")
    ///     .build()?;
    /// let item = client.steam().item(request).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn steam(&self) -> Steam {
        Steam::new(self.clone())
    }

    /// Access the currency endpoints.
    pub fn currency(&self) -> Currency {
        Currency::new(self.clone())
    }

    /// Create a request builder for a route, with authentication applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be constructed from the base URL and path.
    pub fn request(&self, route: Route) -> Result<RequestBuilder> {
        self.inner.provider.create_request(route)
    }

    /// Get the base URL for the API
    pub fn base_url(&self) -> &url::Url {
        self.inner.provider.base_url()
    }

    /// The retry policy in effect.
    pub fn retry_config(&self) -> &RetryConfig {
        self.inner.provider.engine().config()
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    /// Release the shared transport.
    ///
    /// Only the first call does anything; requests made afterwards fail
    /// with a transport error.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails to shut down.
    pub async fn close(&self) -> Result<()> {
        if self.inner.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        self.inner.provider.transport().close().await?;
        info!(base_url = %self.base_url(), "Client closed");
        Ok(())
    }
}

/// Builder for creating a configured Client.
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    sleeper: Option<Arc<dyn Sleeper>>,
}

impl ClientBuilder {
    /// Start from an existing configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Flag requests as production (`true`, the default) or development traffic.
    pub fn production(mut self, production: bool) -> Self {
        self.config.production = production;
        self
    }

    /// Choose where the API key is sent.
    pub fn auth_location(mut self, location: AuthLocation) -> Self {
        self.config.auth_location = location;
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Set the timeout for each physical attempt.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the retry policy.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.config.retry = retry;
        self
    }

    /// Set the HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Set connection pool configuration.
    pub fn connection_pool(mut self, pool: ConnectionPoolConfig) -> Self {
        self.config.connection_pool = pool;
        self
    }

    /// Add a custom default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Send through a custom transport instead of reqwest.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Wait between attempts on a custom clock.
    pub fn sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = Some(sleeper);
        self
    }

    /// Build the client with the configured options.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is available, the base URL is invalid,
    /// or the HTTP client cannot be built.
    pub fn build(self) -> Result<Client> {
        let client = match self.transport {
            Some(transport) => Client::from_transport(self.config, transport)?,
            None => Client::from_config(self.config)?,
        };

        Ok(match self.sleeper {
            Some(sleeper) => client.with_sleeper(sleeper),
            None => client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::routes;
    use crate::resources::Resource;
    use steamwebapi_core::sleep::RecordingSleeper;
    use steamwebapi_transport::testing::ScriptedTransport;

    fn scripted_client(transport: &ScriptedTransport) -> Client {
        Client::builder()
            .api_key("test-key")
            .transport(Arc::new(transport.clone()))
            .sleeper(Arc::new(RecordingSleeper::new()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_builder() {
        let client = Client::builder()
            .api_key("test-key")
            .base_url("https://example.com")
            .timeout(Duration::from_secs(30))
            .production(false)
            .build();

        assert!(client.is_ok());
    }

    #[test]
    fn test_client_from_config_invalid_scheme() {
        let result = Client::from_config(ClientConfig {
            base_url: Some("ftp://invalid.example.com".to_string()),
            ..ClientConfig::with_api_key("test-key")
        });

        match result {
            Err(Error::InvalidUrl(msg)) => {
                assert!(msg.contains("ftp"), "Error should mention invalid scheme");
                assert!(msg.contains("http"), "Error should mention valid schemes");
            }
            other => panic!("Expected InvalidUrl error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_client_from_config_invalid_proxy() {
        let result = Client::builder()
            .api_key("test-key")
            .proxy("not a proxy url")
            .build();

        assert!(matches!(result, Err(Error::Transport(_))));
    }

    #[test]
    fn test_client_without_key_fails() {
        temp_env::with_var_unset("STEAMWEBAPI_KEY", || {
            let result = Client::builder().build();
            assert!(matches!(result, Err(Error::MissingConfig(_))));
        });
    }

    #[test]
    fn test_resource_handles_share_client() {
        let client = Client::new("test-key");

        assert!(Arc::ptr_eq(&client.account().client().inner, &client.inner));
        assert!(Arc::ptr_eq(&client.steam().client().inner, &client.inner));
        assert!(Arc::ptr_eq(&client.currency().client().inner, &client.inner));
    }

    #[test]
    fn test_client_is_freed_after_resource_access() {
        let client = Client::new("test-key");
        let _ = client.account();
        let _ = client.steam();
        let _ = client.currency();

        let inner = Arc::downgrade(&client.inner);
        drop(client);
        assert!(inner.upgrade().is_none());
    }

    #[test]
    fn test_client_clone_shares_state() {
        let client1 = Client::new("test-key");
        let client2 = client1.clone();

        assert!(Arc::ptr_eq(&client1.inner, &client2.inner));
        assert_eq!(client1.base_url(), client2.base_url());
        assert_eq!(client1.base_url().as_str(), "https://www.steamwebapi.com/");
    }

    #[test]
    fn test_request_applies_auth() {
        let client = Client::new("test-key");
        let request = client.request(routes::CURRENCY_LIST).unwrap();

        assert_eq!(request.query_value("key"), Some("test-key"));
        assert_eq!(request.query_value("production"), Some("1"));
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let transport = ScriptedTransport::new();
        let client = scripted_client(&transport);

        client.close().await.unwrap();
        client.close().await.unwrap();
        client.clone().close().await.unwrap();

        assert!(client.is_closed());
        assert_eq!(transport.close_count(), 1);
    }

    #[tokio::test]
    async fn test_request_after_close_fails() {
        let transport = ScriptedTransport::with_statuses([200]);
        let client = scripted_client(&transport);
        client.close().await.unwrap();

        let result = client.account().me().await;
        assert!(matches!(result, Err(Error::Transport(_))));
        assert_eq!(transport.attempts(), 0);
    }
}
