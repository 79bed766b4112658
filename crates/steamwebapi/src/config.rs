//! Configuration for the SteamWebAPI client

use crate::error::Error;
use crate::http::RetryConfig;
use http::HeaderMap;
use secrecy::SecretString;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use steamwebapi_transport::HttpTransportConfig;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Where the API key travels on each request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AuthLocation {
    /// `?key=...` query parameter
    #[default]
    Query,
    /// `Authorization: Bearer ...` header
    Header,
}

impl fmt::Display for AuthLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Header => f.write_str("header"),
        }
    }
}

impl FromStr for AuthLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "query" => Ok(Self::Query),
            "header" | "bearer" => Ok(Self::Header),
            other => Err(Error::InvalidRequest(format!(
                "unknown auth location '{}', expected 'query' or 'header'",
                other
            ))),
        }
    }
}

/// Configuration for the SteamWebAPI client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key for authentication
    pub api_key: Option<SecretString>,

    /// Base URL for the API
    pub base_url: Option<String>,

    /// Flag requests as production traffic (`production=1`)
    pub production: bool,

    /// Where the API key is sent
    pub auth_location: AuthLocation,

    /// `User-Agent` override
    pub user_agent: Option<String>,

    /// Timeout for each physical attempt
    pub timeout: Duration,

    /// Retry policy for 429 and 5xx responses
    pub retry: RetryConfig,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,

    /// HTTP proxy URL
    pub proxy: Option<String>,

    /// Connection pool configuration
    pub connection_pool: ConnectionPoolConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            production: true,
            auth_location: AuthLocation::Query,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
            retry: RetryConfig::default(),
            default_headers: HeaderMap::new(),
            proxy: None,
            connection_pool: ConnectionPoolConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first, if present.
    /// This will look for:
    /// - `STEAMWEBAPI_KEY` for authentication
    /// - `STEAMWEBAPI_BASE_URL` for the API base URL
    /// - `STEAMWEBAPI_PRODUCTION` (`1`/`0`, `true`/`false`)
    /// - `STEAMWEBAPI_AUTH_LOCATION` (`query` or `header`)
    /// - `STEAMWEBAPI_TIMEOUT` for request timeout (in seconds)
    /// - `STEAMWEBAPI_PROXY` for HTTP proxy
    ///
    /// # Errors
    ///
    /// Returns an error if `STEAMWEBAPI_AUTH_LOCATION` names an unknown location.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, Error> {
        use std::env;

        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(api_key) = env::var("STEAMWEBAPI_KEY")
            && !api_key.trim().is_empty()
        {
            config.api_key = Some(SecretString::from(api_key));
        }

        if let Ok(base_url) = env::var("STEAMWEBAPI_BASE_URL") {
            config.base_url = Some(base_url);
        }

        if let Ok(production) = env::var("STEAMWEBAPI_PRODUCTION")
            && let Some(production) = parse_flag(&production)
        {
            config.production = production;
        }

        if let Ok(location) = env::var("STEAMWEBAPI_AUTH_LOCATION") {
            config.auth_location = location.parse()?;
        }

        if let Ok(timeout_str) = env::var("STEAMWEBAPI_TIMEOUT")
            && let Ok(timeout_secs) = timeout_str.trim().parse::<u64>()
        {
            config.timeout = Duration::from_secs(timeout_secs);
        }

        if let Ok(proxy) = env::var("STEAMWEBAPI_PROXY") {
            config.proxy = Some(proxy);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    ///
    /// Plain values in `other` win when they differ from their defaults.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if !other.production {
            self.production = false;
        }
        if other.auth_location != AuthLocation::default() {
            self.auth_location = other.auth_location;
        }
        if other.user_agent.is_some() {
            self.user_agent = other.user_agent;
        }
        if other.timeout != DEFAULT_TIMEOUT {
            self.timeout = other.timeout;
        }
        if other.retry != RetryConfig::default() {
            self.retry = other.retry;
        }
        for (key, value) in other.default_headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }
        if other.proxy.is_some() {
            self.proxy = other.proxy;
        }
        if other.connection_pool != ConnectionPoolConfig::default() {
            self.connection_pool = other.connection_pool;
        }

        self
    }

    /// Settings for the reqwest-backed transport.
    pub fn transport_config(&self) -> HttpTransportConfig {
        HttpTransportConfig {
            timeout: self.timeout,
            pool_max_idle_per_host: self.connection_pool.max_idle_per_host,
            pool_idle_timeout: Some(self.connection_pool.idle_timeout),
            tcp_keepalive: self.connection_pool.tcp_keepalive,
            proxy: self.proxy.clone(),
            ..HttpTransportConfig::default()
        }
    }
}

#[cfg(feature = "env")]
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration for HTTP connection pooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections per host
    pub max_idle_per_host: usize,

    /// Idle connection timeout
    pub idle_timeout: Duration,

    /// TCP keep-alive interval
    pub tcp_keepalive: Option<Duration>,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 10,
            idle_timeout: Duration::from_secs(90),
            tcp_keepalive: Some(Duration::from_secs(60)),
        }
    }
}

/// Builder for creating ClientConfig with a fluent API.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set production mode.
    pub fn production(mut self, production: bool) -> Self {
        self.config.production = production;
        self
    }

    /// Set where the API key is sent.
    pub fn auth_location(mut self, location: AuthLocation) -> Self {
        self.config.auth_location = location;
        self
    }

    /// Set the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the retry policy.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.config.retry = retry;
        self
    }

    /// Add a default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> crate::Result<Self> {
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

    /// Set the HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Set connection pool configuration.
    pub fn connection_pool(mut self, config: ConnectionPoolConfig) -> Self {
        self.config.connection_pool = config;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use steamwebapi_core::retry::LinearBackoff;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.production);
        assert_eq!(config.auth_location, AuthLocation::Query);
        assert_eq!(config.retry.max_server_attempts(), 5);
        assert_eq!(config.retry.rate_limit_ceiling, Duration::from_secs(30));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfigBuilder::new()
            .api_key("test-key")
            .base_url("https://example.com")
            .production(false)
            .auth_location(AuthLocation::Header)
            .timeout(Duration::from_secs(30))
            .default_header("x-client", "tests")
            .unwrap()
            .build();

        assert_eq!(config.api_key.unwrap().expose_secret(), "test-key");
        assert_eq!(config.base_url, Some("https://example.com".to_string()));
        assert!(!config.production);
        assert_eq!(config.auth_location, AuthLocation::Header);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.default_headers["x-client"], "tests");
    }

    #[test]
    fn test_default_header_rejects_invalid_name() {
        let result = ClientConfigBuilder::new().default_header("bad header", "x");
        assert!(matches!(result, Err(Error::InvalidHeaderName(_))));
    }

    #[test]
    fn test_config_merge() {
        let retry = RetryConfig {
            server_backoff: LinearBackoff::builder().max_attempts(2).build(),
            ..RetryConfig::default()
        };
        let config1 = ClientConfig::with_api_key("key1");
        let config2 = ClientConfigBuilder::new()
            .base_url("https://example.com")
            .production(false)
            .timeout(Duration::from_secs(30))
            .retry(retry.clone())
            .build();

        let merged = config1.merge(config2);
        assert_eq!(merged.api_key.unwrap().expose_secret(), "key1");
        assert_eq!(merged.base_url, Some("https://example.com".to_string()));
        assert!(!merged.production);
        assert_eq!(merged.timeout, Duration::from_secs(30));
        assert_eq!(merged.retry, retry);
    }

    #[test]
    fn test_auth_location_parse() {
        assert_eq!("Header".parse::<AuthLocation>().unwrap(), AuthLocation::Header);
        assert_eq!("query".parse::<AuthLocation>().unwrap(), AuthLocation::Query);
        assert!("cookie".parse::<AuthLocation>().is_err());
        assert_eq!(AuthLocation::Header.to_string(), "header");
    }

    #[test]
    fn test_transport_config() {
        let config = ClientConfigBuilder::new()
            .timeout(Duration::from_secs(5))
            .proxy("http://proxy.local:3128")
            .build();

        let transport = config.transport_config();
        assert_eq!(transport.timeout, Duration::from_secs(5));
        assert_eq!(transport.proxy.as_deref(), Some("http://proxy.local:3128"));
        assert_eq!(transport.pool_max_idle_per_host, 10);
    }

    #[cfg(feature = "env")]
    #[test]
    fn test_from_env() {
        temp_env::with_vars(
            [
                ("STEAMWEBAPI_KEY", Some("env-key")),
                ("STEAMWEBAPI_BASE_URL", Some("http://localhost:9000")),
                ("STEAMWEBAPI_PRODUCTION", Some("0")),
                ("STEAMWEBAPI_AUTH_LOCATION", Some("header")),
                ("STEAMWEBAPI_TIMEOUT", Some("15")),
                ("STEAMWEBAPI_PROXY", None),
            ],
            || {
                let config = ClientConfig::from_env().unwrap();
                assert_eq!(config.api_key.unwrap().expose_secret(), "env-key");
                assert_eq!(config.base_url.as_deref(), Some("http://localhost:9000"));
                assert!(!config.production);
                assert_eq!(config.auth_location, AuthLocation::Header);
                assert_eq!(config.timeout, Duration::from_secs(15));
                assert!(config.proxy.is_none());
            },
        );
    }

    #[cfg(feature = "env")]
    #[test]
    fn test_from_env_rejects_unknown_auth_location() {
        temp_env::with_var("STEAMWEBAPI_AUTH_LOCATION", Some("cookie"), || {
            assert!(matches!(
                ClientConfig::from_env(),
                Err(Error::InvalidRequest(_))
            ));
        });
    }
}
