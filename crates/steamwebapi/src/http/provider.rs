//! SteamWebAPI request provider
//!
//! Turns a [`Route`] into a [`RequestBuilder`] that already carries everything
//! every call needs: the full URL, the API key (as a query parameter or a
//! bearer header), the `production` flag, the `User-Agent` and any configured
//! default headers.

use super::retry::RetryEngine;
use super::{RequestBuilder, Route};
use crate::config::{AuthLocation, ClientConfig};
use crate::error::{Error, Result};
use http::header::{AUTHORIZATION, USER_AGENT};
use http::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use steamwebapi_core::sleep::Sleeper;
use steamwebapi_transport::Transport;
use url::Url;

/// Query parameter carrying the API key.
pub const KEY_PARAM: &str = "key";

/// Query parameter carrying the production flag.
pub const PRODUCTION_PARAM: &str = "production";

/// Environment variable consulted when no key is configured.
pub const API_KEY_ENV: &str = "STEAMWEBAPI_KEY";

/// Default `User-Agent` header value.
pub fn default_user_agent() -> String {
    format!("steamwebapi v{} (rust; reqwest)", crate::VERSION)
}

/// Builds authenticated requests against one base URL.
#[derive(Debug, Clone)]
pub struct SteamWebApiProvider {
    inner: Arc<ProviderInner>,
}

#[derive(Debug, Clone)]
struct ProviderInner {
    engine: RetryEngine,
    base_url: Url,
    api_key: SecretString,
    production: bool,
    auth_location: AuthLocation,
    /// Precomputed `Authorization` value, present in header mode only
    bearer: Option<HeaderValue>,
    default_headers: HeaderMap,
}

impl SteamWebApiProvider {
    /// Create a provider from configuration, sending through `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No API key is configured (and, with the `env` feature, none is set in
    ///   `STEAMWEBAPI_KEY`)
    /// - The base URL is empty, unparseable or not http/https
    /// - The key or user agent cannot be used as a header value
    pub fn new(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Result<Self> {
        let api_key = resolve_api_key(config)?;
        let base_url = parse_base_url(config.base_url.as_deref())?;

        let bearer = match config.auth_location {
            AuthLocation::Query => None,
            AuthLocation::Header => {
                let mut value =
                    HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
                        .map_err(|_| {
                            Error::InvalidHeaderValue("API key is not a valid header value".into())
                        })?;
                value.set_sensitive(true);
                Some(value)
            }
        };

        let mut default_headers = config.default_headers.clone();
        let user_agent = config.user_agent.clone().unwrap_or_else(default_user_agent);
        let user_agent = HeaderValue::from_str(&user_agent)
            .map_err(|_| Error::InvalidHeaderValue(user_agent.clone()))?;
        default_headers.insert(USER_AGENT, user_agent);

        let engine = RetryEngine::new(transport, config.retry.clone()).with_sleeper(sleeper);

        Ok(Self {
            inner: Arc::new(ProviderInner {
                engine,
                base_url,
                api_key,
                production: config.production,
                auth_location: config.auth_location,
                bearer,
                default_headers,
            }),
        })
    }

    /// Same provider, sleeping through a different clock.
    pub fn with_sleeper(&self, sleeper: Arc<dyn Sleeper>) -> Self {
        let mut inner = (*self.inner).clone();
        inner.engine = inner.engine.with_sleeper(sleeper);
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Create a request builder for a route.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be constructed from the base URL and path.
    pub fn create_request(&self, route: Route) -> Result<RequestBuilder> {
        let url = self.endpoint_url(route.path())?;
        let inner = &self.inner;

        let mut builder = RequestBuilder::new(route, url, inner.engine.clone())
            .headers_from(&inner.default_headers);

        match &inner.bearer {
            Some(bearer) => builder = builder.header(AUTHORIZATION, bearer.clone()),
            None => builder = builder.query(KEY_PARAM, inner.api_key.expose_secret()),
        }

        Ok(builder.query(PRODUCTION_PARAM, if inner.production { "1" } else { "0" }))
    }

    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.inner.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| {
            Error::InvalidUrl(format!(
                "Failed to construct URL from path '{}': {}",
                path, e
            ))
        })
    }

    /// The base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Whether requests are flagged as production traffic.
    pub fn production(&self) -> bool {
        self.inner.production
    }

    /// Where the API key is sent.
    pub fn auth_location(&self) -> AuthLocation {
        self.inner.auth_location
    }

    /// The retry engine shared by every request.
    pub fn engine(&self) -> &RetryEngine {
        &self.inner.engine
    }

    /// The transport shared by every request.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        self.inner.engine.transport()
    }
}

fn resolve_api_key(config: &ClientConfig) -> Result<SecretString> {
    if let Some(key) = &config.api_key {
        return Ok(key.clone());
    }

    #[cfg(feature = "env")]
    if let Ok(key) = std::env::var(API_KEY_ENV)
        && !key.trim().is_empty()
    {
        return Ok(SecretString::from(key));
    }

    Err(Error::MissingConfig(format!(
        "No API key provided. Set {} or provide one explicitly.",
        API_KEY_ENV
    )))
}

/// Validate and parse a base URL, falling back to the public API.
pub(crate) fn parse_base_url(base_url: Option<&str>) -> Result<Url> {
    let base_url = base_url.unwrap_or(crate::DEFAULT_BASE_URL);

    if base_url.trim().is_empty() {
        return Err(Error::InvalidUrl("Base URL cannot be empty".to_string()));
    }

    let url: Url = base_url
        .trim()
        .parse()
        .map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::InvalidUrl(format!(
            "Invalid URL scheme '{}'. Only 'http' and 'https' are supported.",
            scheme
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::routes;
    use steamwebapi_core::sleep::TokioSleeper;
    use steamwebapi_transport::testing::ScriptedTransport;

    fn provider(config: ClientConfig) -> Result<SteamWebApiProvider> {
        SteamWebApiProvider::new(
            &config,
            Arc::new(ScriptedTransport::new()),
            Arc::new(TokioSleeper),
        )
    }

    #[test]
    fn test_query_auth_and_production_flag() {
        let provider = provider(ClientConfig::with_api_key("secret")).unwrap();
        let request = provider.create_request(routes::ACCOUNT_ME).unwrap().build().unwrap();

        assert_eq!(request.url, "https://www.steamwebapi.com/account/me");
        assert_eq!(request.query_value("key"), Some("secret"));
        assert_eq!(request.query_value("production"), Some("1"));
        assert_eq!(request.get_header("authorization"), None);
        assert_eq!(
            request.get_header("user-agent"),
            Some(default_user_agent().as_str())
        );
    }

    #[test]
    fn test_header_auth_and_development_mode() {
        let config = ClientConfig {
            auth_location: AuthLocation::Header,
            production: false,
            ..ClientConfig::with_api_key("secret")
        };
        let provider = provider(config).unwrap();
        let request = provider.create_request(routes::ITEM).unwrap().build().unwrap();

        assert_eq!(request.query_value("key"), None);
        assert_eq!(request.query_value("production"), Some("0"));
        assert_eq!(request.get_header("authorization"), Some("Bearer secret"));
    }

    #[test]
    fn test_base_url_with_prefix_is_kept() {
        let config = ClientConfig {
            base_url: Some("http://localhost:8080/proxy/".to_string()),
            ..ClientConfig::with_api_key("secret")
        };
        let provider = provider(config).unwrap();
        let request = provider.create_request(routes::PROFILE).unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/proxy/steam/api/profile"
        );
    }

    #[test]
    fn test_custom_user_agent_and_default_headers() {
        let mut config = ClientConfig::with_api_key("secret");
        config.user_agent = Some("my-bot/1.0".to_string());
        config
            .default_headers
            .insert("x-trace", HeaderValue::from_static("abc"));

        let request = provider(config)
            .unwrap()
            .create_request(routes::ACCOUNT_ME)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.get_header("user-agent"), Some("my-bot/1.0"));
        assert_eq!(request.get_header("x-trace"), Some("abc"));
    }

    #[test]
    fn test_missing_key_is_missing_config() {
        temp_env::with_var_unset(API_KEY_ENV, || {
            let result = provider(ClientConfig::default());
            assert!(matches!(result, Err(Error::MissingConfig(_))));
        });
    }

    #[test]
    fn test_parse_base_url_validation() {
        assert!(parse_base_url(None).is_ok());
        assert!(matches!(parse_base_url(Some("  ")), Err(Error::InvalidUrl(msg)) if msg.contains("empty")));
        assert!(matches!(parse_base_url(Some("ftp://example.com")), Err(Error::InvalidUrl(msg)) if msg.contains("ftp")));
        assert!(matches!(parse_base_url(Some("not a url")), Err(Error::InvalidUrl(_))));
    }
}
