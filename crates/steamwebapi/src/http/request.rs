//! HTTP request builder

use super::retry::RetryEngine;
use super::{Response, Route};
use crate::error::{Error, Result};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use steamwebapi_transport::HttpRequest;
use url::Url;

/// Builder for one logical API request.
///
/// Created by the client with authentication, mode flag and default headers
/// already applied; endpoint wrappers add their own query parameters and
/// call [`send`](Self::send).
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    route: Route,
    url: Url,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    engine: RetryEngine,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub(crate) fn new(route: Route, url: Url, engine: RetryEngine) -> Self {
        Self {
            route,
            url,
            query: Vec::new(),
            headers: HeaderMap::new(),
            engine,
        }
    }

    /// Set a query parameter, replacing any earlier value for the same key.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.query.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.query.push((key, value)),
        }
        self
    }

    /// Set every field of a serializable parameter struct as a query parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` does not serialize to a JSON object.
    pub fn query_params<T: Serialize + ?Sized>(self, params: &T) -> Result<Self> {
        Ok(to_query_pairs(params)?
            .into_iter()
            .fold(self, |builder, (k, v)| builder.query(k, v)))
    }

    /// Set a header.
    pub fn header(mut self, key: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Try to set a header, returning an error if the name or value is invalid.
    ///
    /// # Errors
    /// Returns an error if the header name or value contains invalid characters.
    pub fn try_header(self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<HeaderName>()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value = value_str
            .parse::<HeaderValue>()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        Ok(self.header(key, value))
    }

    /// Merge a set of headers, later values winning.
    pub(crate) fn headers_from(mut self, headers: &HeaderMap) -> Self {
        for (key, value) in headers {
            self.headers.insert(key.clone(), value.clone());
        }
        self
    }

    /// Get the route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Get the URL, without query string.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the query parameters.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Get a query parameter by name.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Build the transport-level request that every attempt re-sends.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidHeaderValue` if a header value is not visible
    /// ASCII, since the transport carries headers as text.
    pub fn build(&self) -> Result<HttpRequest> {
        let mut request = HttpRequest::new(self.route.method().clone(), self.url.as_str());
        request.query = self.query.clone();
        for (key, value) in &self.headers {
            let text = value.to_str().map_err(|_| {
                Error::InvalidHeaderValue(format!("{}: {:?}", key, value.as_bytes()))
            })?;
            request.headers.insert(key.as_str().to_string(), text.to_string());
        }
        Ok(request)
    }

    /// Send the request through the retry engine.
    pub async fn send(self) -> Result<Response> {
        let request = self.build()?;
        self.engine.execute(request).await
    }
}

/// Flatten a serializable value into query pairs.
///
/// Strings are sent verbatim, numbers and booleans in their JSON spelling,
/// sequences comma-joined, `None`/null fields omitted.
pub fn to_query_pairs<T: Serialize + ?Sized>(params: &T) -> Result<Vec<(String, String)>> {
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(key, value)| query_value(value).map(|v| (key, v)))
            .collect()),
        Value::Null => Ok(Vec::new()),
        other => Err(Error::InvalidRequest(format!(
            "query parameters must be a struct or map, got {}",
            other
        ))),
    }
}

fn query_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.into_iter().filter_map(query_value).collect();
            Some(parts.join(","))
        }
        other @ Value::Object(_) => Some(other.to_string()),
    }
}
