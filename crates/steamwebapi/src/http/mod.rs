//! HTTP layer
//!
//! Route descriptors, the request builder, response decoding and the retry
//! engine that turns one logical request into as many physical attempts as
//! the server's status codes call for.

pub use provider::SteamWebApiProvider;
pub use request::{RequestBuilder, to_query_pairs};
pub use response::{RawResponse, Response, ResponseBody};
pub use retry::{AttemptState, Classification, RetryConfig, RetryEngine, RetryReason, Step};
pub use route::{Route, routes};

pub mod provider;
mod request;
mod response;
pub mod retry;
mod route;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
