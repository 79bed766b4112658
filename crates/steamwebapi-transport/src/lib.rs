//! Physical transport layer for the steamwebapi SDK
//!
//! Provides a trait-based abstraction over a single HTTP round-trip. The SDK's
//! retry engine drives a [`Transport`] once per physical attempt, which lets
//! tests substitute scripted transports for the network.
//!
//! # Architecture
//!
//! - **Transport trait**: one request in, one response out, any status code
//! - **HTTP transport**: shared reqwest connection pool with deterministic close

#![deny(unsafe_code)]
#![warn(missing_docs)]
//! - **Error handling**: failures to obtain a response at all
//!
//! # Usage
//!
//! ```no_run
//! use steamwebapi_transport::{HttpRequest, HttpTransport, Transport};
//! use http::Method;
//!
//! # async fn example() -> steamwebapi_transport::Result<()> {
//! let transport = HttpTransport::new()?;
//! let request = HttpRequest::new(Method::GET, "https://www.steamwebapi.com/account/me")
//!     .with_query("key", "your-key");
//! let response = transport.send_http(request).await?;
//! println!("status {}", response.status);
//! transport.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod testing;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, TransportError};
pub use self::http::{HttpTransport, HttpTransportConfig};
pub use traits::{HttpRequest, HttpResponse, Transport};
