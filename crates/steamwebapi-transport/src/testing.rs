//! Testing utilities
//!
//! Provides a scripted transport so retry logic can be exercised without a
//! network: responses are replayed in order and every request is recorded.

use crate::error::{Result, TransportError};
use crate::traits::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Transport that replays a fixed script of responses.
///
/// Allows tests to:
/// - Queue responses (or transport failures) in the order they should occur
/// - Inspect every request that was sent
/// - Count how many times `close` actually released something
///
/// Once the script is exhausted, further requests fail with a transport error
/// so an unexpected extra attempt shows up as a test failure.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<VecDeque<Result<HttpResponse>>>>,
    sent: Arc<Mutex<Vec<HttpRequest>>>,
    closed: Arc<AtomicBool>,
    close_count: Arc<AtomicUsize>,
}

impl ScriptedTransport {
    /// Create a transport with an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport that answers with the given status codes, in order,
    /// each with an empty JSON object body
    pub fn with_statuses(statuses: impl IntoIterator<Item = u16>) -> Self {
        let transport = Self::new();
        for status in statuses {
            transport.push_json(status, "{}");
        }
        transport
    }

    /// Queue a response
    pub fn push(&self, response: HttpResponse) -> &Self {
        self.lock_script().push_back(Ok(response));
        self
    }

    /// Queue a response with a JSON body
    pub fn push_json(&self, status: u16, body: &str) -> &Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        self.push(HttpResponse::new(status, headers, body.as_bytes().to_vec()))
    }

    /// Queue a response with arbitrary headers and body
    pub fn push_with_headers(
        &self,
        status: u16,
        headers: &[(&str, &str)],
        body: impl Into<bytes::Bytes>,
    ) -> &Self {
        let headers = headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.push(HttpResponse::new(status, headers, body))
    }

    /// Queue a transport failure
    pub fn push_error(&self, error: TransportError) -> &Self {
        self.lock_script().push_back(Err(error));
        self
    }

    /// All requests sent so far
    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of requests sent so far
    pub fn attempts(&self) -> usize {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Number of queued responses not yet consumed
    pub fn remaining(&self) -> usize {
        self.lock_script().len()
    }

    /// How many times `close` released the transport
    pub fn close_count(&self) -> usize {
        self.close_count.load(Ordering::SeqCst)
    }

    fn lock_script(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<HttpResponse>>> {
        self.script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse> {
        if self.is_closed() {
            return Err(TransportError::Closed);
        }

        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request);

        self.lock_script().pop_front().unwrap_or_else(|| {
            Err(TransportError::Http(
                "scripted transport has no response left".to_string(),
            ))
        })
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    async fn close(&self) -> Result<()> {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.close_count.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}
