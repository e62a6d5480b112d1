//! Recording stub transport shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use lacuna_signer::{ApiRequest, ApiResponse, Transport};
use reqwest::Method;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Answers requests from canned responses keyed by method and path, and
/// records every request it receives. Unstubbed routes answer 404.
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<HashMap<(Method, String), ApiResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
    closes: AtomicUsize,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        self.responses.lock().unwrap().insert(
            (method, path.to_string()),
            ApiResponse::new(status, body.to_string().into_bytes()),
        );
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests as "METHOD /path", in the order they were sent.
    pub fn calls(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }

    /// Body of the first request sent to `path`.
    pub fn body_of(&self, path: &str) -> serde_json::Value {
        self.requests()
            .into_iter()
            .find(|r| r.path == path)
            .and_then(|r| r.body)
            .unwrap_or_else(|| panic!("no request body sent to {path}"))
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: ApiRequest) -> lacuna_signer::Result<ApiResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let key = (request.method.clone(), request.path.clone());
        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| {
                ApiResponse::new(
                    404,
                    br#"{"code":"NotStubbed","message":"no stubbed response"}"#.to_vec(),
                )
            }))
    }

    fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}
