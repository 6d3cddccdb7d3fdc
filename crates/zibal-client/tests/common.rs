//! Common test utilities for zibal-client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use url::Url;
use wiremock::MockServer;

use zibal_client::{
    Config, LogLevel, ResponseMeta, Transport, TransportError, TransportResponse, ZibalClient,
};

pub const MERCHANT: &str = "zibal";
pub const CALLBACK_URL: &str = "https://shop.example.com/callback";

/// What the stub transport answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    /// A 200 response with these body bytes.
    Body(Vec<u8>),
    /// A 200 response whose body could not be read.
    NoBody,
    /// No response at all.
    Fail,
}

/// Transport that records calls and returns a canned reply.
#[derive(Debug)]
pub struct StubTransport {
    reply: Reply,
    calls: AtomicUsize,
    last_body: Mutex<Option<Vec<u8>>>,
}

impl StubTransport {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_body: Mutex::new(None),
        })
    }

    pub fn json(value: &serde_json::Value) -> Arc<Self> {
        Self::new(Reply::Body(serde_json::to_vec(value).unwrap()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<serde_json::Value> {
        let body = self.last_body.lock().unwrap().clone()?;
        Some(serde_json::from_slice(&body).unwrap())
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn post(&self, url: &Url, body: Vec<u8>) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_body.lock().unwrap() = Some(body);

        let meta = ResponseMeta {
            url: url.clone(),
            status: StatusCode::OK,
            headers: HeaderMap::new(),
        };

        match &self.reply {
            Reply::Body(bytes) => Ok(TransportResponse {
                meta,
                body: Some(bytes.clone()),
            }),
            Reply::NoBody => Ok(TransportResponse { meta, body: None }),
            Reply::Fail => Err(TransportError::Other("connection refused".to_string())),
        }
    }
}

pub fn config() -> Config {
    Config::new(MERCHANT, CALLBACK_URL, LogLevel::Verbose).unwrap()
}

/// A configured client over the given stub.
pub fn stub_client(transport: &Arc<StubTransport>) -> ZibalClient {
    ZibalClient::with_transport(transport.clone()).with_config(config())
}

/// A configured `reqwest`-backed client talking to a mock gateway.
pub fn mock_client(server: &MockServer) -> ZibalClient {
    ZibalClient::new()
        .with_base_url(server.uri())
        .with_config(config())
}
