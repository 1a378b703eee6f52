//! HTTP relay client.

use crate::config::ClientConfig;
use crate::stream::ChunkStream;
use reqwest::header::HeaderMap;
use serde::Serialize;
use trickle_types::RelayError;

/// Client that relays one streaming POST per call.
///
/// Holds no per-call state; concurrent `send` calls each own their request
/// and connection. If the configuration names a proxy, every request issued
/// by this client routes through it for the client's lifetime.
#[derive(Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RelayClient {
    /// Create a new relay client.
    ///
    /// Fails if the configured proxy URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, RelayError> {
        let mut builder = reqwest::Client::builder();

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| RelayError::Config {
                message: format!("invalid proxy URL '{proxy_url}': {e}"),
            })?;
            builder = builder.proxy(proxy);
        }

        let http = builder.build().map_err(|e| RelayError::Config {
            message: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self { http, config })
    }

    /// The configured API key, for providers building auth headers.
    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// The configured endpoint URL.
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    /// POST `payload` as JSON to the configured endpoint and stream the
    /// response body.
    ///
    /// Lazy: no I/O happens until the returned stream is first polled.
    /// The stream ends silently on HTTP or transport errors after logging
    /// them; [`ChunkStream::outcome`] reports which way it ended.
    pub fn send<T: Serialize + ?Sized>(&self, headers: HeaderMap, payload: &T) -> ChunkStream {
        if let Some(proxy) = &self.config.proxy {
            tracing::debug!("routing request through proxy {proxy}");
        }

        let request = self
            .http
            .post(&self.config.api_url)
            .headers(headers)
            .json(payload);

        ChunkStream::new(request)
    }
}
