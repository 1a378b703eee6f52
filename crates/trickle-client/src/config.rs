//! Client configuration.

/// Configuration for a [`RelayClient`](crate::RelayClient).
///
/// Immutable after construction. The proxy is an explicit field rather than
/// an ambient environment read; callers wanting env-driven behavior can pass
/// `std::env::var("PROXY").ok()` through [`ClientConfig::with_proxy`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub api_url: String,
    pub proxy: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with no proxy.
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: api_url.into(),
            proxy: None,
        }
    }

    /// Route all requests issued by the client through `proxy`.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }
}
