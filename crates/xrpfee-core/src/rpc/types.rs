//! Client configuration.

use std::time::Duration;

/// Public XRPL JSON-RPC endpoint used when nothing else is configured.
pub const DEFAULT_RPC_URL: &str = "https://s1.ripple.com:51234/";

/// Connection settings for [`HttpRpcClient`](super::HttpRpcClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
    pub url: String,
    /// Upper bound on a whole request. `None` leaves the transport default,
    /// which never times out.
    pub timeout: Option<Duration>,
}

impl RpcConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RPC_URL)
    }
}
