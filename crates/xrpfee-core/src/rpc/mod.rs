//! XRPL JSON-RPC abstraction layer.
//!
//! Defines the [`XrplRpc`] trait and provides an HTTP JSON-RPC
//! implementation ([`HttpRpcClient`]) plus a test mock (`mock::MockRpc`).

mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use http_adapter::HttpRpcClient;
pub use types::RpcConfig;

use async_trait::async_trait;

use crate::error::CoreError;

/// Transport seam for XRPL JSON-RPC methods.
///
/// Implementations wrap `method` and `params` in a JSON-RPC 2.0 envelope,
/// deliver it, and hand back the raw response body without interpreting it.
#[async_trait]
pub trait XrplRpc: Send + Sync {
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<Vec<u8>, CoreError>;
}
