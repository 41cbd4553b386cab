use async_trait::async_trait;
use reqwest::{header, StatusCode, Url};
use tracing::{debug, trace};

use crate::error::CoreError;

use super::super::types::RpcConfig;
use super::super::XrplRpc;
use super::connection::parse_connection;
use super::protocol::{encode_request, REQUEST_ID};

/// XRPL JSON-RPC client over HTTP(S).
///
/// Sends one POST per call with no authentication or extra headers. The
/// underlying connection pool belongs to the `reqwest::Client` and is closed
/// when the client is dropped.
pub struct HttpRpcClient {
    client: reqwest::Client,
    url: Url,
}

impl HttpRpcClient {
    /// Create a client for `config.url`, which must be an `http://` or
    /// `https://` URL. Provider tokens embedded in the path are kept as-is.
    pub fn new(config: &RpcConfig) -> Result<Self, CoreError> {
        let url = parse_connection(&config.url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CoreError::InvalidConfig(format!("build HTTP client: {e}")))?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl XrplRpc for HttpRpcClient {
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<Vec<u8>, CoreError> {
        debug!(
            rpc.id = REQUEST_ID,
            rpc.method = method,
            rpc.params = params.len(),
            "rpc call"
        );
        let body = encode_request(method, &params)?;

        let response = self
            .client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status();

        if status != StatusCode::OK {
            debug!(rpc.method = method, %status, "rpc endpoint rejected request");
            return Err(CoreError::Remote {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!(rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(
            rpc.method = method,
            body = %String::from_utf8_lossy(&body),
            "rpc response body"
        );

        Ok(body.to_vec())
    }
}
