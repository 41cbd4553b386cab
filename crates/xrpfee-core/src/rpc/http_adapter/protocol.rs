use crate::error::CoreError;

/// One request per HTTP exchange, so the id never varies.
pub(super) const REQUEST_ID: u64 = 1;

// Field order is the wire order.
#[derive(serde::Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) method: &'a str,
    pub(super) params: &'a [serde_json::Value],
    pub(super) id: u64,
}

pub(super) fn encode_request(
    method: &str,
    params: &[serde_json::Value],
) -> Result<Vec<u8>, CoreError> {
    let req = JsonRpcRequest {
        jsonrpc: "2.0",
        method,
        params,
        id: REQUEST_ID,
    };
    serde_json::to_vec(&req).map_err(CoreError::Encoding)
}
