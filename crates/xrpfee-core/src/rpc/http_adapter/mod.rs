//! Native JSON-RPC client for XRPL `rippled`-compatible endpoints.
//!
//! Implements [`XrplRpc`](super::XrplRpc) over HTTP(S) using `reqwest`. One
//! call is one POST; there is no batching, retrying or caching.

mod client;
mod connection;
mod protocol;

pub use client::HttpRpcClient;
