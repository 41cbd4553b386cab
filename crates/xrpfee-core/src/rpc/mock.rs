use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::CoreError;

use super::XrplRpc;

/// A mock XRPL RPC backend for testing. Every call records its method and
/// params, then replays the canned reply.
pub struct MockRpc {
    reply: Reply,
    calls: Mutex<Vec<(String, Vec<serde_json::Value>)>>,
}

enum Reply {
    Body(Vec<u8>),
    Remote(u16),
}

impl MockRpc {
    pub fn with_body(body: impl Into<Vec<u8>>) -> Self {
        Self::new(Reply::Body(body.into()))
    }

    pub fn with_status(status: u16) -> Self {
        Self::new(Reply::Remote(status))
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<serde_json::Value>)> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl XrplRpc for MockRpc {
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<Vec<u8>, CoreError> {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push((method.to_owned(), params));
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Remote(status) => Err(CoreError::Remote { status: *status }),
        }
    }
}
