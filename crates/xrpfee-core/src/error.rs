#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("encode JSON-RPC request: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("HTTP transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("RPC endpoint returned HTTP status {status}")]
    Remote { status: u16 },

    #[error("decode fee response: {0}")]
    Decoding(String),

    #[error("invalid drops amount: {value:?}")]
    InvalidDrops { value: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    /// Short, stable name of the failure class, suitable for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Encoding(_) => "encoding",
            Self::Transport(_) => "transport",
            Self::Remote { .. } => "remote",
            Self::Decoding(_) => "decoding",
            Self::InvalidDrops { .. } => "invalid-drops",
            Self::InvalidConfig(_) => "config",
        }
    }
}
