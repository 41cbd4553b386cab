use clap::Parser;

use xrpfee_core::rpc::types::DEFAULT_RPC_URL;

/// xrpfee — print the current XRP Ledger transaction fee levels.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// XRPL JSON-RPC URL. Provider tokens may be part of the path.
    #[arg(long, default_value = DEFAULT_RPC_URL, env = "XRPFEE_RPC_URL")]
    pub rpc_url: String,

    /// Abort the request after this many seconds (default: wait indefinitely).
    #[arg(long, env = "XRPFEE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Fail instead of printing 0 XRP when a fee value is not a whole number of drops.
    #[arg(long)]
    pub strict: bool,
}
