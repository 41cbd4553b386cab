mod cli;
mod report;

use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};

use xrpfee_core::rpc::{HttpRpcClient, RpcConfig};
use xrpfee_core::CoreError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let config =
        RpcConfig::new(&args.rpc_url).with_timeout(args.timeout_secs.map(Duration::from_secs));
    let rpc = HttpRpcClient::new(&config).context("configure XRPL RPC client")?;

    let fee = xrpfee_core::get_fee(&rpc).await.map_err(|err| {
        tracing::debug!(error.kind = err.kind(), "fee query failed");
        eyre!(format_fee_error(&args.rpc_url, &err))
            .wrap_err("while fetching fee levels from the XRPL node")
    })?;

    let report = if args.strict {
        report::render_strict(&fee).context("fee response contains a malformed drops value")?
    } else {
        report::render(&fee)
    };
    print!("{report}");

    Ok(())
}

fn format_fee_error(rpc_url: &str, err: &CoreError) -> String {
    let mut lines = vec![
        format!("fee query against `{rpc_url}` failed"),
        format!("{} error: {err}", err.kind()),
    ];

    let hint = match err {
        CoreError::Transport(e) if e.is_timeout() => {
            Some("hint: the node did not answer in time; raise --timeout-secs or try another endpoint")
        }
        CoreError::Transport(e) if e.is_connect() => Some(
            "hint: could not connect; verify the hostname, port, and your network access",
        ),
        CoreError::Transport(_) => {
            Some("hint: the request could not be completed; verify the URL and endpoint reachability")
        }
        CoreError::Remote { status: 401 | 403 } => {
            Some("hint: authentication failed; verify the provider token in the URL path")
        }
        CoreError::Remote { status: 404 } => {
            Some("hint: endpoint path is invalid; verify the full RPC URL including token path")
        }
        CoreError::Remote { status: 429 } => {
            Some("hint: the provider is rate limiting requests; retry later")
        }
        CoreError::Decoding(_) => Some(
            "hint: the endpoint did not answer with XRPL JSON-RPC; verify it is a rippled JSON-RPC URL",
        ),
        _ => None,
    };
    lines.extend(hint.map(str::to_owned));

    lines.join("\n")
}
