//! txledger CLI: fetch a wallet's transaction history and export it as CSV.

use clap::Parser;
use std::path::PathBuf;
use tracing::error;
use txledger::{normalize_all, FetchConfig, Fetcher};
use txledger_export::write_csv;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_writer(std::io::stderr)
        .init();
    let cli = parse_args();
    if let Err(msg) = validate_address(&cli.address) {
        eprintln!("{msg}");
        std::process::exit(1);
    }
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(2);
    }
}

#[derive(Parser)]
#[command(name = "txledger")]
#[command(author = "gorusys <goru.connector@outlook.com>")]
#[command(about = "Export a wallet's normal, internal, ERC-20 and ERC-721 transfers to CSV")]
struct Cli {
    /// Wallet address (0x-prefixed, 20 bytes of hex).
    address: String,
    /// First block to include.
    #[arg(long)]
    from_block: Option<u64>,
    /// Last block to include.
    #[arg(long)]
    to_block: Option<u64>,
    /// Output path; defaults to <address>_transactions.csv in the working
    /// directory.
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Parse arguments. A usage error exits with code 1; help and version
/// requests exit with 0.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}

fn validate_address(address: &str) -> Result<(), String> {
    let hex = address
        .strip_prefix("0x")
        .ok_or_else(|| format!("invalid address {address}: expected 0x prefix"))?;
    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!(
            "invalid address {address}: expected 40 hex digits after 0x"
        ));
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = FetchConfig::from_env()?;
    let fetcher = Fetcher::new(config)?;
    let rt = tokio::runtime::Runtime::new()?;

    // One sequential fetch per category; a failed category contributes zero
    // records and the run continues.
    let records = normalize_all(|category| {
        rt.block_on(fetcher.account_txs(&cli.address, category, cli.from_block, cli.to_block))
    });

    let out_path = cli
        .out
        .unwrap_or_else(|| PathBuf::from(format!("{}_transactions.csv", cli.address)));
    match write_csv(&records, &out_path) {
        Ok(()) => {
            println!("Exported {} records to {}", records.len(), out_path.display());
        }
        Err(e) => {
            error!(path = %out_path.display(), error = %e, "failed to write output file");
        }
    }
    Ok(())
}
