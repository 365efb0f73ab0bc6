use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chain_explorer::render::{render_account, TokenBalancesTable};
use chain_explorer::rpc::{self, RpcAccountSource};
use chain_explorer::{AddressLoader, AddressView, ClusterStatus, ExplorerConfig, TransactionDetail};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Inspect transactions and accounts", long_about = None)]
struct Cli {
    /// RPC endpoint URL (defaults to SOLANA_RPC_URL, then mainnet-beta)
    #[arg(long, global = true)]
    rpc_url: Option<String>,
    /// Commitment level used for RPC requests
    #[arg(long, global = true)]
    commitment: Option<String>,
    /// Unit shown after post balances
    #[arg(long, global = true)]
    unit_suffix: Option<String>,
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show token balance changes of a transaction fetched by signature
    Tx {
        #[arg(long)]
        signature: String,
    },
    /// Show token balance changes of a transaction stored as JSON
    TxFile {
        #[arg(long)]
        file: PathBuf,
    },
    /// Show account details for an address
    Address {
        #[arg(long)]
        address: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .compact()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    let config =
        ExplorerConfig::from_env().with_overrides(cli.rpc_url, cli.commitment, cli.unit_suffix);

    match cli.command {
        Commands::Tx { signature } => {
            let tx = rpc::fetch_transaction(&config, &signature)?;
            print_token_balances(&tx, &config, cli.json)?;
        }
        Commands::TxFile { file } => {
            let data = fs::read(&file).with_context(|| format!("failed to read {:?}", file))?;
            let tx: TransactionDetail = serde_json::from_slice(&data)
                .with_context(|| format!("failed to parse JSON in {:?}", file))?;
            print_token_balances(&tx, &config, cli.json)?;
        }
        Commands::Address { address } => {
            let source = RpcAccountSource::new(&config)?;
            let mut loader = AddressLoader::new(source);
            match loader.view(&address, ClusterStatus::Connected) {
                AddressView::Loaded(detail) if cli.json => {
                    println!("{}", serde_json::to_string_pretty(&detail)?)
                }
                AddressView::Loaded(detail) => println!("{}", render_account(&detail)),
                AddressView::Invalid(message) => anyhow::bail!(message),
                AddressView::NotFound(pubkey) => println!("Account {pubkey} not found"),
                AddressView::Failed { message, .. } => anyhow::bail!(message),
                AddressView::Loading(pubkey) => println!("Account {pubkey} is loading"),
            }
        }
    }

    Ok(())
}

fn print_token_balances(tx: &TransactionDetail, config: &ExplorerConfig, json: bool) -> Result<()> {
    let Some(rows) = tx.token_balance_rows()? else {
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("Token Balances ({})", tx.signature);
        println!("{}", TokenBalancesTable::new(&rows, &config.unit_suffix));
    }
    Ok(())
}
