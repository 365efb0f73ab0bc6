use anyhow::Result;
use chain_explorer::rpc::{self, convert_transaction};
use chain_explorer::ExplorerConfig;
use solana_transaction_status::EncodedConfirmedTransactionWithStatusMeta;

mod common;

use common::load_fixture;

const DEFAULT_SIGNATURE: &str =
    "b15toBqDHKvVy7KQeAMDiEfinqg4Y8tDorUNHBd4FVojvqGyvZMELVkAz5BrNrc9AiA1zvRAZ9FfWM7qjWUQW9u";

#[test]
fn parsed_transaction_is_converted() -> Result<()> {
    let encoded: EncodedConfirmedTransactionWithStatusMeta =
        serde_json::from_str(&load_fixture("encoded_tx.json")?)?;

    let tx = convert_transaction(encoded)?;

    assert_eq!(tx.signature, "encoded-signature");
    assert_eq!(tx.slot, 245_120_331);
    assert_eq!(tx.block_time, Some(1_706_000_000));
    assert_eq!(tx.account_keys.len(), 4);
    assert_eq!(tx.account_keys[3], "LookupLoaded1111111111111111111111111111111");

    let post = tx.post_token_balances.as_ref().expect("post balances");
    assert_eq!(post.len(), 2);
    assert_eq!(post[1].account_index, 3);
    assert_eq!(post[1].ui_token_amount.ui_amount_str(), Some("9.5"));
    assert_eq!(
        post[1].owner.as_deref(),
        Some("FeePayer11111111111111111111111111111111111")
    );

    let rows = tx.token_balance_rows()?.expect("rows");
    let deltas: Vec<String> = rows.iter().map(|row| row.delta.to_plain_string()).collect();
    assert_eq!(deltas, vec!["-9.5", "9.5"]);
    assert_eq!(rows[1].account, "LookupLoaded1111111111111111111111111111111");

    Ok(())
}

#[test]
#[ignore]
fn fetch_and_reconcile_live_transaction() -> Result<()> {
    let config = ExplorerConfig::from_env();
    let signature =
        std::env::var("SOLANA_TX_SIGNATURE").unwrap_or_else(|_| DEFAULT_SIGNATURE.to_string());

    let tx = rpc::fetch_transaction(&config, &signature)?;
    let rows = tx.token_balance_rows()?;
    println!("{}", serde_json::to_string_pretty(&rows)?);

    assert_eq!(tx.signature, signature);
    assert!(tx.slot > 0);

    Ok(())
}
