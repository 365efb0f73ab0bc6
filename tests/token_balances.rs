use std::fs;

use anyhow::Result;
use chain_explorer::render::TokenBalancesTable;
use chain_explorer::{ExplorerError, TransactionDetail};
use serde_json::Value;

mod common;

use common::load_transaction;

#[test]
fn token_balance_rows_match_expected() -> Result<()> {
    let tx = load_transaction("token_balances_tx.json")?;
    let expected_data = fs::read_to_string("tests/expected/token_balances_rows.json")?;

    let rows = tx.token_balance_rows()?.expect("rows for fixture transaction");

    let actual: Value = serde_json::to_value(&rows)?;
    let expected: Value = serde_json::from_str(&expected_data)?;
    assert_eq!(actual, expected);

    Ok(())
}

#[test]
fn rendered_table_keeps_row_order() -> Result<()> {
    let tx = load_transaction("token_balances_tx.json")?;
    let rows = tx.token_balance_rows()?.expect("rows for fixture transaction");

    let rendered = TokenBalancesTable::new(&rows, "UNITs").to_string();
    println!("{rendered}");

    let usdc = rendered.find("UsdcHolder").expect("usdc row");
    let closed = rendered.find("ClosedAccount").expect("closed row");
    let new = rendered.find("NewAccount").expect("new row");
    assert!(usdc < closed && closed < new);
    assert!(rendered.contains("-25.25"));
    assert!(rendered.contains("75.25 UNITs"));

    Ok(())
}

#[test]
fn missing_balances_render_nothing() -> Result<()> {
    let mut tx = load_transaction("token_balances_tx.json")?;
    tx.post_token_balances = None;
    assert_eq!(tx.token_balance_rows()?, None);

    let mut tx = load_transaction("token_balances_tx.json")?;
    tx.account_keys.clear();
    assert_eq!(tx.token_balance_rows()?, None);

    let tx = TransactionDetail {
        pre_token_balances: Some(Vec::new()),
        post_token_balances: Some(Vec::new()),
        account_keys: vec!["FeePayer11111111111111111111111111111111111".to_string()],
        ..TransactionDetail::default()
    };
    assert_eq!(tx.token_balance_rows()?, None);

    Ok(())
}

#[test]
fn truncated_account_keys_are_rejected() -> Result<()> {
    let mut tx = load_transaction("token_balances_tx.json")?;
    tx.account_keys.truncate(3);

    let err = tx.token_balance_rows().unwrap_err();

    assert_eq!(err, ExplorerError::AccountIndexOutOfRange { index: 3, len: 3 });
    Ok(())
}

#[test]
fn high_decimal_mint_serializes_plain_delta() -> Result<()> {
    let tx: TransactionDetail = serde_json::from_value(serde_json::json!({
        "signature": "high-decimals",
        "slot": 1,
        "accountKeys": ["HolderAccount1111111111111111111111111111111"],
        "preTokenBalances": [],
        "postTokenBalances": [{
            "accountIndex": 0,
            "mint": "DustMint11111111111111111111111111111111111",
            "uiTokenAmount": {
                "amount": "1",
                "decimals": 30,
                "uiAmount": 1e-30,
                "uiAmountString": "0.000000000000000000000000000001"
            }
        }]
    }))?;

    let rows = tx.token_balance_rows()?.expect("row for dust balance");
    let value = serde_json::to_value(&rows)?;

    assert_eq!(value[0]["delta"], "0.000000000000000000000000000001");
    Ok(())
}
