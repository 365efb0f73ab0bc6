use std::fs;

use anyhow::{Context, Result};
use chain_explorer::TransactionDetail;

pub fn load_fixture(name: &str) -> Result<String> {
    fs::read_to_string(format!("tests/fixtures/{name}"))
        .with_context(|| format!("failed to read fixture {name}"))
}

pub fn load_transaction(name: &str) -> Result<TransactionDetail> {
    let data = load_fixture(name)?;
    serde_json::from_str(&data).with_context(|| format!("failed to parse fixture {name}"))
}
