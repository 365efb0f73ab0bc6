//! Pre/post token balance reconciliation for the transaction token balances table.

use std::collections::BTreeMap;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use tracing::debug;

use crate::core::error::ExplorerError;
use crate::types::{BalanceChangeRow, TokenBalance, UiTokenAmount};
use crate::validators::decimal::is_plain_decimal;

/// Turn the pre and post token balances of a transaction into display rows.
///
/// Accounts that only appear in `pre` were drained and closed; they get a
/// synthetic zero post balance so the outflow still shows up. An account
/// whose mint changed yields two rows, the old mint going to zero followed by
/// the new mint appearing. Entries without a UI amount string are skipped.
///
/// Rows come back ordered by account index.
pub fn reconcile(
    pre: &[TokenBalance],
    post: &[TokenBalance],
    accounts: &[String],
) -> Result<Vec<BalanceChangeRow>, ExplorerError> {
    let pre_map: BTreeMap<usize, &TokenBalance> =
        pre.iter().map(|balance| (balance.account_index, balance)).collect();
    let mut post_map: BTreeMap<usize, TokenBalance> = post
        .iter()
        .map(|balance| (balance.account_index, balance.clone()))
        .collect();

    for (&index, pre_balance) in &pre_map {
        post_map
            .entry(index)
            .or_insert_with(|| drained_balance(pre_balance));
    }

    let mut rows = Vec::with_capacity(post_map.len() + 1);

    for (index, post_balance) in post_map {
        let account = accounts
            .get(index)
            .ok_or(ExplorerError::AccountIndexOutOfRange {
                index,
                len: accounts.len(),
            })?;

        let Some(post_ui) = post_balance.ui_token_amount.ui_amount_str() else {
            debug!(index, mint = %post_balance.mint, "post balance has no ui amount, skipping");
            continue;
        };
        let post_amount = parse_ui_amount(post_ui)?;
        let pre_balance = pre_map.get(&index).copied();

        if let Some(pre_balance) = pre_balance.filter(|pre| pre.mint != post_balance.mint) {
            let Some(pre_ui) = pre_balance.ui_token_amount.ui_amount_str() else {
                debug!(index, mint = %pre_balance.mint, "pre balance has no ui amount, skipping");
                continue;
            };
            let pre_amount = parse_ui_amount(pre_ui)?;

            rows.push(BalanceChangeRow {
                account: account.clone(),
                mint: pre_balance.mint.clone(),
                balance: UiTokenAmount::zero(pre_balance.ui_token_amount.decimals),
                delta: (-pre_amount).normalized(),
                account_index: index,
            });
            rows.push(BalanceChangeRow {
                account: account.clone(),
                mint: post_balance.mint,
                balance: post_balance.ui_token_amount,
                delta: post_amount.normalized(),
                account_index: index,
            });
            continue;
        }

        let delta = match pre_balance {
            Some(pre_balance) => {
                let Some(pre_ui) = pre_balance.ui_token_amount.ui_amount_str() else {
                    debug!(index, mint = %pre_balance.mint, "pre balance has no ui amount, skipping");
                    continue;
                };
                post_amount - parse_ui_amount(pre_ui)?
            }
            None => post_amount,
        };

        rows.push(BalanceChangeRow {
            account: account.clone(),
            mint: post_balance.mint,
            balance: post_balance.ui_token_amount,
            delta: delta.normalized(),
            account_index: index,
        });
    }

    rows.sort_by_key(|row| row.account_index);
    Ok(rows)
}

/// Post balance standing in for a token account that was closed by the transaction.
fn drained_balance(pre: &TokenBalance) -> TokenBalance {
    TokenBalance {
        account_index: pre.account_index,
        mint: pre.mint.clone(),
        owner: pre.owner.clone(),
        ui_token_amount: UiTokenAmount {
            amount: "0".to_string(),
            decimals: pre.ui_token_amount.decimals,
            ui_amount: None,
            ui_amount_string: Some("0".to_string()),
        },
    }
}

fn parse_ui_amount(value: &str) -> Result<BigDecimal, ExplorerError> {
    let trimmed = value.trim();
    if !is_plain_decimal(trimmed) {
        return Err(ExplorerError::invalid_amount(value));
    }
    BigDecimal::from_str(trimmed).map_err(|_| ExplorerError::invalid_amount(value))
}
