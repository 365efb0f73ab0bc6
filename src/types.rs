use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::core::balance_reconciler::reconcile;
use crate::core::error::ExplorerError;
use crate::validators::stake::StakeAccount;

/// Raw token amount together with its decimal-scaled UI representations.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiTokenAmount {
    pub amount: String,
    pub decimals: u8,
    #[serde(default)]
    pub ui_amount: Option<f64>,
    #[serde(default)]
    pub ui_amount_string: Option<String>,
}

impl UiTokenAmount {
    /// Zero balance for a token with the given decimals.
    pub fn zero(decimals: u8) -> Self {
        Self {
            amount: "0".to_string(),
            decimals,
            ui_amount: Some(0.0),
            ui_amount_string: Some("0".to_string()),
        }
    }

    /// The UI amount string, or `None` when the node did not provide one.
    ///
    /// Nodes that dropped the legacy `uiAmount` field report an empty string here,
    /// which is treated the same as a missing value.
    pub fn ui_amount_str(&self) -> Option<&str> {
        self.ui_amount_string
            .as_deref()
            .filter(|value| !value.is_empty())
    }
}

/// Token balance of one transaction account at a point in time (pre or post execution).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub account_index: usize,
    pub mint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub ui_token_amount: UiTokenAmount,
}

/// One line of the token balances table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChangeRow {
    pub account: String,
    pub mint: String,
    /// Balance after the transaction executed.
    pub balance: UiTokenAmount,
    #[serde(with = "crate::validators::decimal")]
    pub delta: BigDecimal,
    pub account_index: usize,
}

/// Transaction fields needed by the detail views.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetail {
    pub signature: String,
    pub slot: u64,
    #[serde(default)]
    pub block_time: Option<i64>,
    #[serde(default)]
    pub account_keys: Vec<String>,
    #[serde(default)]
    pub pre_token_balances: Option<Vec<TokenBalance>>,
    #[serde(default)]
    pub post_token_balances: Option<Vec<TokenBalance>>,
}

impl TransactionDetail {
    /// Token balance rows for this transaction.
    ///
    /// `Ok(None)` means there is nothing to show: balances or account keys are
    /// missing, or no row survived reconciliation.
    pub fn token_balance_rows(&self) -> Result<Option<Vec<BalanceChangeRow>>, ExplorerError> {
        let (Some(pre), Some(post)) = (&self.pre_token_balances, &self.post_token_balances) else {
            return Ok(None);
        };
        if self.account_keys.is_empty() {
            return Ok(None);
        }

        let rows = reconcile(pre, post, &self.account_keys)?;
        Ok(if rows.is_empty() { None } else { Some(rows) })
    }
}

/// Account info as shown on the address page.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetail {
    #[serde(with = "crate::validators::pubkey")]
    pub pubkey: Pubkey,
    pub lamports: u64,
    pub owner: String,
    pub executable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<u64>,
    pub data: AccountData,
}

/// Decoded account data.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AccountData {
    Stake(StakeAccount),
    Parsed {
        program: String,
        parsed: serde_json::Value,
    },
    Binary,
}
