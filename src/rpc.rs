use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde_json::json;
use solana_account_decoder::{UiAccount, UiAccountEncoding};
use solana_client::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcTransactionConfig};
use solana_client::rpc_request::RpcRequest;
use solana_client::rpc_response::Response;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_transaction_status::{
    EncodedConfirmedTransactionWithStatusMeta, EncodedTransaction, UiLoadedAddresses, UiMessage,
    UiTransactionEncoding, UiTransactionStatusMeta, UiTransactionTokenBalance,
};
use tracing::{debug, info};

use crate::config::ExplorerConfig;
use crate::core::address::AccountSource;
use crate::types::{AccountDetail, TokenBalance, TransactionDetail, UiTokenAmount};
use crate::validators::decode_account;

fn commitment(config: &ExplorerConfig) -> Result<CommitmentConfig> {
    CommitmentConfig::from_str(&config.commitment)
        .map_err(|err| anyhow!("invalid commitment {:?}: {err}", config.commitment))
}

/// Fetch a transaction by signature and keep what the detail views need.
pub fn fetch_transaction(config: &ExplorerConfig, signature: &str) -> Result<TransactionDetail> {
    let client = RpcClient::new(config.rpc_url.clone());
    let signature = Signature::from_str(signature).context("invalid signature")?;
    let rpc_config = RpcTransactionConfig {
        encoding: Some(UiTransactionEncoding::JsonParsed),
        commitment: Some(commitment(config)?),
        max_supported_transaction_version: Some(0),
    };

    info!(%signature, rpc_url = %config.rpc_url, "fetching transaction");
    let encoded = client
        .get_transaction_with_config(&signature, rpc_config)
        .with_context(|| format!("failed to fetch transaction {signature}"))?;
    convert_transaction(encoded)
}

pub fn convert_transaction(
    tx: EncodedConfirmedTransactionWithStatusMeta,
) -> Result<TransactionDetail> {
    let ui_tx = match &tx.transaction.transaction {
        EncodedTransaction::Json(ui_tx) => ui_tx,
        _ => return Err(anyhow!("expected JSON encoded transaction")),
    };
    let signature = ui_tx
        .signatures
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("transaction missing signature"))?;
    let meta = tx.transaction.meta.as_ref();

    let account_keys = match &ui_tx.message {
        UiMessage::Raw(raw) => {
            let mut keys = raw.account_keys.clone();
            if let Some(meta) = meta {
                append_loaded_addresses(&mut keys, meta);
            }
            keys
        }
        // Parsed messages already list lookup table addresses.
        UiMessage::Parsed(parsed) => parsed
            .account_keys
            .iter()
            .map(|account| account.pubkey.clone())
            .collect(),
    };

    let (pre_token_balances, post_token_balances) = match meta {
        Some(meta) => (
            convert_token_balances(meta.pre_token_balances.as_ref().into()),
            convert_token_balances(meta.post_token_balances.as_ref().into()),
        ),
        None => {
            debug!(%signature, "transaction has no status meta");
            (None, None)
        }
    };

    Ok(TransactionDetail {
        signature,
        slot: tx.slot,
        block_time: tx.block_time,
        account_keys,
        pre_token_balances,
        post_token_balances,
    })
}

fn append_loaded_addresses(keys: &mut Vec<String>, meta: &UiTransactionStatusMeta) {
    if let Some(loaded) = Option::<&UiLoadedAddresses>::from(meta.loaded_addresses.as_ref()) {
        keys.extend(loaded.writable.iter().cloned());
        keys.extend(loaded.readonly.iter().cloned());
    }
}

fn convert_token_balances(
    balances: Option<&Vec<UiTransactionTokenBalance>>,
) -> Option<Vec<TokenBalance>> {
    balances.map(|items| {
        items
            .iter()
            .map(|balance| TokenBalance {
                account_index: balance.account_index as usize,
                mint: balance.mint.clone(),
                owner: balance.owner.clone().into(),
                ui_token_amount: UiTokenAmount {
                    amount: balance.ui_token_amount.amount.clone(),
                    decimals: balance.ui_token_amount.decimals,
                    ui_amount: balance.ui_token_amount.ui_amount,
                    ui_amount_string: Some(balance.ui_token_amount.ui_amount_string.clone()),
                },
            })
            .collect()
    })
}

/// Account lookups against a live RPC node using `jsonParsed` encoding.
pub struct RpcAccountSource {
    client: RpcClient,
    commitment: CommitmentConfig,
}

impl RpcAccountSource {
    pub fn new(config: &ExplorerConfig) -> Result<Self> {
        let commitment = commitment(config)?;
        Ok(Self {
            client: RpcClient::new_with_commitment(config.rpc_url.clone(), commitment),
            commitment,
        })
    }
}

impl AccountSource for RpcAccountSource {
    fn fetch_account(&self, pubkey: &Pubkey) -> Result<Option<AccountDetail>> {
        let config = RpcAccountInfoConfig {
            encoding: Some(UiAccountEncoding::JsonParsed),
            data_slice: None,
            commitment: Some(self.commitment),
            min_context_slot: None,
        };
        let response: Response<Option<UiAccount>> = self
            .client
            .send(RpcRequest::GetAccountInfo, json!([pubkey.to_string(), config]))
            .with_context(|| format!("failed to fetch account {pubkey}"))?;

        response
            .value
            .map(|account| decode_account(*pubkey, &account))
            .transpose()
            .map_err(Into::into)
    }
}
