use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::core::error::ExplorerError;

/// Owner program of stake accounts.
pub const STAKE_PROGRAM: &str = "stake";

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StakeAccountType {
    Uninitialized,
    Initialized,
    Delegated,
    RewardsPool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StakeAuthorized {
    #[serde(with = "super::pubkey")]
    pub staker: Pubkey,
    #[serde(with = "super::pubkey")]
    pub withdrawer: Pubkey,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StakeLockup {
    pub unix_timestamp: i64,
    pub epoch: u64,
    #[serde(with = "super::pubkey")]
    pub custodian: Pubkey,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StakeMeta {
    #[serde(with = "super::number")]
    pub rent_exempt_reserve: u64,
    pub authorized: StakeAuthorized,
    pub lockup: StakeLockup,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StakeDelegation {
    #[serde(with = "super::pubkey")]
    pub voter: Pubkey,
    #[serde(with = "super::number")]
    pub stake: u64,
    #[serde(with = "super::number")]
    pub activation_epoch: u64,
    /// `u64::MAX` while the stake has not been deactivated.
    #[serde(with = "super::number")]
    pub deactivation_epoch: u64,
    pub warmup_cooldown_rate: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stake {
    pub delegation: StakeDelegation,
    pub credits_observed: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StakeAccountInfo {
    pub meta: StakeMeta,
    #[serde(default)]
    pub stake: Option<Stake>,
}

/// Parsed stake account as returned under `data.parsed` with `jsonParsed` encoding.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StakeAccount {
    #[serde(rename = "type")]
    pub account_type: StakeAccountType,
    pub info: StakeAccountInfo,
}

impl StakeAccount {
    pub fn decode(parsed: &serde_json::Value) -> Result<Self, ExplorerError> {
        Self::deserialize(parsed)
            .map_err(|err| ExplorerError::invalid_account_data(format!("stake account: {err}")))
    }

    pub fn is_deactivating(&self) -> bool {
        self.info
            .stake
            .as_ref()
            .is_some_and(|stake| stake.delegation.deactivation_epoch != u64::MAX)
    }
}
