//! Address page state: resolve the address, fetch the account once, serve it from cache.

use std::collections::HashMap;
use std::str::FromStr;

use anyhow::Result;
use solana_sdk::pubkey::Pubkey;
use tracing::{debug, info, warn};

use crate::core::error::ExplorerError;
use crate::types::AccountDetail;

/// Parse a base58 address typed by the user.
pub fn resolve_address(address: &str) -> Result<Pubkey, ExplorerError> {
    Pubkey::from_str(address.trim()).map_err(|_| ExplorerError::InvalidAddress {
        address: address.to_string(),
    })
}

/// Connection state of the cluster the explorer talks to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClusterStatus {
    Connecting,
    Connected,
    Failure,
}

/// Something that can look up an account by key.
pub trait AccountSource {
    /// `Ok(None)` when the account does not exist.
    fn fetch_account(&self, pubkey: &Pubkey) -> Result<Option<AccountDetail>>;
}

#[derive(Clone, Debug, PartialEq)]
enum FetchStatus {
    Fetched(Option<AccountDetail>),
    FetchFailed(String),
}

/// What the address page should display.
#[derive(Clone, Debug, PartialEq)]
pub enum AddressView {
    Invalid(String),
    Loading(Pubkey),
    Loaded(AccountDetail),
    NotFound(Pubkey),
    Failed { pubkey: Pubkey, message: String },
}

/// Caches fetched accounts and fetches at most once per address and cluster status change.
pub struct AddressLoader<S> {
    source: S,
    cache: HashMap<Pubkey, FetchStatus>,
    last_trigger: Option<(String, ClusterStatus)>,
}

impl<S: AccountSource> AddressLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HashMap::new(),
            last_trigger: None,
        }
    }

    pub fn view(&mut self, address: &str, status: ClusterStatus) -> AddressView {
        let pubkey = match resolve_address(address) {
            Ok(pubkey) => pubkey,
            Err(err) => return AddressView::Invalid(err.to_string()),
        };

        let trigger = (address.to_string(), status);
        let changed = self.last_trigger.as_ref() != Some(&trigger);
        self.last_trigger = Some(trigger);

        if !self.cache.contains_key(&pubkey) && changed && status == ClusterStatus::Connected {
            self.fetch(pubkey);
        } else if self.cache.contains_key(&pubkey) {
            debug!(%pubkey, "account served from cache");
        }

        match self.cache.get(&pubkey) {
            None => AddressView::Loading(pubkey),
            Some(FetchStatus::Fetched(Some(detail))) => AddressView::Loaded(detail.clone()),
            Some(FetchStatus::Fetched(None)) => AddressView::NotFound(pubkey),
            Some(FetchStatus::FetchFailed(message)) => AddressView::Failed {
                pubkey,
                message: message.clone(),
            },
        }
    }

    fn fetch(&mut self, pubkey: Pubkey) {
        info!(%pubkey, "fetching account");
        let entry = match self.source.fetch_account(&pubkey) {
            Ok(detail) => FetchStatus::Fetched(detail),
            Err(err) => {
                warn!(%pubkey, error = %err, "account fetch failed");
                FetchStatus::FetchFailed(format!("{err:#}"))
            }
        };
        self.cache.insert(pubkey, entry);
    }
}
