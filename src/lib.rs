//! Library behind the block explorer: typed transaction and account data,
//! token balance reconciliation and text rendering.

pub mod config;
pub mod core;
pub mod render;
pub mod rpc;
pub mod types;
pub mod validators;

pub use crate::config::ExplorerConfig;
pub use crate::core::address::{
    resolve_address, AccountSource, AddressLoader, AddressView, ClusterStatus,
};
pub use crate::core::balance_reconciler::reconcile;
pub use crate::core::error::ExplorerError;
pub use crate::types::{
    AccountData, AccountDetail, BalanceChangeRow, TokenBalance, TransactionDetail, UiTokenAmount,
};
