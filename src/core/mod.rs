pub mod address;
pub mod balance_reconciler;
pub mod error;
