//! Typed decoding of `jsonParsed` account data returned by the RPC node.

pub mod account;
pub mod decimal;
pub mod number;
pub mod pubkey;
pub mod stake;

pub use account::decode_account;
pub use stake::{StakeAccount, StakeAccountInfo, StakeAccountType, StakeMeta};
