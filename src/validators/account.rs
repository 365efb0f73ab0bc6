use solana_account_decoder::{UiAccount, UiAccountData};
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::core::error::ExplorerError;
use crate::types::{AccountData, AccountDetail};
use crate::validators::stake::{StakeAccount, STAKE_PROGRAM};

/// Decode an account fetched with `jsonParsed` encoding.
///
/// Programs without a typed schema keep their parsed JSON as is; accounts the
/// node could not parse are reported as binary.
pub fn decode_account(pubkey: Pubkey, account: &UiAccount) -> Result<AccountDetail, ExplorerError> {
    let data = match &account.data {
        UiAccountData::Json(parsed) if parsed.program == STAKE_PROGRAM => {
            AccountData::Stake(StakeAccount::decode(&parsed.parsed)?)
        }
        UiAccountData::Json(parsed) => AccountData::Parsed {
            program: parsed.program.clone(),
            parsed: parsed.parsed.clone(),
        },
        UiAccountData::LegacyBinary(_) | UiAccountData::Binary(..) => {
            debug!(%pubkey, "account data returned in binary form");
            AccountData::Binary
        }
    };

    Ok(AccountDetail {
        pubkey,
        lamports: account.lamports,
        owner: account.owner.clone(),
        executable: account.executable,
        space: account.space,
        data,
    })
}
