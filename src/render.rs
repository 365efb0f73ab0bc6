//! Plain-text rendering for the CLI.

use std::fmt;

use bigdecimal::BigDecimal;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};

use crate::types::{AccountData, AccountDetail, BalanceChangeRow};
use crate::validators::StakeAccountType;

const SOL_DECIMALS: i64 = 9;

/// Signed balance change: `+1.5`, `-2`, `0`.
pub fn format_delta(delta: &BigDecimal) -> String {
    let plain = delta.normalized().to_plain_string();
    if plain == "0" || plain.starts_with('-') {
        plain
    } else {
        format!("+{plain}")
    }
}

/// Token balances table with one line per [`BalanceChangeRow`].
pub struct TokenBalancesTable<'a> {
    rows: &'a [BalanceChangeRow],
    unit_suffix: &'a str,
}

impl<'a> TokenBalancesTable<'a> {
    pub fn new(rows: &'a [BalanceChangeRow], unit_suffix: &'a str) -> Self {
        Self { rows, unit_suffix }
    }
}

impl fmt::Display for TokenBalancesTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Address", "Token", "Change", "Post Balance"]);

        for row in self.rows {
            let balance = row.balance.ui_amount_str().unwrap_or("0");
            table.add_row(vec![
                Cell::new(&row.account),
                Cell::new(&row.mint),
                Cell::new(format_delta(&row.delta)).set_alignment(CellAlignment::Right),
                Cell::new(format!("{balance} {}", self.unit_suffix))
                    .set_alignment(CellAlignment::Right),
            ]);
        }

        write!(f, "{table}")
    }
}

/// Key/value summary of an account for the address view.
pub fn render_account(detail: &AccountDetail) -> String {
    let mut lines = vec![
        format!("Address:    {}", detail.pubkey),
        format!(
            "Balance:    {} SOL",
            BigDecimal::new(detail.lamports.into(), SOL_DECIMALS)
                .normalized()
                .to_plain_string()
        ),
        format!("Owner:      {}", detail.owner),
        format!("Executable: {}", detail.executable),
    ];
    if let Some(space) = detail.space {
        lines.push(format!("Size:       {space} bytes"));
    }

    match &detail.data {
        AccountData::Stake(stake) => {
            let kind = match stake.account_type {
                StakeAccountType::Uninitialized => "uninitialized",
                StakeAccountType::Initialized => "initialized",
                StakeAccountType::Delegated => "delegated",
                StakeAccountType::RewardsPool => "rewards pool",
            };
            lines.push(format!("Stake:      {kind}"));
            lines.push(format!(
                "Rent reserve: {} lamports",
                stake.info.meta.rent_exempt_reserve
            ));
            lines.push(format!("Staker:     {}", stake.info.meta.authorized.staker));
            lines.push(format!(
                "Withdrawer: {}",
                stake.info.meta.authorized.withdrawer
            ));
            if let Some(delegated) = &stake.info.stake {
                lines.push(format!("Voter:      {}", delegated.delegation.voter));
                lines.push(format!(
                    "Delegated:  {} lamports (activation epoch {})",
                    delegated.delegation.stake, delegated.delegation.activation_epoch
                ));
                if stake.is_deactivating() {
                    lines.push(format!(
                        "Deactivation epoch: {}",
                        delegated.delegation.deactivation_epoch
                    ));
                }
            }
        }
        AccountData::Parsed { program, .. } => lines.push(format!("Program:    {program}")),
        AccountData::Binary => {}
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use solana_sdk::pubkey::Pubkey;

    use super::*;
    use crate::types::UiTokenAmount;

    #[test]
    fn delta_signs() {
        assert_eq!(format_delta(&BigDecimal::from_str("1.50").unwrap()), "+1.5");
        assert_eq!(format_delta(&BigDecimal::from_str("-7").unwrap()), "-7");
        assert_eq!(format_delta(&BigDecimal::from_str("20").unwrap()), "+20");
        assert_eq!(format_delta(&BigDecimal::from_str("0.00").unwrap()), "0");
        assert_eq!(
            format_delta(&BigDecimal::from_str("0.000000000000000000000000000001").unwrap()),
            "+0.000000000000000000000000000001"
        );
    }

    #[test]
    fn table_lists_every_row() {
        let rows = vec![
            BalanceChangeRow {
                account: "account-0".to_string(),
                mint: "MintA".to_string(),
                balance: UiTokenAmount::zero(6),
                delta: BigDecimal::from_str("-10").unwrap(),
                account_index: 0,
            },
            BalanceChangeRow {
                account: "account-0".to_string(),
                mint: "MintB".to_string(),
                balance: UiTokenAmount {
                    amount: "5000000".to_string(),
                    decimals: 6,
                    ui_amount: Some(5.0),
                    ui_amount_string: Some("5".to_string()),
                },
                delta: BigDecimal::from(5),
                account_index: 0,
            },
        ];

        let rendered = TokenBalancesTable::new(&rows, "UNITs").to_string();

        assert!(rendered.contains("Post Balance"));
        assert!(rendered.contains("MintA"));
        assert!(rendered.contains("-10"));
        assert!(rendered.contains("+5"));
        assert!(rendered.contains("5 UNITs"));
        assert!(rendered.find("MintA").unwrap() < rendered.find("MintB").unwrap());
    }

    #[test]
    fn account_summary_shows_sol_balance() {
        let detail = AccountDetail {
            pubkey: Pubkey::from_str("Vote111111111111111111111111111111111111111").unwrap(),
            lamports: 1_500_000_000,
            owner: "11111111111111111111111111111111".to_string(),
            executable: false,
            space: None,
            data: AccountData::Binary,
        };

        let rendered = render_account(&detail);

        assert!(rendered.contains("Balance:    1.5 SOL"));
        assert!(!rendered.contains("Size:"));
    }
}
