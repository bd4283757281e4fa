use std::io::Write;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::Account;

/// Read-only projection of an account for display. Building it touches
/// nothing, so printing it twice in a row gives identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountInfo {
    pub number: String,
    pub holder: String,
    pub balance: Decimal,
}

impl AccountInfo {
    pub fn of(account: &Account) -> Self {
        Self {
            number: account.number().to_owned(),
            holder: account.holder_name().to_owned(),
            balance: account.balance(),
        }
    }
}

pub fn print_account_info<W>(output: &mut W, info: &AccountInfo) -> anyhow::Result<()>
where
    W: Write,
{
    writeln!(output, "Account Number: {}", info.number)?;
    writeln!(output, "Account Holder: {}", info.holder)?;
    writeln!(output, "Balance: {}", info.balance)?;
    Ok(())
}
