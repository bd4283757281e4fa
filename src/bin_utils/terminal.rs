use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::account::{AccountError, TransactionKind};
use crate::command::OperationKind;

pub const MENU: &str = "-----------------------------
1. Deposit
2. Withdraw
3. Request Loan
4. Account Info
5. Exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Operation(OperationKind),
    AccountInfo,
    Exit,
}

impl MenuChoice {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::Operation(OperationKind::Deposit)),
            "2" => Some(Self::Operation(OperationKind::Withdraw)),
            "3" => Some(Self::Operation(OperationKind::RequestLoan)),
            "4" => Some(Self::AccountInfo),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Writes `label`, flushes, and reads one trimmed line. `None` means the
/// input is exhausted.
pub fn prompt<R, W>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}").context("Failed to write prompt")?;
    output.flush().context("Failed to flush output")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_owned()))
    }
}

pub fn amount_prompt(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Deposit => "Enter the amount to deposit: ",
        OperationKind::Withdraw => "Enter the amount to withdraw: ",
        OperationKind::RequestLoan => "Enter the loan amount: ",
    }
}

pub fn success_line(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Deposit => "Deposit successful!",
        TransactionKind::Withdrawal => "Withdrawal successful!",
        TransactionKind::Loan => "Loan request successful!",
    }
}

pub fn rejection_line(error: &AccountError) -> &'static str {
    match error {
        AccountError::InsufficientFunds { .. } => "Insufficient balance!",
        AccountError::LoanLimitExceeded { .. } => "Loan request failed! Exceeded loan limit.",
    }
}
