use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, prelude::Zero};
use serde::Serialize;
use thiserror::Error;

use crate::command::{OperationCommand, OperationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Loan,
}

/// Immutable record of one balance-changing event. Created only by
/// [`Account::handle_operation`] when an operation is accepted, and stored
/// in the owning account's history when applied.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    fn record(kind: TransactionKind, amount: Decimal) -> Self {
        Self {
            kind,
            amount,
            timestamp: Utc::now(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
    #[error("Loan request of {requested} exceeds the limit of {limit}")]
    LoanLimitExceeded { requested: Decimal, limit: Decimal },
}

#[derive(Debug)]
pub struct Account {
    number: String,
    holder_name: String,
    balance: Decimal,
    loan_limit: Decimal,
    history: Vec<Transaction>,
}

impl Account {
    pub fn new(
        number: impl Into<String>,
        holder_name: impl Into<String>,
        loan_limit: Decimal,
    ) -> Self {
        Self {
            number: number.into(),
            holder_name: holder_name.into(),
            balance: Decimal::zero(),
            loan_limit,
            history: Vec::new(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn loan_limit(&self) -> Decimal {
        self.loan_limit
    }

    /// Transactions in insertion order, which is also chronological order.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Validates `command` against the current state. Accepted operations
    /// come back as the [`Transaction`] that records them; nothing is
    /// mutated until that transaction is passed to [`Account::apply`].
    pub fn handle_operation(&self, command: OperationCommand) -> Result<Transaction, AccountError> {
        match command.kind {
            // deposits are accepted unconditionally, sign included
            OperationKind::Deposit => {
                Ok(Transaction::record(TransactionKind::Deposit, command.amount))
            }
            OperationKind::Withdraw => {
                if self.balance - command.amount >= Decimal::zero() {
                    Ok(Transaction::record(
                        TransactionKind::Withdrawal,
                        command.amount,
                    ))
                } else {
                    Err(AccountError::InsufficientFunds {
                        requested: command.amount,
                        available: self.balance,
                    })
                }
            }
            OperationKind::RequestLoan => {
                // checked against the static limit only, not outstanding debt
                if command.amount <= self.loan_limit {
                    Ok(Transaction::record(TransactionKind::Loan, command.amount))
                } else {
                    Err(AccountError::LoanLimitExceeded {
                        requested: command.amount,
                        limit: self.loan_limit,
                    })
                }
            }
        }
    }

    pub fn apply(&mut self, transaction: Transaction) {
        match transaction.kind {
            TransactionKind::Deposit | TransactionKind::Loan => {
                self.balance += transaction.amount;
            }
            TransactionKind::Withdrawal => {
                self.balance -= transaction.amount;
            }
        }
        self.history.push(transaction);
    }
}
