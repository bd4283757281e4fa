use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Deposit,
    Withdraw,
    RequestLoan,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: OperationKind },
    #[error("`{input}` is not a valid amount")]
    InvalidAmount { input: String },
}

#[derive(Debug, Clone, Copy)]
pub struct OperationCommand {
    pub kind: OperationKind,
    pub amount: Decimal,
}

impl OperationCommand {
    /// Parses one raw amount line into a typed command. Only malformed input
    /// is rejected here; whether the amount is acceptable is decided by the
    /// account when the command is handled.
    pub fn parse(kind: OperationKind, raw_amount: &str) -> Result<Self, CommandError> {
        let raw = raw_amount.trim();
        if raw.is_empty() {
            return Err(CommandError::AmountRequired { kind });
        }
        let amount = Decimal::from_str(raw).map_err(|_| CommandError::InvalidAmount {
            input: raw.to_owned(),
        })?;
        Ok(Self { kind, amount })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    #[test]
    fn parse_amounts() {
        let cmd = OperationCommand::parse(OperationKind::Deposit, "250.75").unwrap();
        assert_eq!(cmd.kind, OperationKind::Deposit);
        assert_eq!(cmd.amount, Decimal::from_f64(250.75).unwrap());

        // surrounding whitespace is tolerated
        let cmd = OperationCommand::parse(OperationKind::Withdraw, " 10 \n").unwrap();
        assert_eq!(cmd.amount, Decimal::from_u32(10).unwrap());
    }

    #[test]
    fn negative_amounts_parse() {
        // sign checks are not the parser's business
        let cmd = OperationCommand::parse(OperationKind::Deposit, "-5").unwrap();
        assert_eq!(cmd.amount, Decimal::from_i32(-5).unwrap());
    }

    #[test]
    fn parse_rejects_bad_input() {
        let err = OperationCommand::parse(OperationKind::RequestLoan, "").unwrap_err();
        assert!(matches!(
            err,
            CommandError::AmountRequired {
                kind: OperationKind::RequestLoan
            }
        ));

        let err = OperationCommand::parse(OperationKind::Deposit, "lots").unwrap_err();
        assert!(matches!(err, CommandError::InvalidAmount { .. }));
        assert_eq!(err.to_string(), "`lots` is not a valid amount");
    }
}
