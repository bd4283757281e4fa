use tracing::debug;

use crate::account::{Account, AccountError, Transaction};
use crate::command::OperationCommand;
use crate::directory::User;

/// An authenticated session bound to a single logged-in user. The only way
/// in is a successful `Directory::login`; the program has no logout, so the
/// binding lasts until the session value is dropped.
pub struct Session<'a> {
    user: &'a mut User,
}

impl<'a> Session<'a> {
    pub fn open(user: &'a mut User) -> Self {
        Self { user }
    }

    pub fn username(&self) -> &str {
        self.user.username()
    }

    pub fn account(&self) -> &Account {
        self.user.account()
    }

    /// Handle-then-apply on the bound account. The recorded transaction is
    /// returned so callers can report what happened; rejections leave the
    /// account untouched.
    pub fn execute(&mut self, command: OperationCommand) -> Result<Transaction, AccountError> {
        let transaction = self.user.account().handle_operation(command)?;
        self.user.account_mut().apply(transaction.clone());
        debug!(kind = ?transaction.kind(), amount = %transaction.amount(), "transaction applied");
        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::FromPrimitive;

    use crate::account::{AccountError, TransactionKind};
    use crate::command::OperationKind;
    use crate::directory::Directory;

    use super::*;

    fn command(kind: OperationKind, amount: u32) -> OperationCommand {
        OperationCommand {
            kind,
            amount: Decimal::from_u32(amount).unwrap(),
        }
    }

    #[test]
    fn execute_reports_the_recorded_transaction() {
        let mut directory = Directory::default();
        directory.create_user(
            "user1",
            "password1",
            "1234",
            "Brian",
            Decimal::from_u32(1000).unwrap(),
        );
        let user = directory.login("user1", "password1").unwrap();
        let mut session = Session::open(user);

        let tx = session
            .execute(command(OperationKind::Deposit, 42))
            .unwrap();
        assert_eq!(tx.kind(), TransactionKind::Deposit);
        assert_eq!(tx.amount(), Decimal::from_u32(42).unwrap());
        assert_eq!(session.account().history().len(), 1);
    }

    #[test]
    fn run_through_a_session() {
        let mut directory = Directory::default();
        directory.create_user(
            "user1",
            "password1",
            "1234",
            "Brian",
            Decimal::from_u32(1000).unwrap(),
        );
        let user = directory.login("user1", "password1").unwrap();
        let mut session = Session::open(user);

        session.execute(command(OperationKind::Deposit, 500)).unwrap();
        assert_eq!(session.account().balance(), Decimal::from_u32(500).unwrap());
        assert_eq!(
            session.account().history()[0].kind(),
            TransactionKind::Deposit
        );

        session
            .execute(command(OperationKind::Withdraw, 200))
            .unwrap();
        assert_eq!(session.account().balance(), Decimal::from_u32(300).unwrap());

        session
            .execute(command(OperationKind::RequestLoan, 1000))
            .unwrap();
        assert_eq!(
            session.account().balance(),
            Decimal::from_u32(1300).unwrap()
        );

        // the loan limit is per request, so the same loan succeeds again
        session
            .execute(command(OperationKind::RequestLoan, 1000))
            .unwrap();
        assert_eq!(
            session.account().balance(),
            Decimal::from_u32(2300).unwrap()
        );

        let err = session
            .execute(command(OperationKind::Withdraw, 5000))
            .unwrap_err();
        assert!(matches!(err, AccountError::InsufficientFunds { .. }));
        assert_eq!(
            session.account().balance(),
            Decimal::from_u32(2300).unwrap()
        );
        assert_eq!(session.account().history().len(), 4);
    }
}
