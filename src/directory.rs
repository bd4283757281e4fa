use rust_decimal::Decimal;

use crate::account::Account;
use crate::credentials::Credential;

/// One registered user. Identity fields never change after creation, and
/// the account has no existence independent of its user.
#[derive(Debug)]
pub struct User {
    username: String,
    credential: Credential,
    account: Account,
}

impl User {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }
}

/// Process-wide user directory, and the entire authentication surface.
/// Lives from startup to process exit; nothing is persisted.
#[derive(Debug, Default)]
pub struct Directory {
    users: Vec<User>,
}

impl Directory {
    /// Registers a user with a freshly derived credential and a zero-balance
    /// account. Duplicate usernames and account numbers are permitted;
    /// lookup only ever returns the first match.
    pub fn create_user(
        &mut self,
        username: impl Into<String>,
        password: &str,
        account_number: impl Into<String>,
        holder_name: impl Into<String>,
        loan_limit: Decimal,
    ) {
        self.users.push(User {
            username: username.into(),
            credential: Credential::derive(password),
            account: Account::new(account_number, holder_name, loan_limit),
        });
    }

    /// Linear scan for the first user whose username matches exactly and
    /// whose credential verifies. Unknown user and wrong password are
    /// indistinguishable to the caller.
    pub fn login(&mut self, username: &str, password: &str) -> Option<&mut User> {
        self.users
            .iter_mut()
            .find(|user| user.username == username && user.credential.verify(password))
    }
}
