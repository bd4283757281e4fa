/// All logic related to the account ledger. State is modified by applying
/// transactions, which are created by handling operation commands.
pub mod account;

/// Typed operation commands that later are executed against [`account`].
pub mod command;

/// Salted-hash credential storage and verification.
pub mod credentials;

/// In-memory user directory: user creation plus credential-based login.
pub mod directory;

/// An authenticated session bound to one logged-in user.
pub mod session;

/// Ideally, this module should exist as its own crate, as a way to
/// bootstrap the core logic. However, I want to use it for integration
/// tests so I put it here.
pub mod bin_utils;
