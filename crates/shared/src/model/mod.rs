mod account;
mod transaction;

pub use self::account::Account;
pub use self::transaction::{MonetaryAmount, Transaction, TransactionDirection, TransactionStatus};
