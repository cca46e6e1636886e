mod page;
mod raw;

pub use self::page::{AccountsPage, TransactionsPage};
pub use self::raw::RawResponse;
