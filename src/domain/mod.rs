pub mod category;
pub mod transaction;

pub use category::Category;
pub use transaction::{
    format_timestamp, NewTransaction, Transaction, TransactionKind, TransactionRecord,
    TIMESTAMP_FORMAT,
};
