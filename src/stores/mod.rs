//! Contains the trait and implementation for objects that store the domain
//! [models](crate::models).

mod sqlite;
mod transaction;

pub use sqlite::SQLiteTransactionStore;
pub use transaction::TransactionStore;
