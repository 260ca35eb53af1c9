//! Defines the transaction store trait.

use crate::{
    Error,
    database_id::DatabaseID,
    models::{Transaction, TransactionBuilder, TransactionUpdate},
};

/// Handles the persistence of transactions.
///
/// This is the only component aware of the storage schema and SQL shape.
pub trait TransactionStore {
    /// Create a new transaction in the store and return it with its
    /// storage-assigned ID.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error>;

    /// Retrieve a transaction from the store by its ID.
    ///
    /// Returns `Ok(None)` when no transaction matches `id`. A missing row is
    /// not an error; only storage failures produce `Err`.
    fn get(&self, id: DatabaseID) -> Result<Option<Transaction>, Error>;

    /// Retrieve all transactions from the store, in the order they are
    /// stored.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Update the amount and category of an existing transaction.
    ///
    /// The transaction's ID and original timestamp are never changed.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTransaction] if no transaction matches
    /// the ID in `update`.
    fn update(&mut self, update: TransactionUpdate) -> Result<(), Error>;

    /// Remove the transaction with the given ID from the store.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] if no transaction matches
    /// `id`.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error>;
}
