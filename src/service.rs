//! The business logic layer that sits between the HTTP handlers and the
//! transaction store.

use crate::{
    Error,
    database_id::DatabaseID,
    models::{Transaction, TransactionBuilder, TransactionUpdate},
    stores::TransactionStore,
};

/// Coordinates transaction operations against a [TransactionStore].
///
/// The CRUD operations are thin today, but routing them through one place
/// keeps the HTTP handlers free of storage concerns and gives future rules
/// (validation, auditing) a single home.
#[derive(Debug, Clone)]
pub struct TransactionService<S: TransactionStore> {
    store: S,
}

impl<S: TransactionStore> TransactionService<S> {
    /// Create a service backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record a new transaction and return it with its assigned ID.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error.
    pub fn add_transaction(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        self.store.create(builder)
    }

    /// Look up a single transaction, `None` if no transaction has `id`.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error.
    pub fn find_transaction_by_id(&self, id: DatabaseID) -> Result<Option<Transaction>, Error> {
        self.store.get(id)
    }

    /// List every recorded transaction.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error.
    pub fn find_all_transactions(&self) -> Result<Vec<Transaction>, Error> {
        self.store.get_all()
    }

    /// Replace the amount and category of an existing transaction.
    ///
    /// # Errors
    /// This function will return an [Error::UpdateMissingTransaction] if no
    /// transaction has the ID in `update`, or an [Error::SqlError] if there
    /// is an SQL error.
    pub fn update_transaction(&mut self, update: TransactionUpdate) -> Result<(), Error> {
        self.store.update(update)
    }

    /// Remove the transaction with `id`.
    ///
    /// # Errors
    /// This function will return an [Error::DeleteMissingTransaction] if no
    /// transaction has `id`, or an [Error::SqlError] if there is an SQL
    /// error.
    pub fn delete_transaction(&mut self, id: DatabaseID) -> Result<(), Error> {
        self.store.delete(id)
    }
}
