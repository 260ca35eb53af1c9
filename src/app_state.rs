//! The state shared between route handlers.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    db::initialize,
    service::TransactionService,
    stores::{SQLiteTransactionStore, TransactionStore},
};

/// The state of the application. Shared between routes via the axum `State`
/// extractor.
///
/// Cloning is cheap: the SQLite-backed store shares one connection behind an
/// `Arc<Mutex<_>>`, so every clone operates on the same database.
#[derive(Debug, Clone)]
pub struct AppState<S>
where
    S: TransactionStore + Clone + Send + Sync,
{
    /// The service handling transaction CRUD.
    pub transaction_service: TransactionService<S>,
}

impl<S> AppState<S>
where
    S: TransactionStore + Clone + Send + Sync,
{
    /// Create a new app state from `service`.
    pub fn new(service: TransactionService<S>) -> Self {
        Self {
            transaction_service: service,
        }
    }
}

/// Create the tables in `connection` and build an [AppState] backed by it.
///
/// # Errors
/// This function will return an error if the database could not be
/// initialized.
pub fn create_app_state(
    connection: Connection,
) -> Result<AppState<SQLiteTransactionStore>, rusqlite::Error> {
    initialize(&connection)?;

    let connection = Arc::new(Mutex::new(connection));
    let store = SQLiteTransactionStore::new(connection);

    Ok(AppState::new(TransactionService::new(store)))
}

#[cfg(test)]
mod app_state_tests {
    use rusqlite::Connection;
    use rust_decimal_macros::dec;

    use crate::models::Transaction;

    use super::create_app_state;

    #[test]
    fn create_app_state_initializes_database() {
        let connection = Connection::open_in_memory().unwrap();

        let state = create_app_state(connection).expect("Could not create app state");

        // The transaction table must exist and accept inserts.
        let mut service = state.transaction_service;
        let transaction = service
            .add_transaction(Transaction::build(dec!(1.00), "food".to_owned()))
            .unwrap();
        assert_eq!(transaction.id, 1);
    }

    #[test]
    fn clones_share_the_same_database() {
        let state = create_app_state(Connection::open_in_memory().unwrap()).unwrap();
        let mut writer = state.clone();

        let transaction = writer
            .transaction_service
            .add_transaction(Transaction::build(dec!(2.50), "transport".to_owned()))
            .unwrap();

        let got = state
            .transaction_service
            .find_transaction_by_id(transaction.id)
            .unwrap();
        assert_eq!(got, Some(transaction));
    }
}
