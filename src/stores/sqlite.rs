//! Implements a SQLite backed transaction store.

use std::{
    str::FromStr,
    sync::{Arc, Mutex, MutexGuard},
};

use rusqlite::{Connection, OptionalExtension, Row};
use rust_decimal::Decimal;

use crate::{
    Error,
    database_id::DatabaseID,
    db::{CreateTable, MapRow},
    models::{Transaction, TransactionBuilder, TransactionUpdate},
    stores::TransactionStore,
};

/// Stores transactions in a SQLite database.
///
/// The amount column is stored as text so that decimal amounts round-trip
/// exactly, without the rounding artifacts of floating point columns.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// The builder's timestamp is resolved here, exactly once: a missing
    /// timestamp becomes the current time at insertion. The `RETURNING`
    /// clause echoes the stored row back so the caller gets the generated ID
    /// without a second query.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let created_at = builder.created_at_or_now();

        let transaction = self
            .connection()?
            .prepare(
                "INSERT INTO \"transaction\" (amount, category, created_at)
                 VALUES (?1, ?2, ?3)
                 RETURNING id, amount, category, created_at",
            )?
            .query_row(
                (builder.amount.to_string(), &builder.category, created_at),
                Self::map_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve a transaction in the database by its `id`.
    ///
    /// A missing row is reported as `Ok(None)`, not as an error.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error.
    fn get(&self, id: DatabaseID) -> Result<Option<Transaction>, Error> {
        let transaction = self
            .connection()?
            .prepare("SELECT id, amount, category, created_at FROM \"transaction\" WHERE id = :id")?
            .query_row(&[(":id", &id)], Self::map_row)
            .optional()?;

        Ok(transaction)
    }

    /// Retrieve all transactions in the database, in natural row order.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let transactions = self
            .connection()?
            .prepare("SELECT id, amount, category, created_at FROM \"transaction\"")?
            .query_map([], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Update the amount and category of the transaction with the ID in
    /// `update`. The `created_at` column is deliberately left out of the SET
    /// clause.
    ///
    /// # Errors
    /// This function will return an [Error::UpdateMissingTransaction] if no
    /// row matches, or an [Error::SqlError] if there is an SQL error.
    fn update(&mut self, update: TransactionUpdate) -> Result<(), Error> {
        let rows_affected = self.connection()?.execute(
            "UPDATE \"transaction\" SET amount = ?1, category = ?2 WHERE id = ?3",
            (update.amount.to_string(), &update.category, update.id),
        )?;

        if rows_affected == 0 {
            return Err(Error::UpdateMissingTransaction);
        }

        Ok(())
    }

    /// Delete the transaction with `id` from the database.
    ///
    /// # Errors
    /// This function will return an [Error::DeleteMissingTransaction] if no
    /// row matches, or an [Error::SqlError] if there is an SQL error.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        let rows_affected = self
            .connection()?
            .execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])?;

        if rows_affected == 0 {
            return Err(Error::DeleteMissingTransaction);
        }

        Ok(())
    }
}

impl CreateTable for SQLiteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        // The storage-side timestamp default is a fallback only; the store
        // always supplies a value via the builder.
        connection.execute(
            "CREATE TABLE IF NOT EXISTS \"transaction\" (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    amount TEXT NOT NULL,
                    category TEXT NOT NULL,
                    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
                    )",
            (),
        )?;

        // Ensure the sequence starts at 1
        connection.execute(
            "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transaction', 0)",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteTransactionStore {
    type ReturnType = Transaction;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = row.get(offset)?;
        let amount_text: String = row.get(offset + 1)?;
        let amount = Decimal::from_str(&amount_text).map_err(|error| {
            rusqlite::Error::FromSqlConversionFailure(
                offset + 1,
                rusqlite::types::Type::Text,
                Box::new(error),
            )
        })?;
        let category = row.get(offset + 2)?;
        let created_at = row.get(offset + 3)?;

        Ok(Transaction {
            id,
            amount,
            category,
            created_at,
        })
    }
}
