//! Defines the `Transaction` type, the core type of the application, along
//! with the builder used to create one and the change-set used to update one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::database_id::DatabaseID;

/// A single financial movement, i.e. an event where money was either spent or
/// earned.
///
/// The sign of `amount` is caller-defined: positive values represent income
/// and negative values represent expenses.
///
/// To create a new `Transaction`, use [Transaction::build] and pass the
/// builder to a [TransactionStore](crate::stores::TransactionStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by storage on insert.
    pub id: DatabaseID,
    /// The amount of money spent or earned in this transaction.
    pub amount: Decimal,
    /// A free-text label describing the type of the transaction, e.g. "food".
    pub category: String,
    /// When the transaction was recorded. Fixed at insert time and never
    /// altered by updates.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: Decimal, category: String) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            category,
            created_at: None,
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The timestamp is optional: if the caller does not supply one, it is
/// resolved to the current time exactly once, at insert time, via
/// [TransactionBuilder::created_at_or_now]. Resolving the default eagerly at
/// the factory stage (rather than lazily on read) means a stored transaction
/// is plain data and every read returns the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    /// The monetary amount of the transaction.
    pub amount: Decimal,
    /// The category label for the transaction.
    pub category: String,
    /// When the transaction was recorded, or `None` to use the time of
    /// insertion.
    pub created_at: Option<OffsetDateTime>,
}

impl TransactionBuilder {
    /// Set the timestamp for the transaction.
    pub fn created_at(mut self, created_at: OffsetDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// The timestamp to insert: the caller-supplied value, or the current
    /// time (UTC) if none was given.
    pub fn created_at_or_now(&self) -> OffsetDateTime {
        self.created_at.unwrap_or_else(OffsetDateTime::now_utc)
    }
}

/// The change-set for updating an existing [Transaction].
///
/// Only the amount and category can change; the ID and the original
/// timestamp are immutable once assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionUpdate {
    /// The ID of the transaction to update.
    pub id: DatabaseID,
    /// The new amount.
    pub amount: Decimal,
    /// The new category label.
    pub category: String,
}

#[cfg(test)]
mod transaction_builder_tests {
    use rust_decimal_macros::dec;
    use time::{Duration, OffsetDateTime, macros::datetime};

    use super::Transaction;

    #[test]
    fn builder_keeps_explicit_timestamp() {
        let timestamp = datetime!(2025-01-15 09:30 UTC);

        let builder =
            Transaction::build(dec!(-45.99), "food".to_owned()).created_at(timestamp);

        assert_eq!(builder.created_at_or_now(), timestamp);
    }

    #[test]
    fn builder_defaults_to_now() {
        let builder = Transaction::build(dec!(100.00), "wages".to_owned());

        let before = OffsetDateTime::now_utc();
        let resolved = builder.created_at_or_now();
        let after = OffsetDateTime::now_utc();

        assert!(
            before <= resolved && resolved <= after,
            "want timestamp between {before} and {after}, got {resolved}"
        );
    }

    #[test]
    fn builder_carries_amount_and_category() {
        let builder = Transaction::build(dec!(-25.50), "transport".to_owned());

        assert_eq!(builder.amount, dec!(-25.50));
        assert_eq!(builder.category, "transport");
        assert_eq!(builder.created_at, None);
    }

    #[test]
    fn explicit_timestamp_is_stable_across_reads() {
        let timestamp = OffsetDateTime::now_utc() - Duration::days(1);
        let builder = Transaction::build(dec!(12.30), "food".to_owned()).created_at(timestamp);

        let first = builder.created_at_or_now();
        let second = builder.created_at_or_now();

        assert_eq!(first, second);
    }
}
