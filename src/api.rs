//! The route handlers for the transaction REST API.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    database_id::DatabaseID,
    models::{Transaction, TransactionUpdate},
    stores::TransactionStore,
};

/// The request body for creating a transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewTransaction {
    /// The amount of money spent (negative) or earned (positive).
    pub amount: Decimal,
    /// The category the transaction belongs to.
    pub category: String,
    /// When the transaction happened. Defaults to the time the server
    /// records the transaction if omitted.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

/// The request body for updating a transaction. The timestamp is immutable
/// and therefore has no field here.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTransaction {
    /// The new amount.
    pub amount: Decimal,
    /// The new category.
    pub category: String,
}

/// A route handler for creating a new transaction.
///
/// Responds with 201 Created and the stored transaction, including its
/// assigned ID.
pub async fn create_transaction_endpoint<S>(
    State(mut state): State<AppState<S>>,
    Json(new_transaction): Json<NewTransaction>,
) -> Result<impl IntoResponse, Error>
where
    S: TransactionStore + Clone + Send + Sync,
{
    let mut builder = Transaction::build(new_transaction.amount, new_transaction.category);

    if let Some(created_at) = new_transaction.created_at {
        builder = builder.created_at(created_at);
    }

    let transaction = state.transaction_service.add_transaction(builder)?;
    tracing::info!(transaction_id = transaction.id, "created transaction");

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// A route handler for getting a transaction by its database ID.
///
/// Responds with 404 Not Found if no transaction has the requested ID.
pub async fn get_transaction_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(transaction_id): Path<DatabaseID>,
) -> Result<impl IntoResponse, Error>
where
    S: TransactionStore + Clone + Send + Sync,
{
    state
        .transaction_service
        .find_transaction_by_id(transaction_id)?
        .map(|transaction| (StatusCode::OK, Json(transaction)))
        .ok_or(Error::NotFound)
}

/// A route handler for listing all transactions.
pub async fn get_all_transactions_endpoint<S>(
    State(state): State<AppState<S>>,
) -> Result<impl IntoResponse, Error>
where
    S: TransactionStore + Clone + Send + Sync,
{
    let transactions = state.transaction_service.find_all_transactions()?;

    Ok((StatusCode::OK, Json(transactions)))
}

/// A route handler for updating the amount and category of a transaction.
///
/// Responds with 200 OK and an empty body on success, or 404 Not Found if no
/// transaction has the requested ID.
pub async fn update_transaction_endpoint<S>(
    State(mut state): State<AppState<S>>,
    Path(transaction_id): Path<DatabaseID>,
    Json(update): Json<UpdateTransaction>,
) -> Result<impl IntoResponse, Error>
where
    S: TransactionStore + Clone + Send + Sync,
{
    state.transaction_service.update_transaction(TransactionUpdate {
        id: transaction_id,
        amount: update.amount,
        category: update.category,
    })?;
    tracing::info!(transaction_id, "updated transaction");

    Ok(StatusCode::OK)
}

/// A route handler for deleting a transaction.
///
/// Responds with 204 No Content on success, or 404 Not Found if no
/// transaction has the requested ID.
pub async fn delete_transaction_endpoint<S>(
    State(mut state): State<AppState<S>>,
    Path(transaction_id): Path<DatabaseID>,
) -> Result<impl IntoResponse, Error>
where
    S: TransactionStore + Clone + Send + Sync,
{
    state.transaction_service.delete_transaction(transaction_id)?;
    tracing::info!(transaction_id, "deleted transaction");

    Ok(StatusCode::NO_CONTENT)
}
