//! Defines the endpoints (routes) of the REST API.

/// The transaction collection: GET lists all transactions, POST creates one.
pub const TRANSACTIONS_API: &str = "/api/transactions";

/// A single transaction: GET retrieves, PUT updates, DELETE removes.
pub const TRANSACTION_API: &str = "/api/transactions/{transaction_id}";

/// The format string for a single transaction route.
///
/// This should be used with `format!` to get the route for a specific
/// transaction ID.
pub fn format_transaction_route(transaction_id: i64) -> String {
    format!("/api/transactions/{transaction_id}")
}
