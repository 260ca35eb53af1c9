//! Defines how the routes of the REST API are put together.

use axum::{Router, routing::get};

use crate::{
    AppState,
    api::{
        create_transaction_endpoint, delete_transaction_endpoint, get_all_transactions_endpoint,
        get_transaction_endpoint, update_transaction_endpoint,
    },
    endpoints,
    stores::TransactionStore,
};

/// Create the router for the transaction REST API.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(get_all_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_API,
            get(get_transaction_endpoint)
                .put(update_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::{
        app_state::create_app_state,
        endpoints::{TRANSACTIONS_API, format_transaction_route},
        models::Transaction,
    };

    use super::build_router;

    fn get_test_server() -> TestServer {
        let state = create_app_state(Connection::open_in_memory().unwrap()).unwrap();

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn create_get_update_delete_round_trip() {
        let server = get_test_server();

        let response = server
            .post(TRANSACTIONS_API)
            .json(&json!({
                "amount": "100.00",
                "category": "food",
                "created_at": "2025-01-15T09:30:00Z",
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let created: Transaction = response.json();
        assert_eq!(created.amount, dec!(100.00));
        assert_eq!(created.category, "food");

        let response = server.get(&format_transaction_route(created.id)).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Transaction>(), created);

        let response = server
            .put(&format_transaction_route(created.id))
            .json(&json!({"amount": "-25.50", "category": "transport"}))
            .await;
        response.assert_status_ok();

        let updated: Transaction = server
            .get(&format_transaction_route(created.id))
            .await
            .json();
        assert_eq!(updated.amount, dec!(-25.50));
        assert_eq!(updated.category, "transport");
        assert_eq!(updated.created_at, created.created_at);

        let response = server.delete(&format_transaction_route(created.id)).await;
        response.assert_status(axum::http::StatusCode::NO_CONTENT);

        let response = server.get(&format_transaction_route(created.id)).await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn list_returns_all_transactions() {
        let server = get_test_server();

        for (amount, category) in [("100.00", "food"), ("-25.50", "transport")] {
            server
                .post(TRANSACTIONS_API)
                .json(&json!({"amount": amount, "category": category}))
                .await
                .assert_status(axum::http::StatusCode::CREATED);
        }

        let response = server.get(TRANSACTIONS_API).await;
        response.assert_status_ok();

        let transactions: Vec<Transaction> = response.json();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].amount, dec!(100.00));
        assert_eq!(transactions[1].category, "transport");
    }

    #[tokio::test]
    async fn list_returns_empty_array_for_empty_database() {
        let server = get_test_server();

        let response = server.get(TRANSACTIONS_API).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Transaction>>(), vec![]);
    }

    #[tokio::test]
    async fn unknown_id_routes_respond_with_not_found() {
        let server = get_test_server();

        server
            .get(&format_transaction_route(999))
            .await
            .assert_status_not_found();
        server
            .put(&format_transaction_route(999))
            .json(&json!({"amount": "1.00", "category": "food"}))
            .await
            .assert_status_not_found();
        server
            .delete(&format_transaction_route(999))
            .await
            .assert_status_not_found();
    }
}
