//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    response::Response,
};
use axum_htmx::HxRequest;

use crate::{
    app_state::DatabaseState,
    db::acquire,
    endpoints,
    routing::redirect_to,
    transaction::{TransactionId, delete_transaction},
};

/// A route handler for deleting a transaction, redirects to the transactions page on success.
///
/// The transaction amount is subtracted from the balance of its account.
pub async fn delete_transaction_endpoint(
    State(state): State<DatabaseState>,
    Path(transaction_id): Path<TransactionId>,
    HxRequest(is_htmx): HxRequest,
) -> Response {
    let connection = match acquire(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_form_response(is_htmx),
    };

    match delete_transaction(transaction_id, &connection) {
        Ok(()) => {
            tracing::info!("deleted transaction {transaction_id}");
            redirect_to(endpoints::TRANSACTIONS_VIEW, is_htmx)
        }
        Err(error) => {
            tracing::warn!("could not delete transaction {transaction_id}: {error}");
            error.into_form_response(is_htmx)
        }
    }
}
