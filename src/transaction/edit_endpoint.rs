//! Defines the endpoint for updating a transaction.

use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};
use axum_htmx::HxRequest;

use crate::{
    app_state::DatabaseState,
    db::acquire,
    endpoints,
    routing::redirect_to,
    transaction::{NewTransaction, TransactionForm, TransactionId, update_transaction},
};

/// A route handler for updating a transaction, redirects to the transactions page on success.
pub async fn update_transaction_endpoint(
    State(state): State<DatabaseState>,
    Path(transaction_id): Path<TransactionId>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<TransactionForm>,
) -> Response {
    let connection = match acquire(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_form_response(is_htmx),
    };

    match NewTransaction::new(&form)
        .and_then(|transaction| update_transaction(transaction_id, transaction, &connection))
    {
        Ok(()) => redirect_to(endpoints::TRANSACTIONS_VIEW, is_htmx),
        Err(error) => {
            tracing::warn!("could not update transaction {transaction_id}: {error}");
            error.into_form_response(is_htmx)
        }
    }
}
