//! Defines the endpoint for creating a new transaction.

use axum::{Form, extract::State, response::Response};
use axum_htmx::HxRequest;

use crate::{
    app_state::DatabaseState,
    db::acquire,
    endpoints,
    routing::redirect_to,
    transaction::{NewTransaction, TransactionForm, create_transaction},
};

/// A route handler for creating a new transaction, redirects to the dashboard on success.
///
/// The transaction amount is added to the balance of its account.
pub async fn create_transaction_endpoint(
    State(state): State<DatabaseState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<TransactionForm>,
) -> Response {
    let connection = match acquire(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_form_response(is_htmx),
    };

    match NewTransaction::new(&form)
        .and_then(|transaction| create_transaction(transaction, &connection))
    {
        Ok(transaction) => {
            tracing::info!(
                "created transaction {} for {} in account {}",
                transaction.id,
                transaction.amount,
                transaction.account_id
            );
            redirect_to(endpoints::ROOT, is_htmx)
        }
        Err(error) => {
            tracing::warn!("could not create transaction with {form:?}: {error}");
            error.into_form_response(is_htmx)
        }
    }
}
