//! Defines the endpoint for deleting an account.

use axum::{
    extract::{Path, State},
    response::Response,
};
use axum_htmx::HxRequest;

use crate::{
    account::{AccountId, delete_account},
    app_state::DatabaseState,
    db::acquire,
    endpoints,
    routing::redirect_to,
};

/// A route handler for deleting an account, redirects to the settings page on success.
///
/// Transactions that refer to the account are not deleted.
pub async fn delete_account_endpoint(
    State(state): State<DatabaseState>,
    Path(account_id): Path<AccountId>,
    HxRequest(is_htmx): HxRequest,
) -> Response {
    let connection = match acquire(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_form_response(is_htmx),
    };

    match delete_account(account_id, &connection) {
        Ok(()) => {
            tracing::info!("deleted account {account_id}");
            redirect_to(endpoints::SETTINGS_VIEW, is_htmx)
        }
        Err(error) => {
            tracing::warn!("could not delete account {account_id}: {error}");
            error.into_form_response(is_htmx)
        }
    }
}
