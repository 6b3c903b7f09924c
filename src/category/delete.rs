//! Category deletion endpoint.

use axum::{
    extract::{Path, State},
    response::Response,
};
use axum_htmx::HxRequest;

use crate::{
    app_state::DatabaseState,
    category::{CategoryId, delete_category},
    db::acquire,
    endpoints,
    routing::redirect_to,
};

/// Handle category deletion, redirects to the settings page on success.
///
/// Transactions and budgets in the category keep their category ID.
pub async fn delete_category_endpoint(
    State(state): State<DatabaseState>,
    Path(category_id): Path<CategoryId>,
    HxRequest(is_htmx): HxRequest,
) -> Response {
    let connection = match acquire(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_form_response(is_htmx),
    };

    match delete_category(category_id, &connection) {
        Ok(()) => {
            tracing::info!("deleted category {category_id}");
            redirect_to(endpoints::SETTINGS_VIEW, is_htmx)
        }
        Err(error) => {
            tracing::warn!("could not delete category {category_id}: {error}");
            error.into_form_response(is_htmx)
        }
    }
}
