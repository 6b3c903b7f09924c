//! Category creation endpoint.

use axum::{Form, extract::State, response::Response};
use axum_htmx::HxRequest;

use crate::{
    app_state::DatabaseState,
    category::{CategoryForm, CategoryName, create_category},
    db::acquire,
    endpoints,
    routing::redirect_to,
};

/// Handle category creation form submission.
pub async fn create_category_endpoint(
    State(state): State<DatabaseState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<CategoryForm>,
) -> Response {
    let connection = match acquire(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_form_response(is_htmx),
    };

    match CategoryName::new(&form.name).and_then(|name| create_category(name, &connection)) {
        Ok(category) => {
            tracing::info!("created category {} ({})", category.id, category.name);
            redirect_to(endpoints::SETTINGS_VIEW, is_htmx)
        }
        Err(error) => {
            tracing::warn!("could not create category {:?}: {error}", form.name);
            error.into_form_response(is_htmx)
        }
    }
}
