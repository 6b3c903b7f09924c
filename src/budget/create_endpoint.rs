//! Defines the endpoint for creating a new budget.

use axum::{Form, extract::State, response::Response};
use axum_htmx::HxRequest;

use crate::{
    app_state::DatabaseState,
    budget::{BudgetForm, NewBudget, create_budget},
    db::acquire,
    endpoints,
    routing::redirect_to,
};

/// A route handler for creating a new budget, redirects to the budgets page on success.
pub async fn create_budget_endpoint(
    State(state): State<DatabaseState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<BudgetForm>,
) -> Response {
    let connection = match acquire(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_form_response(is_htmx),
    };

    match NewBudget::new(&form).and_then(|budget| create_budget(budget, &connection)) {
        Ok(budget) => {
            tracing::info!(
                "created budget {} for category {}",
                budget.id,
                budget.category_id
            );
            redirect_to(endpoints::BUDGETS_VIEW, is_htmx)
        }
        Err(error) => {
            tracing::warn!("could not create budget with {form:?}: {error}");
            error.into_form_response(is_htmx)
        }
    }
}
