//! Defines the endpoint for deleting a budget.

use axum::{
    extract::{Path, State},
    response::Response,
};
use axum_htmx::HxRequest;

use crate::{
    app_state::DatabaseState,
    budget::{BudgetId, delete_budget},
    db::acquire,
    endpoints,
    routing::redirect_to,
};

/// A route handler for deleting a budget, redirects to the budgets page on success.
pub async fn delete_budget_endpoint(
    State(state): State<DatabaseState>,
    Path(budget_id): Path<BudgetId>,
    HxRequest(is_htmx): HxRequest,
) -> Response {
    let connection = match acquire(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_form_response(is_htmx),
    };

    match delete_budget(budget_id, &connection) {
        Ok(()) => redirect_to(endpoints::BUDGETS_VIEW, is_htmx),
        Err(error) => {
            tracing::warn!("could not delete budget {budget_id}: {error}");
            error.into_form_response(is_htmx)
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use axum_htmx::HxRequest;
    use time::macros::date;

    use crate::{
        app_state::DatabaseState,
        budget::{BudgetForm, NewBudget, create_budget, delete_budget_endpoint, get_all_budgets},
        db::seed,
        endpoints,
        test_utils::assert_hx_redirect,
    };

    #[tokio::test]
    async fn deletes_budget() {
        let state = DatabaseState::in_memory();
        let budget = {
            let connection = state.db_connection.lock().unwrap();
            seed(&connection).unwrap();
            let form = BudgetForm {
                category_id: 2,
                amount: 10.0,
                start_date: date!(2024 - 01 - 01),
                end_date: date!(2024 - 12 - 31),
            };
            create_budget(NewBudget::new(&form).unwrap(), &connection).unwrap()
        };

        let response =
            delete_budget_endpoint(State(state.clone()), Path(budget.id), HxRequest(true)).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::BUDGETS_VIEW);
        let connection = state.db_connection.lock().unwrap();
        assert!(get_all_budgets(&connection).unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_budget_is_not_found() {
        let state = DatabaseState::in_memory();

        let response = delete_budget_endpoint(State(state), Path(1), HxRequest(true)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
