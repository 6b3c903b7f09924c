//! The page and endpoint for editing a budget.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};

use crate::{
    Error,
    app_state::DatabaseState,
    budget::{
        Budget, BudgetForm, BudgetId, NewBudget,
        form::{BudgetFormDefaults, budget_form_view},
        get_budget, update_budget,
    },
    category::{Category, get_all_categories},
    db::acquire,
    endpoints::{self, format_endpoint},
    html::{FORM_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
    routing::redirect_to,
};

/// Renders the page for editing a budget.
pub async fn get_edit_budget_page(
    State(state): State<DatabaseState>,
    Path(budget_id): Path<BudgetId>,
) -> Result<Response, Error> {
    let connection = acquire(&state.db_connection)?;

    let budget = get_budget(budget_id, &connection)?;
    let categories = get_all_categories(&connection)?;

    Ok(edit_budget_view(&budget, &categories).into_response())
}

/// A route handler for updating a budget, redirects to the budgets page on success.
pub async fn update_budget_endpoint(
    State(state): State<DatabaseState>,
    Path(budget_id): Path<BudgetId>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<BudgetForm>,
) -> Response {
    let connection = match acquire(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_form_response(is_htmx),
    };

    match NewBudget::new(&form).and_then(|budget| update_budget(budget_id, budget, &connection)) {
        Ok(()) => redirect_to(endpoints::BUDGETS_VIEW, is_htmx),
        Err(error) => {
            tracing::warn!("could not update budget {budget_id}: {error}");
            error.into_form_response(is_htmx)
        }
    }
}

fn edit_budget_view(budget: &Budget, categories: &[Category]) -> Markup {
    let nav_bar = NavBar::new(endpoints::BUDGETS_VIEW).into_html();
    let update_endpoint = format_endpoint(endpoints::UPDATE_BUDGET, budget.id);
    let defaults = BudgetFormDefaults {
        category_id: Some(budget.category_id),
        amount: Some(budget.amount),
        start_date: budget.start_date,
        end_date: budget.end_date,
    };

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold mb-4" { "Edit Budget" }

            (budget_form_view(&update_endpoint, &defaults, categories, "Update Budget"))
        }
    };

    base("Edit Budget", &[dollar_input_styles()], &content)
}
