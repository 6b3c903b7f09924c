//! Defines the route handler for the page that lists budgets.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    budget::{
        BudgetRow,
        form::{BudgetFormDefaults, budget_form_view},
        get_all_budgets,
    },
    category::{Category, get_all_categories},
    db::acquire,
    endpoints::{self, format_endpoint},
    html::{
        CATEGORY_BADGE_STYLE, FORM_CONTAINER_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, dollar_input_styles,
        edit_delete_action_links, format_currency,
    },
    navigation::NavBar,
    timezone::local_today,
};

/// The state needed for the budgets page.
#[derive(Debug, Clone)]
pub struct BudgetsPageState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for BudgetsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the budgets table and the form for adding a budget.
///
/// The add form defaults to the current calendar month.
pub async fn get_budgets_page(State(state): State<BudgetsPageState>) -> Result<Response, Error> {
    let connection = acquire(&state.db_connection)?;

    let budgets = get_all_budgets(&connection)
        .inspect_err(|error| tracing::error!("could not get budgets: {error}"))?;
    let categories = get_all_categories(&connection)?;
    let defaults = BudgetFormDefaults::for_month_of(local_today(&state.local_timezone));

    Ok(budgets_view(&budgets, &categories, &defaults).into_response())
}

fn budgets_view(
    budgets: &[BudgetRow],
    categories: &[Category],
    defaults: &BudgetFormDefaults,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::BUDGETS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-5xl"
            {
                h2 class="text-xl font-bold mb-4" { "Budgets" }

                @if budgets.is_empty() {
                    p { "No budgets yet." }
                } @else {
                    (budgets_table(budgets))
                }
            }

            section class=(FORM_CONTAINER_STYLE)
            {
                h2 class="text-xl font-bold my-4" { "Add Budget" }

                @if categories.is_empty() {
                    p { "Add a category on the settings page first." }
                } @else {
                    (budget_form_view(endpoints::ADD_BUDGET, defaults, categories, "Add Budget"))
                }
            }
        }
    };

    base("Budgets", &[dollar_input_styles()], &content)
}

fn budgets_table(budgets: &[BudgetRow]) -> Markup {
    html! {
        div class="overflow-x-auto w-full"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Period" }
                        th scope="col" class="px-6 py-4 text-right" { "Budget" }
                        th scope="col" class="px-6 py-4 text-right" { "Spent" }
                        th scope="col" class="px-6 py-4 text-right" { "Remaining" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                    }
                }

                tbody
                {
                    @for row in budgets {
                        (budget_row_view(row))
                    }
                }
            }
        }
    }
}

fn budget_row_view(row: &BudgetRow) -> Markup {
    let budget = &row.budget;
    let edit_url = format_endpoint(endpoints::EDIT_BUDGET_VIEW, budget.id);
    let delete_url = format_endpoint(endpoints::DELETE_BUDGET, budget.id);
    let category_name = row.category_name.as_deref().unwrap_or("Uncategorised");
    let confirm_message = format!(
        "Are you sure you want to delete the {category_name} budget starting {}?",
        budget.start_date
    );
    let remaining = row.remaining();
    let remaining_style = if remaining < 0.0 {
        "px-6 py-4 text-right text-red-600 dark:text-red-400"
    } else {
        "px-6 py-4 text-right text-green-600 dark:text-green-400"
    };

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE)
            {
                @if row.category_name.is_some() {
                    span class=(CATEGORY_BADGE_STYLE) { (category_name) }
                } @else {
                    span class="italic" { (category_name) }
                }
            }
            td class=(TABLE_CELL_STYLE) { (budget.start_date) " to " (budget.end_date) }
            td class="px-6 py-4 text-right" { (format_currency(budget.amount)) }
            td class="px-6 py-4 text-right" { (format_currency(row.spent)) }
            td class=(remaining_style) { (format_currency(remaining)) }
            td class="px-6 py-4 space-x-2"
            {
                (edit_delete_action_links(&edit_url, &delete_url, &confirm_message))
            }
        }
    }
}
