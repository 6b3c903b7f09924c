//! Defines the route handler for the reports page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    app_state::DatabaseState,
    db::acquire,
    endpoints,
    html::{
        HeadElement, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, format_currency,
    },
    navigation::NavBar,
    report::{
        CategorySummary, MonthlySummary,
        chart::{chart_container, chart_script, income_expenses_chart},
        get_category_summary, get_monthly_summary,
    },
};

/// Display the monthly and per-category summaries of all transactions.
pub async fn get_reports_page(State(state): State<DatabaseState>) -> Result<Response, Error> {
    let connection = acquire(&state.db_connection)?;

    let monthly_summary = get_monthly_summary(&connection)
        .inspect_err(|error| tracing::error!("could not get monthly summary: {error}"))?;
    let category_summary = get_category_summary(&connection)
        .inspect_err(|error| tracing::error!("could not get category summary: {error}"))?;

    Ok(reports_view(&monthly_summary, &category_summary).into_response())
}

fn reports_view(monthly_summary: &[MonthlySummary], category_summary: &[CategorySummary]) -> Markup {
    let nav_bar = NavBar::new(endpoints::REPORTS_VIEW).into_html();
    let mut head_elements = Vec::new();

    if !monthly_summary.is_empty() {
        let chart = income_expenses_chart(monthly_summary);
        head_elements.push(HeadElement::ScriptLink(
            "/static/echarts.6.0.0.min.js".to_owned(),
        ));
        head_elements.push(chart_script(&chart));
    }

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold" { "Reports" }

            @if monthly_summary.is_empty() {
                p { "Add some transactions to see reports." }
            } @else {
                section class="w-full max-w-5xl" { (chart_container()) }

                section class="w-full max-w-5xl"
                {
                    h3 class="text-lg font-semibold mb-4" { "Monthly Summary" }
                    (monthly_summary_table(monthly_summary))
                }

                section class="w-full max-w-5xl"
                {
                    h3 class="text-lg font-semibold mb-4" { "Expenses by Category" }
                    (category_summary_table(category_summary))
                }
            }
        }
    };

    base("Reports", &head_elements, &content)
}

fn monthly_summary_table(monthly_summary: &[MonthlySummary]) -> Markup {
    html! {
        table id="monthly-summary" class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "Month" }
                    th scope="col" class="px-6 py-4 text-right" { "Income" }
                    th scope="col" class="px-6 py-4 text-right" { "Expenses" }
                    th scope="col" class="px-6 py-4 text-right" { "Net" }
                }
            }

            tbody
            {
                @for month in monthly_summary {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td class=(TABLE_CELL_STYLE) { (month.label()) }
                        td class="px-6 py-4 text-right text-green-600 dark:text-green-400"
                        {
                            (format_currency(month.income))
                        }
                        td class="px-6 py-4 text-right text-red-600 dark:text-red-400"
                        {
                            (format_currency(month.expenses))
                        }
                        td class="px-6 py-4 text-right" { (format_currency(month.net())) }
                    }
                }
            }
        }
    }
}

fn category_summary_table(category_summary: &[CategorySummary]) -> Markup {
    html! {
        @if category_summary.is_empty() {
            p { "No expenses yet." }
        } @else {
            table id="category-summary" class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class="px-6 py-4 text-right" { "Expenses" }
                    }
                }

                tbody
                {
                    @for category in category_summary {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { (category.category_name) }
                            td class="px-6 py-4 text-right"
                            {
                                (format_currency(category.total_expenses))
                            }
                        }
                    }
                }
            }
        }
    }
}
