//! The dashboard: headline totals, accounts and the latest transactions.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    account::{Account, AccountTotals, get_account_totals, get_all_accounts},
    app_state::DatabaseState,
    db::acquire,
    endpoints,
    html::{
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, format_currency, link,
    },
    navigation::NavBar,
    transaction::{TransactionRow, get_recent_transactions, transactions_table},
};

/// How many transactions to show on the dashboard.
const RECENT_TRANSACTION_COUNT: u32 = 10;

/// Display a page with an overview of the user's finances.
pub async fn get_dashboard_page(State(state): State<DatabaseState>) -> Result<Response, Error> {
    let connection = acquire(&state.db_connection)?;

    let totals = get_account_totals(&connection)
        .inspect_err(|error| tracing::error!("could not get account totals: {error}"))?;
    let accounts = get_all_accounts(&connection)?;
    let transactions = get_recent_transactions(RECENT_TRANSACTION_COUNT, &connection)?;

    Ok(dashboard_view(&totals, &accounts, &transactions).into_response())
}

fn dashboard_view(
    totals: &AccountTotals,
    accounts: &[Account],
    transactions: &[TransactionRow],
) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            section id="totals" class="w-full max-w-5xl grid grid-cols-1 md:grid-cols-3 gap-4"
            {
                (total_card("Net Worth", totals.net_worth))
                (total_card("Cash", totals.cash))
                (total_card("Debt", totals.debt))
            }

            section class="w-full max-w-5xl"
            {
                h2 class="text-xl font-bold mb-4" { "Accounts" }

                @if accounts.is_empty() {
                    p
                    {
                        "No accounts yet. Add one on the "
                        (link(endpoints::SETTINGS_VIEW, "settings page"))
                        "."
                    }
                } @else {
                    (accounts_table(accounts))
                }
            }

            section class="w-full max-w-5xl"
            {
                div class="flex justify-between items-baseline mb-4"
                {
                    h2 class="text-xl font-bold" { "Recent Transactions" }
                    a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE) { "View all" }
                }

                @if transactions.is_empty() {
                    p { "No transactions yet." }
                } @else {
                    (transactions_table(transactions))
                }
            }
        }
    };

    base("Dashboard", &[], &content)
}

fn total_card(title: &str, amount: f64) -> Markup {
    html! {
        div class="p-6 bg-white border border-gray-200 rounded-lg shadow dark:bg-gray-800 dark:border-gray-700"
        {
            h3 class="text-sm font-medium text-gray-500 dark:text-gray-400" { (title) }
            p class="text-2xl font-bold text-gray-900 dark:text-white" { (format_currency(amount)) }
        }
    }
}

fn accounts_table(accounts: &[Account]) -> Markup {
    html! {
        div class="overflow-x-auto w-full"
        {
            table id="accounts" class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                        th scope="col" class="px-6 py-4 text-right" { "Balance" }
                    }
                }

                tbody
                {
                    @for account in accounts {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { (account.name) }
                            td class=(TABLE_CELL_STYLE) { (account.account_type) }
                            td class="px-6 py-4 text-right" { (format_currency(account.balance)) }
                        }
                    }
                }
            }
        }
    }
}
