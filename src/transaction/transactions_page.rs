//! Defines the route handler for the page that displays transactions as a table.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    account::{Account, get_all_accounts},
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
    transaction::{
        TransactionRow, get_all_transactions,
        form::{TransactionFormDefaults, transaction_form_view},
    },
};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    /// The database connection for accessing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the transactions table and the form for adding a transaction.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
) -> Result<Response, Error> {
    let connection = acquire(&state.db_connection)?;

    let transactions = get_all_transactions(&connection)
        .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?;
    let accounts = get_all_accounts(&connection)?;
    let categories = get_all_categories(&connection)?;
    let defaults = TransactionFormDefaults {
        description: None,
        amount: None,
        date: local_today(&state.local_timezone),
        account_id: None,
        category_id: None,
    };

    Ok(transactions_view(&transactions, &accounts, &categories, &defaults).into_response())
}

fn transactions_view(
    transactions: &[TransactionRow],
    accounts: &[Account],
    categories: &[Category],
    defaults: &TransactionFormDefaults<'_>,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let can_add = !accounts.is_empty() && !categories.is_empty();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-5xl"
            {
                h2 class="text-xl font-bold mb-4" { "Transactions" }

                @if transactions.is_empty() {
                    p { "No transactions yet." }
                } @else {
                    (transactions_table(transactions))
                }
            }

            section class=(FORM_CONTAINER_STYLE)
            {
                h2 class="text-xl font-bold my-4" { "Add Transaction" }

                @if can_add {
                    (transaction_form_view(
                        endpoints::ADD_TRANSACTION,
                        defaults,
                        accounts,
                        categories,
                        "Add Transaction",
                    ))
                } @else {
                    p { "Add an account and a category on the settings page first." }
                }
            }
        }
    };

    base("Transactions", &[dollar_input_styles()], &content)
}

pub(crate) fn transactions_table(transactions: &[TransactionRow]) -> Markup {
    html! {
        div class="overflow-x-auto w-full"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Account" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class="px-6 py-4 text-right" { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                    }
                }

                tbody
                {
                    @for row in transactions {
                        (transaction_row_view(row))
                    }
                }
            }
        }
    }
}

fn transaction_row_view(row: &TransactionRow) -> Markup {
    let transaction = &row.transaction;
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id);
    let delete_url = format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id);
    let confirm_message = format!(
        "Are you sure you want to delete the transaction '{}'?",
        transaction.description
    );

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.date) }
            td class=(TABLE_CELL_STYLE) { (transaction.description) }
            td class=(TABLE_CELL_STYLE)
            {
                @if let Some(account_name) = &row.account_name {
                    (account_name)
                } @else {
                    span class="italic" { "(deleted account)" }
                }
            }
            td class=(TABLE_CELL_STYLE)
            {
                @if let Some(category_name) = &row.category_name {
                    span class=(CATEGORY_BADGE_STYLE) { (category_name) }
                } @else {
                    span class="italic" { "Uncategorised" }
                }
            }
            td class="px-6 py-4 text-right"
            {
                (format_currency(transaction.amount))
            }
            td class="px-6 py-4 space-x-2"
            {
                (edit_delete_action_links(&edit_url, &delete_url, &confirm_message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use rusqlite::Connection;
    use scraper::Selector;

    use crate::{
        account::{delete_account, get_all_accounts},
        db::{initialize, seed},
        endpoints,
        test_utils::{
            assert_hx_endpoint, assert_valid_html, must_get_form, parse_html_document,
        },
        transaction::get_transactions_page,
    };

    use super::TransactionsPageState;

    fn get_state(seeded: bool) -> TransactionsPageState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        if seeded {
            seed(&connection).unwrap();
        }

        TransactionsPageState {
            local_timezone: "Etc/UTC".to_owned(),
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn lists_transactions_newest_first() {
        let response = get_transactions_page(State(get_state(true))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let rows: Vec<_> = html
            .select(&Selector::parse("tbody tr").unwrap())
            .collect();
        assert_eq!(rows.len(), 4);
        let first_row_text = rows[0].text().collect::<String>();
        assert!(first_row_text.contains("2024-06-28"));
        assert!(first_row_text.contains("SuperMart"));
        assert!(first_row_text.contains("Groceries"));
        assert!(first_row_text.contains("Checking Account"));
        assert!(first_row_text.contains("-$85.50"));
    }

    #[tokio::test]
    async fn shows_deleted_account() {
        let state = get_state(true);
        {
            let connection = state.db_connection.lock().unwrap();
            let savings = get_all_accounts(&connection).unwrap()[1].id;
            delete_account(savings, &connection).unwrap();
        }

        let response = get_transactions_page(State(state)).await.unwrap();

        let html = parse_html_document(response).await;
        let rows: Vec<_> = html
            .select(&Selector::parse("tbody tr").unwrap())
            .map(|row| row.text().collect::<String>())
            .collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[3].contains("Public Transport"));
        assert!(rows[3].contains("(deleted account)"));
        assert!(!rows[0].contains("(deleted account)"));
    }

    #[tokio::test]
    async fn rows_link_to_edit_and_delete() {
        let response = get_transactions_page(State(get_state(true))).await.unwrap();

        let html = parse_html_document(response).await;
        let links: Vec<_> = html
            .select(&Selector::parse("tbody tr a").unwrap())
            .filter_map(|link| link.value().attr("href"))
            .collect();
        assert!(links.iter().any(|href| href.ends_with("/edit")));
        assert!(links
            .iter()
            .any(|href| href.starts_with("/delete_transaction/")));
    }

    #[tokio::test]
    async fn has_add_transaction_form() {
        let response = get_transactions_page(State(get_state(true))).await.unwrap();

        let html = parse_html_document(response).await;
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::ADD_TRANSACTION, "hx-post");
        assert_hx_endpoint(&form, endpoints::ADD_TRANSACTION, "action");
    }

    #[tokio::test]
    async fn empty_database_has_no_form() {
        let response = get_transactions_page(State(get_state(false)))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert!(html.select(&Selector::parse("form").unwrap()).next().is_none());
        assert!(html.select(&Selector::parse("table").unwrap()).next().is_none());
    }
}
