//! The settings page for managing accounts and categories.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    account::{Account, account_form_view, get_all_accounts},
    app_state::DatabaseState,
    category::{Category, category_form_view, get_all_categories},
    db::acquire,
    endpoints::{self, format_endpoint},
    html::{
        FORM_CONTAINER_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, dollar_input_styles, edit_delete_action_links, format_currency,
    },
    navigation::NavBar,
};

/// Render the accounts and categories with forms for adding to each.
pub async fn get_settings_page(State(state): State<DatabaseState>) -> Result<Response, Error> {
    let connection = acquire(&state.db_connection)?;

    let accounts = get_all_accounts(&connection)
        .inspect_err(|error| tracing::error!("could not get accounts: {error}"))?;
    let categories = get_all_categories(&connection)
        .inspect_err(|error| tracing::error!("could not get categories: {error}"))?;

    Ok(settings_view(&accounts, &categories).into_response())
}

fn settings_view(accounts: &[Account], categories: &[Category]) -> Markup {
    let nav_bar = NavBar::new(endpoints::SETTINGS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            section id="accounts" class="w-full max-w-5xl"
            {
                h2 class="text-xl font-bold mb-4" { "Accounts" }

                @if accounts.is_empty() {
                    p { "No accounts yet." }
                } @else {
                    (accounts_table(accounts))
                }

                div class=(FORM_CONTAINER_STYLE)
                {
                    h3 class="text-lg font-semibold my-4" { "Add Account" }
                    (account_form_view(endpoints::ADD_ACCOUNT, None, "Add Account"))
                }
            }

            section id="categories" class="w-full max-w-5xl"
            {
                h2 class="text-xl font-bold mb-4" { "Categories" }

                @if categories.is_empty() {
                    p { "No categories yet." }
                } @else {
                    (categories_table(categories))
                }

                div class=(FORM_CONTAINER_STYLE)
                {
                    h3 class="text-lg font-semibold my-4" { "Add Category" }
                    (category_form_view(endpoints::ADD_CATEGORY, "", "Add Category"))
                }
            }
        }
    };

    base("Settings", &[dollar_input_styles()], &content)
}

fn accounts_table(accounts: &[Account]) -> Markup {
    html! {
        table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                    th scope="col" class="px-6 py-4 text-right" { "Balance" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                }
            }

            tbody
            {
                @for account in accounts {
                    @let edit_url = format_endpoint(endpoints::EDIT_ACCOUNT_VIEW, account.id);
                    @let delete_url = format_endpoint(endpoints::DELETE_ACCOUNT, account.id);
                    @let confirm_message = format!(
                        "Are you sure you want to delete the account '{}'? \
                        Its transactions will not be deleted.",
                        account.name
                    );

                    tr class=(TABLE_ROW_STYLE)
                    {
                        td class=(TABLE_CELL_STYLE) { (account.name) }
                        td class=(TABLE_CELL_STYLE) { (account.account_type) }
                        td class="px-6 py-4 text-right" { (format_currency(account.balance)) }
                        td class="px-6 py-4 space-x-2"
                        {
                            (edit_delete_action_links(&edit_url, &delete_url, &confirm_message))
                        }
                    }
                }
            }
        }
    }
}

fn categories_table(categories: &[Category]) -> Markup {
    html! {
        table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                }
            }

            tbody
            {
                @for category in categories {
                    @let edit_url = format_endpoint(endpoints::EDIT_CATEGORY_VIEW, category.id);
                    @let delete_url = format_endpoint(endpoints::DELETE_CATEGORY, category.id);
                    @let confirm_message = format!(
                        "Are you sure you want to delete the category '{}'?",
                        category.name
                    );

                    tr class=(TABLE_ROW_STYLE)
                    {
                        td class=(TABLE_CELL_STYLE) { (category.name) }
                        td class="px-6 py-4 space-x-2"
                        {
                            (edit_delete_action_links(&edit_url, &delete_url, &confirm_message))
                        }
                    }
                }
            }
        }
    }
}
