use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    account::{Account, get_all_accounts},
    app_state::DatabaseState,
    category::{Category, get_all_categories},
    db::acquire,
    endpoints::{self, format_endpoint},
    html::{FORM_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
    transaction::{
        Transaction, TransactionId,
        form::{TransactionFormDefaults, transaction_form_view},
        get_transaction,
    },
};

/// Renders the page for editing a transaction.
pub async fn get_edit_transaction_page(
    State(state): State<DatabaseState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let connection = acquire(&state.db_connection)?;

    let transaction = get_transaction(transaction_id, &connection)?;
    let accounts = get_all_accounts(&connection)?;
    let categories = get_all_categories(&connection)?;

    Ok(edit_transaction_view(&transaction, &accounts, &categories).into_response())
}

fn edit_transaction_view(
    transaction: &Transaction,
    accounts: &[Account],
    categories: &[Category],
) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let update_endpoint = format_endpoint(endpoints::UPDATE_TRANSACTION, transaction.id);
    let defaults = TransactionFormDefaults {
        description: Some(&transaction.description),
        amount: Some(transaction.amount),
        date: transaction.date,
        account_id: Some(transaction.account_id),
        category_id: Some(transaction.category_id),
    };

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold mb-4" { "Edit Transaction" }

            (transaction_form_view(
                &update_endpoint,
                &defaults,
                accounts,
                categories,
                "Update Transaction",
            ))
        }
    };

    base("Edit Transaction", &[dollar_input_styles()], &content)
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        Error,
        account::delete_account,
        app_state::DatabaseState,
        db::seed,
        test_utils::{
            assert_form_input_with_value, assert_form_select, assert_hx_endpoint,
            assert_valid_html, must_get_form, parse_html_document,
        },
        transaction::{get_all_transactions, get_edit_transaction_page},
    };

    #[tokio::test]
    async fn renders_form_with_transaction_values() {
        let state = DatabaseState::in_memory();
        let transaction = {
            let connection = state.db_connection.lock().unwrap();
            seed(&connection).unwrap();
            get_all_transactions(&connection).unwrap()[0]
                .transaction
                .clone()
        };

        let response = get_edit_transaction_page(State(state), Path(transaction.id))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_hx_endpoint(
            &form,
            &format!("/update_transaction/{}", transaction.id),
            "hx-post",
        );
        assert_form_input_with_value(&form, "description", "text", "SuperMart");
        assert_form_input_with_value(&form, "amount", "number", "-85.50");
        assert_form_input_with_value(&form, "date", "date", "2024-06-28");
        // A fresh database numbers the seeded accounts and categories from 1.
        assert_form_select(&form, "account_id", &["1", "2", "3", "4"], Some("1"));
        assert_form_select(&form, "category_id", &["1", "2", "3", "4"], Some("1"));
    }

    #[tokio::test]
    async fn transaction_of_deleted_account_asks_for_account() {
        let state = DatabaseState::in_memory();
        let transaction = {
            let connection = state.db_connection.lock().unwrap();
            seed(&connection).unwrap();
            let transaction = get_all_transactions(&connection).unwrap()[0]
                .transaction
                .clone();
            delete_account(transaction.account_id, &connection).unwrap();
            transaction
        };

        let response = get_edit_transaction_page(State(state), Path(transaction.id))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let form = must_get_form(&html);
        assert_form_select(&form, "account_id", &["", "2", "3", "4"], Some(""));
        assert_form_select(&form, "category_id", &["1", "2", "3", "4"], Some("1"));
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let state = DatabaseState::in_memory();

        let result = get_edit_transaction_page(State(state), Path(404)).await;

        assert_eq!(result.err(), Some(Error::NotFound));
    }
}
