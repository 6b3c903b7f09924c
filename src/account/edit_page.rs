//! The account form and the page for editing an account.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    account::{ACCOUNT_TYPES, Account, AccountId, get_account},
    app_state::DatabaseState,
    db::acquire,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        base, dollar_input_styles,
    },
    navigation::NavBar,
};

/// Renders the page for editing an account.
pub async fn get_edit_account_page(
    State(state): State<DatabaseState>,
    Path(account_id): Path<AccountId>,
) -> Result<Response, Error> {
    let connection = acquire(&state.db_connection)?;

    let account = get_account(account_id, &connection).inspect_err(|error| {
        tracing::warn!("could not load account {account_id} for editing: {error}")
    })?;

    Ok(edit_account_view(&account).into_response())
}

fn edit_account_view(account: &Account) -> Markup {
    let nav_bar = NavBar::new(endpoints::SETTINGS_VIEW).into_html();
    let update_endpoint = format_endpoint(endpoints::UPDATE_ACCOUNT, account.id);

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold mb-4" { "Edit Account" }

            (account_form_view(&update_endpoint, Some(account), "Update Account"))
        }
    };

    base("Edit Account", &[dollar_input_styles()], &content)
}

/// A form for creating or updating an account.
///
/// The fields are filled in from `account` when one is given.
pub(crate) fn account_form_view(
    action: &str,
    account: Option<&Account>,
    submit_label: &str,
) -> Markup {
    let name = account.map(|account| account.name.as_str()).unwrap_or_default();
    let account_type = account
        .map(|account| account.account_type.as_str())
        .unwrap_or(ACCOUNT_TYPES[0]);
    let balance = account.map(|account| format!("{:.2}", account.balance));

    html! {
        form
            method="post"
            action=(action)
            hx-post=(action)
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for="account-name" class=(FORM_LABEL_STYLE) { "Name" }

                input
                    id="account-name"
                    type="text"
                    name="name"
                    placeholder="Checking Account"
                    value=(name)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="account-type" class=(FORM_LABEL_STYLE) { "Type" }

                input
                    id="account-type"
                    type="text"
                    name="type"
                    list="account-types"
                    value=(account_type)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);

                datalist id="account-types"
                {
                    @for suggestion in ACCOUNT_TYPES {
                        option value=(suggestion) {}
                    }
                }
            }

            div
            {
                label for="account-balance" class=(FORM_LABEL_STYLE) { "Balance" }

                div class="input-wrapper"
                {
                    input
                        id="account-balance"
                        type="number"
                        name="balance"
                        step="0.01"
                        placeholder="0.00"
                        value=[balance]
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_label) }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        Error,
        account::{AccountForm, NewAccount, create_account, get_edit_account_page},
        app_state::DatabaseState,
        test_utils::{
            assert_form_input_with_value, assert_form_submit_button_with_text, assert_hx_endpoint,
            assert_valid_html, must_get_form, parse_html_document,
        },
    };

    #[tokio::test]
    async fn renders_form_with_account_values() {
        let state = DatabaseState::in_memory();
        let account = {
            let connection = state.db_connection.lock().unwrap();
            let form = AccountForm {
                name: "Savings Account".to_owned(),
                account_type: "Savings".to_owned(),
                balance: 7087.05,
            };
            create_account(NewAccount::new(&form).unwrap(), &connection).unwrap()
        };

        let response = get_edit_account_page(State(state), Path(account.id))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        let update_endpoint = format!("/update_account/{}", account.id);
        assert_hx_endpoint(&form, &update_endpoint, "hx-post");
        assert_hx_endpoint(&form, &update_endpoint, "action");
        assert_form_input_with_value(&form, "name", "text", "Savings Account");
        assert_form_input_with_value(&form, "type", "text", "Savings");
        assert_form_input_with_value(&form, "balance", "number", "7087.05");
        assert_form_submit_button_with_text(&form, "Update Account");
    }

    #[tokio::test]
    async fn missing_account_is_not_found() {
        let state = DatabaseState::in_memory();

        let result = get_edit_account_page(State(state), Path(5)).await;

        let error = result.expect_err("want error for missing account");
        assert_eq!(error, Error::NotFound);
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }
}
