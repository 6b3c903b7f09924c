//! Defines the endpoint for updating an account.

use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};
use axum_htmx::HxRequest;

use crate::{
    account::{AccountForm, AccountId, NewAccount, update_account},
    app_state::DatabaseState,
    db::acquire,
    endpoints,
    routing::redirect_to,
};

pub async fn update_account_endpoint(
    State(state): State<DatabaseState>,
    Path(account_id): Path<AccountId>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<AccountForm>,
) -> Response {
    let connection = match acquire(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_form_response(is_htmx),
    };

    match NewAccount::new(&form)
        .and_then(|account| update_account(account_id, account, &connection))
    {
        Ok(()) => redirect_to(endpoints::SETTINGS_VIEW, is_htmx),
        Err(error) => {
            tracing::warn!("could not update account {account_id}: {error}");
            error.into_form_response(is_htmx)
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Form,
        extract::{Path, State},
        http::StatusCode,
    };
    use axum_htmx::HxRequest;

    use crate::{
        account::{
            AccountForm, NewAccount, create_account, get_account, update_account_endpoint,
        },
        app_state::DatabaseState,
        endpoints,
        test_utils::assert_hx_redirect,
    };

    fn form(name: &str, balance: f64) -> AccountForm {
        AccountForm {
            name: name.to_owned(),
            account_type: "Savings".to_owned(),
            balance,
        }
    }

    #[tokio::test]
    async fn updates_account_and_redirects() {
        let state = DatabaseState::in_memory();
        let account = {
            let connection = state.db_connection.lock().unwrap();
            create_account(
                NewAccount::new(&form("Savings Account", 10.0)).unwrap(),
                &connection,
            )
            .unwrap()
        };

        let response = update_account_endpoint(
            State(state.clone()),
            Path(account.id),
            HxRequest(true),
            Form(form("Rainy Day Fund", 250.0)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::SETTINGS_VIEW);
        let connection = state.db_connection.lock().unwrap();
        let got = get_account(account.id, &connection).unwrap();
        assert_eq!(got.name, "Rainy Day Fund");
        assert_eq!(got.balance, 250.0);
    }

    #[tokio::test]
    async fn missing_account_is_not_found() {
        let state = DatabaseState::in_memory();

        let response = update_account_endpoint(
            State(state),
            Path(99),
            HxRequest(true),
            Form(form("Rainy Day Fund", 250.0)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
