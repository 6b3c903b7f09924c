//! Defines the endpoint for creating a new account.

use axum::{Form, extract::State, response::Response};
use axum_htmx::HxRequest;

use crate::{
    account::{AccountForm, NewAccount, create_account},
    app_state::DatabaseState,
    db::acquire,
    endpoints,
    routing::redirect_to,
};

/// A route handler for creating a new account, redirects to the settings page on success.
pub async fn create_account_endpoint(
    State(state): State<DatabaseState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<AccountForm>,
) -> Response {
    let connection = match acquire(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_form_response(is_htmx),
    };

    match NewAccount::new(&form).and_then(|account| create_account(account, &connection)) {
        Ok(account) => {
            tracing::info!("created account {} ({})", account.id, account.name);
            redirect_to(endpoints::SETTINGS_VIEW, is_htmx)
        }
        Err(error) => {
            tracing::warn!("could not create account with {form:?}: {error}");
            error.into_form_response(is_htmx)
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Form, extract::State, http::StatusCode};
    use axum_htmx::HxRequest;

    use crate::{
        account::{AccountForm, create_account_endpoint, get_all_accounts},
        app_state::DatabaseState,
        endpoints,
        test_utils::{assert_hx_redirect, get_header},
    };

    fn form(name: &str) -> AccountForm {
        AccountForm {
            name: name.to_owned(),
            account_type: "Checking".to_owned(),
            balance: 100.0,
        }
    }

    #[tokio::test]
    async fn creates_account_and_redirects() {
        let state = DatabaseState::in_memory();

        let response = create_account_endpoint(
            State(state.clone()),
            HxRequest(true),
            Form(form("Checking Account")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::SETTINGS_VIEW);
        let connection = state.db_connection.lock().unwrap();
        let accounts = get_all_accounts(&connection).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "Checking Account");
    }

    #[tokio::test]
    async fn plain_form_post_gets_location_redirect() {
        let state = DatabaseState::in_memory();

        let response =
            create_account_endpoint(State(state), HxRequest(false), Form(form("Savings"))).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(get_header(&response, "location"), endpoints::SETTINGS_VIEW);
    }

    #[tokio::test]
    async fn empty_name_is_bad_request() {
        let state = DatabaseState::in_memory();

        let response =
            create_account_endpoint(State(state.clone()), HxRequest(true), Form(form("  "))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let connection = state.db_connection.lock().unwrap();
        assert!(get_all_accounts(&connection).unwrap().is_empty());
    }
}
