//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_htmx::HxRedirect;
use tower_http::services::ServeDir;

use crate::{
    AppState,
    account::{
        create_account_endpoint, delete_account_endpoint, get_edit_account_page,
        update_account_endpoint,
    },
    api::get_data,
    budget::{
        create_budget_endpoint, delete_budget_endpoint, get_budgets_page, get_edit_budget_page,
        update_budget_endpoint,
    },
    category::{
        create_category_endpoint, delete_category_endpoint, get_edit_category_page,
        update_category_endpoint,
    },
    dashboard::get_dashboard_page,
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    report::get_reports_page,
    settings_page::get_settings_page,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_edit_transaction_page,
        get_transactions_page, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_dashboard_page))
        .route(endpoints::API_DATA, get(get_data))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page),
        )
        .route(endpoints::BUDGETS_VIEW, get(get_budgets_page))
        .route(endpoints::EDIT_BUDGET_VIEW, get(get_edit_budget_page))
        .route(endpoints::REPORTS_VIEW, get(get_reports_page))
        .route(endpoints::SETTINGS_VIEW, get(get_settings_page))
        .route(endpoints::EDIT_ACCOUNT_VIEW, get(get_edit_account_page))
        .route(endpoints::EDIT_CATEGORY_VIEW, get(get_edit_category_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    // Deletes are plain links, so they use GET like the rest of the pages.
    let write_routes = Router::new()
        .route(endpoints::ADD_TRANSACTION, post(create_transaction_endpoint))
        .route(
            endpoints::UPDATE_TRANSACTION,
            post(update_transaction_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            get(delete_transaction_endpoint),
        )
        .route(endpoints::ADD_BUDGET, post(create_budget_endpoint))
        .route(endpoints::UPDATE_BUDGET, post(update_budget_endpoint))
        .route(endpoints::DELETE_BUDGET, get(delete_budget_endpoint))
        .route(endpoints::ADD_ACCOUNT, post(create_account_endpoint))
        .route(endpoints::UPDATE_ACCOUNT, post(update_account_endpoint))
        .route(endpoints::DELETE_ACCOUNT, get(delete_account_endpoint))
        .route(endpoints::ADD_CATEGORY, post(create_category_endpoint))
        .route(endpoints::UPDATE_CATEGORY, post(update_category_endpoint))
        .route(endpoints::DELETE_CATEGORY, get(delete_category_endpoint));

    page_routes
        .merge(write_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Redirect the client to `endpoint` after a successful write.
///
/// HTMX requests get the `HX-Redirect` header so that HTMX performs a full
/// page navigation, plain form submissions get a `303 See Other`.
pub(crate) fn redirect_to(endpoint: &str, is_htmx: bool) -> Response {
    if is_htmx {
        (HxRedirect(endpoint.to_owned()), StatusCode::SEE_OTHER).into_response()
    } else {
        Redirect::to(endpoint).into_response()
    }
}
