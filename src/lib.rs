//! Finance Tracker is a web app for tracking accounts, transactions and budgets.
//!
//! This library provides a REST API that directly serves HTML pages, plus a
//! small JSON endpoint. All persistent state lives in a SQLite database and is
//! accessed through functions that take an explicit [rusqlite::Connection].

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use time::Date;
use tokio::signal;

mod account;
mod alert;
mod api;
mod app_state;
mod budget;
mod category;
mod dashboard;
mod database_id;
mod db;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod report;
mod routing;
mod settings_page;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use db::{initialize as initialize_db, seed as seed_db, seed_if_empty};
pub use logging::logging_middleware;
pub use routing::build_router;

use crate::{
    account::AccountId, alert::Alert, category::CategoryId,
    internal_server_error::InternalServerError, not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used as an account name.
    #[error("Account name cannot be empty")]
    EmptyAccountName,

    /// An empty string was used as an account type.
    #[error("Account type cannot be empty")]
    EmptyAccountType,

    /// An empty string was used as a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// An empty string was used as a transaction description.
    #[error("Transaction description cannot be empty")]
    EmptyDescription,

    /// An amount or balance was NaN or infinite.
    #[error("{0} is not a valid amount")]
    InvalidAmount(f64),

    /// A budget ends before it starts.
    #[error("the budget end date {end} is before the start date {start}")]
    InvalidDateRange {
        /// The first day of the budget period.
        start: Date,
        /// The last day of the budget period.
        end: Date,
    },

    /// The specified category name already exists in the database.
    #[error("the category \"{0}\" already exists in the database")]
    DuplicateCategoryName(String),

    /// The account ID used to create or update a transaction did not match a valid account.
    #[error("the account ID {0} does not refer to a valid account")]
    InvalidAccount(AccountId),

    /// The category ID used to create or update a transaction or budget did not match a valid
    /// category.
    #[error("the category ID {0} does not refer to a valid category")]
    InvalidCategory(CategoryId),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// Tried to update an account that does not exist
    #[error("tried to update an account that is not in the database")]
    UpdateMissingAccount,

    /// Tried to delete an account that does not exist
    #[error("tried to delete an account that is not in the database")]
    DeleteMissingAccount,

    /// Tried to update a category that does not exist
    #[error("tried to update a category that is not in the database")]
    UpdateMissingCategory,

    /// Tried to delete a category that does not exist
    #[error("tried to delete a category that is not in the database")]
    DeleteMissingCategory,

    /// Tried to update a budget that does not exist
    #[error("tried to update a budget that is not in the database")]
    UpdateMissingBudget,

    /// Tried to delete a budget that does not exist
    #[error("tried to delete a budget that is not in the database")]
    DeleteMissingBudget,

    /// The database connection could not be acquired for the request.
    #[error("the database connection is not available")]
    NotConnected,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl Error {
    /// The HTTP status code that best describes the error to a client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::EmptyAccountName
            | Error::EmptyAccountType
            | Error::EmptyCategoryName
            | Error::EmptyDescription
            | Error::InvalidAmount(_)
            | Error::InvalidDateRange { .. }
            | Error::DuplicateCategoryName(_) => StatusCode::BAD_REQUEST,
            Error::InvalidAccount(_)
            | Error::InvalidCategory(_)
            | Error::NotFound
            | Error::UpdateMissingTransaction
            | Error::DeleteMissingTransaction
            | Error::UpdateMissingAccount
            | Error::DeleteMissingAccount
            | Error::UpdateMissingCategory
            | Error::DeleteMissingCategory
            | Error::UpdateMissingBudget
            | Error::DeleteMissingBudget => StatusCode::NOT_FOUND,
            Error::NotConnected => StatusCode::SERVICE_UNAVAILABLE,
            Error::SqlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render the error as a dismissable alert for HTMX requests.
    fn into_alert_response(self) -> Response {
        let status_code = self.status_code();

        let (message, details) = match &self {
            Error::EmptyAccountName
            | Error::EmptyAccountType
            | Error::EmptyCategoryName
            | Error::EmptyDescription
            | Error::InvalidAmount(_)
            | Error::InvalidDateRange { .. } => ("Invalid input", self.to_string()),
            Error::DuplicateCategoryName(name) => (
                "Duplicate Category Name",
                format!(
                    "The category {name} already exists. \
                    Choose a different category name, or edit the existing category."
                ),
            ),
            Error::InvalidAccount(account_id) => (
                "Invalid account",
                format!("Could not find an account with the ID {account_id}"),
            ),
            Error::InvalidCategory(category_id) => (
                "Invalid category",
                format!("Could not find a category with the ID {category_id}"),
            ),
            Error::UpdateMissingTransaction => (
                "Could not update transaction",
                "The transaction could not be found.".to_owned(),
            ),
            Error::DeleteMissingTransaction => (
                "Could not delete transaction",
                "The transaction could not be found. \
                Try refreshing the page to see if the transaction has already been deleted."
                    .to_owned(),
            ),
            Error::UpdateMissingAccount => (
                "Could not update account",
                "The account could not be found.".to_owned(),
            ),
            Error::DeleteMissingAccount => (
                "Could not delete account",
                "The account could not be found. \
                Try refreshing the page to see if the account has already been deleted."
                    .to_owned(),
            ),
            Error::UpdateMissingCategory => (
                "Could not update category",
                "The category could not be found.".to_owned(),
            ),
            Error::DeleteMissingCategory => (
                "Could not delete category",
                "The category could not be found. \
                Try refreshing the page to see if the category has already been deleted."
                    .to_owned(),
            ),
            Error::UpdateMissingBudget => (
                "Could not update budget",
                "The budget could not be found.".to_owned(),
            ),
            Error::DeleteMissingBudget => (
                "Could not delete budget",
                "The budget could not be found. \
                Try refreshing the page to see if the budget has already been deleted."
                    .to_owned(),
            ),
            Error::NotFound => (
                "Not found",
                "The requested resource could not be found.".to_owned(),
            ),
            Error::NotConnected => (
                "Database unavailable",
                "The database connection is not available. Try again later.".to_owned(),
            ),
            Error::SqlError(error) => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details."
                        .to_owned(),
                )
            }
        };

        (
            status_code,
            Alert {
                message: message.to_owned(),
                details,
            },
        )
            .into_response()
    }

    /// Respond to a failed form submission.
    ///
    /// HTMX requests get an alert fragment that is swapped into the alert
    /// container, plain form submissions get a full error page.
    pub(crate) fn into_form_response(self, is_htmx: bool) -> Response {
        if is_htmx {
            self.into_alert_response()
        } else {
            self.into_response()
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::NotConnected => InternalServerError {
                status_code: StatusCode::SERVICE_UNAVAILABLE,
                description: "Database Unavailable",
                fix: "The database connection is not available. Try again later.",
            }
            .into_response(),
            Error::SqlError(error) => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
            error => {
                let status_code = error.status_code();
                let description = error.to_string();
                InternalServerError {
                    status_code,
                    description: &description,
                    fix: "Go back, check the details you entered and try again.",
                }
                .into_response()
            }
        }
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use time::macros::date;

    use crate::{
        Error,
        test_utils::{assert_content_type, assert_valid_html, parse_html_fragment},
    };

    #[test]
    fn query_returned_no_rows_maps_to_not_found() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();

        assert_eq!(error, Error::NotFound);
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        let errors = [
            Error::EmptyAccountName,
            Error::EmptyAccountType,
            Error::EmptyCategoryName,
            Error::EmptyDescription,
            Error::InvalidAmount(f64::NAN),
            Error::InvalidDateRange {
                start: date!(2024 - 06 - 30),
                end: date!(2024 - 06 - 01),
            },
            Error::DuplicateCategoryName("Groceries".to_owned()),
        ];

        for error in errors {
            assert_eq!(error.status_code(), StatusCode::BAD_REQUEST, "{error:?}");
        }
    }

    #[test]
    fn missing_entities_are_not_found() {
        let errors = [
            Error::InvalidAccount(1),
            Error::InvalidCategory(1),
            Error::NotFound,
            Error::UpdateMissingTransaction,
            Error::DeleteMissingTransaction,
            Error::UpdateMissingAccount,
            Error::DeleteMissingAccount,
            Error::UpdateMissingCategory,
            Error::DeleteMissingCategory,
            Error::UpdateMissingBudget,
            Error::DeleteMissingBudget,
        ];

        for error in errors {
            assert_eq!(error.status_code(), StatusCode::NOT_FOUND, "{error:?}");
        }
    }

    #[test]
    fn not_connected_is_service_unavailable() {
        let response = Error::NotConnected.into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn alert_response_renders_error_message() {
        let response = Error::DeleteMissingAccount.into_form_response(true);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let paragraph = html
            .select(&scraper::Selector::parse("p").unwrap())
            .next()
            .expect("no paragraph in alert");
        assert_eq!(
            paragraph.text().collect::<String>().trim(),
            "Could not delete account"
        );
    }
}
