//! The JSON endpoint that dumps accounts, categories and transactions.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::{
    Error,
    account::{Account, get_all_accounts},
    app_state::DatabaseState,
    category::{Category, get_all_categories},
    db::acquire,
    transaction::{Transaction, get_all_transactions},
};

#[derive(Debug, Serialize)]
struct Data {
    accounts: Vec<Account>,
    categories: Vec<Category>,
    transactions: Vec<Transaction>,
}

/// Respond with every account, category and transaction as JSON.
///
/// Errors are also reported as JSON, e.g. `{"error": "..."}`.
pub async fn get_data(State(state): State<DatabaseState>) -> Response {
    match load_data(&state) {
        Ok(data) => Json(data).into_response(),
        Err(error) => {
            tracing::error!("could not load data for the API: {error}");
            (error.status_code(), Json(json!({ "error": error.to_string() }))).into_response()
        }
    }
}

fn load_data(state: &DatabaseState) -> Result<Data, Error> {
    let connection = acquire(&state.db_connection)?;

    Ok(Data {
        accounts: get_all_accounts(&connection)?,
        categories: get_all_categories(&connection)?,
        transactions: get_all_transactions(&connection)?
            .into_iter()
            .map(|row| row.transaction)
            .collect(),
    })
}
