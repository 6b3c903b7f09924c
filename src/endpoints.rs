//! The endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/budgets/{budget_id}/edit', use [format_endpoint].

/// The root route which displays the dashboard.
pub const ROOT: &str = "/";
/// The route for a JSON dump of accounts, categories and transactions.
pub const API_DATA: &str = "/api/data";
/// The page for listing transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for editing an existing transaction.
pub const EDIT_TRANSACTION_VIEW: &str = "/transactions/{transaction_id}/edit";
/// The page for listing budgets.
pub const BUDGETS_VIEW: &str = "/budgets";
/// The page for editing an existing budget.
pub const EDIT_BUDGET_VIEW: &str = "/budgets/{budget_id}/edit";
/// The page for monthly and per-category summaries.
pub const REPORTS_VIEW: &str = "/reports";
/// The page for managing accounts and categories.
pub const SETTINGS_VIEW: &str = "/settings";
/// The page for editing an existing account.
pub const EDIT_ACCOUNT_VIEW: &str = "/settings/accounts/{account_id}/edit";
/// The page for editing an existing category.
pub const EDIT_CATEGORY_VIEW: &str = "/settings/categories/{category_id}/edit";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create a transaction.
pub const ADD_TRANSACTION: &str = "/add_transaction";
/// The route to update a transaction.
pub const UPDATE_TRANSACTION: &str = "/update_transaction/{transaction_id}";
/// The route to delete a transaction.
pub const DELETE_TRANSACTION: &str = "/delete_transaction/{transaction_id}";
/// The route to create a budget.
pub const ADD_BUDGET: &str = "/add_budget";
/// The route to update a budget.
pub const UPDATE_BUDGET: &str = "/update_budget/{budget_id}";
/// The route to delete a budget.
pub const DELETE_BUDGET: &str = "/delete_budget/{budget_id}";
/// The route to create an account.
pub const ADD_ACCOUNT: &str = "/add_account";
/// The route to update an account.
pub const UPDATE_ACCOUNT: &str = "/update_account/{account_id}";
/// The route to delete an account.
pub const DELETE_ACCOUNT: &str = "/delete_account/{account_id}";
/// The route to create a category.
pub const ADD_CATEGORY: &str = "/add_category";
/// The route to update a category.
pub const UPDATE_CATEGORY: &str = "/update_category/{category_id}";
/// The route to delete a category.
pub const DELETE_CATEGORY: &str = "/delete_category/{category_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{user_id}', '{user_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
