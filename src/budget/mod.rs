//! Budgets: planned spending per category over a date range.

mod budgets_page;
mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_page;
mod form;

pub use budgets_page::{BudgetsPageState, get_budgets_page};
pub use core::{
    Budget, BudgetForm, BudgetId, BudgetRow, NewBudget, create_budget, create_budget_table,
    delete_budget, get_all_budgets, get_budget, update_budget,
};
pub use create_endpoint::create_budget_endpoint;
pub use delete_endpoint::delete_budget_endpoint;
pub use edit_page::{get_edit_budget_page, update_budget_endpoint};
