//! Accounts and their running balances.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod totals;

pub use core::{
    ACCOUNT_TYPES, Account, AccountForm, AccountId, NewAccount, create_account,
    create_account_table, delete_account, get_account, get_all_accounts, map_row_to_account,
    update_account,
};
pub(crate) use core::adjust_balance;
pub use create_endpoint::create_account_endpoint;
pub use delete_endpoint::delete_account_endpoint;
pub use edit_endpoint::update_account_endpoint;
pub(crate) use edit_page::account_form_view;
pub use edit_page::get_edit_account_page;
pub use totals::{
    AccountTotals, get_account_totals, get_total_cash, get_total_debt, get_total_net_worth,
};
