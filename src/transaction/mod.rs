//! Transactions and the pages for managing them.
//!
//! This module contains:
//! - The `Transaction` model and the database functions that keep account balances in sync
//! - The transaction form shared by the add and edit pages
//! - Route handlers for listing, creating, editing and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod form;
mod transactions_page;

pub use core::{
    NewTransaction, Transaction, TransactionForm, TransactionId, TransactionRow,
    create_transaction, create_transaction_table, delete_transaction, get_all_transactions,
    get_recent_transactions, get_transaction, map_transaction_row, update_transaction,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::update_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use transactions_page::{TransactionsPageState, get_transactions_page};
pub(crate) use transactions_page::transactions_table;
