//! Defines the core data models and database queries for transactions.
//!
//! Every write keeps the balance of the affected accounts in sync with their
//! transactions: creating a transaction adds its amount to the account,
//! deleting it subtracts the amount, and updating it does both.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    account::{AccountId, adjust_balance},
    category::{CategoryId, ensure_category_exists},
    database_id::DatabaseId,
};

// ============================================================================
// MODELS
// ============================================================================

pub type TransactionId = DatabaseId;

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money earned (positive) or spent (negative).
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// The account the money moved in or out of.
    pub account_id: AccountId,
    /// The category the transaction belongs to.
    pub category_id: CategoryId,
}

/// A transaction with the names of its account and category, where they still exist.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub transaction: Transaction,
    pub account_name: Option<String>,
    pub category_name: Option<String>,
}

/// The form data for creating or editing a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    pub description: String,
    pub amount: f64,
    pub date: Date,
    pub account_id: AccountId,
    pub category_id: CategoryId,
}

/// A [TransactionForm] that has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    description: String,
    amount: f64,
    date: Date,
    account_id: AccountId,
    category_id: CategoryId,
}

impl NewTransaction {
    /// Trim and check the fields of `form`.
    ///
    /// # Errors
    /// Returns an error if the description is empty or the amount is not a finite number.
    pub fn new(form: &TransactionForm) -> Result<Self, Error> {
        let description = form.description.trim();
        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        if !form.amount.is_finite() {
            return Err(Error::InvalidAmount(form.amount));
        }

        Ok(Self {
            description: description.to_owned(),
            amount: form.amount,
            date: form.date,
            account_id: form.account_id,
            category_id: form.category_id,
        })
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            description TEXT NOT NULL,
            amount REAL NOT NULL,
            date TEXT NOT NULL,
            account_id INTEGER NOT NULL,
            category_id INTEGER NOT NULL,
            FOREIGN KEY(account_id) REFERENCES account(id),
            FOREIGN KEY(category_id) REFERENCES category(id)
        );

        CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
    )?;

    Ok(())
}

pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        description: row.get(1)?,
        amount: row.get(2)?,
        date: row.get(3)?,
        account_id: row.get(4)?,
        category_id: row.get(5)?,
    })
}

/// Create a transaction and add its amount to the balance of its account.
///
/// # Errors
/// Returns [Error::InvalidAccount] or [Error::InvalidCategory] if the
/// referenced account or category does not exist. Nothing is written in
/// that case.
pub fn create_transaction(
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let sql_transaction = connection.unchecked_transaction()?;

    ensure_category_exists(transaction.category_id, &sql_transaction)?;

    let created = sql_transaction
        .prepare(
            "INSERT INTO \"transaction\" (description, amount, date, account_id, category_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, description, amount, date, account_id, category_id",
        )?
        .query_one(
            (
                &transaction.description,
                transaction.amount,
                transaction.date,
                transaction.account_id,
                transaction.category_id,
            ),
            map_transaction_row,
        )?;

    adjust_balance(created.account_id, created.amount, &sql_transaction)?;

    sql_transaction.commit()?;

    Ok(created)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    connection
        .prepare(
            "SELECT id, description, amount, date, account_id, category_id
            FROM \"transaction\" WHERE id = :id",
        )?
        .query_one(&[(":id", &id)], map_transaction_row)
        .map_err(Error::from)
}

/// Get all transactions with their account and category names, newest first.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<TransactionRow>, Error> {
    query_transaction_rows(-1, connection)
}

/// Get the `limit` most recent transactions with their account and category names.
pub fn get_recent_transactions(
    limit: u32,
    connection: &Connection,
) -> Result<Vec<TransactionRow>, Error> {
    query_transaction_rows(i64::from(limit), connection)
}

/// A negative `limit` returns all rows.
fn query_transaction_rows(limit: i64, connection: &Connection) -> Result<Vec<TransactionRow>, Error> {
    connection
        .prepare(
            "SELECT t.id, t.description, t.amount, t.date, t.account_id, t.category_id,
                a.name, c.name
            FROM \"transaction\" t
            LEFT JOIN account a ON a.id = t.account_id
            LEFT JOIN category c ON c.id = t.category_id
            ORDER BY t.date DESC, t.id DESC
            LIMIT ?1",
        )?
        .query_map([limit], |row| {
            Ok(TransactionRow {
                transaction: map_transaction_row(row)?,
                account_name: row.get(6)?,
                category_name: row.get(7)?,
            })
        })?
        .map(|maybe_row| maybe_row.map_err(Error::from))
        .collect()
}

/// Replace a transaction and move its effect on account balances.
///
/// The old amount is subtracted from the old account before the new amount
/// is added to the new account, so the transaction may move between accounts.
///
/// # Errors
/// Returns [Error::UpdateMissingTransaction] if the transaction does not
/// exist, or [Error::InvalidAccount]/[Error::InvalidCategory] if the new
/// account or category does not exist.
pub fn update_transaction(
    id: TransactionId,
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<(), Error> {
    let sql_transaction = connection.unchecked_transaction()?;

    let old = get_transaction(id, &sql_transaction).map_err(|error| match error {
        Error::NotFound => Error::UpdateMissingTransaction,
        error => error,
    })?;

    ensure_category_exists(transaction.category_id, &sql_transaction)?;

    reverse_balance(&old, &sql_transaction)?;

    sql_transaction.execute(
        "UPDATE \"transaction\"
        SET description = ?1, amount = ?2, date = ?3, account_id = ?4, category_id = ?5
        WHERE id = ?6",
        (
            &transaction.description,
            transaction.amount,
            transaction.date,
            transaction.account_id,
            transaction.category_id,
            id,
        ),
    )?;

    adjust_balance(transaction.account_id, transaction.amount, &sql_transaction)?;

    sql_transaction.commit()?;

    Ok(())
}

/// Delete a transaction and subtract its amount from its account.
///
/// # Errors
/// Returns [Error::DeleteMissingTransaction] if the transaction does not exist.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let sql_transaction = connection.unchecked_transaction()?;

    let old = get_transaction(id, &sql_transaction).map_err(|error| match error {
        Error::NotFound => Error::DeleteMissingTransaction,
        error => error,
    })?;

    reverse_balance(&old, &sql_transaction)?;

    sql_transaction.execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])?;

    sql_transaction.commit()?;

    Ok(())
}

/// Undo the effect of `transaction` on its account's balance.
///
/// An account that has since been deleted has no balance to correct.
fn reverse_balance(transaction: &Transaction, connection: &Connection) -> Result<(), Error> {
    match adjust_balance(transaction.account_id, -transaction.amount, connection) {
        Ok(()) => Ok(()),
        Err(Error::InvalidAccount(account_id)) => {
            tracing::warn!(
                "transaction {} refers to the deleted account {account_id}",
                transaction.id
            );
            Ok(())
        }
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod new_transaction_tests {
    use time::macros::date;

    use crate::{
        Error,
        transaction::{NewTransaction, TransactionForm},
    };

    fn form(description: &str, amount: f64) -> TransactionForm {
        TransactionForm {
            description: description.to_owned(),
            amount,
            date: date!(2024 - 06 - 28),
            account_id: 1,
            category_id: 1,
        }
    }

    #[test]
    fn rejects_empty_description() {
        assert_eq!(
            NewTransaction::new(&form("  ", -1.0)),
            Err(Error::EmptyDescription)
        );
    }

    #[test]
    fn rejects_nan_amount() {
        let result = NewTransaction::new(&form("SuperMart", f64::NAN));

        assert!(matches!(result, Err(Error::InvalidAmount(amount)) if amount.is_nan()));
    }

    #[test]
    fn accepts_zero_amount() {
        assert!(NewTransaction::new(&form("Refund", 0.0)).is_ok());
    }
}
