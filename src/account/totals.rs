//! Aggregate balances across accounts.

use rusqlite::Connection;

use crate::Error;

/// The headline figures shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountTotals {
    pub net_worth: f64,
    pub cash: f64,
    pub debt: f64,
}

/// Get the sum of the balances of all accounts.
///
/// # Errors
/// Returns [Error::SqlError] if the SQL query preparation or execution fails.
pub fn get_total_net_worth(connection: &Connection) -> Result<f64, Error> {
    let mut stmt = connection.prepare("SELECT COALESCE(SUM(balance), 0) FROM account")?;

    let total: f64 = stmt.query_row([], |row| row.get(0))?;

    Ok(total)
}

/// Get the sum of the balances of the checking and savings accounts.
pub fn get_total_cash(connection: &Connection) -> Result<f64, Error> {
    let mut stmt = connection.prepare(
        "SELECT COALESCE(SUM(balance), 0) FROM account WHERE type IN ('Checking', 'Savings')",
    )?;

    let total: f64 = stmt.query_row([], |row| row.get(0))?;

    Ok(total)
}

/// Get the amount owed on credit cards.
///
/// Credit card balances are stored as negative numbers, the result is always non-negative.
pub fn get_total_debt(connection: &Connection) -> Result<f64, Error> {
    let mut stmt = connection.prepare(
        "SELECT ABS(COALESCE(SUM(balance), 0)) FROM account WHERE type = 'Credit Card'",
    )?;

    let total: f64 = stmt.query_row([], |row| row.get(0))?;

    Ok(total)
}

pub fn get_account_totals(connection: &Connection) -> Result<AccountTotals, Error> {
    Ok(AccountTotals {
        net_worth: get_total_net_worth(connection)?,
        cash: get_total_cash(connection)?,
        debt: get_total_debt(connection)?,
    })
}
