//! Budget models and database queries.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    category::{CategoryId, ensure_category_exists},
    database_id::DatabaseId,
};

pub type BudgetId = DatabaseId;

/// A planned spending ceiling for a category over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Budget {
    pub id: BudgetId,
    pub category_id: CategoryId,
    /// The most that should be spent in the category over the period.
    pub amount: f64,
    pub start_date: Date,
    pub end_date: Date,
}

/// A budget with its category name and the amount spent so far.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRow {
    pub budget: Budget,
    /// `None` if the category has been deleted.
    pub category_name: Option<String>,
    /// The total of the category's expenses dated within the budget period, as a positive number.
    pub spent: f64,
}

impl BudgetRow {
    /// How much of the budget is left, negative when overspent.
    pub fn remaining(&self) -> f64 {
        self.budget.amount - self.spent
    }
}

/// The form data for creating or editing a budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetForm {
    pub category_id: CategoryId,
    pub amount: f64,
    pub start_date: Date,
    pub end_date: Date,
}

/// A [BudgetForm] that has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    category_id: CategoryId,
    amount: f64,
    start_date: Date,
    end_date: Date,
}

impl NewBudget {
    /// Check the fields of `form`.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if the amount is negative or not a finite
    /// number, or [Error::InvalidDateRange] if the period ends before it starts.
    pub fn new(form: &BudgetForm) -> Result<Self, Error> {
        if !form.amount.is_finite() || form.amount < 0.0 {
            return Err(Error::InvalidAmount(form.amount));
        }

        if form.end_date < form.start_date {
            return Err(Error::InvalidDateRange {
                start: form.start_date,
                end: form.end_date,
            });
        }

        Ok(Self {
            category_id: form.category_id,
            amount: form.amount,
            start_date: form.start_date,
            end_date: form.end_date,
        })
    }
}

pub fn create_budget_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS budget (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category_id INTEGER NOT NULL,
            amount REAL NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            FOREIGN KEY(category_id) REFERENCES category(id)
        )",
        (),
    )?;

    Ok(())
}

fn map_budget_row(row: &Row) -> Result<Budget, rusqlite::Error> {
    Ok(Budget {
        id: row.get(0)?,
        category_id: row.get(1)?,
        amount: row.get(2)?,
        start_date: row.get(3)?,
        end_date: row.get(4)?,
    })
}

/// Create a budget for an existing category.
///
/// # Errors
/// Returns [Error::InvalidCategory] if the category does not exist.
pub fn create_budget(budget: NewBudget, connection: &Connection) -> Result<Budget, Error> {
    let sql_transaction = connection.unchecked_transaction()?;

    ensure_category_exists(budget.category_id, &sql_transaction)?;

    let created = sql_transaction
        .prepare(
            "INSERT INTO budget (category_id, amount, start_date, end_date)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, category_id, amount, start_date, end_date",
        )?
        .query_one(
            (
                budget.category_id,
                budget.amount,
                budget.start_date,
                budget.end_date,
            ),
            map_budget_row,
        )?;

    sql_transaction.commit()?;

    Ok(created)
}

/// Retrieve a budget by its `id`.
///
/// # Errors
/// Returns [Error::NotFound] if `id` does not refer to a budget.
pub fn get_budget(id: BudgetId, connection: &Connection) -> Result<Budget, Error> {
    connection
        .prepare(
            "SELECT id, category_id, amount, start_date, end_date FROM budget WHERE id = :id",
        )?
        .query_one(&[(":id", &id)], map_budget_row)
        .map_err(Error::from)
}

/// Get all budgets with their category names and spending, latest period first.
pub fn get_all_budgets(connection: &Connection) -> Result<Vec<BudgetRow>, Error> {
    connection
        .prepare(
            "SELECT b.id, b.category_id, b.amount, b.start_date, b.end_date, c.name,
                COALESCE((
                    SELECT -SUM(t.amount) FROM \"transaction\" t
                    WHERE t.category_id = b.category_id
                        AND t.amount < 0
                        AND t.date BETWEEN b.start_date AND b.end_date
                ), 0)
            FROM budget b
            LEFT JOIN category c ON c.id = b.category_id
            ORDER BY b.start_date DESC, b.id DESC",
        )?
        .query_map([], |row| {
            Ok(BudgetRow {
                budget: map_budget_row(row)?,
                category_name: row.get(5)?,
                spent: row.get(6)?,
            })
        })?
        .map(|maybe_row| maybe_row.map_err(Error::from))
        .collect()
}

/// Replace the fields of the budget `id`.
///
/// # Errors
/// Returns [Error::UpdateMissingBudget] if the budget does not exist, or
/// [Error::InvalidCategory] if the new category does not exist.
pub fn update_budget(id: BudgetId, budget: NewBudget, connection: &Connection) -> Result<(), Error> {
    let sql_transaction = connection.unchecked_transaction()?;

    ensure_category_exists(budget.category_id, &sql_transaction)?;

    let rows_affected = sql_transaction.execute(
        "UPDATE budget SET category_id = ?1, amount = ?2, start_date = ?3, end_date = ?4
        WHERE id = ?5",
        (
            budget.category_id,
            budget.amount,
            budget.start_date,
            budget.end_date,
            id,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingBudget);
    }

    sql_transaction.commit()?;

    Ok(())
}

/// Delete the budget `id`.
///
/// # Errors
/// Returns [Error::DeleteMissingBudget] if the budget does not exist.
pub fn delete_budget(id: BudgetId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM budget WHERE id = ?1", [id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingBudget);
    }

    Ok(())
}
