//! Income and expense summaries over all transactions.

use std::collections::BTreeMap;

use rusqlite::Connection;
use time::{Date, Month};

use crate::Error;

/// Income and expenses for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: Month,
    /// The sum of the positive amounts.
    pub income: f64,
    /// The sum of the negative amounts, as a positive number.
    pub expenses: f64,
}

impl MonthlySummary {
    /// The month formatted as `YYYY-MM`, e.g. "2024-06".
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, u8::from(self.month))
    }

    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

/// The total spent in one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category_name: String,
    /// The sum of the negative amounts in the category, as a positive number.
    pub total_expenses: f64,
}

/// Group all transactions by calendar month, most recent month first.
///
/// # Errors
/// Returns [Error::SqlError] if the SQL query preparation or execution fails.
pub fn get_monthly_summary(connection: &Connection) -> Result<Vec<MonthlySummary>, Error> {
    let rows = connection
        .prepare("SELECT date, amount FROM \"transaction\"")?
        .query_map([], |row| Ok((row.get::<_, Date>(0)?, row.get::<_, f64>(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(summarise_by_month(&rows))
}

fn summarise_by_month(rows: &[(Date, f64)]) -> Vec<MonthlySummary> {
    let mut totals: BTreeMap<(i32, Month), (f64, f64)> = BTreeMap::new();

    for (date, amount) in rows {
        let (income, expenses) = totals
            .entry((date.year(), date.month()))
            .or_insert((0.0, 0.0));

        if *amount > 0.0 {
            *income += amount;
        } else {
            *expenses -= amount;
        }
    }

    totals
        .into_iter()
        .rev()
        .map(|((year, month), (income, expenses))| MonthlySummary {
            year,
            month,
            income,
            expenses,
        })
        .collect()
}

/// Get the total expenses per category, largest first.
///
/// Categories without expenses and transactions whose category was deleted are left out.
///
/// # Errors
/// Returns [Error::SqlError] if the SQL query preparation or execution fails.
pub fn get_category_summary(connection: &Connection) -> Result<Vec<CategorySummary>, Error> {
    connection
        .prepare(
            "SELECT c.name, -SUM(t.amount) AS total
            FROM \"transaction\" t
            INNER JOIN category c ON c.id = t.category_id
            WHERE t.amount < 0
            GROUP BY c.id
            ORDER BY total DESC, c.name ASC",
        )?
        .query_map([], |row| {
            Ok(CategorySummary {
                category_name: row.get(0)?,
                total_expenses: row.get(1)?,
            })
        })?
        .map(|maybe_summary| maybe_summary.map_err(Error::from))
        .collect()
}
