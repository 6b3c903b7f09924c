//! Database setup: schema creation, seed data and access to the shared connection.

use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{
    Error, account::create_account_table, budget::create_budget_table,
    category::create_category_table, transaction::create_transaction_table,
};

/// Create all of the application's tables if they do not exist yet.
///
/// Foreign keys are declared but not enforced on `connection`.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    // Deleting an account or category keeps the rows that refer to it.
    // The pragma has no effect inside a transaction.
    connection.pragma_update(None, "foreign_keys", false)?;

    let transaction = connection.unchecked_transaction()?;

    create_account_table(&transaction)?;
    create_category_table(&transaction)?;
    create_transaction_table(&transaction)?;
    create_budget_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Lock the shared database connection for the duration of a request.
///
/// # Errors
/// Returns [Error::NotConnected] if the lock is poisoned.
pub fn acquire(db_connection: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>, Error> {
    db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::NotConnected
    })
}

const SEED_ACCOUNTS: [(&str, &str, f64); 4] = [
    ("Checking Account", "Checking", 8123.45),
    ("Savings Account", "Savings", 7087.05),
    ("Primary Credit Card", "Credit Card", -800.00),
    ("Investment Portfolio", "Investment", 110219.50),
];

const SEED_CATEGORIES: [&str; 4] = ["Groceries", "Salary", "Utilities", "Transport"];

/// Description, amount, date, index into [SEED_ACCOUNTS], index into [SEED_CATEGORIES].
const SEED_TRANSACTIONS: [(&str, f64, &str, usize, usize); 4] = [
    ("SuperMart", -85.50, "2024-06-28", 0, 0),
    ("Monthly Salary", 4500.00, "2024-06-27", 0, 1),
    ("Utility Bill", -120.00, "2024-06-26", 0, 2),
    ("Public Transport", -22.75, "2024-06-25", 1, 3),
];

/// Replace the contents of the database with a small demo data set.
///
/// Budgets, transactions, accounts and categories are all cleared first.
/// The seed transactions are inserted directly, the seed account balances
/// already account for them.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn seed(connection: &Connection) -> Result<(), Error> {
    let transaction = connection.unchecked_transaction()?;

    transaction.execute_batch(
        "DELETE FROM budget;
        DELETE FROM \"transaction\";
        DELETE FROM account;
        DELETE FROM category;",
    )?;

    let mut account_ids = Vec::with_capacity(SEED_ACCOUNTS.len());
    for (name, account_type, balance) in SEED_ACCOUNTS {
        let id: i64 = transaction.query_row(
            "INSERT INTO account (name, type, balance) VALUES (?1, ?2, ?3) RETURNING id",
            (name, account_type, balance),
            |row| row.get(0),
        )?;
        account_ids.push(id);
    }

    let mut category_ids = Vec::with_capacity(SEED_CATEGORIES.len());
    for name in SEED_CATEGORIES {
        let id: i64 = transaction.query_row(
            "INSERT INTO category (name) VALUES (?1) RETURNING id",
            (name,),
            |row| row.get(0),
        )?;
        category_ids.push(id);
    }

    for (description, amount, date, account, category) in SEED_TRANSACTIONS {
        transaction.execute(
            "INSERT INTO \"transaction\" (description, amount, date, account_id, category_id)
            VALUES (?1, ?2, ?3, ?4, ?5)",
            (
                description,
                amount,
                date,
                account_ids[account],
                category_ids[category],
            ),
        )?;
    }

    transaction.commit()?;
    tracing::info!("seeded the database with demo data");

    Ok(())
}

/// Seed the database when it has no accounts, categories or transactions.
///
/// Returns whether the database was seeded.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn seed_if_empty(connection: &Connection) -> Result<bool, Error> {
    let row_count: i64 = connection.query_row(
        "SELECT (SELECT COUNT(*) FROM account)
            + (SELECT COUNT(*) FROM category)
            + (SELECT COUNT(*) FROM \"transaction\")",
        [],
        |row| row.get(0),
    )?;

    if row_count > 0 {
        return Ok(false);
    }

    seed(connection)?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{
        Error,
        account::{
            delete_account, get_all_accounts, get_total_cash, get_total_debt,
            get_total_net_worth,
        },
        category::{delete_category, get_all_categories},
        transaction::get_all_transactions,
    };

    use super::{acquire, initialize, seed, seed_if_empty};

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
    }

    #[track_caller]
    fn assert_approx_eq(got: f64, want: f64) {
        assert!((got - want).abs() < 1e-6, "want {want}, got {got}");
    }

    #[test]
    fn initialize_is_idempotent() {
        let connection = get_test_connection();

        assert_eq!(initialize(&connection), Ok(()));
    }

    #[test]
    fn seed_inserts_demo_data() {
        let connection = get_test_connection();

        seed(&connection).unwrap();

        assert_eq!(get_all_accounts(&connection).unwrap().len(), 4);
        assert_eq!(get_all_categories(&connection).unwrap().len(), 4);
        assert_eq!(get_all_transactions(&connection).unwrap().len(), 4);
    }

    #[test]
    fn seed_totals() {
        let connection = get_test_connection();

        seed(&connection).unwrap();

        assert_approx_eq(get_total_net_worth(&connection).unwrap(), 124630.00);
        assert_approx_eq(get_total_cash(&connection).unwrap(), 15210.50);
        assert_approx_eq(get_total_debt(&connection).unwrap(), 800.00);
    }

    #[test]
    fn seed_twice_replaces_data() {
        let connection = get_test_connection();

        seed(&connection).unwrap();
        seed(&connection).unwrap();

        let accounts = get_all_accounts(&connection).unwrap();
        assert_eq!(accounts.len(), 4);
        let transactions = get_all_transactions(&connection).unwrap();
        assert_eq!(transactions.len(), 4);
        for row in transactions {
            assert!(
                accounts
                    .iter()
                    .any(|account| account.id == row.transaction.account_id),
                "transaction {row:?} refers to a missing account"
            );
            assert!(row.category_name.is_some());
        }
    }

    #[test]
    fn seed_if_empty_seeds_empty_database() {
        let connection = get_test_connection();

        assert_eq!(seed_if_empty(&connection), Ok(true));
        assert_eq!(get_all_transactions(&connection).unwrap().len(), 4);
    }

    #[test]
    fn seed_if_empty_keeps_existing_data() {
        let connection = get_test_connection();
        connection
            .execute("INSERT INTO category (name) VALUES ('Rent')", ())
            .unwrap();

        assert_eq!(seed_if_empty(&connection), Ok(false));
        assert_eq!(get_all_categories(&connection).unwrap().len(), 1);
    }

    #[test]
    fn foreign_keys_are_not_enforced() {
        let connection = get_test_connection();

        let enabled: bool = connection
            .pragma_query_value(None, "foreign_keys", |row| row.get(0))
            .unwrap();

        assert!(!enabled);
    }

    #[test]
    fn delete_account_with_transactions_keeps_transactions() {
        let connection = get_test_connection();
        seed(&connection).unwrap();
        let checking = get_all_accounts(&connection).unwrap()[0].id;

        assert_eq!(delete_account(checking, &connection), Ok(()));

        let transactions = get_all_transactions(&connection).unwrap();
        assert_eq!(transactions.len(), 4);
        assert_eq!(
            transactions
                .iter()
                .filter(|row| row.transaction.account_id == checking)
                .count(),
            3
        );
    }

    #[test]
    fn delete_category_with_transactions_keeps_transactions() {
        let connection = get_test_connection();
        seed(&connection).unwrap();
        let groceries = get_all_categories(&connection).unwrap()[0].id;

        assert_eq!(delete_category(groceries, &connection), Ok(()));

        let transactions = get_all_transactions(&connection).unwrap();
        assert_eq!(transactions.len(), 4);
        assert!(
            transactions
                .iter()
                .any(|row| row.transaction.category_id == groceries
                    && row.category_name.is_none())
        );
    }

    #[test]
    fn acquire_poisoned_lock_is_not_connected() {
        let db_connection = Arc::new(Mutex::new(get_test_connection()));
        let poisoner = db_connection.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(acquire(&db_connection), Err(Error::NotConnected)));
    }
}
