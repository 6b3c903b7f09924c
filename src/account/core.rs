//! Account types and database operations.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId};

pub type AccountId = DatabaseId;

/// The account types that the dashboard totals recognise.
///
/// The account type is free-form text, these are suggestions for the forms.
pub const ACCOUNT_TYPES: [&str; 4] = ["Checking", "Savings", "Credit Card", "Investment"];

/// A bank account, credit card or investment and its running balance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    /// The id for the account.
    pub id: AccountId,
    /// The display name, e.g. "Checking Account".
    pub name: String,
    /// A free-form account type, e.g. "Credit Card".
    #[serde(rename = "type")]
    pub account_type: String,
    /// The balance, credit cards are usually negative.
    pub balance: f64,
}

/// The form data for creating or editing an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountForm {
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub balance: f64,
}

/// An [AccountForm] that has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    name: String,
    account_type: String,
    balance: f64,
}

impl NewAccount {
    /// Trim and check the fields of `form`.
    ///
    /// # Errors
    /// Returns an error if the name or type is empty, or the balance is not a finite number.
    pub fn new(form: &AccountForm) -> Result<Self, Error> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(Error::EmptyAccountName);
        }

        let account_type = form.account_type.trim();
        if account_type.is_empty() {
            return Err(Error::EmptyAccountType);
        }

        if !form.balance.is_finite() {
            return Err(Error::InvalidAmount(form.balance));
        }

        Ok(Self {
            name: name.to_owned(),
            account_type: account_type.to_owned(),
            balance: form.balance,
        })
    }
}

pub fn create_account_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS account (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            type TEXT NOT NULL,
            balance REAL NOT NULL
        )",
        (),
    )?;

    Ok(())
}

pub fn map_row_to_account(row: &Row) -> Result<Account, rusqlite::Error> {
    Ok(Account {
        id: row.get(0)?,
        name: row.get(1)?,
        account_type: row.get(2)?,
        balance: row.get(3)?,
    })
}

pub fn create_account(account: NewAccount, connection: &Connection) -> Result<Account, Error> {
    connection
        .prepare(
            "INSERT INTO account (name, type, balance) VALUES (?1, ?2, ?3)
            RETURNING id, name, type, balance",
        )?
        .query_one(
            (account.name, account.account_type, account.balance),
            map_row_to_account,
        )
        .map_err(Error::from)
}

pub fn get_account(id: AccountId, connection: &Connection) -> Result<Account, Error> {
    connection
        .prepare("SELECT id, name, type, balance FROM account WHERE id = :id")?
        .query_one(&[(":id", &id)], map_row_to_account)
        .map_err(Error::from)
}

/// Get all accounts in the order they were created.
pub fn get_all_accounts(connection: &Connection) -> Result<Vec<Account>, Error> {
    connection
        .prepare("SELECT id, name, type, balance FROM account ORDER BY id ASC")?
        .query_map([], map_row_to_account)?
        .map(|maybe_account| maybe_account.map_err(Error::from))
        .collect()
}

/// Overwrite the name, type and balance of an account.
///
/// Setting the balance here does not touch the account's transactions.
///
/// # Errors
/// Returns [Error::UpdateMissingAccount] if the account does not exist.
pub fn update_account(
    id: AccountId,
    account: NewAccount,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE account SET name = ?1, type = ?2, balance = ?3 WHERE id = ?4",
        (account.name, account.account_type, account.balance, id),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingAccount);
    }

    Ok(())
}

/// Delete an account.
///
/// Transactions that refer to the account are left in place.
///
/// # Errors
/// Returns [Error::DeleteMissingAccount] if the account does not exist.
pub fn delete_account(id: AccountId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM account WHERE id = ?1", [id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingAccount);
    }

    Ok(())
}

/// Add `amount` to the balance of an account.
///
/// # Errors
/// Returns [Error::InvalidAccount] if the account does not exist.
pub(crate) fn adjust_balance(
    id: AccountId,
    amount: f64,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE account SET balance = balance + ?1 WHERE id = ?2",
        (amount, id),
    )?;

    if rows_affected == 0 {
        return Err(Error::InvalidAccount(id));
    }

    Ok(())
}


#[cfg(test)]
mod new_account_tests {
    use crate::{
        Error,
        account::{AccountForm, NewAccount},
    };

    fn form(name: &str, account_type: &str, balance: f64) -> AccountForm {
        AccountForm {
            name: name.to_owned(),
            account_type: account_type.to_owned(),
            balance,
        }
    }

    #[test]
    fn trims_fields() {
        let account = NewAccount::new(&form("  Checking Account ", " Checking ", 1.0)).unwrap();

        assert_eq!(account.name, "Checking Account");
        assert_eq!(account.account_type, "Checking");
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            NewAccount::new(&form("   ", "Checking", 1.0)),
            Err(Error::EmptyAccountName)
        );
    }

    #[test]
    fn rejects_empty_type() {
        assert_eq!(
            NewAccount::new(&form("Checking Account", "", 1.0)),
            Err(Error::EmptyAccountType)
        );
    }

    #[test]
    fn rejects_infinite_balance() {
        assert_eq!(
            NewAccount::new(&form("Checking Account", "Checking", f64::INFINITY)),
            Err(Error::InvalidAmount(f64::INFINITY))
        );
    }
}

#[cfg(test)]
mod account_db_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        account::{
            Account, AccountForm, NewAccount, create_account, delete_account, get_account,
            get_all_accounts, update_account,
        },
        db::initialize,
    };

    use super::adjust_balance;

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
    }

    fn new_account(name: &str, account_type: &str, balance: f64) -> NewAccount {
        NewAccount::new(&AccountForm {
            name: name.to_owned(),
            account_type: account_type.to_owned(),
            balance,
        })
        .unwrap()
    }

    #[test]
    fn create_returns_account_with_id() {
        let connection = get_test_connection();

        let account = create_account(
            new_account("Checking Account", "Checking", 8123.45),
            &connection,
        )
        .unwrap();

        assert_eq!(
            account,
            Account {
                id: 1,
                name: "Checking Account".to_owned(),
                account_type: "Checking".to_owned(),
                balance: 8123.45,
            }
        );
        assert_eq!(get_account(account.id, &connection), Ok(account));
    }

    #[test]
    fn get_missing_account_is_not_found() {
        let connection = get_test_connection();

        assert_eq!(get_account(42, &connection), Err(Error::NotFound));
    }

    #[test]
    fn get_all_returns_accounts_in_creation_order() {
        let connection = get_test_connection();
        let savings = create_account(new_account("Savings", "Savings", 1.0), &connection).unwrap();
        let checking =
            create_account(new_account("Checking", "Checking", 2.0), &connection).unwrap();

        let accounts = get_all_accounts(&connection).unwrap();

        assert_eq!(accounts, vec![savings, checking]);
    }

    #[test]
    fn update_overwrites_fields() {
        let connection = get_test_connection();
        let account =
            create_account(new_account("Checking", "Checking", 2.0), &connection).unwrap();

        update_account(
            account.id,
            new_account("Everyday", "Savings", 10.0),
            &connection,
        )
        .unwrap();

        let got = get_account(account.id, &connection).unwrap();
        assert_eq!(got.name, "Everyday");
        assert_eq!(got.account_type, "Savings");
        assert_eq!(got.balance, 10.0);
    }

    #[test]
    fn update_missing_account_fails() {
        let connection = get_test_connection();

        assert_eq!(
            update_account(7, new_account("Everyday", "Savings", 10.0), &connection),
            Err(Error::UpdateMissingAccount)
        );
    }

    #[test]
    fn delete_removes_account() {
        let connection = get_test_connection();
        let account =
            create_account(new_account("Checking", "Checking", 2.0), &connection).unwrap();

        delete_account(account.id, &connection).unwrap();

        assert_eq!(get_account(account.id, &connection), Err(Error::NotFound));
    }

    #[test]
    fn delete_missing_account_fails() {
        let connection = get_test_connection();

        assert_eq!(
            delete_account(7, &connection),
            Err(Error::DeleteMissingAccount)
        );
    }

    #[test]
    fn adjust_balance_adds_amount() {
        let connection = get_test_connection();
        let account =
            create_account(new_account("Checking", "Checking", 100.0), &connection).unwrap();

        adjust_balance(account.id, -25.5, &connection).unwrap();

        assert_eq!(get_account(account.id, &connection).unwrap().balance, 74.5);
    }

    #[test]
    fn adjust_balance_of_missing_account_fails() {
        let connection = get_test_connection();

        assert_eq!(
            adjust_balance(3, 1.0, &connection),
            Err(Error::InvalidAccount(3))
        );
    }
}
