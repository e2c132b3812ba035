//! Customer repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Define the four storage capabilities the controller relies on.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `save` is an upsert keyed by `Customer::name`.
//! - `update`/`delete` on a missing name change nothing and report
//!   `WriteOutcome::NotFound`.
//! - The SQLite backend refuses connections that are not fully migrated.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::customer::Customer;
use log::info;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CUSTOMER_SELECT_SQL: &str = "SELECT
    name,
    email,
    phone
FROM customers";

pub type RepoResult<T> = Result<T, RepoError>;

/// Backend failure raised by a customer repository.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "customer repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "customer repository requires table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Result of a write that targets an existing customer.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The customer existed and the change was applied.
    Applied,
    /// No customer with that name; nothing changed.
    NotFound,
}

impl WriteOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    fn status(self) -> &'static str {
        match self {
            Self::Applied => "ok",
            Self::NotFound => "not_found",
        }
    }
}

/// Storage contract for customers, keyed by name.
///
/// Any implementation can be injected into
/// [`crate::service::customer_controller::CustomerController`].
pub trait CustomerRepository {
    /// Inserts or overwrites the record stored under `customer.name`.
    fn save(&mut self, customer: &Customer) -> RepoResult<()>;
    /// Returns the stored record, or `None` when the name is unknown.
    fn find(&self, name: &str) -> RepoResult<Option<Customer>>;
    /// Overwrites an existing record; never inserts.
    fn update(&mut self, customer: &Customer) -> RepoResult<WriteOutcome>;
    fn delete(&mut self, name: &str) -> RepoResult<WriteOutcome>;
}

/// SQLite-backed customer repository.
///
/// Borrows a connection returned by [`crate::db::open_db`] or
/// [`crate::db::open_db_in_memory`].
pub struct SqliteCustomerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCustomerRepository<'conn> {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` when the `customers` table is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_customer_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl CustomerRepository for SqliteCustomerRepository<'_> {
    fn save(&mut self, customer: &Customer) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO customers (name, email, phone)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE SET
                email = excluded.email,
                phone = excluded.phone,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                customer.name.as_str(),
                customer.email.as_str(),
                customer.phone.as_str(),
            ],
        )?;

        info!("event=customer_save module=repo backend=sqlite status=ok");
        Ok(())
    }

    fn find(&self, name: &str) -> RepoResult<Option<Customer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CUSTOMER_SELECT_SQL} WHERE name = ?1;"))?;

        let mut rows = stmt.query([name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_customer_row(row)?));
        }

        Ok(None)
    }

    fn update(&mut self, customer: &Customer) -> RepoResult<WriteOutcome> {
        let changed = self.conn.execute(
            "UPDATE customers
             SET
                email = ?1,
                phone = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE name = ?3;",
            params![
                customer.email.as_str(),
                customer.phone.as_str(),
                customer.name.as_str(),
            ],
        )?;

        let outcome = changed_to_outcome(changed);
        log_write_outcome("customer_update", "sqlite", outcome);
        Ok(outcome)
    }

    fn delete(&mut self, name: &str) -> RepoResult<WriteOutcome> {
        let changed = self
            .conn
            .execute("DELETE FROM customers WHERE name = ?1;", [name])?;

        let outcome = changed_to_outcome(changed);
        log_write_outcome("customer_delete", "sqlite", outcome);
        Ok(outcome)
    }
}

pub(crate) fn log_write_outcome(event: &str, backend: &str, outcome: WriteOutcome) {
    info!(
        "event={} module=repo backend={} status={}",
        event,
        backend,
        outcome.status()
    );
}

fn changed_to_outcome(changed: usize) -> WriteOutcome {
    if changed == 0 {
        WriteOutcome::NotFound
    } else {
        WriteOutcome::Applied
    }
}

fn parse_customer_row(row: &Row<'_>) -> RepoResult<Customer> {
    Ok(Customer {
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
    })
}

fn ensure_customer_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "customers")? {
        return Err(RepoError::MissingRequiredTable("customers"));
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
