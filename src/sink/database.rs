use crate::args::{DatabaseConfig, DatabaseType};
use crate::error::ScrapeError;
use crate::model::{Column, ColumnKind, NOT_AVAILABLE, TeeRow, columns};
use deadpool_postgres::tokio_postgres::NoTls;
use deadpool_postgres::tokio_postgres::types::ToSql;
use deadpool_postgres::{ManagerConfig, Pool, RecyclingMethod, Runtime};
use log::{info, warn};
use rusqlite::Connection;
use rusqlite::types::Value;
use std::sync::Mutex;

pub const TABLE_NAME: &str = "golf_data_entries";

const POSTGRES_DDL: &str = include_str!("../sql/schema/postgres/00_golf_data_entries.sql");
const SQLITE_DDL: &str = include_str!("../sql/schema/sqlite/00_golf_data_entries.sql");

/// A cell ready for binding, typed by its column so nulls stay typed too.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(Option<i64>),
    Decimal(Option<f64>),
    Text(Option<String>),
}

/// The sentinel becomes NULL; numeric columns that don't parse become NULL.
#[must_use]
pub fn to_sql_value(cell: &str, kind: ColumnKind) -> SqlValue {
    let present = (cell != NOT_AVAILABLE).then_some(cell);
    match kind {
        ColumnKind::Text => SqlValue::Text(present.map(str::to_string)),
        ColumnKind::Integer => SqlValue::Integer(present.and_then(|v| v.trim().parse().ok())),
        ColumnKind::Decimal => SqlValue::Decimal(present.and_then(|v| v.trim().parse().ok())),
    }
}

fn placeholder(db_type: DatabaseType, n: usize, kind: ColumnKind) -> String {
    match db_type {
        // explicit casts so the bound rust types line up with the parameter types
        DatabaseType::Postgres => match kind {
            ColumnKind::Text => format!("${n}::text"),
            ColumnKind::Integer => format!("${n}::int8"),
            ColumnKind::Decimal => format!("${n}::float8"),
        },
        DatabaseType::Sqlite => format!("?{n}"),
    }
}

/// One multi-row INSERT covering `row_count` rows.
#[must_use]
pub fn insert_statement(cols: &[Column], row_count: usize, db_type: DatabaseType) -> String {
    let names = cols
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut n = 0;
    let mut tuples = Vec::with_capacity(row_count);
    for _ in 0..row_count {
        let mut placeholders = Vec::with_capacity(cols.len());
        for col in cols {
            n += 1;
            placeholders.push(placeholder(db_type, n, col.kind));
        }
        tuples.push(format!("({})", placeholders.join(", ")));
    }

    format!(
        "INSERT INTO {TABLE_NAME} ({names}) VALUES {}",
        tuples.join(", ")
    )
}

fn postgres_param(value: SqlValue) -> Box<dyn ToSql + Sync> {
    match value {
        SqlValue::Integer(v) => Box::new(v),
        SqlValue::Decimal(v) => Box::new(v),
        SqlValue::Text(v) => Box::new(v),
    }
}

fn sqlite_value(value: SqlValue) -> Value {
    match value {
        SqlValue::Integer(Some(v)) => Value::Integer(v),
        SqlValue::Decimal(Some(v)) => Value::Real(v),
        SqlValue::Text(Some(v)) => Value::Text(v),
        SqlValue::Integer(None) | SqlValue::Decimal(None) | SqlValue::Text(None) => Value::Null,
    }
}

/// The relational sink. One owner for the whole run.
pub enum Database {
    Postgres(Pool),
    Sqlite(Mutex<Connection>),
}

impl Database {
    /// Open the database and make sure it's reachable.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the pool can't be built or no connection can be made
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ScrapeError> {
        match config.db_type {
            DatabaseType::Postgres => {
                let mut cfg = deadpool_postgres::Config::new();
                cfg.dbname = Some(config.name.clone());
                cfg.host.clone_from(&config.host);
                cfg.port = Some(config.port);
                cfg.user.clone_from(&config.user);
                cfg.password.clone_from(&config.password);
                cfg.manager = Some(ManagerConfig {
                    recycling_method: RecyclingMethod::Fast,
                });
                let pool = cfg.create_pool(Some(Runtime::Tokio1), NoTls)?;
                // pools connect lazily; fail here rather than after scraping
                drop(pool.get().await?);
                info!("Successfully connected to PostgreSQL database: {}", config.name);
                Ok(Self::Postgres(pool))
            }
            DatabaseType::Sqlite => {
                let conn = if config.name == ":memory:" {
                    Connection::open_in_memory()?
                } else {
                    Connection::open(&config.name)?
                };
                info!("Opened SQLite database: {}", config.name);
                Ok(Self::Sqlite(Mutex::new(conn)))
            }
        }
    }

    #[must_use]
    pub fn db_type(&self) -> DatabaseType {
        match self {
            Self::Postgres(_) => DatabaseType::Postgres,
            Self::Sqlite(_) => DatabaseType::Sqlite,
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the DDL fails
    pub async fn ensure_table(&self) -> Result<(), ScrapeError> {
        match self {
            Self::Postgres(pool) => {
                let client = pool.get().await?;
                client.batch_execute(POSTGRES_DDL).await?;
            }
            Self::Sqlite(conn) => {
                lock(conn)?.execute_batch(SQLITE_DDL)?;
            }
        }
        info!("Table '{TABLE_NAME}' checked/created successfully.");
        Ok(())
    }

    /// Insert all rows with a single statement inside a transaction.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the insert fails; nothing is written in that case
    pub async fn insert_tee_rows(&self, rows: &[TeeRow]) -> Result<u64, ScrapeError> {
        if rows.is_empty() {
            return Ok(0);
        }
        let cols = columns();
        let statement = insert_statement(&cols, rows.len(), self.db_type());
        let values: Vec<SqlValue> = rows
            .iter()
            .flat_map(|row| {
                row.values()
                    .iter()
                    .zip(&cols)
                    .map(|(cell, col)| to_sql_value(cell, col.kind))
                    .collect::<Vec<_>>()
            })
            .collect();

        let inserted = match self {
            Self::Postgres(pool) => {
                let params: Vec<Box<dyn ToSql + Sync>> =
                    values.into_iter().map(postgres_param).collect();
                let refs: Vec<&(dyn ToSql + Sync)> = params.iter().map(|p| &**p).collect();

                let mut client = pool.get().await?;
                let tx = client.transaction().await?;
                let inserted = tx.execute(statement.as_str(), &refs).await?;
                tx.commit().await?;
                inserted
            }
            Self::Sqlite(conn) => insert_sqlite(conn, &statement, values)?,
        };
        info!("Successfully inserted {inserted} rows into '{TABLE_NAME}'.");
        Ok(inserted)
    }

    /// Release the connection(s). Errors are only logged.
    pub fn close(self) {
        match self {
            Self::Postgres(pool) => pool.close(),
            Self::Sqlite(conn) => match conn.into_inner() {
                Ok(conn) => {
                    if let Err((_, e)) = conn.close() {
                        warn!("Error closing SQLite database: {e}");
                    }
                }
                Err(e) => warn!("SQLite connection lock poisoned on close: {e}"),
            },
        }
        info!("Database connection closed.");
    }
}

fn lock(conn: &Mutex<Connection>) -> Result<std::sync::MutexGuard<'_, Connection>, ScrapeError> {
    conn.lock()
        .map_err(|_| ScrapeError::Db("sqlite connection lock poisoned".to_string()))
}

fn insert_sqlite(
    conn: &Mutex<Connection>,
    statement: &str,
    values: Vec<SqlValue>,
) -> Result<u64, ScrapeError> {
    let mut conn = lock(conn)?;
    let tx = conn.transaction()?;
    let inserted = tx.execute(
        statement,
        rusqlite::params_from_iter(values.into_iter().map(sqlite_value)),
    )?;
    tx.commit()?;
    u64::try_from(inserted).map_err(|e| ScrapeError::Db(e.to_string()))
}
