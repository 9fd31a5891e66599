use anyhow::{Context, Result};
use estates_api_types::Project;
use estates_db::Built;
use rusqlite::{Connection, OptionalExtension, Row, params_from_iter};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Shared database state, dependency-injected into handlers via axum `State`.
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    pub fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().expect("database mutex poisoned")
    }
}

/// Initialize the database: open connection, enable WAL, run migrations.
///
/// Any failure here is a startup connectivity failure and aborts the process
/// before the listener is bound.
pub fn init_db(data_dir: &Path) -> Result<Db> {
    std::fs::create_dir_all(data_dir)?;
    let db_path = data_dir.join("estates.db");
    let conn = Connection::open(&db_path).context("opening SQLite database")?;

    // Enable WAL mode for better concurrent read performance
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;

    run_migrations(&conn)?;

    Ok(Db {
        conn: Arc::new(Mutex::new(conn)),
    })
}

fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS _migrations (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )?;

    for (name, sql) in estates_db::migrations::MIGRATIONS {
        let already_applied: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM _migrations WHERE name = ?1",
                [name],
                |row| row.get(0),
            )
            .unwrap_or(false);

        if !already_applied {
            conn.execute_batch(sql)
                .with_context(|| format!("running migration {name}"))?;
            conn.execute("INSERT INTO _migrations (name) VALUES (?1)", [name])?;
            tracing::info!("Applied migration: {name}");
        }
    }

    Ok(())
}

// ── sea-query execution helpers ────────────────────────────────────────────

fn bind_value(v: &sea_query::Value) -> rusqlite::types::Value {
    use rusqlite::types::Value as Sql;
    use sea_query::Value;
    match v {
        Value::Bool(Some(b)) => Sql::Integer(i64::from(*b)),
        Value::TinyInt(Some(x)) => Sql::Integer(i64::from(*x)),
        Value::SmallInt(Some(x)) => Sql::Integer(i64::from(*x)),
        Value::Int(Some(x)) => Sql::Integer(i64::from(*x)),
        Value::BigInt(Some(x)) => Sql::Integer(*x),
        Value::TinyUnsigned(Some(x)) => Sql::Integer(i64::from(*x)),
        Value::SmallUnsigned(Some(x)) => Sql::Integer(i64::from(*x)),
        Value::Unsigned(Some(x)) => Sql::Integer(i64::from(*x)),
        Value::Float(Some(x)) => Sql::Real(f64::from(*x)),
        Value::Double(Some(x)) => Sql::Real(*x),
        Value::String(Some(s)) => Sql::Text(s.as_ref().clone()),
        Value::Char(Some(c)) => Sql::Text(c.to_string()),
        Value::Bytes(Some(b)) => Sql::Blob(b.as_ref().clone()),
        _ => Sql::Null,
    }
}

/// Run a built SELECT expected to yield exactly one row.
pub fn sq_query_row<T>(
    conn: &Connection,
    (sql, values): Built,
    f: impl FnOnce(&Row<'_>) -> rusqlite::Result<T>,
) -> rusqlite::Result<T> {
    conn.query_row(&sql, params_from_iter(values.0.iter().map(bind_value)), f)
}

/// Run a built SELECT yielding zero or one row.
///
/// `Ok(None)` is "row absent"; `Err` is a real store failure. Callers map the
/// two to different client-visible outcomes.
pub fn sq_query_opt<T>(
    conn: &Connection,
    (sql, values): Built,
    f: impl FnOnce(&Row<'_>) -> rusqlite::Result<T>,
) -> rusqlite::Result<Option<T>> {
    conn.query_row(&sql, params_from_iter(values.0.iter().map(bind_value)), f)
        .optional()
}

/// Run a built SELECT, mapping every row.
pub fn sq_query_map<T>(
    conn: &Connection,
    (sql, values): Built,
    f: impl FnMut(&Row<'_>) -> rusqlite::Result<T>,
) -> rusqlite::Result<Vec<T>> {
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.0.iter().map(bind_value)), f)?;
    rows.collect()
}

/// Positional mapper matching the column order of `estates_db::projects`.
pub fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        location: row.get(2)?,
        status: row.get(3)?,
        start_date: row.get(4)?,
        end_date: row.get(5)?,
    })
}
