//! Canonical migration definitions.
//!
//! Applied in order by the server's migration runner, tracked by name in the
//! `_migrations` table.

/// A named migration: `(name, sql)`.
pub type Migration = (&'static str, &'static str);

pub const MIGRATIONS: &[Migration] = &[(
    "0001_schema",
    include_str!("../migrations/0001_schema.sql"),
)];
