//! Shared database schema, migrations, and query builders.

pub mod migrations;
pub mod projects;
pub mod tables;

pub use tables::*;

/// A built statement ready for execution: SQL text plus bound values.
pub type Built = (String, sea_query::Values);
