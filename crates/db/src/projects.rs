//! Project query builders.
//!
//! Column order matches the positional mapper in the server's storage layer.

use sea_query::{Asterisk, Expr, Func, Query, SqliteQueryBuilder};

use super::tables::Projects;
use crate::Built;

const COLUMNS: [Projects; 6] = [
    Projects::Id,
    Projects::Name,
    Projects::Location,
    Projects::Status,
    Projects::StartDate,
    Projects::EndDate,
];

/// SELECT all projects in the store's natural order.
pub fn list() -> Built {
    Query::select()
        .columns(COLUMNS)
        .from(Projects::Table)
        .build(SqliteQueryBuilder)
}

/// SELECT a single project by id.
pub fn get_by_id(id: i64) -> Built {
    Query::select()
        .columns(COLUMNS)
        .from(Projects::Table)
        .and_where(Expr::col(Projects::Id).eq(id))
        .build(SqliteQueryBuilder)
}

/// SELECT COUNT(*) over the projects table.
pub fn count() -> Built {
    Query::select()
        .expr(Func::count(Expr::col(Asterisk)))
        .from(Projects::Table)
        .build(SqliteQueryBuilder)
}

/// Parameters for inserting a project. The id is assigned by the store.
pub struct InsertParams<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub status: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
}

/// INSERT a new project, returning the assigned id.
pub fn insert(p: &InsertParams<'_>) -> Built {
    Query::insert()
        .into_table(Projects::Table)
        .columns([
            Projects::Name,
            Projects::Location,
            Projects::Status,
            Projects::StartDate,
            Projects::EndDate,
        ])
        .values_panic([
            p.name.into(),
            p.location.into(),
            p.status.into(),
            p.start_date.into(),
            p.end_date.into(),
        ])
        .returning(Query::returning().column(Projects::Id))
        .build(SqliteQueryBuilder)
}
