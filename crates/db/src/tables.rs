//! Compile-time–checked column identifiers for all tables.

use sea_query::Iden;

#[derive(Iden)]
pub enum Projects {
    Table,
    Id,
    Name,
    Location,
    Status,
    StartDate,
    EndDate,
}

#[derive(Iden)]
pub enum Tenants {
    Table,
    Id,
    ProjectId,
    Name,
    Contact,
}

#[derive(Iden)]
pub enum Payments {
    Table,
    Id,
    ProjectId,
    TenantId,
    Amount,
    DueDate,
    PaidAt,
    Status,
}

#[derive(Iden)]
pub enum Documents {
    Table,
    Id,
    ProjectId,
    FilePath,
    UploadedAt,
}
