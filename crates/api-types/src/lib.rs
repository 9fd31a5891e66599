//! Shared API types for the estates backend.
//!
//! This crate is the single source of truth for the JSON surface exposed by
//! the server. Field declaration order is the serialization order, so the
//! response bodies are byte-stable across requests for unchanged data.

use serde::{Deserialize, Serialize};

// ─── Projects ────────────────────────────────────────────────────────────────

/// A real-estate development record, the one entity the read API serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
}

// ─── Declared entities (schema only, no routes yet) ──────────────────────────

/// An occupant of a project unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub contact: String,
}

/// A payment owed by a tenant against a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub project_id: i64,
    pub tenant_id: i64,
    pub amount: f64,
    pub due_date: String,
    pub paid_at: Option<String>,
    pub status: String,
}

/// A file attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub project_id: i64,
    pub file_path: String,
    pub uploaded_at: String,
}

// ─── Health ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
