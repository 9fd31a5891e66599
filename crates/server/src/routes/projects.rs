use axum::{
    Json,
    extract::{Path, State},
};

use estates_api_types::Project;
use estates_db::projects;

use crate::error::ApiErr;
use crate::storage::{Db, project_from_row, sq_query_map, sq_query_opt};

/// Parse the `{id}` path segment as a non-negative integer.
fn parse_project_id(raw: &str) -> Result<i64, ApiErr> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| ApiErr::bad_request("Invalid project ID"))
}

/// GET /projects — list all projects.
///
/// Always an array, `[]` for an empty table. Rows come back in the store's
/// natural order; no filtering or pagination.
pub async fn list_projects(State(db): State<Db>) -> Result<Json<Vec<Project>>, ApiErr> {
    let conn = db.conn();
    let rows = sq_query_map(&conn, projects::list(), project_from_row)
        .map_err(ApiErr::from_db("list projects"))?;
    Ok(Json(rows))
}

/// GET /projects/{id} — fetch one project.
///
/// Absent rows are 404; a failing query is 500. The two are deliberately
/// distinct outcomes.
pub async fn get_project(
    State(db): State<Db>,
    Path(raw_id): Path<String>,
) -> Result<Json<Project>, ApiErr> {
    let id = parse_project_id(&raw_id)?;
    let conn = db.conn();
    let row = sq_query_opt(&conn, projects::get_by_id(id), project_from_row)
        .map_err(ApiErr::from_db("get project"))?;
    row.map(Json)
        .ok_or_else(|| ApiErr::not_found("Project not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{init_db, sq_query_row};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn test_db() -> (tempfile::TempDir, Db) {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = init_db(dir.path()).expect("init db");
        (dir, db)
    }

    fn seed_lakeview(db: &Db) -> i64 {
        sq_query_row(
            &db.conn(),
            projects::insert(&projects::InsertParams {
                name: "Lakeview",
                location: "City A",
                status: "ongoing",
                start_date: "2024-01-01",
                end_date: "2025-01-01",
            }),
            |row| row.get(0),
        )
        .expect("seed project")
    }

    #[test]
    fn project_id_parsing_accepts_only_non_negative_integers() {
        assert!(parse_project_id("1").is_ok());
        assert!(parse_project_id("0").is_ok());
        for bad in ["abc", "1.5", "", "-3", " 1"] {
            assert!(parse_project_id(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[tokio::test]
    async fn empty_store_lists_an_empty_array() {
        let (_dir, db) = test_db();
        let Json(rows) = list_projects(State(db)).await.expect("list");
        assert!(rows.is_empty());
        assert_eq!(serde_json::to_string(&rows).unwrap(), "[]");
    }

    #[tokio::test]
    async fn list_returns_every_seeded_row() {
        let (_dir, db) = test_db();
        let id = seed_lakeview(&db);
        let Json(rows) = list_projects(State(db)).await.expect("list");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(
            serde_json::to_string(&rows).unwrap(),
            format!(
                r#"[{{"id":{id},"name":"Lakeview","location":"City A","status":"ongoing","start_date":"2024-01-01","end_date":"2025-01-01"}}]"#
            )
        );
    }

    #[tokio::test]
    async fn get_returns_the_requested_project() {
        let (_dir, db) = test_db();
        let id = seed_lakeview(&db);
        let Json(p) = get_project(State(db), Path(id.to_string()))
            .await
            .expect("get");
        assert_eq!(p.id, id);
        assert_eq!(p.name, "Lakeview");
    }

    #[tokio::test]
    async fn get_absent_project_is_404() {
        let (_dir, db) = test_db();
        seed_lakeview(&db);
        let err = get_project(State(db), Path("2".into()))
            .await
            .expect_err("id 2 is absent");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn store_failure_is_500_on_both_handlers() {
        let (_dir, db) = test_db();
        db.conn().execute_batch("DROP TABLE projects;").unwrap();

        let err = list_projects(State(db.clone()))
            .await
            .expect_err("table is gone");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let err = get_project(State(db), Path("1".into()))
            .await
            .expect_err("table is gone");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn get_malformed_id_is_400() {
        let (_dir, db) = test_db();
        let err = get_project(State(db), Path("x".into()))
            .await
            .expect_err("non-integer id");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn repeated_reads_are_byte_identical() {
        let (_dir, db) = test_db();
        seed_lakeview(&db);
        let Json(first) = list_projects(State(db.clone())).await.expect("list");
        let Json(second) = list_projects(State(db)).await.expect("list");
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
