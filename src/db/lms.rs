//! Assignment store for the Learning Management System panel.

use anyhow::{Context, Result};
use chrono::Local;

use crate::db::store::{
    insert_record, parse_record, ColumnSpec, FieldKind, StoreError, TableSpec,
};
use crate::db::Database;
use crate::models::Assignment;

pub const ASSIGNMENTS: TableSpec = TableSpec {
    table: "assignments",
    columns: &[
        ColumnSpec {
            column: "title",
            label: "Title",
            kind: FieldKind::Text,
            required: true,
        },
        ColumnSpec {
            column: "description",
            label: "Description",
            kind: FieldKind::Text,
            required: false,
        },
        ColumnSpec {
            column: "file_path",
            label: "Attachment path",
            kind: FieldKind::Text,
            required: false,
        },
        ColumnSpec {
            column: "due_date",
            label: "Due date",
            kind: FieldKind::Text,
            required: false,
        },
    ],
};

/// Today's date in the format assignments store as their due date. The panel
/// seeds its due-date field with this, matching what a calendar widget would
/// have pre-selected.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

pub fn add_assignment(
    db: &Database,
    title: &str,
    description: &str,
    file_path: &str,
    due_date: &str,
) -> Result<i64, StoreError> {
    let values = parse_record(&ASSIGNMENTS, &[title, description, file_path, due_date])?;
    let conn = db.connect()?;
    insert_record(&conn, &ASSIGNMENTS, &values)
}

pub fn list_assignments(db: &Database) -> Result<Vec<Assignment>> {
    let conn = db.connect().context("failed to open database")?;
    let mut stmt = conn
        .prepare("SELECT id, title, description, file_path, due_date FROM assignments")
        .context("failed to prepare assignment query")?;

    let assignments = stmt
        .query_map([], |row| {
            Ok(Assignment {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                file_path: row.get(3)?,
                due_date: row.get(4)?,
            })
        })
        .context("failed to load assignments")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect assignments")?;

    Ok(assignments)
}
