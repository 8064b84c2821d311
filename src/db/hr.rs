//! Staff store for the HR panel. Payroll and leave tables exist in the schema
//! only; no panel writes them.

use anyhow::{Context, Result};

use crate::db::store::{
    insert_record, parse_record, ColumnSpec, FieldKind, StoreError, TableSpec,
};
use crate::db::Database;
use crate::models::Staff;

pub const STAFF: TableSpec = TableSpec {
    table: "staff",
    columns: &[
        ColumnSpec {
            column: "name",
            label: "Staff name",
            kind: FieldKind::Text,
            required: true,
        },
        ColumnSpec {
            column: "role",
            label: "Role",
            kind: FieldKind::Text,
            required: true,
        },
        ColumnSpec {
            column: "salary",
            label: "Monthly salary",
            kind: FieldKind::Real,
            required: true,
        },
    ],
};

pub fn add_staff(db: &Database, name: &str, role: &str, salary: &str) -> Result<i64, StoreError> {
    let values = parse_record(&STAFF, &[name, role, salary])?;
    let conn = db.connect()?;
    insert_record(&conn, &STAFF, &values)
}

pub fn list_staff(db: &Database) -> Result<Vec<Staff>> {
    let conn = db.connect().context("failed to open database")?;
    let mut stmt = conn
        .prepare("SELECT id, name, role, salary FROM staff")
        .context("failed to prepare staff query")?;

    let staff = stmt
        .query_map([], |row| {
            Ok(Staff {
                id: row.get(0)?,
                name: row.get(1)?,
                role: row.get(2)?,
                salary: row.get(3)?,
            })
        })
        .context("failed to load staff")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect staff")?;

    Ok(staff)
}
