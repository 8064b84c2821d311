//! Attendance scan log for the Biometrics/RFID panel. Scans are append-only
//! and never deduplicated: marking the same student twice in a day records
//! two rows, which is treated as a multi-scan log rather than a defect.

use anyhow::{Context, Result};
use chrono::Local;
use rusqlite::params;

use crate::db::store::{
    insert_record, parse_record, ColumnSpec, FieldKind, StoreError, TableSpec,
};
use crate::db::Database;
use crate::models::AttendanceRecord;

/// Only the first column is user input; date, time, and status are stamped by
/// [`mark`]. The scan form is built from `columns[..1]`.
pub const ATTENDANCE: TableSpec = TableSpec {
    table: "attendance",
    columns: &[
        ColumnSpec {
            column: "student_name",
            label: "Student name",
            kind: FieldKind::Text,
            required: true,
        },
        ColumnSpec {
            column: "date",
            label: "Date",
            kind: FieldKind::Text,
            required: false,
        },
        ColumnSpec {
            column: "time",
            label: "Time",
            kind: FieldKind::Text,
            required: false,
        },
        ColumnSpec {
            column: "status",
            label: "Status",
            kind: FieldKind::Text,
            required: false,
        },
    ],
};

/// Record one simulated scan for the named student, stamped with the local
/// date and time and a fixed "Present" status.
pub fn mark(db: &Database, student_name: &str) -> Result<i64, StoreError> {
    let now = Local::now();
    let date = now.format("%Y-%m-%d").to_string();
    let time = now.format("%H:%M:%S").to_string();

    let values = parse_record(&ATTENDANCE, &[student_name, &date, &time, "Present"])?;
    let conn = db.connect()?;
    insert_record(&conn, &ATTENDANCE, &values)
}

/// All scans recorded today, in storage order.
pub fn list_today(db: &Database) -> Result<Vec<AttendanceRecord>> {
    let today = Local::now().format("%Y-%m-%d").to_string();

    let conn = db.connect().context("failed to open database")?;
    let mut stmt = conn
        .prepare("SELECT id, student_name, date, time, status FROM attendance WHERE date = ?1")
        .context("failed to prepare attendance query")?;

    let records = stmt
        .query_map(params![today], |row| {
            Ok(AttendanceRecord {
                id: row.get(0)?,
                student_name: row.get(1)?,
                date: row.get(2)?,
                time: row.get(3)?,
                status: row.get(4)?,
            })
        })
        .context("failed to load attendance")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect attendance")?;

    Ok(records)
}
