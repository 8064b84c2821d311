//! The generic record store every feature module is built on. A feature
//! declares its table once as a [`TableSpec`] (column names, user-facing
//! labels, field kinds, required flags) and both the input validation and the
//! parameterized INSERT fall out of that single descriptor. The panels reuse
//! the same column specs to drive their forms, so a label or a field kind only
//! ever lives in one place.

use rusqlite::types::ToSqlOutput;
use rusqlite::{params_from_iter, Connection, ToSql};
use thiserror::Error;

/// Failure classes a record store can report. The first three are recoverable
/// user-input problems the panels render inline; `Sql` covers everything the
/// storage engine refuses.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required text field was blank after trimming.
    #[error("{0} is required.")]
    MissingField(&'static str),
    /// A numeric field did not parse. Sign and range are deliberately never
    /// checked, so negative quantities and salaries pass.
    #[error("{0} must be a number.")]
    NotNumeric(&'static str),
    /// A referenced row the operation depends on does not exist yet.
    #[error("{0}")]
    MissingPrerequisite(&'static str),
    #[error(transparent)]
    Sql(#[from] rusqlite::Error),
}

/// How a column's raw text input is interpreted before it reaches SQLite.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Real,
}

/// One column of a feature table, carrying everything the store needs to
/// validate input and everything a form needs to render the field.
pub struct ColumnSpec {
    pub column: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// A feature table: its SQL name plus the columns an INSERT populates.
pub struct TableSpec {
    pub table: &'static str,
    pub columns: &'static [ColumnSpec],
}

/// A validated value ready for binding as a statement parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Real(f64),
}

impl ToSql for FieldValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            FieldValue::Text(value) => value.to_sql(),
            FieldValue::Integer(value) => value.to_sql(),
            FieldValue::Real(value) => value.to_sql(),
        }
    }
}

/// Validate one raw input against its column spec. Text is trimmed and then
/// checked for presence when required; numeric kinds are checked for
/// parse-ability only, so a blank numeric field reports as non-numeric exactly
/// like any other garbage.
pub fn parse_field(column: &ColumnSpec, raw: &str) -> Result<FieldValue, StoreError> {
    let trimmed = raw.trim();
    match column.kind {
        FieldKind::Text => {
            if column.required && trimmed.is_empty() {
                return Err(StoreError::MissingField(column.label));
            }
            Ok(FieldValue::Text(trimmed.to_string()))
        }
        FieldKind::Integer => trimmed
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(|_| StoreError::NotNumeric(column.label)),
        FieldKind::Real => trimmed
            .parse::<f64>()
            .map(FieldValue::Real)
            .map_err(|_| StoreError::NotNumeric(column.label)),
    }
}

/// Validate a full row of raw inputs in declared column order, stopping at the
/// first failure so the panel can surface a single message.
pub fn parse_record(spec: &TableSpec, raw: &[&str]) -> Result<Vec<FieldValue>, StoreError> {
    debug_assert_eq!(spec.columns.len(), raw.len());
    spec.columns
        .iter()
        .zip(raw)
        .map(|(column, value)| parse_field(column, value))
        .collect()
}

/// Append one row and return its rowid. The INSERT is assembled from the spec
/// so every feature shares the same parameterized statement path.
pub fn insert_record(
    conn: &Connection,
    spec: &TableSpec,
    values: &[FieldValue],
) -> Result<i64, StoreError> {
    debug_assert_eq!(spec.columns.len(), values.len());
    let columns = spec
        .columns
        .iter()
        .map(|column| column.column)
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = (1..=values.len())
        .map(|index| format!("?{index}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        spec.table, columns, placeholders
    );
    conn.execute(&sql, params_from_iter(values.iter()))?;
    Ok(conn.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GADGETS: TableSpec = TableSpec {
        table: "gadgets",
        columns: &[
            ColumnSpec {
                column: "name",
                label: "Name",
                kind: FieldKind::Text,
                required: true,
            },
            ColumnSpec {
                column: "note",
                label: "Note",
                kind: FieldKind::Text,
                required: false,
            },
            ColumnSpec {
                column: "count",
                label: "Count",
                kind: FieldKind::Integer,
                required: true,
            },
            ColumnSpec {
                column: "price",
                label: "Price",
                kind: FieldKind::Real,
                required: true,
            },
        ],
    };

    #[test]
    fn blank_required_text_reports_missing_field() {
        let err = parse_field(&GADGETS.columns[0], "   ").unwrap_err();
        assert!(matches!(err, StoreError::MissingField("Name")));
    }

    #[test]
    fn blank_optional_text_parses_to_empty() {
        let value = parse_field(&GADGETS.columns[1], "").unwrap();
        assert_eq!(value, FieldValue::Text(String::new()));
    }

    #[test]
    fn garbage_integer_reports_not_numeric() {
        let err = parse_field(&GADGETS.columns[2], "ten").unwrap_err();
        assert!(matches!(err, StoreError::NotNumeric("Count")));
    }

    #[test]
    fn blank_integer_reports_not_numeric() {
        let err = parse_field(&GADGETS.columns[2], "").unwrap_err();
        assert!(matches!(err, StoreError::NotNumeric("Count")));
    }

    #[test]
    fn negative_numbers_are_accepted() {
        assert_eq!(
            parse_field(&GADGETS.columns[2], "-3").unwrap(),
            FieldValue::Integer(-3)
        );
        assert_eq!(
            parse_field(&GADGETS.columns[3], "-12.5").unwrap(),
            FieldValue::Real(-12.5)
        );
    }

    #[test]
    fn record_validation_stops_at_first_failure_in_column_order() {
        let err = parse_record(&GADGETS, &["", "note", "bogus", "1.0"]).unwrap_err();
        assert!(matches!(err, StoreError::MissingField("Name")));
    }

    #[test]
    fn insert_record_appends_one_row() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute(
            "CREATE TABLE gadgets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                note TEXT,
                count INTEGER,
                price REAL
            )",
            [],
        )
        .unwrap();

        let values = parse_record(&GADGETS, &["Widget", "", "4", "9.99"]).unwrap();
        let id = insert_record(&conn, &GADGETS, &values).unwrap();
        assert_eq!(id, 1);

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM gadgets", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
