//! Book store for the Library panel. The `issues` table ships in the schema
//! but has no writer here yet; circulation tracking never made it past the
//! table definition.

use anyhow::{Context, Result};

use crate::db::store::{
    insert_record, parse_record, ColumnSpec, FieldKind, StoreError, TableSpec,
};
use crate::db::Database;
use crate::models::Book;

pub const BOOKS: TableSpec = TableSpec {
    table: "books",
    columns: &[
        ColumnSpec {
            column: "title",
            label: "Title",
            kind: FieldKind::Text,
            required: true,
        },
        ColumnSpec {
            column: "author",
            label: "Author",
            kind: FieldKind::Text,
            required: false,
        },
        ColumnSpec {
            column: "isbn",
            label: "ISBN",
            kind: FieldKind::Text,
            required: false,
        },
        ColumnSpec {
            column: "quantity",
            label: "Quantity",
            kind: FieldKind::Integer,
            required: true,
        },
    ],
};

pub fn add_book(
    db: &Database,
    title: &str,
    author: &str,
    isbn: &str,
    quantity: &str,
) -> Result<i64, StoreError> {
    let values = parse_record(&BOOKS, &[title, author, isbn, quantity])?;
    let conn = db.connect()?;
    insert_record(&conn, &BOOKS, &values)
}

pub fn list_books(db: &Database) -> Result<Vec<Book>> {
    let conn = db.connect().context("failed to open database")?;
    let mut stmt = conn
        .prepare("SELECT id, title, author, isbn, quantity FROM books")
        .context("failed to prepare book query")?;

    let books = stmt
        .query_map([], |row| {
            Ok(Book {
                id: row.get(0)?,
                title: row.get(1)?,
                author: row.get(2)?,
                isbn: row.get(3)?,
                quantity: row.get(4)?,
            })
        })
        .context("failed to load books")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect books")?;

    Ok(books)
}
