//! Inventory item store.

use anyhow::{Context, Result};

use crate::db::store::{
    insert_record, parse_record, ColumnSpec, FieldKind, StoreError, TableSpec,
};
use crate::db::Database;
use crate::models::InventoryItem;

pub const ITEMS: TableSpec = TableSpec {
    table: "inventory_items",
    columns: &[
        ColumnSpec {
            column: "name",
            label: "Item name",
            kind: FieldKind::Text,
            required: true,
        },
        ColumnSpec {
            column: "quantity",
            label: "Quantity",
            kind: FieldKind::Integer,
            required: true,
        },
        ColumnSpec {
            column: "location",
            label: "Storage location",
            kind: FieldKind::Text,
            required: false,
        },
    ],
};

pub fn add_item(
    db: &Database,
    name: &str,
    quantity: &str,
    location: &str,
) -> Result<i64, StoreError> {
    let values = parse_record(&ITEMS, &[name, quantity, location])?;
    let conn = db.connect()?;
    insert_record(&conn, &ITEMS, &values)
}

pub fn list_items(db: &Database) -> Result<Vec<InventoryItem>> {
    let conn = db.connect().context("failed to open database")?;
    let mut stmt = conn
        .prepare("SELECT id, name, quantity, location FROM inventory_items")
        .context("failed to prepare inventory query")?;

    let items = stmt
        .query_map([], |row| {
            Ok(InventoryItem {
                id: row.get(0)?,
                name: row.get(1)?,
                quantity: row.get(2)?,
                location: row.get(3)?,
            })
        })
        .context("failed to load inventory items")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect inventory items")?;

    Ok(items)
}
