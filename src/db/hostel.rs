//! Hostel and room stores. Rooms attach to whichever hostel the storage
//! engine returns first (`LIMIT 1` with no ORDER BY) rather than asking the
//! user to pick one; a deliberate simplification that stays until product
//! intent changes.

use anyhow::{Context, Result};
use rusqlite::OptionalExtension;

use crate::db::store::{
    insert_record, parse_field, parse_record, ColumnSpec, FieldKind, FieldValue, StoreError,
    TableSpec,
};
use crate::db::Database;
use crate::models::{Hostel, Room};

pub const HOSTELS: TableSpec = TableSpec {
    table: "hostels",
    columns: &[ColumnSpec {
        column: "name",
        label: "Hostel name",
        kind: FieldKind::Text,
        required: true,
    }],
};

/// The first column is the owning hostel, resolved internally by
/// [`add_room`]; panels build their room form from `columns[1..]`.
pub const ROOMS: TableSpec = TableSpec {
    table: "rooms",
    columns: &[
        ColumnSpec {
            column: "hostel_id",
            label: "Hostel",
            kind: FieldKind::Integer,
            required: true,
        },
        ColumnSpec {
            column: "room_number",
            label: "Room number",
            kind: FieldKind::Text,
            required: true,
        },
        ColumnSpec {
            column: "capacity",
            label: "Capacity",
            kind: FieldKind::Integer,
            required: true,
        },
    ],
};

pub fn add_hostel(db: &Database, name: &str) -> Result<i64, StoreError> {
    let values = parse_record(&HOSTELS, &[name])?;
    let conn = db.connect()?;
    insert_record(&conn, &HOSTELS, &values)
}

/// Add a room under "any one hostel". Validation runs before the hostel
/// lookup, so a bad capacity reports even when no hostel exists yet; with
/// zero hostels registered nothing is written to either table.
pub fn add_room(db: &Database, room_number: &str, capacity: &str) -> Result<i64, StoreError> {
    let room_number = parse_field(&ROOMS.columns[1], room_number)?;
    let capacity = parse_field(&ROOMS.columns[2], capacity)?;

    let conn = db.connect()?;
    let hostel_id: Option<i64> = conn
        .query_row("SELECT id FROM hostels LIMIT 1", [], |row| row.get(0))
        .optional()?;
    let Some(hostel_id) = hostel_id else {
        return Err(StoreError::MissingPrerequisite(
            "Add at least one hostel first.",
        ));
    };

    insert_record(
        &conn,
        &ROOMS,
        &[FieldValue::Integer(hostel_id), room_number, capacity],
    )
}

pub fn list_hostels(db: &Database) -> Result<Vec<Hostel>> {
    let conn = db.connect().context("failed to open database")?;
    let mut stmt = conn
        .prepare("SELECT id, name FROM hostels")
        .context("failed to prepare hostel query")?;

    let hostels = stmt
        .query_map([], |row| {
            Ok(Hostel {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .context("failed to load hostels")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect hostels")?;

    Ok(hostels)
}

/// Rooms joined to their hostels so the list view can show the owner's name.
pub fn list_rooms(db: &Database) -> Result<Vec<Room>> {
    let conn = db.connect().context("failed to open database")?;
    let mut stmt = conn
        .prepare(
            "SELECT r.id, r.room_number, r.capacity, h.name
             FROM rooms r
             JOIN hostels h ON r.hostel_id = h.id",
        )
        .context("failed to prepare room query")?;

    let rooms = stmt
        .query_map([], |row| {
            Ok(Room {
                id: row.get(0)?,
                room_number: row.get(1)?,
                capacity: row.get(2)?,
                hostel_name: row.get(3)?,
            })
        })
        .context("failed to load rooms")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect rooms")?;

    Ok(rooms)
}
