//! Bus and route stores for the Transport panel. Student-to-bus assignment
//! exists only as the `transport_assignment` table; nothing writes it.

use anyhow::{Context, Result};

use crate::db::store::{
    insert_record, parse_record, ColumnSpec, FieldKind, StoreError, TableSpec,
};
use crate::db::Database;
use crate::models::{Bus, Route};

pub const BUSES: TableSpec = TableSpec {
    table: "buses",
    columns: &[
        ColumnSpec {
            column: "bus_number",
            label: "Bus number",
            kind: FieldKind::Text,
            required: true,
        },
        ColumnSpec {
            column: "driver_name",
            label: "Driver name",
            kind: FieldKind::Text,
            required: false,
        },
    ],
};

pub const ROUTES: TableSpec = TableSpec {
    table: "routes",
    columns: &[
        ColumnSpec {
            column: "route_name",
            label: "Route name",
            kind: FieldKind::Text,
            required: true,
        },
        ColumnSpec {
            column: "pickup_time",
            label: "Pickup time",
            kind: FieldKind::Text,
            required: false,
        },
    ],
};

pub fn add_bus(db: &Database, bus_number: &str, driver_name: &str) -> Result<i64, StoreError> {
    let values = parse_record(&BUSES, &[bus_number, driver_name])?;
    let conn = db.connect()?;
    insert_record(&conn, &BUSES, &values)
}

pub fn add_route(db: &Database, route_name: &str, pickup_time: &str) -> Result<i64, StoreError> {
    let values = parse_record(&ROUTES, &[route_name, pickup_time])?;
    let conn = db.connect()?;
    insert_record(&conn, &ROUTES, &values)
}

pub fn list_buses(db: &Database) -> Result<Vec<Bus>> {
    let conn = db.connect().context("failed to open database")?;
    let mut stmt = conn
        .prepare("SELECT id, bus_number, driver_name FROM buses")
        .context("failed to prepare bus query")?;

    let buses = stmt
        .query_map([], |row| {
            Ok(Bus {
                id: row.get(0)?,
                bus_number: row.get(1)?,
                driver_name: row.get(2)?,
            })
        })
        .context("failed to load buses")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect buses")?;

    Ok(buses)
}

pub fn list_routes(db: &Database) -> Result<Vec<Route>> {
    let conn = db.connect().context("failed to open database")?;
    let mut stmt = conn
        .prepare("SELECT id, route_name, pickup_time FROM routes")
        .context("failed to prepare route query")?;

    let routes = stmt
        .query_map([], |row| {
            Ok(Route {
                id: row.get(0)?,
                route_name: row.get(1)?,
                pickup_time: row.get(2)?,
            })
        })
        .context("failed to load routes")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect routes")?;

    Ok(routes)
}
