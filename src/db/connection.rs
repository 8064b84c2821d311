use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rusqlite::Connection;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".schooldesk";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "school.sqlite";

/// Every table the application knows about, created lazily on first run. The
/// DDL matches the schema the feature stores query against; several tables
/// (`issues`, `transport_assignment`, `hostel_allocation`, `payroll`,
/// `leaves`) have no writer yet and exist for their declared relationships.
const TABLES: &[(&str, &str)] = &[
    (
        "assignments",
        "CREATE TABLE IF NOT EXISTS assignments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            file_path TEXT,
            due_date TEXT
        )",
    ),
    (
        "books",
        "CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT,
            isbn TEXT,
            quantity INTEGER
        )",
    ),
    (
        "issues",
        "CREATE TABLE IF NOT EXISTS issues (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            book_id INTEGER,
            student_name TEXT,
            issue_date TEXT,
            return_date TEXT,
            FOREIGN KEY(book_id) REFERENCES books(id)
        )",
    ),
    (
        "buses",
        "CREATE TABLE IF NOT EXISTS buses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            bus_number TEXT NOT NULL,
            driver_name TEXT
        )",
    ),
    (
        "routes",
        "CREATE TABLE IF NOT EXISTS routes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            route_name TEXT NOT NULL,
            pickup_time TEXT
        )",
    ),
    (
        "transport_assignment",
        "CREATE TABLE IF NOT EXISTS transport_assignment (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_name TEXT,
            bus_id INTEGER,
            route_id INTEGER,
            FOREIGN KEY(bus_id) REFERENCES buses(id),
            FOREIGN KEY(route_id) REFERENCES routes(id)
        )",
    ),
    (
        "hostels",
        "CREATE TABLE IF NOT EXISTS hostels (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )",
    ),
    (
        "rooms",
        "CREATE TABLE IF NOT EXISTS rooms (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            hostel_id INTEGER,
            room_number TEXT,
            capacity INTEGER,
            FOREIGN KEY(hostel_id) REFERENCES hostels(id)
        )",
    ),
    (
        "hostel_allocation",
        "CREATE TABLE IF NOT EXISTS hostel_allocation (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_name TEXT,
            room_id INTEGER,
            FOREIGN KEY(room_id) REFERENCES rooms(id)
        )",
    ),
    (
        "inventory_items",
        "CREATE TABLE IF NOT EXISTS inventory_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            quantity INTEGER,
            location TEXT
        )",
    ),
    (
        "staff",
        "CREATE TABLE IF NOT EXISTS staff (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            role TEXT,
            salary REAL
        )",
    ),
    (
        "payroll",
        "CREATE TABLE IF NOT EXISTS payroll (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            staff_id INTEGER,
            pay_date TEXT,
            amount REAL,
            FOREIGN KEY(staff_id) REFERENCES staff(id)
        )",
    ),
    (
        "leaves",
        "CREATE TABLE IF NOT EXISTS leaves (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            staff_id INTEGER,
            leave_date TEXT,
            reason TEXT,
            FOREIGN KEY(staff_id) REFERENCES staff(id)
        )",
    ),
    (
        "attendance",
        "CREATE TABLE IF NOT EXISTS attendance (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_name TEXT,
            date TEXT,
            time TEXT,
            status TEXT
        )",
    ),
];

/// Handle on the database file. The handle only remembers the path: every
/// operation opens its own short-lived connection through [`Database::connect`]
/// and drops it when done, so there is no shared connection state between
/// panels.
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Resolve the store under the user's home directory and ensure the
    /// schema, creating the data directory and file on first run.
    pub fn open_default() -> Result<Self> {
        Self::at_path(default_path()?)
    }

    /// Same as [`Database::open_default`] but against an explicit file,
    /// used by tests to run against throwaway databases.
    pub fn at_path(path: impl Into<PathBuf>) -> Result<Self> {
        let db = Self { path: path.into() };
        db.ensure_schema()?;
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection with referential integrity checks enabled. The
    /// pragma is per-connection in SQLite, so it must be reissued every time.
    pub fn connect(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        Ok(conn)
    }

    /// Create every table that does not exist yet. Idempotent: calling it any
    /// number of times leaves exactly the same set of tables as calling it
    /// once, and existing rows are untouched.
    pub fn ensure_schema(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("failed to create data directory")?;
            }
        }

        let conn = self.connect().context("failed to open SQLite database")?;
        for (name, ddl) in TABLES {
            conn.execute(ddl, [])
                .with_context(|| format!("failed to create {name} table"))?;
        }
        Ok(())
    }
}

/// Resolve the absolute path to the SQLite database inside the user's home.
fn default_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}
