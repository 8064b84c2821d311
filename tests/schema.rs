mod test_support;

use schooldesk::db::library;
use test_support::temp_db;

const EXPECTED_TABLES: [&str; 14] = [
    "assignments",
    "attendance",
    "books",
    "buses",
    "hostel_allocation",
    "hostels",
    "inventory_items",
    "issues",
    "leaves",
    "payroll",
    "rooms",
    "routes",
    "staff",
    "transport_assignment",
];

fn table_names(db: &schooldesk::Database) -> Vec<String> {
    let conn = db.connect().expect("connect should succeed");
    let mut stmt = conn
        .prepare(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .unwrap();
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    names
}

#[test]
fn first_open_creates_all_tables() {
    let db = temp_db("schema-first-open");
    assert_eq!(table_names(&db), EXPECTED_TABLES);
}

#[test]
fn ensure_schema_is_idempotent_and_preserves_data() {
    let db = temp_db("schema-idempotent");

    library::add_book(&db, "Siddhartha", "Hermann Hesse", "", "1").unwrap();

    db.ensure_schema().expect("second ensure should succeed");
    db.ensure_schema().expect("third ensure should succeed");

    assert_eq!(table_names(&db), EXPECTED_TABLES);
    assert_eq!(library::list_books(&db).unwrap().len(), 1);
}
