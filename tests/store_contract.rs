mod test_support;

use schooldesk::db::store::StoreError;
use schooldesk::db::{hr, inventory, library, lms, transport};
use test_support::temp_db;

#[test]
fn book_add_then_list_roundtrip() {
    let db = temp_db("library-roundtrip");

    library::add_book(&db, "Dune", "Frank Herbert", "9780441172719", "3")
        .expect("add_book should succeed");

    let lines: Vec<String> = library::list_books(&db)
        .expect("list_books should succeed")
        .iter()
        .map(|book| book.display_line())
        .collect();
    assert_eq!(lines, vec!["Dune by Frank Herbert (Qty: 3)".to_string()]);
}

#[test]
fn book_blank_title_is_rejected_and_nothing_is_stored() {
    let db = temp_db("library-blank-title");

    let err = library::add_book(&db, "   ", "Someone", "", "2").unwrap_err();
    assert!(matches!(err, StoreError::MissingField("Title")));
    assert!(library::list_books(&db).unwrap().is_empty());
}

#[test]
fn book_non_numeric_quantity_is_rejected() {
    let db = temp_db("library-bad-qty");

    let err = library::add_book(&db, "Dune", "", "", "many").unwrap_err();
    assert!(matches!(err, StoreError::NotNumeric("Quantity")));
    assert!(library::list_books(&db).unwrap().is_empty());
}

#[test]
fn inventory_accepts_negative_quantity() {
    let db = temp_db("inventory-negative");

    inventory::add_item(&db, "Chairs", "-5", "Store Room").expect("negative quantity is legal");

    let lines: Vec<String> = inventory::list_items(&db)
        .unwrap()
        .iter()
        .map(|item| item.display_line())
        .collect();
    assert_eq!(lines, vec!["Chairs - Qty: -5 (Store Room)".to_string()]);
}

#[test]
fn staff_salary_renders_with_two_decimals() {
    let db = temp_db("hr-salary");

    hr::add_staff(&db, "Meera Nair", "Accountant", "42500.5").expect("add_staff should succeed");

    let lines: Vec<String> = hr::list_staff(&db)
        .unwrap()
        .iter()
        .map(|staff| staff.display_line())
        .collect();
    assert_eq!(
        lines,
        vec!["Meera Nair - Accountant (₹42500.50)".to_string()]
    );
}

#[test]
fn staff_blank_role_is_rejected() {
    let db = temp_db("hr-blank-role");

    let err = hr::add_staff(&db, "Meera Nair", "", "42500").unwrap_err();
    assert!(matches!(err, StoreError::MissingField("Role")));
    assert!(hr::list_staff(&db).unwrap().is_empty());
}

#[test]
fn buses_and_routes_are_stored_independently() {
    let db = temp_db("transport-both");

    transport::add_bus(&db, "KA-01-1234", "Ravi").unwrap();
    transport::add_route(&db, "North Loop", "07:15").unwrap();

    let buses: Vec<String> = transport::list_buses(&db)
        .unwrap()
        .iter()
        .map(|bus| bus.display_line())
        .collect();
    let routes: Vec<String> = transport::list_routes(&db)
        .unwrap()
        .iter()
        .map(|route| route.display_line())
        .collect();
    assert_eq!(buses, vec!["KA-01-1234 (Driver: Ravi)".to_string()]);
    assert_eq!(routes, vec!["North Loop (Pickup: 07:15)".to_string()]);
}

#[test]
fn bus_driver_is_optional() {
    let db = temp_db("transport-no-driver");

    transport::add_bus(&db, "KA-02-9999", "  ").unwrap();

    let buses: Vec<String> = transport::list_buses(&db)
        .unwrap()
        .iter()
        .map(|bus| bus.display_line())
        .collect();
    assert_eq!(buses, vec!["KA-02-9999 (Driver: )".to_string()]);
}

#[test]
fn assignment_roundtrip_keeps_due_date() {
    let db = temp_db("lms-roundtrip");

    lms::add_assignment(&db, "Essay 1", "Write about rivers", "", "2026-09-15")
        .expect("add_assignment should succeed");

    let assignments = lms::list_assignments(&db).unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(
        assignments[0].display_line(),
        "Essay 1 (Due: 2026-09-15)"
    );
    assert_eq!(assignments[0].file_path, "");
}

#[test]
fn assignment_blank_title_is_rejected() {
    let db = temp_db("lms-blank-title");

    let err = lms::add_assignment(&db, "", "desc", "", "2026-09-15").unwrap_err();
    assert!(matches!(err, StoreError::MissingField("Title")));
    assert!(lms::list_assignments(&db).unwrap().is_empty());
}

#[test]
fn validation_failures_report_the_first_offending_field() {
    let db = temp_db("library-first-failure");

    // Both title and quantity are bad; the earlier field wins.
    let err = library::add_book(&db, "", "", "", "abc").unwrap_err();
    assert!(matches!(err, StoreError::MissingField("Title")));
}

#[test]
fn list_order_matches_insertion_order() {
    let db = temp_db("inventory-order");

    inventory::add_item(&db, "Projector", "2", "AV Room").unwrap();
    inventory::add_item(&db, "Benches", "40", "Hall").unwrap();

    let lines: Vec<String> = inventory::list_items(&db)
        .unwrap()
        .iter()
        .map(|item| item.display_line())
        .collect();
    assert_eq!(
        lines,
        vec![
            "Projector - Qty: 2 (AV Room)".to_string(),
            "Benches - Qty: 40 (Hall)".to_string(),
        ]
    );
}
