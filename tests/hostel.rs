mod test_support;

use schooldesk::db::hostel;
use schooldesk::db::store::StoreError;
use test_support::temp_db;

#[test]
fn room_without_any_hostel_is_rejected() {
    let db = temp_db("hostel-no-parent");

    let err = hostel::add_room(&db, "101", "30").unwrap_err();
    assert!(matches!(err, StoreError::MissingPrerequisite(_)));
    assert_eq!(err.to_string(), "Add at least one hostel first.");
    assert!(hostel::list_rooms(&db).unwrap().is_empty());
    assert!(hostel::list_hostels(&db).unwrap().is_empty());
}

#[test]
fn room_joins_its_hostel_name_in_the_listing() {
    let db = temp_db("hostel-join");

    hostel::add_hostel(&db, "Block A").unwrap();
    hostel::add_room(&db, "101", "30").unwrap();

    let lines: Vec<String> = hostel::list_rooms(&db)
        .unwrap()
        .iter()
        .map(|room| room.display_line())
        .collect();
    assert_eq!(
        lines,
        vec!["Block A - Room 101 (Capacity: 30)".to_string()]
    );
}

#[test]
fn rooms_attach_to_the_first_hostel_on_record() {
    let db = temp_db("hostel-first-wins");

    hostel::add_hostel(&db, "Block A").unwrap();
    hostel::add_hostel(&db, "Block B").unwrap();
    hostel::add_room(&db, "7", "12").unwrap();

    let rooms = hostel::list_rooms(&db).unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].hostel_name, "Block A");
}

#[test]
fn room_validation_runs_before_the_prerequisite_check() {
    let db = temp_db("hostel-validation-first");

    // No hostel exists either, but the bad capacity is reported first.
    let err = hostel::add_room(&db, "101", "lots").unwrap_err();
    assert!(matches!(err, StoreError::NotNumeric("Capacity")));
}
