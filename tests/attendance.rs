mod test_support;

use schooldesk::db::attendance;
use schooldesk::db::store::StoreError;
use test_support::temp_db;

#[test]
fn marking_twice_records_two_rows_for_today() {
    let db = temp_db("attendance-twice");

    attendance::mark(&db, "Asha").unwrap();
    attendance::mark(&db, "Asha").unwrap();

    let today = attendance::list_today(&db).unwrap();
    assert_eq!(today.len(), 2);
    for record in &today {
        assert_eq!(record.student_name, "Asha");
        assert_eq!(record.status, "Present");
        assert!(record.display_line().starts_with("Asha - "));
    }
}

#[test]
fn blank_name_is_rejected_and_nothing_is_stored() {
    let db = temp_db("attendance-blank");

    let err = attendance::mark(&db, "  ").unwrap_err();
    assert!(matches!(err, StoreError::MissingField("Student name")));
    assert!(attendance::list_today(&db).unwrap().is_empty());
}

#[test]
fn listing_is_scoped_to_the_current_date() {
    let db = temp_db("attendance-scope");

    attendance::mark(&db, "Ravi").unwrap();

    // A row planted on another date must not show up.
    let conn = db.connect().unwrap();
    conn.execute(
        "INSERT INTO attendance (student_name, date, time, status) \
         VALUES ('Old Entry', '2001-01-01', '08:00:00', 'Present')",
        [],
    )
    .unwrap();

    let today = attendance::list_today(&db).unwrap();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].student_name, "Ravi");
}
