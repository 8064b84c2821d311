#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use schooldesk::Database;

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Open a fresh database in a unique temp file. The tag keeps collisions
/// between test binaries readable when something does go wrong.
pub fn temp_db(tag: &str) -> Database {
    let path = temp_db_path(tag);
    let _ = std::fs::remove_file(&path);
    Database::at_path(&path).expect("failed to create temp database")
}

fn temp_db_path(tag: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "schooldesk-{tag}-{}-{n}.sqlite",
        std::process::id()
    ))
}
