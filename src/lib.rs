//! Core library surface for the SchoolDesk TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as the integration tests can reuse the same pieces:
//! the SQLite-backed record stores live under [`db`], the row types they
//! hydrate under [`models`], and the interactive shell under [`ui`].
pub mod db;
pub mod models;
pub mod ui;

/// Handle to the on-disk SQLite store; every feature module takes one.
pub use db::Database;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
