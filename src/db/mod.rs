//! Persistence layer: the schema store, the generic record store, and one
//! thin typed module per feature.

mod connection;
pub mod store;

pub mod attendance;
pub mod hostel;
pub mod hr;
pub mod inventory;
pub mod library;
pub mod lms;
pub mod transport;

pub use connection::Database;
