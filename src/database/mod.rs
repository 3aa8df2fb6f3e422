//! SQLite access: connection setup, migrations, and table models.

pub mod connection;
/// Table models.
pub mod models;
