use std::error::Error;

use diesel::{SqliteConnection, connection::SimpleConnection as _, sqlite::Sqlite};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub mod query;
pub mod store;

pub use store::ProductionStore;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn run_migrations<MH>(conn: &mut MH) -> Result<(), Box<dyn Error + Send + Sync + 'static>>
where
    MH: MigrationHarness<Sqlite>,
{
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Switches a file-backed database to WAL so readers are not blocked by a load.
pub fn configure_connection(conn: &mut SqliteConnection) -> diesel::QueryResult<()> {
    conn.batch_execute("PRAGMA journal_mode = WAL;")
}
