use deadpool_diesel::sqlite::{Manager, Pool, Runtime};
use diesel::SqliteConnection;
use tracing::debug;

use super::{
    configure_connection,
    query::{self, ReplaceOutcome},
    run_migrations,
};
use crate::{
    error::StoreError,
    model::database::{AnnualProduction, NewAnnualProduction},
};

/// Handle to the production table. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct ProductionStore {
    pool: Pool,
}

impl ProductionStore {
    /// Opens the database at `database_url` and applies pending migrations.
    pub async fn open(database_url: &str, max_connections: usize) -> Result<Self, StoreError> {
        let manager = Manager::new(database_url, Runtime::Tokio1);
        let pool = Pool::builder(manager).max_size(max_connections).build()?;
        let store = Self { pool };

        store
            .interact(|conn| {
                configure_connection(conn)?;
                run_migrations(conn).map_err(|e| StoreError::Migration(e.to_string()))
            })
            .await?;
        debug!(database_url, "Production store ready");

        Ok(store)
    }

    /// Discards every stored row and writes `rows` as one transaction.
    pub async fn replace_all(
        &self,
        rows: Vec<NewAnnualProduction>,
    ) -> Result<ReplaceOutcome, StoreError> {
        self.interact(move |conn| Ok(query::replace_all(&rows, conn)?))
            .await
    }

    pub async fn find_by_well_number(
        &self,
        well: String,
    ) -> Result<Option<AnnualProduction>, StoreError> {
        self.interact(move |conn| Ok(query::find_by_well_number(&well, conn)?))
            .await
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        self.interact(|conn| Ok(query::count_rows(conn)?)).await
    }

    async fn interact<F, R>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<R, StoreError> + Send + 'static,
        R: Send + 'static,
    {
        let conn = self.pool.get().await?;
        conn.interact(f).await?
    }
}
