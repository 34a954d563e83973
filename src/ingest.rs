use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::{
    aggregate::aggregate,
    db::ProductionStore,
    error::IngestError,
    file_reader::read_sheet,
    model::{
        database::NewAnnualProduction,
        record::{ColumnIndex, ProductionRecord},
    },
};

/// Summary of one `load-data` run.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub source: PathBuf,
    pub loaded_at: DateTime<Utc>,
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub wells_written: usize,
    pub rows_deleted: usize,
}

/// Replaces the production table with the per-well totals of the spreadsheet at `path`.
///
/// Every existing row is discarded. The source is fully read, validated and aggregated
/// before the store is touched, so a failure before the write leaves the table as it was.
pub async fn load_data(store: &ProductionStore, path: &Path) -> Result<LoadReport, IngestError> {
    info!(source = %path.display(), "Reading production data");
    let sheet = read_sheet(path)?;
    info!(columns = ?sheet.headers, rows = sheet.rows.len(), "Columns");

    let columns = ColumnIndex::locate(&sheet.headers)?;

    let mut records = Vec::with_capacity(sheet.rows.len());
    for (index, row) in sheet.rows.iter().enumerate() {
        // Data rows start on the second line of the file.
        if let Some(record) = ProductionRecord::from_row(row, &columns, index + 2)? {
            records.push(record);
        }
    }
    let rows_read = sheet.rows.len();
    let rows_skipped = rows_read - records.len();
    if rows_skipped > 0 {
        warn!(rows_skipped, "Skipped rows without an API well number");
    }

    let totals = aggregate(records)?;
    for (index, total) in totals.iter().enumerate() {
        debug!(
            index,
            api_well_number = %total.api_well_number,
            oil = total.oil,
            gas = total.gas,
            brine = total.brine,
            "Aggregated well"
        );
    }

    let rows = totals.into_iter().map(NewAnnualProduction::from).collect();
    let outcome = store.replace_all(rows).await?;
    info!(
        deleted = outcome.deleted,
        inserted = outcome.inserted,
        "Existing data replaced"
    );

    Ok(LoadReport {
        source: path.to_path_buf(),
        loaded_at: Utc::now(),
        rows_read,
        rows_skipped,
        wells_written: outcome.inserted,
        rows_deleted: outcome.deleted,
    })
}
