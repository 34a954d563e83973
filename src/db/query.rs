use diesel::{QueryResult, SqliteConnection, prelude::*};

use crate::{
    model::database::{AnnualProduction, NewAnnualProduction},
    schema::annual_production_data::dsl::{annual_production_data, api_well_number, id},
};

// Four bound parameters per row keeps each statement well under SQLite's variable limit.
const INSERT_CHUNK_SIZE: usize = 1_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaceOutcome {
    pub deleted: usize,
    pub inserted: usize,
}

/// Deletes every stored row and inserts `rows`, inside one transaction.
pub fn replace_all(
    rows: &[NewAnnualProduction],
    conn: &mut SqliteConnection,
) -> QueryResult<ReplaceOutcome> {
    conn.transaction(|conn| {
        let deleted = diesel::delete(annual_production_data).execute(conn)?;

        let mut inserted = 0;
        for chunk in rows.chunks(INSERT_CHUNK_SIZE) {
            inserted += diesel::insert_into(annual_production_data)
                .values(chunk)
                .execute(conn)?;
        }

        Ok(ReplaceOutcome { deleted, inserted })
    })
}

/// First stored row for `well`, by insertion order.
pub fn find_by_well_number(
    well: &str,
    conn: &mut SqliteConnection,
) -> QueryResult<Option<AnnualProduction>> {
    annual_production_data
        .filter(api_well_number.eq(well))
        .order(id.asc())
        .select(AnnualProduction::as_select())
        .first(conn)
        .optional()
}

pub fn count_rows(conn: &mut SqliteConnection) -> QueryResult<i64> {
    annual_production_data.count().get_result(conn)
}
