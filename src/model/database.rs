use diesel::{Insertable, Queryable, Selectable};

use crate::aggregate::WellTotal;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::annual_production_data)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AnnualProduction {
    pub id: i32,
    pub api_well_number: String,
    pub oil: i64,
    pub gas: i64,
    pub brine: i64,
}

#[derive(Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::annual_production_data)]
pub struct NewAnnualProduction {
    pub api_well_number: String,
    pub oil: i64,
    pub gas: i64,
    pub brine: i64,
}

impl From<WellTotal> for NewAnnualProduction {
    fn from(
        WellTotal {
            api_well_number,
            oil,
            gas,
            brine,
        }: WellTotal,
    ) -> Self {
        Self {
            api_well_number,
            oil,
            gas,
            brine,
        }
    }
}
