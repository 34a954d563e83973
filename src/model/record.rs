use crate::{
    error::{RecordError, SchemaError},
    file_reader::Cell,
};

use super::decoder::{decode_volume, decode_well_number};

pub const WELL_NUMBER_COLUMN: &str = "API WELL  NUMBER";
pub const OIL_COLUMN: &str = "OIL";
pub const GAS_COLUMN: &str = "GAS";
pub const BRINE_COLUMN: &str = "BRINE";

/// One input row, before aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionRecord {
    pub api_well_number: String,
    pub oil: i64,
    pub gas: i64,
    pub brine: i64,
}

impl ProductionRecord {
    pub fn new(api_well_number: impl Into<String>, oil: i64, gas: i64, brine: i64) -> Self {
        Self {
            api_well_number: api_well_number.into(),
            oil,
            gas,
            brine,
        }
    }

    /// Decodes a data row. Returns `Ok(None)` when the well number cell is blank.
    ///
    /// `row_number` is the 1-based position in the source file and only feeds error messages.
    pub fn from_row(
        row: &[Cell],
        columns: &ColumnIndex,
        row_number: usize,
    ) -> Result<Option<Self>, RecordError> {
        let cell = |index: usize| row.get(index).unwrap_or(&Cell::Empty);
        let invalid = |column: &'static str| {
            move |reason: String| RecordError {
                row: row_number,
                column,
                reason,
            }
        };

        let Some(api_well_number) =
            decode_well_number(cell(columns.well_number)).map_err(invalid(WELL_NUMBER_COLUMN))?
        else {
            return Ok(None);
        };

        Ok(Some(Self {
            api_well_number,
            oil: decode_volume(cell(columns.oil)).map_err(invalid(OIL_COLUMN))?,
            gas: decode_volume(cell(columns.gas)).map_err(invalid(GAS_COLUMN))?,
            brine: decode_volume(cell(columns.brine)).map_err(invalid(BRINE_COLUMN))?,
        }))
    }
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub well_number: usize,
    pub oil: usize,
    pub gas: usize,
    pub brine: usize,
}

impl ColumnIndex {
    /// Locates every required column by exact header name.
    pub fn locate(headers: &[String]) -> Result<Self, SchemaError> {
        let position = |name: &str| headers.iter().position(|header| header == name);
        let required = [WELL_NUMBER_COLUMN, OIL_COLUMN, GAS_COLUMN, BRINE_COLUMN];

        match required.map(position) {
            [Some(well_number), Some(oil), Some(gas), Some(brine)] => Ok(Self {
                well_number,
                oil,
                gas,
                brine,
            }),
            found => Err(SchemaError::MissingColumns(
                required
                    .iter()
                    .zip(found)
                    .filter(|(_, index)| index.is_none())
                    .map(|(name, _)| (*name).to_owned())
                    .collect(),
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ColumnIndex, ProductionRecord};
    use crate::{
        error::{RecordError, SchemaError},
        file_reader::Cell,
    };

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    #[test]
    fn test_locate_columns_in_any_order() {
        let columns =
            ColumnIndex::locate(&headers(&["BRINE", "COUNTY", "API WELL  NUMBER", "GAS", "OIL"]))
                .unwrap();

        assert_eq!(
            columns,
            ColumnIndex {
                well_number: 2,
                oil: 4,
                gas: 3,
                brine: 0,
            }
        );
    }

    #[test]
    fn test_locate_reports_every_missing_column() {
        let result = ColumnIndex::locate(&headers(&["API WELL NUMBER", "OIL", "BRINE"]));

        assert_eq!(
            result,
            Err(SchemaError::MissingColumns(vec![
                "API WELL  NUMBER".to_owned(),
                "GAS".to_owned(),
            ]))
        );
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        let result = ColumnIndex::locate(&headers(&["API WELL  NUMBER", "oil", "GAS", "BRINE"]));
        assert_eq!(result, Err(SchemaError::MissingColumns(vec!["OIL".to_owned()])));
    }

    #[test]
    fn test_from_row() {
        let columns = ColumnIndex {
            well_number: 0,
            oil: 1,
            gas: 2,
            brine: 3,
        };
        let row = [
            Cell::Text("34-059-24208".into()),
            Cell::Float(10.0),
            Cell::Text("2,000".into()),
        ];

        let record = ProductionRecord::from_row(&row, &columns, 2).unwrap();
        assert_eq!(record, Some(ProductionRecord::new("34-059-24208", 10, 2000, 0)));
    }

    #[test]
    fn test_from_row_skips_blank_well_number() {
        let columns = ColumnIndex {
            well_number: 0,
            oil: 1,
            gas: 2,
            brine: 3,
        };
        let row = [Cell::Empty, Cell::Int(1), Cell::Int(2), Cell::Int(3)];

        assert_eq!(ProductionRecord::from_row(&row, &columns, 5), Ok(None));
    }

    #[test]
    fn test_from_row_reports_position() {
        let columns = ColumnIndex {
            well_number: 0,
            oil: 1,
            gas: 2,
            brine: 3,
        };
        let row = [
            Cell::Text("A".into()),
            Cell::Int(1),
            Cell::Text("n/a".into()),
            Cell::Int(3),
        ];

        let err = ProductionRecord::from_row(&row, &columns, 7).unwrap_err();
        assert!(matches!(err, RecordError { row: 7, column: "GAS", .. }));
    }
}
