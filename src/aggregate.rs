use std::collections::BTreeMap;

use crate::{error::AggregateError, model::record::ProductionRecord};

/// Summed volumes of every record sharing one well number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellTotal {
    pub api_well_number: String,
    pub oil: i64,
    pub gas: i64,
    pub brine: i64,
}

impl WellTotal {
    fn empty(api_well_number: String) -> Self {
        Self {
            api_well_number,
            oil: 0,
            gas: 0,
            brine: 0,
        }
    }

    fn add(&mut self, record: &ProductionRecord) -> Option<()> {
        self.oil = self.oil.checked_add(record.oil)?;
        self.gas = self.gas.checked_add(record.gas)?;
        self.brine = self.brine.checked_add(record.brine)?;
        Some(())
    }
}

/// Groups records by exact well number and sums their volumes.
///
/// Output is sorted by well number, one entry per distinct well.
pub fn aggregate<I>(records: I) -> Result<Vec<WellTotal>, AggregateError>
where
    I: IntoIterator<Item = ProductionRecord>,
{
    let mut totals: BTreeMap<String, WellTotal> = BTreeMap::new();

    for record in records {
        let total = totals
            .entry(record.api_well_number.clone())
            .or_insert_with_key(|well| WellTotal::empty(well.clone()));

        total.add(&record).ok_or_else(|| AggregateError::Overflow {
            well: record.api_well_number,
        })?;
    }

    Ok(totals.into_values().collect())
}

#[cfg(test)]
mod test {
    use super::{WellTotal, aggregate};
    use crate::{error::AggregateError, model::record::ProductionRecord};

    fn total(well: &str, oil: i64, gas: i64, brine: i64) -> WellTotal {
        WellTotal {
            api_well_number: well.to_owned(),
            oil,
            gas,
            brine,
        }
    }

    #[test]
    fn test_grouping() {
        let records = vec![
            ProductionRecord::new("A", 1, 2, 3),
            ProductionRecord::new("A", 4, 5, 6),
            ProductionRecord::new("B", 7, 8, 9),
        ];

        assert_eq!(
            aggregate(records).unwrap(),
            [total("A", 5, 7, 9), total("B", 7, 8, 9)]
        );
    }

    #[test]
    fn test_row_order_is_irrelevant() {
        let records = vec![
            ProductionRecord::new("42-001-12345", 40, 0, 100),
            ProductionRecord::new("42-001-99999", 1, 1, 1),
            ProductionRecord::new("42-001-12345", 60, 200, 200),
        ];
        let mut reversed = records.clone();
        reversed.reverse();

        let expected = [
            total("42-001-12345", 100, 200, 300),
            total("42-001-99999", 1, 1, 1),
        ];
        assert_eq!(aggregate(records).unwrap(), expected);
        assert_eq!(aggregate(reversed).unwrap(), expected);
    }

    #[test]
    fn test_keys_are_not_normalised() {
        let records = vec![
            ProductionRecord::new("a", 1, 0, 0),
            ProductionRecord::new("A", 1, 0, 0),
            ProductionRecord::new("A ", 1, 0, 0),
        ];

        assert_eq!(aggregate(records).unwrap().len(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_overflow() {
        let records = vec![
            ProductionRecord::new("A", i64::MAX, 0, 0),
            ProductionRecord::new("A", 1, 0, 0),
        ];

        assert_eq!(
            aggregate(records),
            Err(AggregateError::Overflow {
                well: "A".to_owned()
            })
        );
    }
}
