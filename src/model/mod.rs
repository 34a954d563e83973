pub mod api_request;
pub mod api_response;
pub mod database;
pub mod record;

mod decoder {
    use std::str::FromStr;

    use bigdecimal::{BigDecimal, ToPrimitive as _};

    use crate::file_reader::Cell;

    // Bounds of the f64 values that convert to i64 without saturating.
    const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
    const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

    fn whole_float(value: f64) -> Option<i64> {
        (value.is_finite() && value.fract() == 0.0 && (I64_LOWER..I64_UPPER).contains(&value))
            .then_some(value as i64)
    }

    /// Decodes a production volume. Missing cells count as zero.
    pub fn decode_volume(cell: &Cell) -> Result<i64, String> {
        match cell {
            Cell::Empty => Ok(0),
            Cell::Int(value) => Ok(*value),
            Cell::Float(value) => {
                whole_float(*value).ok_or_else(|| format!("{value} is not a whole number"))
            }
            Cell::Text(text) => decode_volume_text(text),
            Cell::Bool(value) => Err(format!("expected a number, found {value}")),
        }
    }

    fn decode_volume_text(text: &str) -> Result<i64, String> {
        let cleaned_string = text.trim().trim_matches('"').replace(',', "");
        if cleaned_string.is_empty() {
            return Ok(0);
        }

        let value = BigDecimal::from_str(&cleaned_string)
            .map_err(|err| format!("Unable to parse {text:?} to BigDecimal: {err}"))?;
        if !value.is_integer() {
            return Err(format!("{cleaned_string} is not a whole number"));
        }
        value
            .to_i64()
            .ok_or_else(|| format!("{cleaned_string} is out of range"))
    }

    /// Decodes a well identifier. `None` means the cell is blank and the row carries no key.
    pub fn decode_well_number(cell: &Cell) -> Result<Option<String>, String> {
        match cell {
            Cell::Empty => Ok(None),
            Cell::Text(text) => Ok(Some(text.clone())),
            Cell::Int(value) => Ok(Some(value.to_string())),
            Cell::Float(value) => Ok(Some(match whole_float(*value) {
                Some(whole) => whole.to_string(),
                None => value.to_string(),
            })),
            Cell::Bool(value) => Err(format!("expected a well number, found {value}")),
        }
    }

}
