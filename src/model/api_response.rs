use serde::Serialize;

use super::database::AnnualProduction;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ProductionResponse {
    pub oil: i64,
    pub gas: i64,
    pub brine: i64,
}

impl From<AnnualProduction> for ProductionResponse {
    fn from(AnnualProduction { oil, gas, brine, .. }: AnnualProduction) -> Self {
        Self { oil, gas, brine }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
