/// Query string of `GET /data`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WellQuery {
    pub well: Option<String>,
}

impl WellQuery {
    /// Keeps the first `well` value when the parameter is repeated.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            well: pairs
                .into_iter()
                .find(|(key, _)| key == "well")
                .map(|(_, value)| value),
        }
    }

    /// The requested well number, or `None` when absent or empty.
    pub fn well_number(self) -> Option<String> {
        self.well.filter(|well| !well.is_empty())
    }
}
