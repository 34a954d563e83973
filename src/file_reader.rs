use std::{fs::File, io, path::Path};

use calamine::{Data, Reader as _, open_workbook_auto};

use crate::error::SourceReadError;

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// A decoded cell, independent of the file format it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    fn from_text(field: &str) -> Self {
        if field.is_empty() {
            Self::Empty
        } else {
            Self::Text(field.to_owned())
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Self::Empty,
            Data::Int(value) => Self::Int(*value),
            Data::Float(value) => Self::Float(*value),
            Data::Bool(value) => Self::Bool(*value),
            Data::String(value) => Self::from_text(value),
            other => Self::Text(other.to_string()),
        }
    }
}

/// Header row plus data rows, in file order.
#[derive(Debug, Default)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Decodes `path` into a [`Sheet`], picking the decoder from the file extension.
pub fn read_sheet(path: &Path) -> Result<Sheet, SourceReadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => csv_sheet(io::BufReader::new(File::open(path)?)),
        ext if WORKBOOK_EXTENSIONS.contains(&ext) => workbook_sheet(path),
        _ => Err(SourceReadError::UnsupportedFormat(extension)),
    }
}

pub fn csv_sheet<R: io::Read>(buffer: R) -> Result<Sheet, SourceReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(buffer);

    let headers = reader.headers()?.iter().map(str::to_owned).collect();
    let rows = reader
        .records()
        .map(|record| record.map(|fields| fields.iter().map(Cell::from_text).collect()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Sheet { headers, rows })
}

/// Reads the first worksheet of a workbook; its first row is the header.
fn workbook_sheet(path: &Path) -> Result<Sheet, SourceReadError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SourceReadError::EmptyWorkbook)??;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|header| header.iter().map(ToString::to_string).collect())
        .unwrap_or_default();
    let rows = rows.map(|row| row.iter().map(Cell::from).collect()).collect();

    Ok(Sheet { headers, rows })
}
