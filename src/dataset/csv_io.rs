//! Comma-delimited loading and saving of [`Table`]s.

use crate::dataset::{Column, ColumnData, Table};
use crate::preprocessing::error::{PreprocessingError, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Cell contents read as an absent value.
pub const NA_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_na(cell: &str) -> bool {
    NA_VALUES.contains(&cell)
}

/// Pick the narrowest storage that holds every present cell:
/// integers, then reals, then text. A column with no present cell is real.
fn infer_column(cells: Vec<Option<String>>) -> ColumnData {
    let any_present = cells.iter().any(Option::is_some);

    if any_present && cells.iter().flatten().all(|s| s.parse::<i64>().is_ok()) {
        ColumnData::Int(
            cells
                .iter()
                .map(|c| c.as_deref().and_then(|s| s.parse().ok()))
                .collect(),
        )
    } else if cells.iter().flatten().all(|s| s.parse::<f64>().is_ok()) {
        ColumnData::Float(
            cells
                .iter()
                .map(|c| c.as_deref().and_then(|s| s.parse().ok()))
                .collect(),
        )
    } else {
        ColumnData::Text(cells)
    }
}

/// Load a comma-delimited file with a header row into a [`Table`].
///
/// # Errors
/// - [`PreprocessingError::FileNotFound`] if `path` does not exist
/// - [`PreprocessingError::Csv`] for malformed or ragged records
/// - [`PreprocessingError::DuplicateColumn`] if a header name repeats
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    info!("Loading data from {}...", path.display());

    if !path.exists() {
        return Err(PreprocessingError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];

    for result in rdr.records() {
        let record = result?;
        for (col, cell) in record.iter().enumerate() {
            cells[col].push((!is_na(cell)).then(|| cell.to_string()));
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| {
            let data = infer_column(values);
            debug!(column = %name, kind = data.kind(), "Inferred column type");
            Column::new(name, data)
        })
        .collect();

    let table = Table::new(columns)?;
    let (rows, cols) = table.shape();
    info!("Data loaded. Shape: ({}, {})", rows, cols);
    Ok(table)
}

/// Render a real value with the shortest digits that round-trip.
///
/// Magnitudes below `1e-4` or from `1e16` up use exponent notation with a
/// signed, at least two-digit exponent (`3.2e-05`, `1e+16`). Other integral
/// values keep a trailing `.0`.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        String::new()
    } else if !x.is_finite() {
        x.to_string()
    } else if x != 0.0 && (x.abs() < 1e-4 || x.abs() >= 1e16) {
        let formatted = format!("{:e}", x);
        match formatted.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => formatted,
        }
    } else if x.fract() == 0.0 {
        format!("{:.1}", x)
    } else {
        x.to_string()
    }
}

fn format_cell(data: &ColumnData, row: usize) -> String {
    match data {
        ColumnData::Int(v) => v[row].map(|x| x.to_string()).unwrap_or_default(),
        ColumnData::Float(v) => v[row].map(format_float).unwrap_or_default(),
        ColumnData::Text(v) => v[row].clone().unwrap_or_default(),
    }
}

/// Write `table` as a comma-delimited file with a header row and no index
/// column, creating the parent directory first if needed.
///
/// Absent cells are written as empty fields. The write is not atomic.
pub fn write_csv<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let path = path.as_ref();
    info!("Saving data to {}...", path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(table.column_names())?;
    for row in 0..table.n_rows() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|c| format_cell(c.data(), row))
            .collect();
        wtr.write_record(&record)?;
    }
    wtr.flush()?;

    info!("Data saved ({} rows).", table.n_rows());
    Ok(())
}
