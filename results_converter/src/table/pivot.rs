//!
//! The long to wide table reshaping.
//!

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::Error;
use crate::record::format_value;
use crate::table::Table;

///
/// Reshapes a long table with one row per observation into a wide table with
/// one row per `index` key and one column per distinct `columns` value.
///
/// The wide columns are sorted by name. A cell holds the mean of the matching
/// values, ignoring `NaN`, and `nan` if there are none.
///
pub fn pivot(
    table: &Table,
    index: &[&str],
    columns: &str,
    values: &str,
    path: &Path,
) -> Result<Table, Error> {
    let index_columns = index
        .iter()
        .map(|name| table.require_column(name, path))
        .collect::<Result<Vec<usize>, Error>>()?;
    let pivot_column = table.require_column(columns, path)?;
    let value_column = table.require_column(values, path)?;

    let mut names = BTreeSet::new();
    let mut cells: BTreeMap<Vec<String>, BTreeMap<String, Vec<f64>>> = BTreeMap::new();
    for (row_index, row) in table.rows.iter().enumerate() {
        let key: Vec<String> = index_columns
            .iter()
            .map(|column| row[*column].clone())
            .collect();
        let name = row[pivot_column].clone();
        let value = row[value_column].trim();
        let value = value.parse::<f64>().map_err(|error| Error::Parsing {
            path: path.to_path_buf(),
            line: row_index + 2,
            message: format!("invalid value `{value}` in column `{values}`: {error}"),
        })?;

        names.insert(name.clone());
        cells
            .entry(key)
            .or_default()
            .entry(name)
            .or_default()
            .push(value);
    }

    let mut header: Vec<&str> = index.to_vec();
    header.extend(names.iter().map(String::as_str));
    let mut wide = Table::new(header.as_slice());
    for (key, row_cells) in cells.into_iter() {
        let mut row = key;
        for name in names.iter() {
            let value = row_cells
                .get(name)
                .map(|values| mean(values.as_slice()))
                .unwrap_or(f64::NAN);
            row.push(format_value(value));
        }
        wide.rows.push(row);
    }
    Ok(wide)
}

///
/// Returns the mean of the non-`NaN` values, or `NaN` if there are none.
///
fn mean(values: &[f64]) -> f64 {
    let present: Vec<f64> = values
        .iter()
        .copied()
        .filter(|value| !value.is_nan())
        .collect();
    if present.is_empty() {
        return f64::NAN;
    }
    present.iter().sum::<f64>() / (present.len() as f64)
}
