//!
//! The line-delimited integer file parser.
//!

use std::path::Path;

use crate::error::Error;

///
/// Parses a file where every line is a decimal integer.
///
pub fn values(text: &str, path: &Path) -> Result<Vec<i64>, Error> {
    super::numbered_lines(text)
        .map(|(line, value)| {
            value.parse::<i64>().map_err(|error| Error::Parsing {
                path: path.to_path_buf(),
                line,
                message: format!("invalid integer `{value}`: {error}"),
            })
        })
        .collect()
}

///
/// Returns the sum of all integers of a file.
///
pub fn parse(text: &str, path: &Path) -> Result<i64, Error> {
    Ok(values(text, path)?.into_iter().sum())
}
