//!
//! The per-function assembly size listing parser.
//!

use std::path::Path;

use crate::error::Error;

///
/// Parses `size function-name` lines into `(function, size)` pairs.
///
/// The function name is the rest of the line after the size, so demangled
/// signatures containing spaces are kept whole.
///
pub fn parse(text: &str, path: &Path) -> Result<Vec<(String, u64)>, Error> {
    super::numbered_lines(text)
        .map(|(line, content)| {
            let (size, function) = content
                .split_once(char::is_whitespace)
                .ok_or_else(|| Error::Parsing {
                    path: path.to_path_buf(),
                    line,
                    message: "expected a size and a function name".to_owned(),
                })?;
            let size = size.parse::<u64>().map_err(|error| Error::Parsing {
                path: path.to_path_buf(),
                line,
                message: format!("invalid function size `{size}`: {error}"),
            })?;
            Ok((function.trim().to_owned(), size))
        })
        .collect()
}

///
/// Returns the number of function names in a one-name-per-line file.
///
pub fn count(text: &str) -> usize {
    super::numbered_lines(text).count()
}
