//!
//! The peak memory usage output parsers.
//!

use std::path::Path;

use crate::error::Error;

/// The marker of the `time -v` line with the peak resident set size.
pub const MAXIMUM_RESIDENT_SET_SIZE: &str = "Maximum resident set size";

///
/// Returns the largest peak resident set size reported by `time -v` output.
///
/// `None` if the output has no such line.
///
pub fn maximum_resident_set_size(text: &str, path: &Path) -> Result<Option<u64>, Error> {
    let mut maximum = None;
    for (line, content) in super::numbered_lines(text) {
        if !content.contains(MAXIMUM_RESIDENT_SET_SIZE) {
            continue;
        }

        let value = content.rsplit(':').next().unwrap_or_default().trim();
        let value = value.parse::<u64>().map_err(|error| Error::Parsing {
            path: path.to_path_buf(),
            line,
            message: format!("invalid resident set size `{value}`: {error}"),
        })?;
        maximum = maximum.max(Some(value));
    }
    Ok(maximum)
}

///
/// Returns the values of all lines consisting of decimal digits only.
///
pub fn digit_lines(text: &str, path: &Path, pattern: &regex::Regex) -> Result<Vec<u64>, Error> {
    super::numbered_lines(text)
        .filter(|(_, content)| pattern.is_match(content))
        .map(|(line, content)| {
            content.parse::<u64>().map_err(|error| Error::Parsing {
                path: path.to_path_buf(),
                line,
                message: format!("invalid memory figure `{content}`: {error}"),
            })
        })
        .collect()
}

///
/// Returns the pattern of a line consisting of decimal digits only.
///
pub fn digit_line_pattern() -> regex::Regex {
    regex::Regex::new(r"^[0-9]+$").expect("Always valid")
}
