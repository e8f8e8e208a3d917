//!
//! The raw result file parsers.
//!

#[cfg(test)]
mod tests;

pub mod asm_listing;
pub mod composite;
pub mod definition;
pub mod integer_sum;
pub mod memory_usage;
pub mod sized_listing;

///
/// Returns the non-empty lines of a file with their 1-based line numbers.
///
pub(crate) fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

///
/// Returns the test name without its namespace and version suffix.
///
/// `pts/build-gcc-1.4.0` becomes `build-gcc`.
///
pub fn bare_test_name(test: &str) -> &str {
    let name = test.rsplit('/').next().unwrap_or(test);
    match name.rsplit_once('-') {
        Some((name, _version)) => name,
        None => name,
    }
}
