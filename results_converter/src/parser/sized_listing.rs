//!
//! The tab-separated sized listing parser.
//!
//! Every line is either `size<TAB>name<TAB>type` or, in the untagged variant, `size<TAB>name`.
//!

use std::path::Path;

use crate::error::Error;

///
/// The listing line selector.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Tagged lines describing ELF binaries.
    Elf,
    /// Tagged lines describing C or C++ source files.
    Source,
    /// Untagged lines, all accepted.
    Untagged,
}

impl Selector {
    ///
    /// The number of fields of a line the selector applies to.
    ///
    pub fn field_count(&self) -> usize {
        match self {
            Self::Elf | Self::Source => 3,
            Self::Untagged => 2,
        }
    }

    ///
    /// Whether a line with the type label is accepted.
    ///
    pub fn accepts(&self, label: Option<&str>) -> bool {
        match (self, label) {
            (Self::Elf, Some(label)) => label.contains("ELF"),
            (Self::Source, Some(label)) => {
                label.contains("C source") || label.contains("C++ source")
            }
            (Self::Untagged, _) => true,
            (_, None) => false,
        }
    }
}

///
/// Returns the sum of sizes of the accepted lines.
///
/// Lines with an unexpected number of fields are skipped.
///
pub fn parse(text: &str, path: &Path, selector: Selector) -> Result<u64, Error> {
    let mut total = 0;
    for (index, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != selector.field_count() {
            continue;
        }
        if !selector.accepts(fields.get(2).copied()) {
            continue;
        }

        let size = fields[0].trim();
        total += size.parse::<u64>().map_err(|error| Error::Parsing {
            path: path.to_path_buf(),
            line: index + 1,
            message: format!("invalid size `{size}`: {error}"),
        })?;
    }
    Ok(total)
}
