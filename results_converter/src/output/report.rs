//!
//! The test profile information report.
//!

use std::fmt::Write as _;

use crate::error::Error;
use crate::output::format::Format;
use crate::parser::bare_test_name;
use crate::parser::definition;
use crate::parser::definition::Definition;
use crate::record::test_info::TestInfo;
use crate::store::location::Location;
use crate::store::IResultStore;

///
/// The test profile information report.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// The report rows in input order.
    pub entries: Vec<TestInfo>,
}

impl Report {
    /// The report column names.
    pub const COLUMNS: [&'static str; 3] = ["Name", "Version", "Description"];
    /// The markdown document title.
    pub const TITLE: &'static str = "# Test Profiles";

    ///
    /// Looks up the definitions of tests named `<namespace>/<name>-<version>` in the store.
    ///
    /// Blank names are skipped. A missing definition is an error.
    ///
    pub fn from_names<S>(store: &dyn IResultStore, names: &[S]) -> Result<Self, Error>
    where
        S: AsRef<str>,
    {
        let mut entries = Vec::with_capacity(names.len());
        for name in names.iter().map(|name| name.as_ref().trim()) {
            if name.is_empty() {
                continue;
            }

            let mut components = name.split('/').filter(|component| !component.is_empty());
            let mut location = match components.next() {
                Some(component) => Location::new(component),
                None => continue,
            };
            for component in components {
                location = location.join(component);
            }
            let location = location.join(definition::FILE_NAME);
            if !store.is_file(&location) {
                return Err(Error::MissingTestDefinition {
                    path: store.path(&location),
                });
            }

            let text = store.read(&location)?;
            let definition = Definition::parse(text.as_str(), store.path(&location).as_path())?;
            entries.push(TestInfo {
                name: bare_test_name(name).to_owned(),
                version: definition.version(),
                description: definition.description(),
                loc: None,
            });
        }
        Ok(Self { entries })
    }

    ///
    /// Renders the report in the format.
    ///
    pub fn render(&self, format: Format) -> anyhow::Result<String> {
        match format {
            Format::Markdown => Ok(self.markdown()),
            Format::Csv => Ok(self.csv()),
            Format::Json => Ok(serde_json::to_string_pretty(&self.entries)? + "\n"),
        }
    }

    ///
    /// Renders the markdown document.
    ///
    /// Columns are padded to the longest cell, and at least two characters wider than the header.
    ///
    fn markdown(&self) -> String {
        let rows: Vec<[&str; 3]> = self
            .entries
            .iter()
            .map(|entry| {
                [
                    entry.name.as_str(),
                    entry.version.as_str(),
                    entry.description.as_str(),
                ]
            })
            .collect();
        let mut widths = Self::COLUMNS.map(|column| column.chars().count() + 2);
        for row in rows.iter() {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |cells: &[&str; 3]| {
            let cells: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, width)| format!(" {cell:<width$} ", width = *width))
                .collect();
            format!("|{}|", cells.join("|"))
        };

        let mut document = String::with_capacity(64 * (rows.len() + 4));
        writeln!(document, "{}", Self::TITLE).expect("Always valid");
        writeln!(document).expect("Always valid");
        writeln!(document, "{}", line(&Self::COLUMNS)).expect("Always valid");
        let separator: Vec<String> = widths
            .iter()
            .map(|width| format!(":{}", "-".repeat(width + 1)))
            .collect();
        writeln!(document, "|{}|", separator.join("|")).expect("Always valid");
        for row in rows.iter() {
            writeln!(document, "{}", line(row)).expect("Always valid");
        }
        document
    }

    ///
    /// Renders the comma-separated values.
    ///
    fn csv(&self) -> String {
        let mut document = String::with_capacity(64 * (self.entries.len() + 1));
        writeln!(document, "name,version,description").expect("Always valid");
        for entry in self.entries.iter() {
            writeln!(
                document,
                "{},{},{}",
                Self::quote(entry.name.as_str()),
                Self::quote(entry.version.as_str()),
                Self::quote(entry.description.as_str())
            )
            .expect("Always valid");
        }
        document
    }

    ///
    /// Quotes a CSV field if it contains a separator, a quote or a line break.
    ///
    fn quote(field: &str) -> String {
        if field.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_owned()
        }
    }
}
