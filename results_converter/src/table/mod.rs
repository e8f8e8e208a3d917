//!
//! The delimited result table.
//!

#[cfg(test)]
mod tests;

pub mod pivot;

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Error;
use crate::record::IRecord;

///
/// The delimited result table.
///
/// Fields are separated by `;`. Inside a field, `;` is written as `\;` and `\` as `\\`.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Table {
    /// The column names.
    pub header: Vec<String>,
    /// The rows, each with as many fields as the header.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// The field delimiter.
    pub const DELIMITER: char = ';';
    /// The delimiter escape character.
    pub const ESCAPE: char = '\\';

    ///
    /// Creates an empty table with the header.
    ///
    pub fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|name| name.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    ///
    /// Creates a table from records.
    ///
    pub fn from_records<'a, R, I>(records: I) -> Self
    where
        R: IRecord + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let mut table = Self::new(R::HEADER);
        table.rows = records.into_iter().map(|record| record.fields()).collect();
        table
    }

    ///
    /// Returns the index of the column.
    ///
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|column| column == name)
    }

    ///
    /// Returns the index of the column or a missing column error.
    ///
    pub fn require_column(&self, name: &str, path: &Path) -> Result<usize, Error> {
        self.column(name).ok_or_else(|| Error::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_owned(),
        })
    }

    ///
    /// Reads a table from a file.
    ///
    pub fn read(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        Self::parse(text.as_str(), path)
    }

    ///
    /// Parses a table.
    ///
    pub fn parse(text: &str, path: &Path) -> Result<Self, Error> {
        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty());

        let header = match lines.next() {
            Some((_, line)) => Self::split(line),
            None => {
                return Err(Error::Parsing {
                    path: path.to_path_buf(),
                    line: 1,
                    message: "missing table header".to_owned(),
                })
            }
        };

        let mut rows = Vec::new();
        for (index, line) in lines {
            let row = Self::split(line);
            if row.len() != header.len() {
                return Err(Error::Parsing {
                    path: path.to_path_buf(),
                    line: index + 1,
                    message: format!(
                        "expected {} fields, found {}",
                        header.len(),
                        row.len()
                    ),
                });
            }
            rows.push(row);
        }

        Ok(Self { header, rows })
    }

    ///
    /// Writes the table to a file, creating the parent directories.
    ///
    pub fn write(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| Error::Writing {
                error,
                path: parent.to_path_buf(),
            })?;
        }
        std::fs::write(path, self.to_string()).map_err(|error| Error::Writing {
            error,
            path: path.to_path_buf(),
        })
    }

    ///
    /// Escapes the delimiters and escape characters of a field.
    ///
    pub fn escape(field: &str) -> String {
        let mut escaped = String::with_capacity(field.len());
        for character in field.chars() {
            if character == Self::DELIMITER || character == Self::ESCAPE {
                escaped.push(Self::ESCAPE);
            }
            escaped.push(character);
        }
        escaped
    }

    ///
    /// Splits a line into unescaped fields.
    ///
    pub fn split(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut characters = line.chars().peekable();
        while let Some(character) = characters.next() {
            match character {
                Self::ESCAPE => match characters.next_if(|next| {
                    *next == Self::DELIMITER || *next == Self::ESCAPE
                }) {
                    Some(escaped) => field.push(escaped),
                    None => field.push(Self::ESCAPE),
                },
                Self::DELIMITER => fields.push(std::mem::take(&mut field)),
                character => field.push(character),
            }
        }
        fields.push(field);
        fields
    }

    ///
    /// Joins the escaped fields of a row.
    ///
    fn join(fields: &[String]) -> String {
        fields
            .iter()
            .map(|field| Self::escape(field))
            .collect::<Vec<String>>()
            .join(";")
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut content = String::with_capacity((self.rows.len() + 1) * 64);
        writeln!(content, "{}", Self::join(self.header.as_slice()))?;
        for row in self.rows.iter() {
            writeln!(content, "{}", Self::join(row.as_slice()))?;
        }
        f.write_str(content.as_str())
    }
}
