//!
//! The results converter error.
//!

use std::path::PathBuf;

use crate::extractor::metric::Metric;

///
/// The results converter error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading a raw result file or directory.
    #[error("Reading {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the file or directory.
        path: PathBuf,
    },
    /// Error writing a table or report.
    #[error("Writing {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the output file.
        path: PathBuf,
    },
    /// A line of a raw result file or table cannot be parsed.
    #[error("Parsing {path:?}, line {line}: {message}")]
    Parsing {
        /// The path to the input file.
        path: PathBuf,
        /// The 1-based line number.
        line: usize,
        /// The problem description.
        message: String,
    },
    /// An XML document field holds an invalid value.
    #[error("Parsing {path:?}, field `{field}`: invalid value `{value}`")]
    InvalidField {
        /// The path to the XML document.
        path: PathBuf,
        /// The element name.
        field: &'static str,
        /// The offending text.
        value: String,
    },
    /// An XML document does not match the expected structure.
    #[error("Parsing XML document {path:?}: {error}")]
    Xml {
        /// The underlying deserialization error.
        error: quick_xml::DeError,
        /// The path to the XML document.
        path: PathBuf,
    },
    /// A table lacks a column required by the operation.
    #[error("Table {path:?} has no column `{column}`")]
    MissingColumn {
        /// The path to the table.
        path: PathBuf,
        /// The column name.
        column: String,
    },
    /// A required input directory does not exist.
    #[error("Directory {path:?} does not exist")]
    MissingDirectory {
        /// The path to the directory.
        path: PathBuf,
    },
    /// A test has no test definition document.
    #[error("Test definition {path:?} does not exist")]
    MissingTestDefinition {
        /// The expected path to the document.
        path: PathBuf,
    },
    /// The metric layout requires an optimization flag.
    #[error("Metric `{metric}` requires an optimization flag")]
    MissingFlag {
        /// The metric kind.
        metric: Metric,
    },
    /// The operation is not defined for the metric.
    #[error("Operation `{operation}` is not supported for metric `{metric}`")]
    UnsupportedOperation {
        /// The operation name.
        operation: &'static str,
        /// The metric kind.
        metric: Metric,
    },
}
