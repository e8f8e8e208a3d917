//!
//! The composite benchmark report parser.
//!

pub mod report;

use std::path::Path;

use crate::error::Error;
use crate::proportion::Proportion;
use crate::record::runtime::Runtime as RuntimeRecord;
use crate::statistics::Statistics;

use self::report::Report;

/// The prefix of locally installed test identifiers.
pub const LOCAL_PREFIX: &str = "local/";

///
/// Parses a composite report into one record per result and profile entry.
///
pub fn parse(text: &str, path: &Path) -> Result<Vec<RuntimeRecord>, Error> {
    let report: Report = quick_xml::de::from_str(text).map_err(|error| Error::Xml {
        error,
        path: path.to_path_buf(),
    })?;

    let mut records = Vec::new();
    for result in report.results.into_iter() {
        let test = result.identifier.trim();
        let test = test.strip_prefix(LOCAL_PREFIX).unwrap_or(test).to_owned();
        let description = non_empty(result.description)
            .unwrap_or_else(|| RuntimeRecord::DEFAULT_DESCRIPTION.to_owned());
        let scale = result.scale.trim().to_owned();
        let proportion = result
            .proportion
            .parse::<Proportion>()
            .map_err(|_| Error::InvalidField {
                path: path.to_path_buf(),
                field: "Proportion",
                value: result.proportion.clone(),
            })?;

        for entry in result.data.entries.into_iter() {
            let value = match non_empty(entry.value) {
                Some(value) => value.parse::<f64>().map_err(|_| Error::InvalidField {
                    path: path.to_path_buf(),
                    field: "Value",
                    value,
                })?,
                None => f64::NAN,
            };
            let statistics = match non_empty(entry.raw_string) {
                Some(raw_string) => Some(Statistics::new(
                    parse_raw_string(raw_string.as_str(), path)?.as_slice(),
                )),
                None => None,
            };

            records.push(RuntimeRecord {
                test: test.clone(),
                description: description.clone(),
                scale: scale.clone(),
                proportion,
                profile: entry.identifier.trim().to_owned(),
                value,
                statistics,
            });
        }
    }
    Ok(records)
}

///
/// Parses the `:`-separated raw samples.
///
pub fn parse_raw_string(raw_string: &str, path: &Path) -> Result<Vec<f64>, Error> {
    raw_string
        .split(':')
        .map(str::trim)
        .filter(|sample| !sample.is_empty())
        .map(|sample| {
            sample.parse::<f64>().map_err(|_| Error::InvalidField {
                path: path.to_path_buf(),
                field: "RawString",
                value: sample.to_owned(),
            })
        })
        .collect()
}

///
/// Trims an optional text field and discards it if empty.
///
fn non_empty(text: Option<String>) -> Option<String> {
    text.map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
