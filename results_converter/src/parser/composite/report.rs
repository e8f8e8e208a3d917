//!
//! The composite benchmark report document.
//!

///
/// The composite benchmark report document.
///
/// Only the elements used for conversion are modeled, the rest is ignored.
///
#[derive(Debug, serde::Deserialize)]
pub struct Report {
    /// The measured results.
    #[serde(rename = "Result", default)]
    pub results: Vec<ResultElement>,
}

///
/// A named measurement with one entry per profile.
///
#[derive(Debug, serde::Deserialize)]
pub struct ResultElement {
    /// The test identifier, optionally prefixed with `local/`.
    #[serde(rename = "Identifier")]
    pub identifier: String,
    /// The measurement description.
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    /// The measurement unit.
    #[serde(rename = "Scale")]
    pub scale: String,
    /// `HIB` or `LIB`.
    #[serde(rename = "Proportion")]
    pub proportion: String,
    /// The per-profile entries.
    #[serde(rename = "Data", default)]
    pub data: Data,
}

///
/// The per-profile entries of a result.
///
#[derive(Debug, Default, serde::Deserialize)]
pub struct Data {
    /// The entries.
    #[serde(rename = "Entry", default)]
    pub entries: Vec<Entry>,
}

///
/// The measurement of a single profile.
///
#[derive(Debug, serde::Deserialize)]
pub struct Entry {
    /// The profile name.
    #[serde(rename = "Identifier")]
    pub identifier: String,
    /// The reported value.
    #[serde(rename = "Value", default)]
    pub value: Option<String>,
    /// The `:`-separated raw samples.
    #[serde(rename = "RawString", default)]
    pub raw_string: Option<String>,
}
