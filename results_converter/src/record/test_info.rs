//!
//! The test information record.
//!

use crate::record::IRecord;

///
/// The test information record.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TestInfo {
    /// The test name.
    pub name: String,
    /// The tested application version.
    pub version: String,
    /// The test description.
    pub description: String,
    /// The number of lines of C and C++ source code, if counted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<u64>,
}

impl IRecord for TestInfo {
    const HEADER: &'static [&'static str] = &["Test", "Version", "Description", "LOC"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.version.clone(),
            self.description.clone(),
            self.loc.map(|loc| loc.to_string()).unwrap_or_default(),
        ]
    }
}
