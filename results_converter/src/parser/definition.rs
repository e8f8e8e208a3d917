//!
//! The test definition document.
//!

use std::path::Path;

use crate::error::Error;

/// The test definition file name.
pub const FILE_NAME: &str = "test-definition.xml";

///
/// The test definition document.
///
#[derive(Debug, Default, serde::Deserialize)]
pub struct Definition {
    /// The general test information.
    #[serde(rename = "TestInformation", default)]
    pub information: Information,
}

///
/// The general test information.
///
#[derive(Debug, Default, serde::Deserialize)]
pub struct Information {
    /// The tested application version.
    #[serde(rename = "AppVersion", default)]
    pub app_version: Option<String>,
    /// The test description.
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

impl Definition {
    ///
    /// Parses a test definition document.
    ///
    pub fn parse(text: &str, path: &Path) -> Result<Self, Error> {
        quick_xml::de::from_str(text).map_err(|error| Error::Xml {
            error,
            path: path.to_path_buf(),
        })
    }

    ///
    /// The tested application version, empty if not specified.
    ///
    pub fn version(&self) -> String {
        self.information
            .app_version
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_owned()
    }

    ///
    /// The test description, empty if not specified.
    ///
    pub fn description(&self) -> String {
        self.information
            .description
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_owned()
    }
}
