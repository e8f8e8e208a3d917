//!
//! The runtime performance record.
//!

use crate::proportion::Proportion;
use crate::record::IRecord;
use crate::statistics::Statistics;

///
/// The runtime performance record.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Runtime {
    /// The test name.
    pub test: String,
    /// The measurement description.
    pub description: String,
    /// The measurement unit.
    pub scale: String,
    /// The direction in which the measurement improves.
    pub proportion: Proportion,
    /// The profile name.
    pub profile: String,
    /// The reported value, `NaN` if missing.
    pub value: f64,
    /// The statistics of the raw samples, if reported.
    pub statistics: Option<Statistics>,
}

impl Runtime {
    /// The description used when the report has none.
    pub const DEFAULT_DESCRIPTION: &'static str = "No description";
}

impl IRecord for Runtime {
    const HEADER: &'static [&'static str] = &[
        "Test",
        "Description",
        "Scale",
        "Proportion",
        "Profile",
        "Value",
        "StdDev",
        "RSD",
    ];

    fn fields(&self) -> Vec<String> {
        let (std_dev, rsd) = match self.statistics {
            Some(statistics) => (statistics.std_dev, statistics.rsd),
            None => (f64::NAN, f64::NAN),
        };
        vec![
            self.test.clone(),
            self.description.clone(),
            self.scale.clone(),
            self.proportion.to_string(),
            self.profile.clone(),
            super::format_value(self.value),
            super::format_value(std_dev),
            super::format_value(rsd),
        ]
    }
}
