//!
//! The peak memory usage record.
//!

use crate::record::IRecord;

///
/// The peak memory usage record.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MemoryUsage {
    /// The test name.
    pub test: String,
    /// The profile name.
    pub profile: String,
    /// The peak resident set size in kilobytes, `NaN` if not reported.
    pub usage: f64,
}

impl IRecord for MemoryUsage {
    const HEADER: &'static [&'static str] = &["Test", "Profile", "Memory Usage"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.test.clone(),
            self.profile.clone(),
            super::format_value(self.usage),
        ]
    }
}
