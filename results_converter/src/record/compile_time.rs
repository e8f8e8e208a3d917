//!
//! The compile time record.
//!

use crate::record::IRecord;

///
/// The compile time record.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CompileTime {
    /// The test name.
    pub test: String,
    /// The profile name.
    pub profile: String,
    /// The build time in milliseconds.
    pub time: f64,
}

impl IRecord for CompileTime {
    const HEADER: &'static [&'static str] = &["Test", "Profile", "Compile Time"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.test.clone(),
            self.profile.clone(),
            super::format_value(self.time),
        ]
    }
}
