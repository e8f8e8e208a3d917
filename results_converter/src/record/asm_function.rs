//!
//! The per-function assembly size record.
//!

use crate::record::IRecord;

///
/// The per-function assembly size record.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AsmFunction {
    /// The test name.
    pub test: String,
    /// The profile name.
    pub profile: String,
    /// The function name.
    pub function: String,
    /// The function size in bytes.
    pub size: u64,
}

impl IRecord for AsmFunction {
    const HEADER: &'static [&'static str] = &["Test", "Profile", "Function", "Size"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.test.clone(),
            self.profile.clone(),
            self.function.clone(),
            self.size.to_string(),
        ]
    }
}
