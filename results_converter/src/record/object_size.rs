//!
//! The object size record.
//!

use crate::record::IRecord;

///
/// The object size record.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ObjectSize {
    /// The test name.
    pub test: String,
    /// The profile name.
    pub profile: String,
    /// The total size of the built binaries in bytes.
    pub size: u64,
}

impl IRecord for ObjectSize {
    const HEADER: &'static [&'static str] = &["Test", "Profile", "Size"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.test.clone(),
            self.profile.clone(),
            self.size.to_string(),
        ]
    }
}
