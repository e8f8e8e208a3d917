//!
//! The extraction context shared by all extractors.
//!

use crate::profile::Profiles;

///
/// The extraction context shared by all extractors.
///
#[derive(Debug, Clone)]
pub struct Context {
    /// The optimization flag selecting the repeated-run layouts.
    /// `None` selects the single-file layouts.
    pub flag: Option<String>,
    /// The profile to subdirectory mappings.
    pub profiles: Profiles,
    /// The reference profile name.
    pub reference: String,
    /// The candidate profile name.
    pub candidate: String,
    /// The test definition namespace.
    pub namespace: String,
}

impl Context {
    /// The default reference profile name.
    pub const DEFAULT_REFERENCE: &'static str = "base";
    /// The default candidate profile name.
    pub const DEFAULT_CANDIDATE: &'static str = "byte";
    /// The default test definition namespace.
    pub const DEFAULT_NAMESPACE: &'static str = "pts";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(flag: Option<String>) -> Self {
        Self {
            flag,
            ..Self::default()
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            flag: None,
            profiles: Profiles::default(),
            reference: Self::DEFAULT_REFERENCE.to_owned(),
            candidate: Self::DEFAULT_CANDIDATE.to_owned(),
            namespace: Self::DEFAULT_NAMESPACE.to_owned(),
        }
    }
}
