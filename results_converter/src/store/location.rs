//!
//! A location relative to the root of a raw result store.
//!

use std::path::PathBuf;

///
/// A location relative to the root of a raw result store.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Location {
    /// The path components.
    components: Vec<String>,
}

impl Location {
    ///
    /// Creates a location with a single component.
    ///
    pub fn new(component: &str) -> Self {
        Self {
            components: vec![component.to_owned()],
        }
    }

    ///
    /// Returns a location extended with another component.
    ///
    pub fn join(&self, component: &str) -> Self {
        let mut components = self.components.clone();
        components.push(component.to_owned());
        Self { components }
    }

    ///
    /// Returns the relative path.
    ///
    pub fn to_path_buf(&self) -> PathBuf {
        self.components.iter().collect()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.components.join("/"))
    }
}
