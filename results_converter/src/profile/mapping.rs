//!
//! A profile name mapped to its raw data subdirectory.
//!

use std::str::FromStr;

///
/// A profile name mapped to its raw data subdirectory.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    /// The profile name used in tables.
    pub name: String,
    /// The subdirectory holding the profile raw data.
    pub directory: String,
}

impl FromStr for Mapping {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.split_once('=') {
            Some((name, directory)) if !name.is_empty() && !directory.is_empty() => Ok(Self {
                name: name.to_owned(),
                directory: directory.to_owned(),
            }),
            _ => anyhow::bail!("Invalid profile mapping `{string}`. Expected `NAME=DIRECTORY`"),
        }
    }
}

impl std::fmt::Display for Mapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.directory)
    }
}
